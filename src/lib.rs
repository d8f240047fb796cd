pub mod collection;
pub mod config;
pub mod document;
pub mod error;
pub mod front_matter;
pub mod views;
pub mod write;

pub use collection::{Collection, MarkupParser, Renderer};
pub use config::{Config, MarkupExtension, OutExtension};
pub use document::{Content, DocumentRecord};
pub use error::{Error, Result};
pub use write::WriteMode;
