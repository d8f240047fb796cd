use std::path::PathBuf;

use thiserror::Error;

pub type Result<A> = std::result::Result<A, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Encountered io error: `{0}`")]
    IOError(std::io::Error),
    #[error("Unexpected path outside the source root: `{0}`")]
    PathError(PathBuf),
    #[error("Write mode `files` requires a renderer")]
    RendererError,
    #[error("Structured content without a renderer: `{0}`")]
    ContentError(PathBuf),
    #[error("{} write(s) failed", .0.len())]
    WriteError(Vec<Error>),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IOError(value)
    }
}
