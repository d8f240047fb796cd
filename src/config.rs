use std::fmt;

use figment::{Error, Figment, Metadata, Provider};
use serde::{Deserialize, Serialize};

/// default option values
pub const FILTER_EXTENSION: MarkupExtension = MarkupExtension::Md;
pub const OUT_EXTENSION: OutExtension = OutExtension::Js;
pub const OUT_DIR: &str = ".";
pub const POSTS_DIR: &str = ".";
pub const API_ROOT: &str = "/posts";

/// the set of source extensions a collection can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupExtension {
    Md,
    Markdown,
    Mdx,
}

impl MarkupExtension {
    /// the extension with its leading dot, as it appears in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupExtension::Md => ".md",
            MarkupExtension::Markdown => ".markdown",
            MarkupExtension::Mdx => ".mdx",
        }
    }
}

impl fmt::Display for MarkupExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// the set of extensions generic file output can be written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutExtension {
    Js,
    Jsx,
    Ts,
    Tsx,
    Json,
}

impl OutExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutExtension::Js => ".js",
            OutExtension::Jsx => ".jsx",
            OutExtension::Ts => ".ts",
            OutExtension::Tsx => ".tsx",
            OutExtension::Json => ".json",
        }
    }
}

impl fmt::Display for OutExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// config for building a document collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// which source files are included in the tree
    pub filter_extension: MarkupExtension,
    /// extension used for generic file output names
    pub out_extension: OutExtension,
    /// root output directory, joined under the working directory
    pub out_dir: String,
    /// subdirectory nested under `out_dir`
    pub posts_dir: String,
    /// path prefix for api route strings
    pub api_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter_extension: FILTER_EXTENSION,
            out_extension: OUT_EXTENSION,
            out_dir: OUT_DIR.into(),
            posts_dir: POSTS_DIR.into(),
            api_root: API_ROOT.into(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Self::default())
    }
    pub fn from<T: Provider>(provider: T) -> Result<Self, Error> {
        Figment::from(provider).extract()
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("Mdtree config")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}
