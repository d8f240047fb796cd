use std::collections::HashMap;

use serde::Serialize;

use crate::document::{ApiInfo, Content, DocumentRecord, FileStat, FilesOutput, HtmlOutput};

/// read-only views over the full record, each exposing only the fields its
/// consumer needs

/// record shape for api consumers
#[derive(Debug, Clone, Serialize)]
pub struct ApiDoc {
    pub content: Content,
    pub meta: HashMap<String, String>,
    pub api: ApiInfo,
    pub stat: FileStat,
}

impl From<DocumentRecord> for ApiDoc {
    fn from(value: DocumentRecord) -> Self {
        Self {
            content: value.content,
            meta: value.meta,
            api: value.api,
            stat: value.stat,
        }
    }
}

/// record shape for html output
#[derive(Debug, Clone, Serialize)]
pub struct HtmlDoc {
    pub content: Content,
    pub meta: HashMap<String, String>,
    pub html: HtmlOutput,
    pub stat: FileStat,
}

impl From<DocumentRecord> for HtmlDoc {
    fn from(value: DocumentRecord) -> Self {
        Self {
            content: value.content,
            meta: value.meta,
            html: value.html,
            stat: value.stat,
        }
    }
}

/// record shape for generic file output
#[derive(Debug, Clone, Serialize)]
pub struct FileDoc {
    pub content: Content,
    pub meta: HashMap<String, String>,
    pub files: FilesOutput,
    pub stat: FileStat,
}

impl From<DocumentRecord> for FileDoc {
    fn from(value: DocumentRecord) -> Self {
        Self {
            content: value.content,
            meta: value.meta,
            files: value.files,
            stat: value.stat,
        }
    }
}
