use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use futures::future::{try_join_all, BoxFuture};

use crate::{
    config::{Config, OutExtension},
    document::{Content, DocumentRecord, FileStat},
    error::Result,
    front_matter,
    views::{ApiDoc, FileDoc, HtmlDoc},
};

/// the injected markup parser, body text in, parsed content out
pub type MarkupParser = Box<dyn Fn(&str) -> Content + Send + Sync>;

/// the injected renderer used at write time
pub type Renderer = Box<dyn Fn(&Content, &HashMap<String, String>) -> String + Send + Sync>;

/// a document collection rooted at a source directory
///
/// every accessor re-reads the filesystem, there is no caching between
/// calls
pub struct Collection {
    pub(crate) config: Config,
    parser: MarkupParser,
    source_root: PathBuf,
    cwd: PathBuf,
}

impl Collection {
    pub fn new<T: AsRef<Path>>(source_root: T, parser: MarkupParser) -> Result<Self> {
        Self::with_config(source_root, parser, Config::default())
    }

    pub fn with_config<T: AsRef<Path>>(
        source_root: T,
        parser: MarkupParser,
        config: Config,
    ) -> Result<Self> {
        let cwd = env::current_dir()?;
        let source_root = cwd.join(source_root.as_ref());
        Ok(Self {
            config,
            parser,
            source_root,
            cwd,
        })
    }

    pub fn set_out_extension(&mut self, extension: OutExtension) {
        self.config.out_extension = extension;
    }

    pub fn set_out_dir(&mut self, dir: impl Into<String>) {
        self.config.out_dir = dir.into();
    }

    pub fn set_posts_dir(&mut self, dir: impl Into<String>) {
        self.config.posts_dir = dir.into();
    }

    pub fn set_api_root(&mut self, root: impl Into<String>) {
        self.config.api_root = root.into();
    }

    /// the canonical fully populated sequence, newest first
    pub async fn tree(&self) -> Result<Vec<DocumentRecord>> {
        let mut records = self.walk(&self.source_root).await?;
        records.sort_by(|a, b| b.stat.created_ms.cmp(&a.stat.created_ms));
        Ok(records)
    }

    /// api view: content, metadata, api routes, stat
    pub async fn api(&self) -> Result<Vec<ApiDoc>> {
        Ok(self.tree().await?.into_iter().map(Into::into).collect())
    }

    /// html view: content, metadata, html output layout, stat
    pub async fn html(&self) -> Result<Vec<HtmlDoc>> {
        Ok(self.tree().await?.into_iter().map(Into::into).collect())
    }

    /// generic file view: content, metadata, file output layout, stat
    pub async fn files(&self) -> Result<Vec<FileDoc>> {
        Ok(self.tree().await?.into_iter().map(Into::into).collect())
    }

    /// recursively collect records under `dir`, current level first, then
    /// each subdirectory in listing order; files at one level load
    /// concurrently, as do sibling subdirectories
    fn walk<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<Vec<DocumentRecord>>> {
        Box::pin(async move {
            log::debug!("walking `{}`", dir.display());
            let mut entries = tokio::fs::read_dir(dir).await?;
            let mut files = Vec::new();
            let mut subdirs = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                if entry.file_type().await?.is_dir() {
                    subdirs.push(entry.path());
                } else {
                    files.push(entry.path());
                }
            }

            // case-sensitive extension filter, everything else is skipped
            let extension = self.config.filter_extension.as_str();
            files.retain(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(extension))
            });

            let mut records = try_join_all(files.iter().map(|path| self.load(path))).await?;
            for nested in try_join_all(subdirs.iter().map(|sub| self.walk(sub))).await? {
                records.extend(nested);
            }
            Ok(records)
        })
    }

    async fn load(&self, path: &Path) -> Result<DocumentRecord> {
        let raw = tokio::fs::read_to_string(path).await?;
        let stat = FileStat::new(&tokio::fs::metadata(path).await?)?;
        let parsed = front_matter::parse(&raw);
        let content = (self.parser)(&parsed.content);
        DocumentRecord::build(
            path,
            content,
            parsed.meta,
            stat,
            &self.config,
            &self.source_root,
            &self.cwd,
        )
    }
}
