use std::{future::Future, path::PathBuf};

use futures::future::join_all;

use crate::{
    collection::{Collection, Renderer},
    error::{Error, Result},
};

/// which output layout a write targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Html,
    Files,
}

impl Collection {
    /// persist rendered content to disk, creating parent directories as
    /// needed and overwriting existing files
    ///
    /// configuration errors are raised before any I/O: `Files` without a
    /// renderer, or structured content in `Html` mode without one. the
    /// per-record mkdir/render/write chains run concurrently and are all
    /// awaited; one record failing does not stop the others, failures are
    /// collected into [`Error::WriteError`]
    pub async fn write(&self, mode: WriteMode, renderer: Option<Renderer>) -> Result<()> {
        match mode {
            WriteMode::Files => {
                let renderer = renderer.ok_or(Error::RendererError)?;
                let docs = self.files().await?;
                flush(docs.iter().map(|doc| {
                    let text = renderer(&doc.content, &doc.meta);
                    write_one(doc.files.dir.clone(), doc.files.path.clone(), text)
                }))
                .await
            }
            WriteMode::Html => {
                let docs = self.html().await?;
                if renderer.is_none() {
                    // only plain text can be written verbatim
                    if let Some(doc) = docs.iter().find(|doc| !doc.content.is_text()) {
                        return Err(Error::ContentError(doc.html.path.clone()));
                    }
                }
                flush(docs.iter().map(|doc| {
                    let text = match &renderer {
                        Some(render) => render(&doc.content, &doc.meta),
                        None => doc.content.as_text().unwrap_or_default().to_string(),
                    };
                    write_one(doc.html.dir.clone(), doc.html.path.clone(), text)
                }))
                .await
            }
        }
    }
}

/// await every write, then report the failures together
async fn flush<F>(jobs: impl Iterator<Item = F>) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let failed: Vec<Error> = join_all(jobs)
        .await
        .into_iter()
        .filter_map(|res| res.err())
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(Error::WriteError(failed))
    }
}

async fn write_one(dir: PathBuf, path: PathBuf, text: String) -> Result<()> {
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(&path, text).await?;
    log::debug!("wrote `{}`", path.display());
    Ok(())
}
