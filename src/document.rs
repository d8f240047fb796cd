use std::{
    collections::HashMap,
    fs::Metadata,
    path::{Component, Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::Serialize;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// output of the injected markup parser, either plain text or an opaque
/// structured value; the record never inspects which
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Data(serde_yml::Value),
}

impl Content {
    pub fn is_text(&self) -> bool {
        matches!(self, Content::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            Content::Data(_) => None,
        }
    }
}

/// filesystem metadata carried for ordering
#[derive(Debug, Clone, Serialize)]
pub struct FileStat {
    pub size: u64,
    pub created: SystemTime,
    pub accessed: SystemTime,
    pub modified: SystemTime,
    pub created_ms: u128,
}

impl FileStat {
    /// filesystems without a birth time fall back to the modified time so
    /// ordering stays defined everywhere
    pub fn new(meta: &Metadata) -> std::io::Result<Self> {
        let modified = meta.modified()?;
        let accessed = meta.accessed().unwrap_or(modified);
        let created = meta.created().unwrap_or(modified);
        let created_ms = created
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Ok(Self {
            size: meta.len(),
            created,
            accessed,
            modified,
            created_ms,
        })
    }
}

/// where a record lands in the generic file output layout
#[derive(Debug, Clone, Serialize)]
pub struct FilesOutput {
    /// parent directory of the output file
    pub dir: PathBuf,
    /// output file name, extension replaced per the config
    pub name: String,
    /// full output file path
    pub path: PathBuf,
    /// route without extension
    pub route: String,
    /// route with the configured output extension
    pub route_ext: String,
}

/// where a record lands in the html output layout
#[derive(Debug, Clone, Serialize)]
pub struct HtmlOutput {
    /// directory named after the slug
    pub dir: PathBuf,
    /// full `index.html` output path
    pub path: PathBuf,
    /// route without extension
    pub route: String,
    /// route pointing at the index file itself
    pub route_index: String,
}

/// api route data for a record
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub root: String,
    pub route: String,
}

/// one record per source file matching the extension filter
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub slug: String,
    pub content: Content,
    pub meta: HashMap<String, String>,
    pub files: FilesOutput,
    pub html: HtmlOutput,
    pub api: ApiInfo,
    pub stat: FileStat,
}

impl DocumentRecord {
    /// derive the record for a source file from its position under the
    /// source root and the configured output layout
    pub fn build(
        path: &Path,
        content: Content,
        meta: HashMap<String, String>,
        stat: FileStat,
        config: &Config,
        source_root: &Path,
        cwd: &Path,
    ) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::PathError(path.into()))?;
        // text before the first dot, so `a.post.md` slugs to `a`
        let slug = name.split('.').next().unwrap_or(name).to_string();

        let parent = path.parent().ok_or_else(|| Error::PathError(path.into()))?;
        // relative to the source root directly, no segment arithmetic
        let rel = parent
            .strip_prefix(source_root)
            .map_err(|_| Error::PathError(path.into()))?;

        let out_base = normalize(
            cwd.join(&config.out_dir)
                .join(&config.posts_dir)
                .join(rel),
        );
        let route = route_string(&config.posts_dir, rel, &slug);

        let file_name = format!("{}{}", slug, config.out_extension.as_str());
        let files = FilesOutput {
            dir: out_base.clone(),
            path: out_base.join(&file_name),
            route_ext: format!("{}{}", route, config.out_extension.as_str()),
            route: route.clone(),
            name: file_name,
        };

        let html_dir = out_base.join(&slug);
        let html = HtmlOutput {
            path: html_dir.join("index.html"),
            dir: html_dir,
            route_index: format!("{}/index.html", route),
            route: route.clone(),
        };

        let api = ApiInfo {
            root: config.api_root.clone(),
            route: format!("{}/{}", config.api_root.trim_end_matches('/'), slug),
        };

        Ok(Self {
            slug,
            content,
            meta,
            files,
            html,
            api,
            stat,
        })
    }
}

/// drop `.` components so default `out_dir`/`posts_dir` values don't leave
/// literal dots in output paths
fn normalize(path: PathBuf) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// `/`-separated route under the output directory: posts dir, relative
/// subpath, then slug
fn route_string(posts_dir: &str, rel: &Path, slug: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in Path::new(posts_dir).components() {
        if let Component::Normal(c) = component {
            if let Some(c) = c.to_str() {
                parts.push(c.into());
            }
        }
    }
    for component in rel.components() {
        if let Component::Normal(c) = component {
            if let Some(c) = c.to_str() {
                parts.push(c.into());
            }
        }
    }
    parts.push(slug.into());
    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn stat(created_ms: u128) -> FileStat {
        let created = UNIX_EPOCH + Duration::from_millis(created_ms as u64);
        FileStat {
            size: 0,
            created,
            accessed: created,
            modified: created,
            created_ms,
        }
    }

    fn record(path: &str, config: &Config) -> DocumentRecord {
        DocumentRecord::build(
            Path::new(path),
            Content::Text("body".into()),
            HashMap::new(),
            stat(0),
            config,
            Path::new("/work/content"),
            Path::new("/work"),
        )
        .unwrap()
    }

    #[test]
    fn slug_is_text_before_first_dot() {
        let config = Config::default();
        let rec = record("/work/content/a.post.md", &config);
        assert_eq!(rec.slug, "a");
    }

    #[test]
    fn default_layout_at_working_directory() {
        let config = Config::default();
        let rec = record("/work/content/hello.md", &config);
        assert_eq!(rec.files.name, "hello.js");
        assert_eq!(rec.files.path, Path::new("/work/hello.js"));
        assert_eq!(rec.html.path, Path::new("/work/hello/index.html"));
        assert_eq!(rec.files.route, "/hello");
        assert_eq!(rec.files.route_ext, "/hello.js");
        assert_eq!(rec.html.route_index, "/hello/index.html");
    }

    #[test]
    fn configured_dirs_and_subpath() {
        let mut config = Config::default();
        config.out_dir = "out".into();
        config.posts_dir = "blog".into();
        let rec = record("/work/content/sub/deep/hello.md", &config);
        assert_eq!(rec.files.dir, Path::new("/work/out/blog/sub/deep"));
        assert_eq!(
            rec.html.path,
            Path::new("/work/out/blog/sub/deep/hello/index.html")
        );
        assert_eq!(rec.files.route, "/blog/sub/deep/hello");
        assert_eq!(rec.html.route, "/blog/sub/deep/hello");
    }

    #[test]
    fn api_route_combines_root_and_slug() {
        let config = Config::default();
        let rec = record("/work/content/hello.md", &config);
        assert_eq!(rec.api.root, "/posts");
        assert_eq!(rec.api.route, "/posts/hello");
    }

    #[test]
    fn file_outside_root_is_an_error() {
        let config = Config::default();
        let res = DocumentRecord::build(
            Path::new("/elsewhere/hello.md"),
            Content::Text("body".into()),
            HashMap::new(),
            stat(0),
            &config,
            Path::new("/work/content"),
            Path::new("/work"),
        );
        assert!(matches!(res, Err(Error::PathError(_))));
    }
}
