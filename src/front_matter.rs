use std::collections::HashMap;

use serde::Serialize;

/// split a raw document into its front matter and body
///
/// the header is a first line of exactly `---`, `key: value` lines, and a
/// closing `---` line; everything after the closing line is the body

#[derive(Debug, Clone, Default, Serialize)]
pub struct FrontMatter {
    pub content: String,
    pub meta: HashMap<String, String>,
}

/// parse a document, degrading to the whole input with empty metadata when
/// the header is absent or malformed
///
/// detection is strict: the opening `---` must be the very first line, any
/// leading whitespace before it means no header
pub fn parse(raw: &str) -> FrontMatter {
    let Some(rest) = raw.strip_prefix("---\n") else {
        return FrontMatter {
            content: raw.into(),
            meta: HashMap::new(),
        };
    };
    let Some((header, content)) = split_close(rest) else {
        return FrontMatter {
            content: raw.into(),
            meta: HashMap::new(),
        };
    };

    let mut meta = HashMap::new();
    for line in header.lines() {
        // first colon only, lines without one are skipped
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        // last occurrence of a duplicate key wins
        meta.insert(key.into(), value.into());
    }

    FrontMatter {
        content: content.into(),
        meta,
    }
}

/// find the closing `---` line in everything after the opening delimiter,
/// returning the header lines and the body
fn split_close(rest: &str) -> Option<(&str, &str)> {
    if let Some(content) = rest.strip_prefix("---\n") {
        return Some(("", content));
    }
    if rest == "---" {
        return Some(("", ""));
    }
    if let Some(at) = rest.find("\n---\n") {
        return Some((&rest[..at], &rest[at + 5..]));
    }
    if let Some(header) = rest.strip_suffix("\n---") {
        return Some((header, ""));
    }
    None
}
