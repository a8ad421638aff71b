//! Title extraction from markdown documents.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};

fn heading_markers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#+\s*").unwrap())
}

/// Extract the display title of a document.
///
/// The first line whose trimmed form starts with `#` wins, with the
/// heading markers and surrounding whitespace stripped. A document
/// without any heading line falls back to its file stem. A file that
/// cannot be decoded as UTF-8 aborts the run: a corrupt note is an
/// operator problem, not something to paper over.
pub fn extract_title(path: &Path) -> DomainResult<String> {
    let bytes = fs::read(path).map_err(|source| DomainError::Traversal {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| DomainError::Decode {
        path: path.to_path_buf(),
        reason: e.utf8_error().to_string(),
    })?;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            let title = heading_markers().replace(trimmed, "").trim().to_string();
            debug!("title for {:?}: {:?}", path, title);
            return Ok(title);
        }
    }

    // No heading line at all
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!("no heading in {:?}, falling back to stem {:?}", path, stem);
    Ok(stem)
}
