//! Tree builder: scans the notes directory into `DirectoryNode` hierarchies.

use std::collections::BTreeMap;
use std::path::Path;

use itertools::Itertools;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::domain::entities::{DirectoryNode, Document};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::title::extract_title;

/// Enumerate the topic directories directly under `root` and build one
/// hierarchy per topic. Excluded directory names never become topics.
pub fn scan_topics(
    root: &Path,
    config: &ScanConfig,
) -> DomainResult<BTreeMap<String, DirectoryNode>> {
    if !root.is_dir() {
        return Err(DomainError::NotADirectory(root.to_path_buf()));
    }

    let mut topics = BTreeMap::new();
    for entry in list_sorted(root)? {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if config.is_excluded_dir(&name) {
            debug!("skipping excluded topic dir {:?}", name);
            continue;
        }
        let node = build_node(entry.path(), root, config)?;
        topics.insert(name, node);
    }
    Ok(topics)
}

/// Build the node for one directory level.
///
/// Entries are processed in case-insensitive name order, which fixes the
/// document order for good. Subdirectories are built recursively and
/// inserted even when empty, so an empty leaf folder still shows up as
/// an empty section. Anything that is neither a non-excluded directory
/// nor a recognized document is ignored.
pub fn build_node(
    dir: &Path,
    scan_root: &Path,
    config: &ScanConfig,
) -> DomainResult<DirectoryNode> {
    let mut node = DirectoryNode::default();

    for entry in list_sorted(dir)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            if config.is_excluded_dir(&name) {
                continue;
            }
            let child = build_node(entry.path(), scan_root, config)?;
            node.children.insert(name, child);
        } else if entry.file_type().is_file() && config.is_document(&name) {
            let title = extract_title(entry.path())?;
            node.documents.push(Document {
                title,
                relative_path: relative_slash_path(entry.path(), scan_root),
            });
        }
    }

    Ok(node)
}

/// Immediate entries of `dir`, sorted case-insensitively by name.
fn list_sorted(dir: &Path) -> DomainResult<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DomainError::Traversal {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        entries.push(entry);
    }
    entries.sort_by_key(|e| e.file_name().to_string_lossy().to_lowercase());
    Ok(entries)
}

/// Path relative to `root`, joined with forward slashes on every platform.
fn relative_slash_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/")
}
