pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use config::ScanConfig;
pub use domain::assemble::assemble;
pub use domain::builder::{build_node, scan_topics};
pub use domain::entities::{DirectoryNode, Document};
pub use domain::error::{DomainError, DomainResult};
pub use domain::render::render_node;
pub use domain::title::extract_title;

use std::path::Path;

/// Scan `root` and produce the full index text.
///
/// This is the whole pipeline minus the file write: topics are
/// enumerated, each topic tree is built and the result is assembled
/// into one document. Nothing is touched on disk, so a failing scan
/// never leaves a partial index behind.
pub fn generate_index(root: &Path, config: &ScanConfig) -> DomainResult<String> {
    let topics = scan_topics(root, config)?;
    Ok(assemble(&topics))
}
