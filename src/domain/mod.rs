//! Core scan-build-render pipeline.

pub mod assemble;
pub mod builder;
pub mod entities;
pub mod error;
pub mod render;
pub mod title;

pub use assemble::assemble;
pub use builder::{build_node, scan_topics};
pub use entities::{DirectoryNode, Document};
pub use error::{DomainError, DomainResult};
pub use render::render_node;
pub use title::extract_title;
