//! Markdown rendering of a directory hierarchy.

use itertools::Itertools;

use crate::domain::entities::DirectoryNode;

/// Render one node as a nested markdown outline.
///
/// Documents come first as a link list followed by a blank separator
/// line, then each subdirectory in case-insensitive name order as a
/// heading of `heading_level` markers, a blank line, the recursive
/// render one level deeper, and a trailing blank line. Headings carry
/// the bare directory name; the links carry the real relative paths.
///
/// Pure function: the same hierarchy always renders to the same bytes.
pub fn render_node(node: &DirectoryNode, heading_level: usize, path_prefix: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !node.documents.is_empty() {
        for doc in &node.documents {
            lines.push(format!("- [{}]({})", doc.title, doc.relative_path));
        }
        lines.push(String::new());
    }

    let sorted_children = node
        .children
        .iter()
        .sorted_by_key(|(name, _)| name.to_lowercase());

    for (name, child) in sorted_children {
        lines.push(format!("{} {}", "#".repeat(heading_level), name));
        lines.push(String::new());
        lines.push(render_node(
            child,
            heading_level + 1,
            &format!("{}/{}", path_prefix, name),
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}
