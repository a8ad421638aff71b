//! Domain entities: core data structures

use std::collections::BTreeMap;

use termtree::Tree;

/// One recognized markup file, resolved to a link entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display title, extracted from the first heading line (or the
    /// file stem when no heading exists)
    pub title: String,
    /// Path relative to the scan root, forward slashes on every platform
    pub relative_path: String,
}

/// One directory level of the scanned hierarchy.
///
/// Documents and subdirectories live in two separate fields, so a real
/// folder can carry any name without clashing with a reserved marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Documents directly in this directory, case-insensitive name order
    pub documents: Vec<Document>,
    /// Non-excluded subdirectories by name; empty ones are kept
    pub children: BTreeMap<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.children.is_empty()
    }

    /// Total document count including all nested subdirectories.
    pub fn document_count(&self) -> usize {
        self.documents.len()
            + self
                .children
                .values()
                .map(|child| child.document_count())
                .sum::<usize>()
    }

    /// Convert to a display tree rooted at `name`, for terminal output.
    pub fn to_display_tree(&self, name: &str) -> Tree<String> {
        let mut leaves: Vec<Tree<String>> = self
            .documents
            .iter()
            .map(|doc| Tree::new(doc.title.clone()))
            .collect();
        leaves.extend(
            self.children
                .iter()
                .map(|(child_name, child)| child.to_display_tree(child_name)),
        );
        Tree::new(name.to_string()).with_leaves(leaves)
    }
}
