//! Fixed scan configuration: deny-lists, document extension, output name.
//!
//! These are immutable values handed to the builder explicitly. There is
//! no file- or env-based override surface; the defaults are the contract.

use std::collections::BTreeSet;

/// What the scanner skips and what it recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory names never entered or represented
    pub excluded_dirs: BTreeSet<String>,
    /// File names never indexed (the generated index itself)
    pub excluded_files: BTreeSet<String>,
    /// Recognized document extension, without the dot
    pub extension: String,
    /// Name of the generated index file at the scan root
    pub output_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let excluded_dirs = [
            ".git",
            ".github",
            "scripts",
            "node_modules",
            "target",
            "__pycache__",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let output_name = "README.md".to_string();
        let excluded_files = BTreeSet::from([output_name.clone()]);

        Self {
            excluded_dirs,
            excluded_files,
            extension: "md".to_string(),
            output_name,
        }
    }
}

impl ScanConfig {
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn is_document(&self, name: &str) -> bool {
        !self.excluded_files.contains(name)
            && std::path::Path::new(name)
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }
}
