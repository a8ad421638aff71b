//! Tests for the tree builder

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use tilgen::util::testing;
use tilgen::{build_node, scan_topics, ScanConfig};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn create_note(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok();
    }
    fs::write(&path, content).expect("write note");
    path
}

#[test]
fn given_nested_dirs_when_building_then_docs_and_children_partitioned() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_note(&temp, "go/intro.md", "# Goroutines\n");
    create_note(&temp, "go/advanced/channels.md", "text without heading\n");

    // Act
    let node = build_node(
        &temp.path().join("go"),
        temp.path(),
        &ScanConfig::default(),
    )
    .unwrap();

    // Assert
    assert_eq!(node.documents.len(), 1);
    assert_eq!(node.documents[0].title, "Goroutines");
    assert_eq!(node.documents[0].relative_path, "go/intro.md");

    let advanced = node.children.get("advanced").unwrap();
    assert_eq!(advanced.documents.len(), 1);
    assert_eq!(advanced.documents[0].title, "channels");
    assert_eq!(
        advanced.documents[0].relative_path,
        "go/advanced/channels.md"
    );
}

#[test]
fn given_mixed_case_names_when_building_then_documents_sorted_case_insensitively() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_note(&temp, "topic/B.md", "# B\n");
    create_note(&temp, "topic/a.md", "# A\n");
    create_note(&temp, "topic/c.md", "# C\n");

    // Act
    let node = build_node(
        &temp.path().join("topic"),
        temp.path(),
        &ScanConfig::default(),
    )
    .unwrap();

    // Assert
    let paths: Vec<&str> = node
        .documents
        .iter()
        .map(|d| d.relative_path.as_str())
        .collect();
    assert_eq!(paths, vec!["topic/a.md", "topic/B.md", "topic/c.md"]);
}

#[test]
fn given_excluded_dir_at_depth_when_building_then_not_represented() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_note(&temp, "topic/note.md", "# Note\n");
    create_note(&temp, "topic/node_modules/junk.md", "# Junk\n");
    create_note(&temp, "topic/sub/.git/obj.md", "# Obj\n");
    create_note(&temp, "topic/sub/real.md", "# Real\n");

    // Act
    let node = build_node(
        &temp.path().join("topic"),
        temp.path(),
        &ScanConfig::default(),
    )
    .unwrap();

    // Assert
    assert!(!node.children.contains_key("node_modules"));
    let sub = node.children.get("sub").unwrap();
    assert!(!sub.children.contains_key(".git"));
    assert_eq!(sub.documents.len(), 1);
}

#[test]
fn given_empty_subdir_when_building_then_still_inserted() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("topic/empty-leaf")).unwrap();

    // Act
    let node = build_node(
        &temp.path().join("topic"),
        temp.path(),
        &ScanConfig::default(),
    )
    .unwrap();

    // Assert
    let leaf = node.children.get("empty-leaf").unwrap();
    assert!(leaf.is_empty());
}

#[test]
fn given_foreign_files_when_building_then_ignored() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_note(&temp, "topic/note.md", "# Note\n");
    create_note(&temp, "topic/script.sh", "echo hi\n");
    create_note(&temp, "topic/README.md", "# The index itself\n");

    // Act
    let node = build_node(
        &temp.path().join("topic"),
        temp.path(),
        &ScanConfig::default(),
    )
    .unwrap();

    // Assert
    assert_eq!(node.documents.len(), 1);
    assert_eq!(node.documents[0].relative_path, "topic/note.md");
}

#[test]
fn given_root_with_topics_when_scanning_then_excluded_dirs_skipped() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_note(&temp, "go/intro.md", "# Goroutines\n");
    create_note(&temp, ".git/config.md", "# Not a topic\n");
    fs::create_dir_all(temp.path().join("empty-topic")).unwrap();
    create_note(&temp, "loose.md", "# Not inside any topic\n");

    // Act
    let topics = scan_topics(temp.path(), &ScanConfig::default()).unwrap();

    // Assert
    assert_eq!(topics.len(), 2);
    assert!(topics.contains_key("go"));
    assert!(topics.contains_key("empty-topic"));
    assert!(!topics.contains_key(".git"));
}

#[test]
fn given_nonexistent_root_when_scanning_then_errors() {
    // Act
    let result = scan_topics(
        &PathBuf::from("/nonexistent/tilgen-test"),
        &ScanConfig::default(),
    );

    // Assert
    assert!(result.is_err());
}
