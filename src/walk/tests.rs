//! Tests for tree walking and subdirectory enumeration.

use super::*;
use crate::error::StubError;
use crate::test_support::{FixtureTree, relative_names};

#[test]
fn test_walk_single_directory() {
    let tree = FixtureTree::new();
    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(relative_names(tree.root(), &dirs), vec!["."]);
}

#[test]
fn test_walk_is_breadth_first_and_sorted() {
    let tree = FixtureTree::new();
    tree.dir("b/inner");
    tree.dir("a/deep/deeper");
    tree.dir("c");
    tree.file("a/file.go", "package a\n");

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(
        relative_names(tree.root(), &dirs),
        vec![".", "a", "b", "c", "a/deep", "b/inner", "a/deep/deeper"]
    );
}

#[test]
fn test_walk_skips_hidden_directories() {
    let tree = FixtureTree::new();
    tree.go_file(".git/hooks/hook.go", "hooks");
    tree.go_file(".cache/pkg.go", "cache");
    tree.go_file("visible/pkg.go", "visible");

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(relative_names(tree.root(), &dirs), vec![".", "visible"]);
}

#[test]
fn test_walk_ignores_files() {
    let tree = FixtureTree::new();
    tree.file("main.go", "package main\n");
    tree.file("README", "readme\n");

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(dirs.len(), 1);
}

#[test]
fn test_walk_honors_exclude_globs() {
    let tree = FixtureTree::new();
    tree.dir("vendor/github.com/lib");
    tree.dir("internal/gen/proto");
    tree.dir("internal/api");

    let config = Config {
        exclude: vec!["vendor".to_string(), "internal/gen".to_string()],
        ..Config::default()
    };
    let dirs = walk_tree(tree.root(), &config).unwrap();
    assert_eq!(
        relative_names(tree.root(), &dirs),
        vec![".", "internal", "internal/api"]
    );
}

#[test]
fn test_walk_missing_root_is_traversal_error() {
    let tree = FixtureTree::new();
    let missing = tree.path("does-not-exist");

    let err = walk_tree(&missing, &Config::default()).unwrap_err();
    match err {
        StubError::Traversal { path, .. } => assert_eq!(path, missing),
        other => panic!("expected traversal error, got {other:?}"),
    }
}

#[test]
fn test_walk_root_that_is_a_file_is_traversal_error() {
    let tree = FixtureTree::new();
    let file = tree.file("main.go", "package main\n");

    let err = walk_tree(&file, &Config::default()).unwrap_err();
    assert!(matches!(err, StubError::Traversal { .. }));
}

#[cfg(unix)]
#[test]
fn test_walk_follows_symlink_but_drops_duplicate() {
    let tree = FixtureTree::new();
    tree.dir("real/child");
    std::os::unix::fs::symlink(tree.path("real"), tree.path("zlink")).unwrap();

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(
        relative_names(tree.root(), &dirs),
        vec![".", "real", "real/child"]
    );
}

#[cfg(unix)]
#[test]
fn test_walk_terminates_on_symlink_cycle() {
    let tree = FixtureTree::new();
    tree.dir("a/b");
    std::os::unix::fs::symlink(tree.path("a"), tree.path("a/b/loop")).unwrap();

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(relative_names(tree.root(), &dirs), vec![".", "a", "a/b"]);
}

#[cfg(unix)]
#[test]
fn test_walk_does_not_leave_the_root_through_symlinks() {
    let tree = FixtureTree::new();
    let outside = FixtureTree::new();
    outside.dir("lib/nested");
    tree.dir("app");
    std::os::unix::fs::symlink(outside.root(), tree.path("ext")).unwrap();

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(relative_names(tree.root(), &dirs), vec![".", "app"]);
}

#[cfg(unix)]
#[test]
fn test_walk_keeps_symlink_to_directory_inside_root() {
    let tree = FixtureTree::new();
    tree.dir("a/target");
    std::os::unix::fs::symlink(tree.path("a/target"), tree.path("link")).unwrap();

    // "link" is listed before "a/target" is reached, so the link wins
    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(relative_names(tree.root(), &dirs), vec![".", "a", "link"]);
}

#[cfg(unix)]
#[test]
fn test_walk_ignores_dangling_symlink() {
    let tree = FixtureTree::new();
    std::os::unix::fs::symlink(tree.path("gone"), tree.path("dangling")).unwrap();

    let dirs = walk_tree(tree.root(), &Config::default()).unwrap();
    assert_eq!(dirs.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_walk_unreadable_subdirectory_aborts() {
    use std::os::unix::fs::PermissionsExt;

    let tree = FixtureTree::new();
    let locked = tree.dir("locked");
    tree.dir("locked/inner");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores permission bits
    if std::fs::read_dir(&locked).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = walk_tree(tree.root(), &Config::default());
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    match result.unwrap_err() {
        StubError::Traversal { path, .. } => assert_eq!(path, locked),
        other => panic!("expected traversal error, got {other:?}"),
    }
}

#[test]
fn test_enumerator_lists_only_immediate_children() {
    let tree = FixtureTree::new();
    tree.dir("one/two");
    let config = Config::default();

    let mut enumerator = Enumerator::new(tree.root(), &config).unwrap();
    let subs = enumerator.subdirs(tree.root()).unwrap();
    assert_eq!(relative_names(tree.root(), &subs), vec!["one"]);
}

#[test]
fn test_enumerator_unlistable_directory_is_traversal_error() {
    let tree = FixtureTree::new();
    let config = Config::default();
    let mut enumerator = Enumerator::new(tree.root(), &config).unwrap();

    // removed after the walk started
    let gone = tree.dir("gone");
    std::fs::remove_dir(&gone).unwrap();
    match enumerator.subdirs(&gone).unwrap_err() {
        StubError::Traversal { path, .. } => assert_eq!(path, gone),
        other => panic!("expected traversal error, got {other:?}"),
    }

    // a plain file fails to list regardless of permissions
    let file = tree.file("plain.go", "package plain\n");
    assert!(matches!(
        enumerator.subdirs(&file).unwrap_err(),
        StubError::Traversal { .. }
    ));
}

#[test]
fn test_enumerator_never_returns_a_directory_twice() {
    let tree = FixtureTree::new();
    tree.dir("one");
    let config = Config::default();

    let mut enumerator = Enumerator::new(tree.root(), &config).unwrap();
    assert_eq!(enumerator.subdirs(tree.root()).unwrap().len(), 1);
    assert!(enumerator.subdirs(tree.root()).unwrap().is_empty());
}
