//! Build pipeline: discovery, skipped files, rebuild idempotence

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::*;
use pretty_assertions::assert_eq;
use treeindex_core::features::parsing::SidecarTreeSource;
use treeindex_core::{IndexBuilder, IndexConfig, IndexStore, InMemoryIndexStore, SqliteIndexStore};

#[test]
fn test_fixture_build_report() {
    let store = InMemoryIndexStore::new();

    let report = build_fixture_index(&store);

    assert!(report.is_clean());
    assert_eq!(report.files_discovered, 2);
    assert_eq!(report.files_indexed, 2);
    assert_eq!(report.symbols, 5);
    assert_eq!(report.references, 7);
}

#[test]
fn test_rebuild_is_idempotent() {
    let store = SqliteIndexStore::in_memory().unwrap();

    build_fixture_index(&store);
    let first_symbols = store.symbols_named("wag_tail").unwrap();
    let first_refs = store.references_named("Dog").unwrap();
    let first_tree = store.file(DOG_RB).unwrap();

    build_fixture_index(&store);

    assert_eq!(store.symbols_named("wag_tail").unwrap(), first_symbols);
    assert_eq!(store.references_named("Dog").unwrap(), first_refs);
    assert_eq!(store.file(DOG_RB).unwrap(), first_tree);
    assert_eq!(store.stats().unwrap().files, 2);
}

#[test]
fn test_rebuild_drops_removed_files() {
    let repo = copy_fixture_repo();
    let store = InMemoryIndexStore::new();
    let builder = fixture_builder();

    builder.build(repo.path(), &store).unwrap();
    std::fs::remove_file(repo.path().join(CAT_RB)).unwrap();
    let report = builder.build(repo.path(), &store).unwrap();

    assert_eq!(report.files_indexed, 1);
    assert!(!store.has_file(CAT_RB).unwrap());
    assert!(store.references_named("wag_tail").unwrap().is_empty());
}

#[test]
fn test_file_without_tree_is_skipped() {
    let repo = copy_fixture_repo();
    std::fs::write(repo.path().join("horse.rb"), "class Horse\nend\n").unwrap();
    let store = InMemoryIndexStore::new();

    let report = fixture_builder().build(repo.path(), &store).unwrap();

    assert_eq!(report.files_discovered, 3);
    assert_eq!(report.files_indexed, 2);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.failures[0].file_path, "horse.rb");
    assert!(report.failures[0].message.contains("[parse]"));
}

#[test]
fn test_parallel_and_sequential_builds_agree() {
    let sequential = InMemoryIndexStore::new();
    build_fixture_index(&sequential);

    let parallel = InMemoryIndexStore::new();
    let config = IndexConfig {
        parallel: true,
        threads: Some(4),
        ..IndexConfig::default()
    };
    IndexBuilder::with_source(config, Arc::new(SidecarTreeSource::default()))
        .build(&ruby_fixture_dir(), &parallel)
        .unwrap();

    assert_eq!(parallel.file_paths().unwrap(), sequential.file_paths().unwrap());
    assert_eq!(
        parallel.symbols_in_file(DOG_RB).unwrap(),
        sequential.symbols_in_file(DOG_RB).unwrap()
    );
    assert_eq!(parallel.stats().unwrap(), sequential.stats().unwrap());
}

#[test]
fn test_sqlite_index_persists_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let db = dir.path().join("index.db");

    {
        let store = SqliteIndexStore::open(&db).unwrap();
        build_fixture_index(&store);
    }

    let reopened = SqliteIndexStore::open(&db).unwrap();
    assert_eq!(reopened.file_paths().unwrap(), vec![CAT_RB, DOG_RB]);
    assert_eq!(reopened.symbols_named("scratch").unwrap().len(), 1);
}
