//! SQLite index store against the fixture repository

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::*;
use pretty_assertions::assert_eq;
use treeindex_core::{IndexConfig, IndexStore, InMemoryIndexStore, QueryEngine, SqliteIndexStore};

fn sqlite_engine() -> QueryEngine {
    let store = SqliteIndexStore::in_memory().unwrap();
    build_fixture_index(&store);
    QueryEngine::from_config(Arc::new(store), &IndexConfig::default())
}

#[test]
fn test_sqlite_matches_in_memory() {
    let sqlite = SqliteIndexStore::in_memory().unwrap();
    let memory = InMemoryIndexStore::new();
    build_fixture_index(&sqlite);
    build_fixture_index(&memory);

    for file in [DOG_RB, CAT_RB] {
        assert_eq!(
            sqlite.symbols_in_file(file).unwrap(),
            memory.symbols_in_file(file).unwrap()
        );
        assert_eq!(sqlite.file(file).unwrap(), memory.file(file).unwrap());
    }
    for name in ["Dog", "wag_tail", "puts"] {
        assert_eq!(
            sqlite.references_named(name).unwrap(),
            memory.references_named(name).unwrap()
        );
    }
    assert_eq!(sqlite.stats().unwrap(), memory.stats().unwrap());
}

#[test]
fn test_references_table_is_quoted() {
    let store = SqliteIndexStore::in_memory().unwrap();
    build_fixture_index(&store);

    let refs = store.references_named("new").unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].file_path, CAT_RB);
}

#[test]
fn test_callable_subtree_round_trips() {
    let engine = sqlite_engine();

    let bark = engine.find_definition("bark").unwrap().remove(0);
    let subtree = bark.subtree.expect("callable subtree");

    assert_eq!(subtree.kind(), Some("def"));
    assert_eq!(
        subtree,
        engine
            .get_node_details(DOG_RB, "root.children.2.children.0")
            .unwrap()
    );
}

#[test]
fn test_type_symbols_have_no_subtree() {
    let engine = sqlite_engine();

    let dog = engine.find_definition("Dog").unwrap().remove(0);

    assert!(dog.subtree.is_none());
    assert!(dog.source_text.is_none());
}

#[test]
fn test_call_hierarchy_over_sqlite() {
    let engine = sqlite_engine();

    let hierarchy = engine.get_call_hierarchy(CAT_RB, SCRATCH_LINE).unwrap();

    assert_eq!(hierarchy.symbol.name, "scratch");
    assert_eq!(hierarchy.outbound_names(), vec!["new", "wag_tail"]);
}
