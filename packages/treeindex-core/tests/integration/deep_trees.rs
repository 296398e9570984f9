//! Deeply nested parser trees: long operator chains through build and query
//!
//! `def total; x + 1 + 1 + ... ; end` parses into a left-deep chain of
//! `send :+` nodes, two JSON levels per link.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use treeindex_core::{IndexConfig, IndexStore, InMemoryIndexStore, QueryEngine, SqliteIndexStore};

const CHAIN_LENGTH: usize = 250;
const DEEP_RB: &str = "deep.rb";

/// Parser dump of `def total` whose body is a `CHAIN_LENGTH`-deep `+` chain
fn deep_chain_json(links: usize) -> String {
    let mut chain =
        r#"{"kind":"lvar","location":{"start_line":2,"end_line":2},"children":["x"]}"#.to_string();
    for _ in 0..links {
        chain = format!(
            r#"{{"kind":"send","location":{{"start_line":2,"end_line":2}},"children":[{},"+",{{"kind":"int","children":[1]}}]}}"#,
            chain
        );
    }
    format!(
        r#"{{"kind":"def","location":{{"start_line":1,"end_line":3}},"children":["total",{{"kind":"args","children":[]}},{}]}}"#,
        chain
    )
}

fn deep_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let source = format!("def total\n  x{}\nend\n", " + 1".repeat(CHAIN_LENGTH));
    std::fs::write(dir.path().join(DEEP_RB), source).unwrap();
    std::fs::write(
        dir.path().join(format!("{}.ast.json", DEEP_RB)),
        deep_chain_json(CHAIN_LENGTH),
    )
    .unwrap();
    dir
}

/// Id of the `lvar x` at the bottom of the chain
fn innermost_id() -> String {
    format!("root.children.2{}", ".children.0".repeat(CHAIN_LENGTH))
}

fn build_into(store: Arc<dyn IndexStore>) -> QueryEngine {
    let repo = deep_repo();
    let report = fixture_builder().build(repo.path(), store.as_ref()).unwrap();

    assert!(report.is_clean(), "failures: {:?}", report.failures);
    assert_eq!(report.files_indexed, 1);
    assert_eq!(report.symbols, 1);
    assert_eq!(report.references, CHAIN_LENGTH);

    QueryEngine::from_config(store, &IndexConfig::default())
}

fn check_queries(engine: &QueryEngine) {
    let symbols = engine.get_symbols(DEEP_RB).unwrap();
    assert_symbol_names(&symbols, &["total"]);

    let sends = engine.query_nodes(DEEP_RB, "send").unwrap();
    assert_eq!(sends.len(), CHAIN_LENGTH);
    assert_eq!(sends[0].id.to_string(), "root.children.2");

    let id = innermost_id();
    assert!(engine.get_node_details(DEEP_RB, &id).unwrap().is_kind("lvar"));
    assert_eq!(engine.get_ancestors(DEEP_RB, &id).unwrap().len(), CHAIN_LENGTH + 1);

    let hierarchy = engine.get_call_hierarchy(DEEP_RB, 2).unwrap();
    assert_eq!(hierarchy.symbol.name, "total");
    assert!(hierarchy.inbound.is_empty());
    assert_eq!(hierarchy.outbound_names(), vec!["+"]);

    assert_eq!(engine.find_references("+").unwrap().len(), CHAIN_LENGTH);
}

#[test]
fn test_deep_chain_in_memory() {
    let engine = build_into(Arc::new(InMemoryIndexStore::new()));
    check_queries(&engine);
}

#[test]
fn test_deep_chain_sqlite() {
    let engine = build_into(Arc::new(SqliteIndexStore::in_memory().unwrap()));
    check_queries(&engine);

    let subtree = engine.find_definition("total").unwrap().remove(0).subtree.unwrap();
    assert_eq!(subtree.subtree_size(), engine.get_tree(DEEP_RB).unwrap().subtree_size());
}
