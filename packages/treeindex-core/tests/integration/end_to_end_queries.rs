//! End-to-end queries over the dog.rb / cat.rb fixture repository

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use treeindex_core::{MethodRegistry, Node, SymbolKind};

#[test]
fn test_get_symbols_dog() {
    let engine = fixture_engine();

    let symbols = engine.get_symbols(DOG_RB).unwrap();

    assert_symbol_names(&symbols, &["Dog", "bark", "wag_tail"]);
    assert_eq!(symbols[0].kind, SymbolKind::Type);
    assert_eq!(symbols[0].scope, "global");
    assert_eq!(symbols[1].scope, "Dog");
    assert_eq!((symbols[1].start_line, symbols[1].end_line), (2, 4));
    assert_eq!(
        symbols[1].source_text.as_deref(),
        Some("  def bark\n    puts \"Woof!\"\n  end")
    );
}

#[test]
fn test_query_nodes_def() {
    let engine = fixture_engine();

    let defs = engine.query_nodes(DOG_RB, "def").unwrap();

    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].node.child(0), Some(&Node::string("bark")));
    assert_eq!(defs[0].id.to_string(), "root.children.2.children.0");
    assert_eq!(defs[1].id.to_string(), "root.children.2.children.1");
}

#[test]
fn test_ancestors_of_first_def() {
    let engine = fixture_engine();
    let first_def = engine.query_nodes(DOG_RB, "def").unwrap().remove(0);

    let ancestors = engine
        .get_ancestors(DOG_RB, &first_def.id.to_string())
        .unwrap();

    assert_eq!(ancestors.len(), 2);
    assert_eq!(ancestors[0].node.kind(), Some("class"));
    assert_eq!(ancestors[1].node.kind(), Some("begin"));
}

#[test]
fn test_node_details_matches_query_nodes() {
    let engine = fixture_engine();

    for m in engine.query_nodes(CAT_RB, "send").unwrap() {
        let node = engine.get_node_details(CAT_RB, &m.id.to_string()).unwrap();
        assert_eq!(node, m.node);
    }
    assert_not_found(engine.get_node_details(CAT_RB, "root.children.2.children.9"));
    assert_not_found(engine.get_node_details(CAT_RB, "root/children/2"));
}

#[test]
fn test_find_definition_dog() {
    let engine = fixture_engine();

    let defs = engine.find_definition("Dog").unwrap();

    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].file_path, DOG_RB);
    assert!(engine.find_definition("Horse").unwrap().is_empty());
}

#[test]
fn test_find_references_dog() {
    let engine = fixture_engine();

    let refs = engine.find_references("Dog").unwrap();

    assert_eq!(refs.len(), 2);
    let mut sites: Vec<(&str, u32)> = refs
        .iter()
        .map(|r| (r.file_path.as_str(), r.start_line))
        .collect();
    sites.sort();
    assert_eq!(sites, vec![(CAT_RB, 3), (DOG_RB, 1)]);
}

#[test]
fn test_call_hierarchy_scratch() {
    let engine = fixture_engine();

    let hierarchy = engine.get_call_hierarchy(CAT_RB, SCRATCH_LINE).unwrap();

    assert_eq!(hierarchy.symbol.name, "scratch");
    let wag_tail: Vec<_> = hierarchy
        .outbound
        .iter()
        .filter(|c| c.name == "wag_tail")
        .collect();
    assert_eq!(wag_tail.len(), 1);
    assert_eq!(hierarchy.outbound_names(), vec!["new", "wag_tail"]);
    assert!(hierarchy.inbound.is_empty());
}

#[test]
fn test_call_hierarchy_inbound_is_name_matched() {
    let engine = fixture_engine();

    let hierarchy = engine.get_call_hierarchy(DOG_RB, WAG_TAIL_LINE).unwrap();

    assert_eq!(hierarchy.symbol.name, "wag_tail");
    assert_eq!(hierarchy.inbound.len(), 1);
    assert_eq!(hierarchy.inbound[0].file_path, CAT_RB);
    assert_eq!(hierarchy.inbound[0].start_line, 4);
    assert_eq!(hierarchy.outbound_names(), vec!["puts"]);
}

#[test]
fn test_call_hierarchy_outside_callables() {
    let engine = fixture_engine();

    // line 5 of dog.rb is the blank line between the two methods
    assert_not_found(engine.get_call_hierarchy(DOG_RB, 5));
    assert_not_found(engine.get_call_hierarchy(DOG_RB, 1));
}

#[test]
fn test_unindexed_file_queries() {
    let engine = fixture_engine();

    assert_not_found(engine.get_symbols("horse.rb"));
    assert_not_found(engine.get_tree("horse.rb"));
    assert_not_found(engine.get_ancestors("horse.rb", "root"));
    assert_invalid_argument(engine.find_definition(""));
}

#[test]
fn test_list_files_and_stats() {
    let engine = fixture_engine();

    assert_eq!(engine.list_files().unwrap(), vec![CAT_RB, DOG_RB]);
    let stats = engine.stats().unwrap();
    assert_eq!(stats.files, 2);
    assert_eq!(stats.symbols, 5);
    // dog.rb: Dog, puts, puts / cat.rb: Cat, new, Dog, wag_tail
    assert_eq!(stats.references, 7);
}

#[test]
fn test_registry_dispatch_matches_engine() {
    let engine = fixture_engine();
    let registry = MethodRegistry::new();

    let value = registry
        .dispatch(
            &engine,
            "getCallHierarchy",
            &json!({"file_path": CAT_RB, "line": SCRATCH_LINE}),
        )
        .unwrap();

    assert_eq!(value["symbol"]["name"], json!("scratch"));
    assert_eq!(value["outbound"][1]["name"], json!("wag_tail"));

    let ancestors = registry
        .dispatch(
            &engine,
            "getAncestors",
            &json!({"file_path": DOG_RB, "id": "root.children.2.children.0"}),
        )
        .unwrap();
    assert_eq!(ancestors[0]["id"], json!("root"));
    assert_eq!(ancestors[1]["id"], json!("root.children.2"));
}
