//! Extractor scope and ordering behavior on hand-built trees

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use treeindex_core::features::extraction::{LanguageRules, NodeRule};
use treeindex_core::features::parsing::ParsedFile;
use treeindex_core::{IndexConfig, Node, SymbolExtractor, SymbolKind};

fn extract(root: Node) -> Vec<(String, SymbolKind, String)> {
    SymbolExtractor::default()
        .extract(ParsedFile::new("t.rb", root, None))
        .symbols
        .into_iter()
        .map(|s| (s.name, s.kind, s.scope))
        .collect()
}

fn row(name: &str, kind: SymbolKind, scope: &str) -> (String, SymbolKind, String) {
    (name.to_string(), kind, scope.to_string())
}

#[test]
fn test_module_class_def_scope() {
    // module M; class C; def f; end; end; end
    let tree = module_node(
        "M",
        1,
        5,
        class_node("C", 2, 4, def_node("f", 3, 3, Node::nil())),
    );

    assert_eq!(
        extract(tree),
        vec![
            row("M", SymbolKind::Type, "global"),
            row("C", SymbolKind::Type, "M"),
            row("f", SymbolKind::Callable, "M::C"),
        ]
    );
}

#[test]
fn test_sibling_types_do_not_nest() {
    // class A; def a; end; end; class B; def self.b; end; end
    let tree = begin(
        1,
        6,
        vec![
            class_node("A", 1, 3, def_node("a", 2, 2, Node::nil())),
            class_node("B", 4, 6, defs_node("b", 5, 5, Node::nil())),
        ],
    );

    assert_eq!(
        extract(tree),
        vec![
            row("A", SymbolKind::Type, "global"),
            row("a", SymbolKind::Callable, "A"),
            row("B", SymbolKind::Type, "global"),
            row("b", SymbolKind::SingletonCallable, "B"),
        ]
    );
}

#[test]
fn test_nested_def_keeps_type_scope() {
    // callables never push a scope
    let tree = class_node(
        "A",
        1,
        5,
        def_node("outer", 2, 4, def_node("inner", 3, 3, Node::nil())),
    );

    let symbols = extract(tree);
    assert_eq!(symbols[2], row("inner", SymbolKind::Callable, "A"));
}

#[test]
fn test_untyped_wrapper_is_transparent() {
    // class A; <untyped>[def f; g; end] ; end  with a second untyped level
    let tree = class_node(
        "A",
        1,
        5,
        untyped(vec![untyped(vec![def_node("f", 2, 4, call("g", 3))])]),
    );

    let extraction = SymbolExtractor::default().extract(ParsedFile::new("t.rb", tree, None));

    let symbols: Vec<(String, SymbolKind, String)> = extraction
        .symbols
        .iter()
        .map(|s| (s.name.clone(), s.kind, s.scope.clone()))
        .collect();
    assert_eq!(
        symbols,
        vec![
            row("A", SymbolKind::Type, "global"),
            row("f", SymbolKind::Callable, "A"),
        ]
    );
    assert_eq!(extraction.symbol_names(), vec!["A", "f"]);
    let refs: Vec<&str> = extraction
        .references
        .iter()
        .map(|r| r.symbol_name.as_str())
        .collect();
    assert_eq!(refs, vec!["A", "g"]);
}

#[test]
fn test_references_follow_pre_order() {
    let tree = class_node(
        "A",
        1,
        4,
        def_node(
            "run",
            2,
            3,
            begin(2, 3, vec![call("first", 2), call("second", 3)]),
        ),
    );

    let extraction = SymbolExtractor::default().extract(ParsedFile::new("t.rb", tree, None));
    let refs: Vec<(&str, u32)> = extraction
        .references
        .iter()
        .map(|r| (r.symbol_name.as_str(), r.span.start_line))
        .collect();

    assert_eq!(refs, vec![("A", 1), ("first", 2), ("second", 3)]);
}

#[test]
fn test_custom_separator_and_rules() {
    let mut config = IndexConfig::default();
    config.scope_separator = ".".to_string();
    config.global_scope = "<main>".to_string();
    config.language = LanguageRules {
        name: "toy".to_string(),
        type_definitions: vec![NodeRule::new("struct", 0)],
        callables: vec![NodeRule::new("fn", 0)],
        singleton_callables: vec![],
        constant_references: vec![],
        calls: vec![NodeRule::new("call", 0)],
    };

    let tree = Node::branch(
        "struct",
        vec![
            Node::string("Outer"),
            Node::branch(
                "struct",
                vec![
                    Node::string("Inner"),
                    Node::branch("fn", vec![Node::string("go")]).at(3, 3),
                ],
            )
            .at(2, 4),
        ],
    )
    .at(1, 5);

    let symbols: Vec<(String, String)> = SymbolExtractor::from_config(&config)
        .extract(ParsedFile::new("t.toy", tree, None))
        .symbols
        .into_iter()
        .map(|s| (s.name, s.scope))
        .collect();

    assert_eq!(
        symbols,
        vec![
            ("Outer".to_string(), "<main>".to_string()),
            ("Inner".to_string(), "Outer".to_string()),
            ("go".to_string(), "Outer.Inner".to_string()),
        ]
    );
}

#[test]
fn test_fixture_scopes() {
    let engine = fixture_engine();

    let scopes: Vec<(String, String)> = engine
        .get_symbols(CAT_RB)
        .unwrap()
        .into_iter()
        .map(|s| (s.name, s.scope))
        .collect();

    assert_eq!(
        scopes,
        vec![
            ("Cat".to_string(), "global".to_string()),
            ("scratch".to_string(), "Cat".to_string()),
        ]
    );
}
