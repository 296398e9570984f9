//! Tree builders
//!
//! Shorthand for parser-shaped Ruby nodes, so tests can describe a tree on a
//! few lines.

use treeindex_core::Node;

/// `(const nil :Name)` at `line`
pub fn const_ref(name: &str, line: u32) -> Node {
    Node::branch("const", vec![Node::nil(), Node::string(name)]).at(line, line)
}

/// `class Name ... end`
pub fn class_node(name: &str, start: u32, end: u32, body: Node) -> Node {
    Node::branch("class", vec![const_ref(name, start), Node::nil(), body]).at(start, end)
}

/// `module Name ... end`
pub fn module_node(name: &str, start: u32, end: u32, body: Node) -> Node {
    Node::branch("module", vec![const_ref(name, start), body]).at(start, end)
}

/// `def name ... end`
pub fn def_node(name: &str, start: u32, end: u32, body: Node) -> Node {
    Node::branch(
        "def",
        vec![Node::string(name), Node::branch("args", vec![]), body],
    )
    .at(start, end)
}

/// `def self.name ... end`
pub fn defs_node(name: &str, start: u32, end: u32, body: Node) -> Node {
    Node::branch(
        "defs",
        vec![
            Node::branch("self", vec![]).at(start, start),
            Node::string(name),
            Node::branch("args", vec![]),
            body,
        ],
    )
    .at(start, end)
}

/// Receiver-less call `name` at `line`
pub fn call(name: &str, line: u32) -> Node {
    Node::branch("send", vec![Node::nil(), Node::string(name)]).at(line, line)
}

/// Statement sequence
pub fn begin(start: u32, end: u32, statements: Vec<Node>) -> Node {
    Node::branch("begin", statements).at(start, end)
}

/// Kind-less wrapper around `children`
pub fn untyped(children: Vec<Node>) -> Node {
    Node::untyped(children)
}
