//! Parsed tree node
//!
//! The generic tree produced by the external parser adapter. A node is either
//! a branch (`{kind, children, location?}`) or a literal scalar child such as
//! a method name, a string value or `nil`. JSON shape:
//!
//! ```text
//! {"kind": "def", "location": {"start_line": 2, "end_line": 4},
//!  "children": ["bark", {"kind": "args", "children": []}, null]}
//! ```
//!
//! Children order is significant: it defines node addressing and traversal
//! order. Nodes are never mutated once produced.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::Span;

/// One syntax-tree element
///
/// Deserialization dispatches on the JSON value type directly, so each
/// nesting level is decoded once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Branch(Branch),
    Literal(Literal),
}

/// Interior node with a kind, ordered children and an optional span
///
/// `kind` is optional so that objects the parser emits without a type still
/// deserialize; they are never identified but are still descended into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

/// Scalar child value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Nil,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Node {
    /// Branch node without location
    pub fn branch(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Branch(Branch {
            kind: Some(kind.into()),
            children,
            location: None,
        })
    }

    /// Branch without a kind; descended into but never identified
    pub fn untyped(children: Vec<Node>) -> Self {
        Node::Branch(Branch {
            kind: None,
            children,
            location: None,
        })
    }

    /// String literal child (symbol names, string values)
    pub fn string(value: impl Into<String>) -> Self {
        Node::Literal(Literal::Str(value.into()))
    }

    pub fn nil() -> Self {
        Node::Literal(Literal::Nil)
    }

    /// Attach a span (no-op on literals)
    pub fn at(mut self, start_line: u32, end_line: u32) -> Self {
        if let Node::Branch(ref mut branch) = self {
            branch.location = Some(Span::new(start_line, end_line));
        }
        self
    }

    pub fn kind(&self) -> Option<&str> {
        match self {
            Node::Branch(branch) => branch.kind.as_deref(),
            Node::Literal(_) => None,
        }
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind() == Some(kind)
    }

    /// Ordered children; literals have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Branch(branch) => &branch.children,
            Node::Literal(_) => &[],
        }
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    pub fn location(&self) -> Option<Span> {
        match self {
            Node::Branch(branch) => branch.location,
            Node::Literal(_) => None,
        }
    }

    /// String value of a literal child
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Literal(Literal::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Number of nodes in this subtree, literals included
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a node object or a scalar child")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::nil())
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::nil())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Node, E> {
        Ok(Node::Literal(Literal::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Node, E> {
        Ok(Node::Literal(Literal::Int(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Node, E> {
        Ok(Node::Literal(match i64::try_from(value) {
            Ok(value) => Literal::Int(value),
            Err(_) => Literal::UInt(value),
        }))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Node, E> {
        Ok(Node::Literal(Literal::Float(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Node, E> {
        Ok(Node::string(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Node, E> {
        Ok(Node::string(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Node, A::Error> {
        Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Node, A::Error> {
        Branch::deserialize(de::value::MapAccessDeserializer::new(map)).map(Node::Branch)
    }
}
