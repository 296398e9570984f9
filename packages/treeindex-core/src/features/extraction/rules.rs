//! Node-kind rules
//!
//! The default profile matches the Ruby `parser` gem's AST:
//!
//! | kind     | role                | name position                  |
//! |----------|---------------------|--------------------------------|
//! | `class`  | type definition     | child 0 (a `const` node)       |
//! | `module` | type definition     | child 0 (a `const` node)       |
//! | `def`    | callable            | child 0 (literal)              |
//! | `defs`   | singleton callable  | child 1 (literal)              |
//! | `const`  | constant reference  | child 1 (literal)              |
//! | `send`   | call                | child 1 (literal)              |
//! | `csend`  | call                | child 1 (literal)              |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::shared::models::{Node, SymbolKind};

/// One node kind and the child index holding its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRule {
    pub kind: String,
    #[serde(default)]
    pub name_child: usize,
}

impl NodeRule {
    pub fn new(kind: impl Into<String>, name_child: usize) -> Self {
        Self {
            kind: kind.into(),
            name_child,
        }
    }
}

/// Node-kind roles for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageRules {
    pub name: String,
    pub type_definitions: Vec<NodeRule>,
    pub callables: Vec<NodeRule>,
    #[serde(default)]
    pub singleton_callables: Vec<NodeRule>,
    #[serde(default)]
    pub constant_references: Vec<NodeRule>,
    #[serde(default)]
    pub calls: Vec<NodeRule>,
}

impl Default for LanguageRules {
    fn default() -> Self {
        Self::ruby()
    }
}

impl LanguageRules {
    pub fn ruby() -> Self {
        Self {
            name: "ruby".to_string(),
            type_definitions: vec![NodeRule::new("class", 0), NodeRule::new("module", 0)],
            callables: vec![NodeRule::new("def", 0)],
            singleton_callables: vec![NodeRule::new("defs", 1)],
            constant_references: vec![NodeRule::new("const", 1)],
            calls: vec![NodeRule::new("send", 1), NodeRule::new("csend", 1)],
        }
    }

    /// All rules with their role, in declaration order
    pub fn roles(&self) -> impl Iterator<Item = (NodeRole, &NodeRule)> {
        let groups = [
            (NodeRole::TypeDefinition, &self.type_definitions),
            (NodeRole::Callable, &self.callables),
            (NodeRole::SingletonCallable, &self.singleton_callables),
            (NodeRole::ConstantReference, &self.constant_references),
            (NodeRole::Call, &self.calls),
        ];
        groups
            .into_iter()
            .flat_map(|(role, rules)| rules.iter().map(move |rule| (role, rule)))
    }

    /// Kinds claimed by more than one rule
    pub fn duplicate_kinds(&self) -> Vec<String> {
        let mut seen = HashMap::new();
        let mut duplicates = Vec::new();
        for (_, rule) in self.roles() {
            let count = seen.entry(rule.kind.as_str()).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                duplicates.push(rule.kind.clone());
            }
        }
        duplicates
    }
}

/// What a node kind means to the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    TypeDefinition,
    Callable,
    SingletonCallable,
    ConstantReference,
    Call,
}

impl NodeRole {
    /// Symbol kind emitted for a definition role
    pub fn symbol_kind(&self) -> Option<SymbolKind> {
        match self {
            NodeRole::TypeDefinition => Some(SymbolKind::Type),
            NodeRole::Callable => Some(SymbolKind::Callable),
            NodeRole::SingletonCallable => Some(SymbolKind::SingletonCallable),
            NodeRole::ConstantReference | NodeRole::Call => None,
        }
    }
}

/// Kind → (role, name position) lookup built from [`LanguageRules`]
///
/// When two rules claim the same kind the first one wins.
#[derive(Debug, Clone)]
pub struct RuleIndex {
    by_kind: HashMap<String, (NodeRole, usize)>,
    call_kinds: Vec<String>,
}

impl RuleIndex {
    pub fn new(rules: &LanguageRules) -> Self {
        let mut by_kind = HashMap::new();
        for (role, rule) in rules.roles() {
            by_kind
                .entry(rule.kind.clone())
                .or_insert((role, rule.name_child));
        }
        let call_kinds = rules.calls.iter().map(|r| r.kind.clone()).collect();
        Self {
            by_kind,
            call_kinds,
        }
    }

    pub fn role_of(&self, node: &Node) -> Option<(NodeRole, usize)> {
        node.kind().and_then(|kind| self.by_kind.get(kind).copied())
    }

    /// Kinds that count as call expressions
    pub fn call_kinds(&self) -> &[String] {
        &self.call_kinds
    }

    /// Name of a rule-matched node
    ///
    /// The name child is either a string literal or a constant reference whose
    /// own name child is followed in turn (`class Dog` stores its name as
    /// `(const nil :Dog)`).
    pub fn name_of(&self, node: &Node, name_child: usize) -> Option<String> {
        let mut current = node.child(name_child)?;
        loop {
            if let Some(name) = current.as_str() {
                return Some(name.to_string());
            }
            match self.role_of(current) {
                Some((NodeRole::ConstantReference, next)) => current = current.child(next)?,
                _ => return None,
            }
        }
    }
}

impl Default for RuleIndex {
    fn default() -> Self {
        Self::new(&LanguageRules::default())
    }
}
