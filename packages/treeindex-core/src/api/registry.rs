//! MethodRegistry

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use super::params::{ensure_object, required_line, required_str};
use crate::features::query_engine::QueryEngine;
use crate::shared::models::{Result, TreeIndexError};

/// Handler signature: engine + params object → JSON result
pub type MethodHandler = fn(&QueryEngine, &Value) -> Result<Value>;

/// One registered method
#[derive(Clone, Copy)]
pub struct MethodSpec {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub summary: &'static str,
    pub handler: MethodHandler,
}

impl std::fmt::Debug for MethodSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Built-in methods
// ═══════════════════════════════════════════════════════════════════════════

const BUILTIN_METHODS: &[MethodSpec] = &[
    MethodSpec {
        name: "getSymbols",
        params: &["file_path"],
        summary: "All symbols extracted from a file",
        handler: get_symbols,
    },
    MethodSpec {
        name: "getTree",
        params: &["file_path"],
        summary: "Stored root node of a file",
        handler: get_tree,
    },
    MethodSpec {
        name: "queryNodes",
        params: &["file_path", "kind"],
        summary: "Nodes of one kind in a file, with ids",
        handler: query_nodes,
    },
    MethodSpec {
        name: "getNodeDetails",
        params: &["file_path", "id"],
        summary: "Node at an id",
        handler: get_node_details,
    },
    MethodSpec {
        name: "getAncestors",
        params: &["file_path", "id"],
        summary: "Ancestors of the node at an id, root first",
        handler: get_ancestors,
    },
    MethodSpec {
        name: "findDefinition",
        params: &["name"],
        summary: "Symbols with a name, in any file",
        handler: find_definition,
    },
    MethodSpec {
        name: "findReferences",
        params: &["name"],
        summary: "References to a name, in any file",
        handler: find_references,
    },
    MethodSpec {
        name: "getCallHierarchy",
        params: &["file_path", "line"],
        summary: "Callers and callees of the callable enclosing a line",
        handler: get_call_hierarchy,
    },
    MethodSpec {
        name: "listFiles",
        params: &[],
        summary: "Indexed file paths",
        handler: list_files,
    },
    MethodSpec {
        name: "getStats",
        params: &[],
        summary: "File, symbol and reference counts",
        handler: get_stats,
    },
];

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| {
        TreeIndexError::internal(format!("Result serialization failed: {}", e)).with_source(e)
    })
}

fn get_symbols(engine: &QueryEngine, params: &Value) -> Result<Value> {
    to_json(engine.get_symbols(required_str(params, "file_path")?)?)
}

fn get_tree(engine: &QueryEngine, params: &Value) -> Result<Value> {
    to_json(engine.get_tree(required_str(params, "file_path")?)?)
}

fn query_nodes(engine: &QueryEngine, params: &Value) -> Result<Value> {
    let file_path = required_str(params, "file_path")?;
    let kind = required_str(params, "kind")?;
    to_json(engine.query_nodes(file_path, kind)?)
}

fn get_node_details(engine: &QueryEngine, params: &Value) -> Result<Value> {
    let file_path = required_str(params, "file_path")?;
    let id = required_str(params, "id")?;
    to_json(engine.get_node_details(file_path, id)?)
}

fn get_ancestors(engine: &QueryEngine, params: &Value) -> Result<Value> {
    let file_path = required_str(params, "file_path")?;
    let id = required_str(params, "id")?;
    to_json(engine.get_ancestors(file_path, id)?)
}

fn find_definition(engine: &QueryEngine, params: &Value) -> Result<Value> {
    to_json(engine.find_definition(required_str(params, "name")?)?)
}

fn find_references(engine: &QueryEngine, params: &Value) -> Result<Value> {
    to_json(engine.find_references(required_str(params, "name")?)?)
}

fn get_call_hierarchy(engine: &QueryEngine, params: &Value) -> Result<Value> {
    let file_path = required_str(params, "file_path")?;
    let line = required_line(params, "line")?;
    to_json(engine.get_call_hierarchy(file_path, line)?)
}

fn list_files(engine: &QueryEngine, _params: &Value) -> Result<Value> {
    to_json(engine.list_files()?)
}

fn get_stats(engine: &QueryEngine, _params: &Value) -> Result<Value> {
    to_json(engine.stats()?)
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════════

/// Name → handler table; unknown names are rejected, never guessed
#[derive(Debug, Clone)]
pub struct MethodRegistry {
    methods: BTreeMap<&'static str, MethodSpec>,
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodRegistry {
    /// Registry with the built-in query methods
    pub fn new() -> Self {
        let methods = BUILTIN_METHODS.iter().map(|spec| (spec.name, *spec)).collect();
        Self { methods }
    }

    /// Empty registry
    pub fn empty() -> Self {
        Self {
            methods: BTreeMap::new(),
        }
    }

    /// Add a method; a name can only be registered once
    pub fn register(&mut self, spec: MethodSpec) -> Result<()> {
        if self.methods.contains_key(spec.name) {
            return Err(TreeIndexError::invalid_argument(format!(
                "Method '{}' is already registered",
                spec.name
            )));
        }
        self.methods.insert(spec.name, spec);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.methods.keys().copied().collect()
    }

    /// Name, params and summary of every method
    pub fn describe(&self) -> Value {
        Value::Array(
            self.methods
                .values()
                .map(|spec| {
                    json!({
                        "name": spec.name,
                        "params": spec.params,
                        "summary": spec.summary,
                    })
                })
                .collect(),
        )
    }

    /// Run `method` with `params` against `engine`
    pub fn dispatch(&self, engine: &QueryEngine, method: &str, params: &Value) -> Result<Value> {
        let spec = self.methods.get(method).ok_or_else(|| {
            TreeIndexError::invalid_argument(format!("Unknown method '{}'", method))
        })?;
        ensure_object(params)?;

        tracing::debug!(method, "dispatching query");
        (spec.handler)(engine, params)
    }
}

/// JSON error body for a failed call
pub fn error_response(err: &TreeIndexError) -> Value {
    let mut error = json!({
        "code": err.kind.as_str(),
        "message": err.message,
    });
    if let Some(file_path) = &err.file_path {
        error["file_path"] = json!(file_path);
    }
    if let Some(line) = err.line {
        error["line"] = json!(line);
    }
    if let Some(operation) = &err.operation {
        error["operation"] = json!(operation);
    }
    json!({ "error": error })
}
