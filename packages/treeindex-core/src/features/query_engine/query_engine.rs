//! QueryEngine - read-only structural queries

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::IndexConfig;
use crate::features::ast_model::AddressableAst;
use crate::features::extraction::{LanguageRules, RuleIndex};
use crate::features::storage::{IndexStore, ReferenceRecord, StoreStats, SymbolRecord};
use crate::shared::models::{Node, NodeId, Result, TreeIndexError};

use super::models::{CallHierarchy, NodeMatch, OutboundCall};

/// Structural queries against one index store
///
/// Expected misses come back as `NotFound`, bad inputs as `InvalidArgument`.
/// Any other failure underneath is reported as `Internal`, tagged with the
/// operation and its inputs.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn IndexStore>,
    rules: RuleIndex,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn IndexStore>, rules: &LanguageRules) -> Self {
        Self {
            store,
            rules: RuleIndex::new(rules),
        }
    }

    pub fn from_config(store: Arc<dyn IndexStore>, config: &IndexConfig) -> Self {
        Self::new(store, &config.language)
    }

    pub fn store(&self) -> &Arc<dyn IndexStore> {
        &self.store
    }

    // ═══════════════════════════════════════════════════════════════════════
    // File-local queries
    // ═══════════════════════════════════════════════════════════════════════

    /// All symbols of a file, as extracted
    pub fn get_symbols(&self, file_path: &str) -> Result<Vec<SymbolRecord>> {
        let op = || format!("getSymbols(file_path={})", file_path);
        self.require_file(file_path, op)?;
        self.store.symbols_in_file(file_path).map_err(internal(op))
    }

    /// Stored root node of a file
    pub fn get_tree(&self, file_path: &str) -> Result<Node> {
        let op = || format!("getTree(file_path={})", file_path);
        self.load_tree(file_path, op)
    }

    /// Every node of `kind` in a file, in pre-order
    pub fn query_nodes(&self, file_path: &str, kind: &str) -> Result<Vec<NodeMatch>> {
        let op = || format!("queryNodes(file_path={}, kind={})", file_path, kind);
        if kind.is_empty() {
            return Err(TreeIndexError::invalid_argument("'kind' must not be empty")
                .with_operation(op()));
        }

        let root = self.load_tree(file_path, op)?;
        let ast = AddressableAst::new(&root);
        Ok(ast
            .find_by_type(kind)
            .map(|(id, node)| NodeMatch::new(id, node))
            .collect())
    }

    /// Node at `id` in a file; malformed or out-of-range ids are NotFound
    pub fn get_node_details(&self, file_path: &str, id: &str) -> Result<Node> {
        let op = || format!("getNodeDetails(file_path={}, id={})", file_path, id);
        let root = self.load_tree(file_path, op)?;
        let (_, node) = AddressableAst::new(&root)
            .lookup_str(id)
            .map_err(|e| e.with_file(file_path))?;
        Ok(node.clone())
    }

    /// Strict ancestors of the node at `id`, root first
    pub fn get_ancestors(&self, file_path: &str, id: &str) -> Result<Vec<NodeMatch>> {
        let op = || format!("getAncestors(file_path={}, id={})", file_path, id);
        let root = self.load_tree(file_path, op)?;
        let ast = AddressableAst::new(&root);
        let (id, _) = ast.lookup_str(id).map_err(|e| e.with_file(file_path))?;

        Ok(ast
            .ancestors_of(&id)?
            .into_iter()
            .map(|(id, node)| NodeMatch::new(id, node))
            .collect())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Name-based queries
    // ═══════════════════════════════════════════════════════════════════════

    /// Every symbol named `name`, in any file
    pub fn find_definition(&self, name: &str) -> Result<Vec<SymbolRecord>> {
        let op = || format!("findDefinition(name={})", name);
        require_name(name, op)?;
        self.store.symbols_named(name).map_err(internal(op))
    }

    /// Every reference to `name`, in any file
    pub fn find_references(&self, name: &str) -> Result<Vec<ReferenceRecord>> {
        let op = || format!("findReferences(name={})", name);
        require_name(name, op)?;
        self.store.references_named(name).map_err(internal(op))
    }

    /// Callers and callees of the smallest callable containing `line`
    ///
    /// Inbound calls are every reference sharing the callable's name.
    /// Outbound calls are the call nodes in the callable's stored subtree,
    /// one entry per callee name in first-seen order.
    pub fn get_call_hierarchy(&self, file_path: &str, line: u32) -> Result<CallHierarchy> {
        let op = || format!("getCallHierarchy(file_path={}, line={})", file_path, line);
        if line == 0 {
            return Err(
                TreeIndexError::invalid_argument("'line' is 1-based").with_operation(op())
            );
        }
        self.require_file(file_path, op)?;

        // min_by_key keeps the first of equal spans, i.e. insertion order
        let symbol = self
            .store
            .symbols_in_file(file_path)
            .map_err(internal(op))?
            .into_iter()
            .filter(|s| s.kind.is_callable() && s.span().contains_line(line))
            .min_by_key(|s| s.span().line_count())
            .ok_or_else(|| {
                TreeIndexError::not_found("No callable encloses this line")
                    .with_file(file_path)
                    .with_line(line)
            })?;

        let inbound = self
            .store
            .references_named(&symbol.name)
            .map_err(internal(op))?;
        let outbound = symbol
            .subtree
            .as_ref()
            .map(|subtree| self.outbound_calls(subtree))
            .transpose()?
            .unwrap_or_default();

        Ok(CallHierarchy {
            symbol,
            inbound,
            outbound,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Index overview
    // ═══════════════════════════════════════════════════════════════════════

    pub fn list_files(&self) -> Result<Vec<String>> {
        self.store.file_paths().map_err(internal(|| "listFiles()".to_string()))
    }

    pub fn stats(&self) -> Result<StoreStats> {
        self.store.stats().map_err(internal(|| "getStats()".to_string()))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Helpers
    // ═══════════════════════════════════════════════════════════════════════

    fn require_file(&self, file_path: &str, op: impl Fn() -> String) -> Result<()> {
        if self.store.has_file(file_path).map_err(internal(&op))? {
            Ok(())
        } else {
            Err(file_not_indexed(file_path))
        }
    }

    fn load_tree(&self, file_path: &str, op: impl Fn() -> String) -> Result<Node> {
        self.store
            .file(file_path)
            .map_err(internal(op))?
            .map(|file| file.root)
            .ok_or_else(|| file_not_indexed(file_path))
    }

    fn outbound_calls(&self, subtree: &Node) -> Result<Vec<OutboundCall>> {
        let ast = AddressableAst::new(subtree);
        let mut seen = HashSet::new();
        let mut calls = Vec::new();

        for (_, node) in ast.outbound_calls(&NodeId::root(), self.rules.call_kinds())? {
            let name = self
                .rules
                .role_of(node)
                .and_then(|(_, name_child)| self.rules.name_of(node, name_child));
            if let Some(name) = name {
                if seen.insert(name.clone()) {
                    calls.push(OutboundCall {
                        name,
                        location: node.location(),
                    });
                }
            }
        }

        Ok(calls)
    }
}

fn file_not_indexed(file_path: &str) -> TreeIndexError {
    TreeIndexError::not_found("File is not indexed").with_file(file_path)
}

fn require_name(name: &str, op: impl Fn() -> String) -> Result<()> {
    if name.is_empty() {
        Err(TreeIndexError::invalid_argument("'name' must not be empty").with_operation(op()))
    } else {
        Ok(())
    }
}

/// Re-tag an unexpected store failure as Internal for `op`
fn internal(op: impl Fn() -> String) -> impl FnOnce(TreeIndexError) -> TreeIndexError {
    move |err| {
        if err.is_expected() {
            return err;
        }
        tracing::error!(operation = %op(), error = %err, "query failed");
        TreeIndexError::internal(format!("Index read failed: {}", err.message))
            .with_operation(op())
            .with_source(err)
    }
}
