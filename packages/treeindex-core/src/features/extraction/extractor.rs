//! Symbol extractor
//!
//! Walks a tree in pre-order on an explicit work stack, keeping enclosing
//! type names in a [`ScopeStack`]:
//!
//! - type definition: emit `type` symbol in the current scope, push its
//!   name, visit children, pop
//! - callable / singleton callable: emit symbol with span, source text and
//!   subtree, visit children (no push)
//! - constant reference / call: emit reference, visit children
//! - anything else: visit children
//!
//! A node whose record cannot be built (no name, no location) contributes no
//! record; its children are still visited.

use crate::config::IndexConfig;
use crate::features::parsing::ParsedFile;
use crate::shared::models::{Node, SymbolKind};
use crate::shared::utils::scope_stack::{ScopeStack, DEFAULT_SEPARATOR, GLOBAL_SCOPE};

use super::models::{ExtractedReference, ExtractedSymbol, FileExtraction};
use super::rules::{LanguageRules, NodeRole, RuleIndex};

/// Stateless extractor; safe to share across build workers
#[derive(Debug, Clone)]
pub struct SymbolExtractor {
    rules: RuleIndex,
    scope_separator: String,
    global_scope: String,
    capture_source_text: bool,
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::new(&LanguageRules::default())
    }
}

enum Step<'a> {
    Enter(&'a Node),
    Leave,
}

/// Output buffers for one walk
#[derive(Default)]
struct Collected {
    symbols: Vec<ExtractedSymbol>,
    references: Vec<ExtractedReference>,
    skipped: usize,
}

impl SymbolExtractor {
    pub fn new(rules: &LanguageRules) -> Self {
        Self {
            rules: RuleIndex::new(rules),
            scope_separator: DEFAULT_SEPARATOR.to_string(),
            global_scope: GLOBAL_SCOPE.to_string(),
            capture_source_text: true,
        }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self {
            rules: RuleIndex::new(&config.language),
            scope_separator: config.scope_separator.clone(),
            global_scope: config.global_scope.clone(),
            capture_source_text: config.capture_source_text,
        }
    }

    pub fn rules(&self) -> &RuleIndex {
        &self.rules
    }

    /// Extract symbols and references from one parsed file
    pub fn extract(&self, parsed: ParsedFile) -> FileExtraction {
        let mut scopes = ScopeStack::with_labels(&self.scope_separator, &self.global_scope);
        let mut out = Collected::default();

        self.walk(&parsed, &mut scopes, &mut out);

        if out.skipped > 0 {
            tracing::debug!(
                file = %parsed.file_path,
                skipped = out.skipped,
                "nodes skipped during extraction"
            );
        }

        FileExtraction {
            file_path: parsed.file_path,
            root: parsed.root,
            symbols: out.symbols,
            references: out.references,
        }
    }

    /// Pre-order walk on an explicit stack; a `Leave` step pops the scope a
    /// type definition pushed once all of its children are done
    fn walk(&self, file: &ParsedFile, scopes: &mut ScopeStack, out: &mut Collected) {
        let mut stack = vec![Step::Enter(&file.root)];

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Enter(node) => node,
                Step::Leave => {
                    scopes.pop();
                    continue;
                }
            };

            match self.rules.role_of(node) {
                Some((NodeRole::TypeDefinition, name_child)) => {
                    match self.rules.name_of(node, name_child) {
                        Some(name) => {
                            self.emit_symbol(node, file, &name, SymbolKind::Type, scopes, out);
                            scopes.push(name);
                            stack.push(Step::Leave);
                        }
                        None => self.skip(node, file, "type definition without a static name", out),
                    }
                }
                Some((role @ (NodeRole::Callable | NodeRole::SingletonCallable), name_child)) => {
                    match (self.rules.name_of(node, name_child), role.symbol_kind()) {
                        (Some(name), Some(kind)) => {
                            self.emit_symbol(node, file, &name, kind, scopes, out)
                        }
                        _ => self.skip(node, file, "callable without a name", out),
                    }
                }
                Some((NodeRole::ConstantReference | NodeRole::Call, name_child)) => {
                    match (self.rules.name_of(node, name_child), node.location()) {
                        (Some(symbol_name), Some(span)) => {
                            out.references.push(ExtractedReference { symbol_name, span })
                        }
                        _ => self.skip(node, file, "reference without name or location", out),
                    }
                }
                None => {}
            }

            stack.extend(node.children().iter().rev().map(Step::Enter));
        }
    }

    fn emit_symbol(
        &self,
        node: &Node,
        file: &ParsedFile,
        name: &str,
        kind: SymbolKind,
        scopes: &ScopeStack,
        out: &mut Collected,
    ) {
        let Some(span) = node.location() else {
            self.skip(node, file, "definition without location", out);
            return;
        };

        let (source_text, subtree) = if kind.is_callable() {
            let text = if self.capture_source_text {
                file.text_for_span(&span)
            } else {
                None
            };
            (text, Some(node.clone()))
        } else {
            (None, None)
        };

        out.symbols.push(ExtractedSymbol {
            name: name.to_string(),
            kind,
            scope: scopes.label(),
            span,
            source_text,
            subtree,
        });
    }

    fn skip(&self, node: &Node, file: &ParsedFile, reason: &str, out: &mut Collected) {
        out.skipped += 1;
        tracing::debug!(
            file = %file.file_path,
            kind = node.kind().unwrap_or("?"),
            line = node.location().map(|s| s.start_line),
            reason,
            "record skipped"
        );
    }
}
