//! Scope stack for symbol scope labels
//!
//! Tracks the names of enclosing type definitions while the extractor walks a
//! tree. The label of the empty stack is the global sentinel.

pub const DEFAULT_SEPARATOR: &str = "::";
pub const GLOBAL_SCOPE: &str = "global";

/// Stack of enclosing type-definition names
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes: Vec<String>,
    separator: String,
    global: String,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Empty stack with `::` separator and `global` sentinel
    pub fn new() -> Self {
        Self::with_labels(DEFAULT_SEPARATOR, GLOBAL_SCOPE)
    }

    pub fn with_labels(separator: impl Into<String>, global: impl Into<String>) -> Self {
        Self {
            scopes: Vec::new(),
            separator: separator.into(),
            global: global.into(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.scopes.push(name.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.scopes.pop()
    }

    /// Scope label: enclosing names joined outermost first, or the sentinel
    pub fn label(&self) -> String {
        if self.scopes.is_empty() {
            self.global.clone()
        } else {
            self.scopes.join(&self.separator)
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Innermost scope name
    pub fn current(&self) -> Option<&str> {
        self.scopes.last().map(|s| s.as_str())
    }
}
