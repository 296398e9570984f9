//! Extracted records
//!
//! What the extractor produces for one file, before the store assigns ids.

use serde::{Deserialize, Serialize};

use crate::shared::models::{Node, Span, SymbolKind};

/// A named definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSymbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Enclosing type names joined by the scope separator, or the global label
    pub scope: String,
    pub span: Span,
    /// Source lines of the definition (callables only)
    pub source_text: Option<String>,
    /// Definition subtree (callables only)
    pub subtree: Option<Node>,
}

/// A by-name usage: constant reference or call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedReference {
    pub symbol_name: String,
    pub span: Span,
}

/// Everything extracted from one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileExtraction {
    pub file_path: String,
    pub root: Node,
    /// Pre-order
    pub symbols: Vec<ExtractedSymbol>,
    /// Pre-order
    pub references: Vec<ExtractedReference>,
}

impl FileExtraction {
    pub fn symbol_names(&self) -> Vec<&str> {
        self.symbols.iter().map(|s| s.name.as_str()).collect()
    }
}
