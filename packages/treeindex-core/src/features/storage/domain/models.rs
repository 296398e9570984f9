//! Stored records

use serde::{Deserialize, Serialize};

use crate::shared::models::{Node, Span, SymbolKind};

/// One indexed file and its tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileIndex {
    pub id: i64,
    pub file_path: String,
    pub root: Node,
}

/// Stored symbol definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub id: i64,
    pub file_id: i64,
    /// Joined from `files`
    pub file_path: String,
    pub name: String,
    pub kind: SymbolKind,
    pub scope: String,
    pub start_line: u32,
    pub end_line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtree: Option<Node>,
}

impl SymbolRecord {
    pub fn span(&self) -> Span {
        Span::new(self.start_line, self.end_line)
    }
}

/// Stored by-name usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub id: i64,
    pub file_id: i64,
    /// Joined from `files`
    pub file_path: String,
    pub symbol_name: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl ReferenceRecord {
    pub fn span(&self) -> Span {
        Span::new(self.start_line, self.end_line)
    }
}

/// Row counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub files: usize,
    pub symbols: usize,
    pub references: usize,
}
