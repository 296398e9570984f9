//! Parsed file representation

use crate::shared::models::{Node, Result, Span, TreeIndexError};
use crate::shared::utils::tree_json;

/// Tree produced by the external parser for one file
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Repository-relative path, `/`-separated
    pub file_path: String,

    /// Root node; always a branch
    pub root: Node,

    /// Source text, when readable
    pub source: Option<String>,
}

impl ParsedFile {
    pub fn new(file_path: impl Into<String>, root: Node, source: Option<String>) -> Self {
        Self {
            file_path: file_path.into(),
            root,
            source,
        }
    }

    /// Source lines covered by `span`, joined with `\n`
    ///
    /// Returns `None` without source text or when the span starts past the
    /// end of the file. A span running past the end is truncated.
    pub fn text_for_span(&self, span: &Span) -> Option<String> {
        let source = self.source.as_deref()?;
        if span.start_line == 0 || span.end_line < span.start_line {
            return None;
        }

        let lines: Vec<&str> = source
            .lines()
            .skip(span.start_line as usize - 1)
            .take(span.line_count() as usize)
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

/// Decode a parser dump into a tree root
///
/// A dump whose top level is a scalar rather than a node object is rejected.
/// Nesting depth is unbounded.
pub fn parse_tree_json(bytes: &[u8], file_path: &str) -> Result<Node> {
    let root: Node = tree_json::from_slice(bytes).map_err(|e| {
        TreeIndexError::parse(format!("Invalid tree JSON: {}", e))
            .with_file(file_path)
            .with_source(e)
    })?;

    if root.is_literal() {
        return Err(TreeIndexError::parse("Tree root is not a node").with_file(file_path));
    }
    Ok(root)
}
