//! Source location types
//!
//! Line-granular spans, 1-indexed and inclusive on both ends. This is the
//! `location` object a parser attaches to a node and the span every symbol
//! and reference record carries.

use serde::{Deserialize, Serialize};

/// Inclusive `[start_line, end_line]` range in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub end_line: u32,
}

impl Span {
    pub fn new(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Single-line span
    pub fn line(line: u32) -> Self {
        Self::new(line, line)
    }

    pub fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }

    pub fn line_count(&self) -> u32 {
        if self.end_line >= self.start_line {
            self.end_line - self.start_line + 1
        } else {
            0
        }
    }
}
