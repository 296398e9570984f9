//! Build report

use serde::{Deserialize, Serialize};

/// A file left out of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFailure {
    pub file_path: String,
    pub message: String,
}

/// Outcome of one build pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub files_discovered: usize,
    pub files_indexed: usize,
    pub files_skipped: usize,
    pub symbols: usize,
    pub references: usize,
    pub failures: Vec<BuildFailure>,
    pub elapsed_ms: u64,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
