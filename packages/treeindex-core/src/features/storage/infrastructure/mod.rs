//! Storage backends

pub mod memory_store;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite_store;

pub use memory_store::InMemoryIndexStore;
#[cfg(feature = "sqlite")]
pub use sqlite_store::SqliteIndexStore;

use std::collections::HashSet;

use crate::features::extraction::FileExtraction;
use crate::shared::models::{Result, TreeIndexError};

/// Reject a build that names the same file twice
pub(crate) fn check_unique_paths(files: &[FileExtraction]) -> Result<()> {
    let mut seen = HashSet::with_capacity(files.len());
    for file in files {
        if !seen.insert(file.file_path.as_str()) {
            return Err(TreeIndexError::storage("Duplicate file path in build")
                .with_file(file.file_path.clone()));
        }
    }
    Ok(())
}
