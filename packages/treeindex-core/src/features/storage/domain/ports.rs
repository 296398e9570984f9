//! Index store port

use super::models::{FileIndex, ReferenceRecord, StoreStats, SymbolRecord};
use crate::features::extraction::FileExtraction;
use crate::shared::models::Result;

/// Storage backend for the index
///
/// Row ids are assigned from 1 in extraction order, so every listing below
/// comes back in insertion order. Readers may run concurrently; `rebuild`
/// is the only writer.
pub trait IndexStore: Send + Sync {
    /// Replace the whole index with `files`
    ///
    /// Drops and recreates all tables, then inserts every file, symbol and
    /// reference in one transaction. Fails without partial effects when two
    /// extractions share a file path.
    fn rebuild(&self, files: &[FileExtraction]) -> Result<StoreStats>;

    /// File row with its tree, `None` if never indexed
    fn file(&self, file_path: &str) -> Result<Option<FileIndex>>;

    fn has_file(&self, file_path: &str) -> Result<bool>;

    /// Indexed file paths in row order
    fn file_paths(&self) -> Result<Vec<String>>;

    /// Symbols of one file in row order (empty for unknown files)
    fn symbols_in_file(&self, file_path: &str) -> Result<Vec<SymbolRecord>>;

    /// Symbols in any file with exactly this name
    fn symbols_named(&self, name: &str) -> Result<Vec<SymbolRecord>>;

    /// References in any file with exactly this symbol name
    fn references_named(&self, symbol_name: &str) -> Result<Vec<ReferenceRecord>>;

    fn stats(&self) -> Result<StoreStats>;
}
