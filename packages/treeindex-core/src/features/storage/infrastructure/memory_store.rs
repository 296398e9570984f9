//! In-memory index store
//!
//! Three `Vec` tables behind one `RwLock`; lookups are linear scans in row
//! order. Suitable for tests and small embedded indexes.

use std::sync::{Arc, RwLock};

use super::check_unique_paths;
use crate::features::extraction::FileExtraction;
use crate::features::storage::domain::models::{
    FileIndex, ReferenceRecord, StoreStats, SymbolRecord,
};
use crate::features::storage::domain::ports::IndexStore;
use crate::shared::models::Result;

#[derive(Debug, Default)]
struct Tables {
    files: Vec<FileIndex>,
    symbols: Vec<SymbolRecord>,
    references: Vec<ReferenceRecord>,
}

impl Tables {
    fn stats(&self) -> StoreStats {
        StoreStats {
            files: self.files.len(),
            symbols: self.symbols.len(),
            references: self.references.len(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryIndexStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_tables(files: &[FileExtraction]) -> Tables {
        let mut tables = Tables::default();

        for (index, file) in files.iter().enumerate() {
            let file_id = index as i64 + 1;
            tables.files.push(FileIndex {
                id: file_id,
                file_path: file.file_path.clone(),
                root: file.root.clone(),
            });

            for symbol in &file.symbols {
                let id = tables.symbols.len() as i64 + 1;
                tables.symbols.push(SymbolRecord {
                    id,
                    file_id,
                    file_path: file.file_path.clone(),
                    name: symbol.name.clone(),
                    kind: symbol.kind,
                    scope: symbol.scope.clone(),
                    start_line: symbol.span.start_line,
                    end_line: symbol.span.end_line,
                    source_text: symbol.source_text.clone(),
                    subtree: symbol.subtree.clone(),
                });
            }

            for reference in &file.references {
                let id = tables.references.len() as i64 + 1;
                tables.references.push(ReferenceRecord {
                    id,
                    file_id,
                    file_path: file.file_path.clone(),
                    symbol_name: reference.symbol_name.clone(),
                    start_line: reference.span.start_line,
                    end_line: reference.span.end_line,
                });
            }
        }

        tables
    }
}

impl IndexStore for InMemoryIndexStore {
    fn rebuild(&self, files: &[FileExtraction]) -> Result<StoreStats> {
        check_unique_paths(files)?;
        let fresh = Self::build_tables(files);
        let stats = fresh.stats();
        *self.tables.write()? = fresh;
        Ok(stats)
    }

    fn file(&self, file_path: &str) -> Result<Option<FileIndex>> {
        let tables = self.tables.read()?;
        Ok(tables
            .files
            .iter()
            .find(|f| f.file_path == file_path)
            .cloned())
    }

    fn has_file(&self, file_path: &str) -> Result<bool> {
        let tables = self.tables.read()?;
        Ok(tables.files.iter().any(|f| f.file_path == file_path))
    }

    fn file_paths(&self) -> Result<Vec<String>> {
        let tables = self.tables.read()?;
        Ok(tables.files.iter().map(|f| f.file_path.clone()).collect())
    }

    fn symbols_in_file(&self, file_path: &str) -> Result<Vec<SymbolRecord>> {
        let tables = self.tables.read()?;
        Ok(tables
            .symbols
            .iter()
            .filter(|s| s.file_path == file_path)
            .cloned()
            .collect())
    }

    fn symbols_named(&self, name: &str) -> Result<Vec<SymbolRecord>> {
        let tables = self.tables.read()?;
        Ok(tables
            .symbols
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect())
    }

    fn references_named(&self, symbol_name: &str) -> Result<Vec<ReferenceRecord>> {
        let tables = self.tables.read()?;
        Ok(tables
            .references
            .iter()
            .filter(|r| r.symbol_name == symbol_name)
            .cloned()
            .collect())
    }

    fn stats(&self) -> Result<StoreStats> {
        Ok(self.tables.read()?.stats())
    }
}
