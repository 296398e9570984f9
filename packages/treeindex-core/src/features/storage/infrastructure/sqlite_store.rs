//! SQLite index store
//!
//! File-based persistent storage. `in_memory()` gives a private database for
//! tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::check_unique_paths;
use super::schema::{
    DROP_TABLES, SCHEMA, SQL_INSERT_FILE, SQL_INSERT_REFERENCE, SQL_INSERT_SYMBOL,
    SQL_SELECT_REFERENCES, SQL_SELECT_SYMBOLS,
};
use crate::features::extraction::FileExtraction;
use crate::features::storage::domain::models::{
    FileIndex, ReferenceRecord, StoreStats, SymbolRecord,
};
use crate::features::storage::domain::ports::IndexStore;
use crate::shared::models::{Node, Result, SymbolKind};
use crate::shared::utils::tree_json;

/// SQLite-based IndexStore implementation
#[derive(Clone)]
pub struct SqliteIndexStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteIndexStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteIndexStore").finish_non_exhaustive()
    }
}

impl SqliteIndexStore {
    /// Open or create the database at the given path
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(db_path)?)
    }

    /// Create an in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn query_symbols(&self, column: &str, value: &str) -> Result<Vec<SymbolRecord>> {
        let conn = self.conn.lock()?;
        let sql = format!("{} WHERE {} = ?1 ORDER BY s.id", SQL_SELECT_SYMBOLS, column);
        let mut stmt = conn.prepare_cached(&sql)?;
        let records = stmt
            .query_map(params![value], symbol_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn count(conn: &Connection, table: &str) -> Result<usize> {
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }
}

fn json_column<T: serde::de::DeserializeOwned>(
    row: &Row<'_>,
    index: usize,
) -> rusqlite::Result<Option<T>> {
    let text: Option<String> = row.get(index)?;
    text.map(|t| tree_json::from_str(&t))
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn symbol_from_row(row: &Row<'_>) -> rusqlite::Result<SymbolRecord> {
    let kind: String = row.get(4)?;
    let kind = kind
        .parse::<SymbolKind>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?;

    Ok(SymbolRecord {
        id: row.get(0)?,
        file_id: row.get(1)?,
        file_path: row.get(2)?,
        name: row.get(3)?,
        kind,
        scope: row.get(5)?,
        start_line: row.get(6)?,
        end_line: row.get(7)?,
        source_text: row.get(8)?,
        subtree: json_column::<Node>(row, 9)?,
    })
}

fn reference_from_row(row: &Row<'_>) -> rusqlite::Result<ReferenceRecord> {
    Ok(ReferenceRecord {
        id: row.get(0)?,
        file_id: row.get(1)?,
        file_path: row.get(2)?,
        symbol_name: row.get(3)?,
        start_line: row.get(4)?,
        end_line: row.get(5)?,
    })
}

impl IndexStore for SqliteIndexStore {
    fn rebuild(&self, files: &[FileExtraction]) -> Result<StoreStats> {
        check_unique_paths(files)?;

        let mut conn = self.conn.lock()?;
        let tx = conn.transaction()?;
        tx.execute_batch(DROP_TABLES)?;
        tx.execute_batch(SCHEMA)?;

        let mut stats = StoreStats::default();
        {
            let mut insert_file = tx.prepare(SQL_INSERT_FILE)?;
            let mut insert_symbol = tx.prepare(SQL_INSERT_SYMBOL)?;
            let mut insert_reference = tx.prepare(SQL_INSERT_REFERENCE)?;

            for file in files {
                let file_id = stats.files as i64 + 1;
                let root_tree = serde_json::to_string(&file.root)?;
                insert_file.execute(params![file_id, file.file_path, root_tree])?;
                stats.files += 1;

                for symbol in &file.symbols {
                    let subtree = symbol
                        .subtree
                        .as_ref()
                        .map(serde_json::to_string)
                        .transpose()?;
                    insert_symbol.execute(params![
                        stats.symbols as i64 + 1,
                        file_id,
                        symbol.name,
                        symbol.kind.as_str(),
                        symbol.scope,
                        symbol.span.start_line,
                        symbol.span.end_line,
                        symbol.source_text,
                        subtree,
                    ])?;
                    stats.symbols += 1;
                }

                for reference in &file.references {
                    insert_reference.execute(params![
                        stats.references as i64 + 1,
                        file_id,
                        reference.symbol_name,
                        reference.span.start_line,
                        reference.span.end_line,
                    ])?;
                    stats.references += 1;
                }
            }
        }

        tx.commit()?;
        Ok(stats)
    }

    fn file(&self, file_path: &str) -> Result<Option<FileIndex>> {
        let conn = self.conn.lock()?;
        let row = conn
            .query_row(
                "SELECT id, file_path, root_tree FROM files WHERE file_path = ?1",
                params![file_path],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id, file_path, root_tree)) => Ok(Some(FileIndex {
                id,
                file_path,
                root: tree_json::from_str(&root_tree)?,
            })),
            None => Ok(None),
        }
    }

    fn has_file(&self, file_path: &str) -> Result<bool> {
        let conn = self.conn.lock()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM files WHERE file_path = ?1)",
            params![file_path],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn file_paths(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare_cached("SELECT file_path FROM files ORDER BY id")?;
        let paths = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(paths)
    }

    fn symbols_in_file(&self, file_path: &str) -> Result<Vec<SymbolRecord>> {
        self.query_symbols("f.file_path", file_path)
    }

    fn symbols_named(&self, name: &str) -> Result<Vec<SymbolRecord>> {
        self.query_symbols("s.name", name)
    }

    fn references_named(&self, symbol_name: &str) -> Result<Vec<ReferenceRecord>> {
        let conn = self.conn.lock()?;
        let sql = format!(
            "{} WHERE r.symbol_name = ?1 ORDER BY r.id",
            SQL_SELECT_REFERENCES
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let records = stmt
            .query_map(params![symbol_name], reference_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock()?;
        Ok(StoreStats {
            files: Self::count(&conn, "files")?,
            symbols: Self::count(&conn, "symbols")?,
            references: Self::count(&conn, "\"references\"")?,
        })
    }
}
