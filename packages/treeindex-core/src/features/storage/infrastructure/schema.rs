//! SQLite schema
//!
//! `references` is a reserved word in SQL, so the table name is always
//! quoted.

pub const DROP_TABLES: &str = r#"
DROP TABLE IF EXISTS "references";
DROP TABLE IF EXISTS symbols;
DROP TABLE IF EXISTS files;
"#;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS files (
    id INTEGER PRIMARY KEY,
    file_path TEXT NOT NULL UNIQUE,
    root_tree TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS symbols (
    id INTEGER PRIMARY KEY,
    file_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    kind TEXT NOT NULL,
    scope TEXT NOT NULL,
    start_line INTEGER NOT NULL,
    end_line INTEGER NOT NULL,
    source_text TEXT,
    subtree TEXT,
    FOREIGN KEY (file_id) REFERENCES files(id)
);

CREATE TABLE IF NOT EXISTS "references" (
    id INTEGER PRIMARY KEY,
    file_id INTEGER NOT NULL,
    symbol_name TEXT NOT NULL,
    start_line INTEGER NOT NULL,
    end_line INTEGER NOT NULL,
    FOREIGN KEY (file_id) REFERENCES files(id)
);

CREATE INDEX IF NOT EXISTS idx_symbols_name ON symbols(name);
CREATE INDEX IF NOT EXISTS idx_symbols_file ON symbols(file_id);
CREATE INDEX IF NOT EXISTS idx_references_name ON "references"(symbol_name);
"#;

pub const SQL_INSERT_FILE: &str = "INSERT INTO files (id, file_path, root_tree) VALUES (?1, ?2, ?3)";

pub const SQL_INSERT_SYMBOL: &str = "INSERT INTO symbols
     (id, file_id, name, kind, scope, start_line, end_line, source_text, subtree)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

pub const SQL_INSERT_REFERENCE: &str = r#"INSERT INTO "references"
     (id, file_id, symbol_name, start_line, end_line)
     VALUES (?1, ?2, ?3, ?4, ?5)"#;

pub const SQL_SELECT_SYMBOLS: &str = "SELECT s.id, s.file_id, f.file_path, s.name, s.kind, s.scope,
            s.start_line, s.end_line, s.source_text, s.subtree
     FROM symbols s JOIN files f ON f.id = s.file_id";

pub const SQL_SELECT_REFERENCES: &str = r#"SELECT r.id, r.file_id, f.file_path, r.symbol_name,
            r.start_line, r.end_line
     FROM "references" r JOIN files f ON f.id = r.file_id"#;
