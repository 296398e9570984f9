/*
 * Treeindex Core - Addressable AST Index
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Node, NodeId, Span, errors)
 * - features/    : Vertical slices (parsing → ast_model → extraction → storage → query_engine)
 * - pipeline/    : Full-rebuild build pass
 * - api/         : Method registry over the query contract
 * - config/      : Versioned YAML configuration
 *
 * Data flow:
 *   TreeSource → SymbolExtractor (over AddressableAst) → IndexStore → QueryEngine
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Build pass orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Transport-agnostic method registry
pub mod api;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::MethodRegistry;
pub use config::{ConfigError, IndexConfig};
pub use features::ast_model::AddressableAst;
pub use features::extraction::{FileExtraction, SymbolExtractor};
pub use features::query_engine::{CallHierarchy, NodeMatch, QueryEngine};
pub use features::storage::{IndexStore, InMemoryIndexStore, ReferenceRecord, SymbolRecord};
#[cfg(feature = "sqlite")]
pub use features::storage::SqliteIndexStore;
pub use pipeline::{BuildReport, IndexBuilder};
pub use shared::models::{ErrorKind, Node, NodeId, Result, Span, SymbolKind, TreeIndexError};
