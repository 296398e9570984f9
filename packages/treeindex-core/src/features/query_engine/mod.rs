//! Structural query engine
//!
//! Read-only queries over the index store. File-local queries reload the
//! stored tree and wrap it in an [`AddressableAst`]; cross-file queries are
//! exact name matches against the symbol and reference tables.
//!
//! Resolution is by name only: `findDefinition`, `findReferences` and the
//! inbound side of a call hierarchy return every same-named record, whatever
//! its scope.
//!
//! [`AddressableAst`]: crate::features::ast_model::AddressableAst

pub mod models;
pub mod query_engine;

pub use models::{CallHierarchy, NodeMatch, OutboundCall};
pub use query_engine::QueryEngine;
