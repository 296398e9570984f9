//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! Nothing in here touches the filesystem or the database.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::scope_stack::ScopeStack;
