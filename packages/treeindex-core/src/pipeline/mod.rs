//! Build pass
//!
//! Full rebuild of the index from a repository checkout:
//!
//! ```text
//! discover (walkdir, sorted)
//!    → load tree (TreeSource)      ┐ per file, rayon pool
//!    → extract (SymbolExtractor)   ┘
//!    → IndexStore::rebuild (one transaction)
//! ```
//!
//! Files whose tree cannot be produced, and entries the walk cannot read, are
//! skipped and listed in the [`BuildReport`]; they never abort the build.

pub mod index_builder;
pub mod report;

pub use index_builder::{Discovery, IndexBuilder};
pub use report::{BuildFailure, BuildReport};
