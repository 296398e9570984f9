//! Index configuration
//!
//! A single [`IndexConfig`] drives discovery, tree loading and extraction.
//! It loads from a versioned YAML file:
//!
//! ```yaml
//! version: 1
//! scope_separator: "::"
//! source_extensions: [rb, rake]
//! tree_source:
//!   kind: command
//!   argv: [ruby-ast-dump, "{path}"]
//! ```
//!
//! Omitted fields take the Ruby defaults.

pub mod error;
pub mod index_config;

pub use error::{ConfigError, ConfigResult};
pub use index_config::{IndexConfig, TreeSourceConfig, SUPPORTED_VERSIONS};
