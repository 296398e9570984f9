//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric setting outside its bounds
    #[error("'{field}' = {value} is out of bounds (allowed {min} to {max}). {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Index config without a schema version
    #[error("Index config has no schema version; start the file with 'version: 1'")]
    MissingVersion,

    /// Schema version this build cannot read
    #[error("Index config schema v{found} is not readable by this build (known: {})", supported.iter().map(|v| format!("v{}", v)).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Config file could not be read
    #[error("Cannot read index config: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML or an unknown key
    #[error("Index config is not valid YAML for schema v1: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Semantically invalid setting
    #[error("Invalid index config: {0}")]
    Validation(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
