//! Symbol kinds recorded by the extractor

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a named definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Class/module-like container
    Type,
    /// Instance method
    Callable,
    /// Method defined on a single object (`def self.x`)
    SingletonCallable,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Type => "type",
            SymbolKind::Callable => "callable",
            SymbolKind::SingletonCallable => "singleton_callable",
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, SymbolKind::Callable | SymbolKind::SingletonCallable)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(SymbolKind::Type),
            "callable" => Ok(SymbolKind::Callable),
            "singleton_callable" => Ok(SymbolKind::SingletonCallable),
            other => Err(format!("unknown symbol kind '{}'", other)),
        }
    }
}
