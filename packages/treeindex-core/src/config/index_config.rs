//! IndexConfig and its YAML schema (v1)

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::features::extraction::LanguageRules;
use crate::features::parsing::infrastructure::DEFAULT_SIDECAR_SUFFIX;
use crate::features::parsing::{CommandTreeSource, SidecarTreeSource, TreeSource};
use crate::shared::models::Result;
use crate::shared::utils::scope_stack::{DEFAULT_SEPARATOR, GLOBAL_SCOPE};

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

const MAX_THREADS: usize = 1024;

/// Where parsed trees come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeSourceConfig {
    /// `<file>.<suffix>` JSON dumps next to each source file
    Sidecar {
        #[serde(default = "default_suffix")]
        suffix: String,
    },
    /// External parser printing the tree JSON; `{path}` is substituted
    Command { argv: Vec<String> },
}

fn default_suffix() -> String {
    DEFAULT_SIDECAR_SUFFIX.to_string()
}

impl Default for TreeSourceConfig {
    fn default() -> Self {
        TreeSourceConfig::Sidecar {
            suffix: default_suffix(),
        }
    }
}

impl TreeSourceConfig {
    pub fn build(&self) -> Result<Arc<dyn TreeSource>> {
        Ok(match self {
            TreeSourceConfig::Sidecar { suffix } => Arc::new(SidecarTreeSource::new(suffix.clone())),
            TreeSourceConfig::Command { argv } => Arc::new(CommandTreeSource::from_argv(argv)?),
        })
    }
}

/// Indexing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Node-kind roles of the indexed language
    pub language: LanguageRules,

    /// Joins enclosing type names in symbol scopes
    pub scope_separator: String,

    /// Scope label of top-level symbols
    pub global_scope: String,

    /// File extensions to index, without the dot
    pub source_extensions: Vec<String>,

    /// Directory names skipped during discovery
    pub exclude_dirs: Vec<String>,

    /// Follow symlinks during discovery
    pub follow_links: bool,

    pub tree_source: TreeSourceConfig,

    /// Store source lines of callables
    pub capture_source_text: bool,

    /// Extract files on a rayon pool
    pub parallel: bool,

    /// Worker count; 75% of cores when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: LanguageRules::ruby(),
            scope_separator: DEFAULT_SEPARATOR.to_string(),
            global_scope: GLOBAL_SCOPE.to_string(),
            source_extensions: vec!["rb".to_string()],
            exclude_dirs: [".git", "vendor", "tmp", "node_modules"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            follow_links: false,
            tree_source: TreeSourceConfig::default(),
            capture_source_text: true,
            parallel: true,
            threads: None,
        }
    }
}

impl IndexConfig {
    /// Load and validate a YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;

        // Version check
        let version = raw
            .get("version")
            .ok_or(ConfigError::MissingVersion)?
            .as_u64()
            .ok_or_else(|| ConfigError::Validation("'version' must be an integer".to_string()))?;
        let version = u32::try_from(version).unwrap_or(u32::MAX);
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config: IndexConfig = serde_yaml::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.scope_separator.is_empty() {
            return Err(ConfigError::Validation(
                "scope_separator must not be empty".to_string(),
            ));
        }
        if self.global_scope.is_empty() {
            return Err(ConfigError::Validation(
                "global_scope must not be empty".to_string(),
            ));
        }
        if self.source_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "source_extensions needs at least one extension".to_string(),
            ));
        }
        if let Some(ext) = self
            .source_extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "source extension '{}' must be non-empty and given without the dot",
                ext
            )));
        }

        let duplicates = self.language.duplicate_kinds();
        if !duplicates.is_empty() {
            return Err(ConfigError::Validation(format!(
                "node kinds assigned more than one role: {}",
                duplicates.join(", ")
            )));
        }
        if self.language.type_definitions.is_empty() && self.language.callables.is_empty() {
            return Err(ConfigError::Validation(format!(
                "language '{}' defines no type or callable kinds",
                self.language.name
            )));
        }

        match &self.tree_source {
            TreeSourceConfig::Sidecar { suffix } if suffix.is_empty() => {
                return Err(ConfigError::Validation(
                    "tree_source.suffix must not be empty".to_string(),
                ));
            }
            TreeSourceConfig::Command { argv } if argv.is_empty() => {
                return Err(ConfigError::Validation(
                    "tree_source.argv must name a program".to_string(),
                ));
            }
            _ => {}
        }

        if let Some(threads) = self.threads {
            if threads == 0 || threads > MAX_THREADS {
                return Err(ConfigError::Range {
                    field: "threads".to_string(),
                    value: threads.to_string(),
                    min: "1".to_string(),
                    max: MAX_THREADS.to_string(),
                    hint: "Omit to use 75% of cores.".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Build worker count
    pub fn worker_threads(&self) -> usize {
        self.threads
            .unwrap_or_else(|| num_cpus::get() * 3 / 4) // 75% of cores
            .max(1)
    }

    /// Whether `extension` (no dot) is indexed
    pub fn is_source_extension(&self, extension: &str) -> bool {
        self.source_extensions.iter().any(|e| e == extension)
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
}
