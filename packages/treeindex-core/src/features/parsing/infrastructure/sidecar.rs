//! Sidecar dump source
//!
//! Reads `<file>.<suffix>` (default `dog.rb.ast.json`) written next to each
//! source file by an external parser run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::read_source;
use crate::features::parsing::domain::{parse_tree_json, ParsedFile};
use crate::features::parsing::ports::TreeSource;
use crate::shared::models::{Result, TreeIndexError};

pub const DEFAULT_SIDECAR_SUFFIX: &str = "ast.json";

#[derive(Debug, Clone)]
pub struct SidecarTreeSource {
    suffix: String,
}

impl Default for SidecarTreeSource {
    fn default() -> Self {
        Self::new(DEFAULT_SIDECAR_SUFFIX)
    }
}

impl SidecarTreeSource {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn sidecar_path(&self, source_path: &Path) -> PathBuf {
        let mut name = OsString::from(source_path.as_os_str());
        name.push(".");
        name.push(&self.suffix);
        PathBuf::from(name)
    }
}

impl TreeSource for SidecarTreeSource {
    fn load(&self, repo_root: &Path, relative_path: &str) -> Result<ParsedFile> {
        let source_path = repo_root.join(relative_path);
        let dump_path = self.sidecar_path(&source_path);

        let bytes = std::fs::read(&dump_path).map_err(|e| {
            TreeIndexError::parse(format!("No tree dump at {}: {}", dump_path.display(), e))
                .with_file(relative_path)
                .with_source(e)
        })?;

        let root = parse_tree_json(&bytes, relative_path)?;
        Ok(ParsedFile::new(relative_path, root, read_source(&source_path)))
    }

    fn name(&self) -> &'static str {
        "sidecar"
    }
}
