//! External parser command source
//!
//! Runs the configured parser once per file and reads the tree JSON from its
//! stdout. The `{path}` placeholder in arguments is replaced with the
//! absolute file path.

use std::path::Path;
use std::process::Command;

use super::read_source;
use crate::features::parsing::domain::{parse_tree_json, ParsedFile};
use crate::features::parsing::ports::TreeSource;
use crate::shared::models::{Result, TreeIndexError};

pub const PATH_PLACEHOLDER: &str = "{path}";

#[derive(Debug, Clone)]
pub struct CommandTreeSource {
    program: String,
    args: Vec<String>,
}

impl CommandTreeSource {
    /// `argv[0]` is the program; the remaining items are argument templates
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| TreeIndexError::config("Parser command is empty"))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn render_args(&self, path: &Path) -> Vec<String> {
        let path = path.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace(PATH_PLACEHOLDER, &path))
            .collect()
    }
}

impl TreeSource for CommandTreeSource {
    fn load(&self, repo_root: &Path, relative_path: &str) -> Result<ParsedFile> {
        let source_path = repo_root.join(relative_path);

        let output = Command::new(&self.program)
            .args(self.render_args(&source_path))
            .current_dir(repo_root)
            .output()
            .map_err(|e| {
                TreeIndexError::parse(format!("Failed to run parser '{}': {}", self.program, e))
                    .with_file(relative_path)
                    .with_source(e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TreeIndexError::parse(format!(
                "Parser exited with {}: {}",
                output.status,
                stderr.trim()
            ))
            .with_file(relative_path));
        }

        let root = parse_tree_json(&output.stdout, relative_path)?;
        Ok(ParsedFile::new(relative_path, root, read_source(&source_path)))
    }

    fn name(&self) -> &'static str {
        "command"
    }
}
