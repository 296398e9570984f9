//! Tree source port

use std::path::Path;

use super::domain::ParsedFile;
use crate::shared::models::Result;

/// Produces the parsed tree of one repository file
///
/// Implementations must be usable from several build workers at once.
/// Any failure is reported as a `Parse` error; the build skips the file.
pub trait TreeSource: Send + Sync {
    /// Load the tree for `relative_path` (`/`-separated) under `repo_root`
    fn load(&self, repo_root: &Path, relative_path: &str) -> Result<ParsedFile>;

    /// Source name for logs
    fn name(&self) -> &'static str;
}
