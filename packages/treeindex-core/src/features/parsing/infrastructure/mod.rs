//! Tree source implementations

mod command;
mod sidecar;

pub use command::CommandTreeSource;
pub use sidecar::{SidecarTreeSource, DEFAULT_SIDECAR_SUFFIX};

use std::path::Path;

/// Source text of a file, `None` when unreadable or not UTF-8
pub(crate) fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "source text unavailable");
            None
        }
    }
}
