//! Parsing feature
//!
//! The language parser is an external collaborator. This feature only
//! consumes its output: a JSON dump of the generic tree for each source file.
//!
//! ## Structure
//! - `domain`  - ParsedFile, tree JSON decoding
//! - `ports`   - TreeSource trait
//! - `infrastructure/` - sidecar-file and external-command sources

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{parse_tree_json, ParsedFile};
pub use infrastructure::{CommandTreeSource, SidecarTreeSource};
pub use ports::TreeSource;
