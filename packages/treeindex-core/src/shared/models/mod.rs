//! Shared models

mod error;
mod node;
mod node_id;
mod span;
mod symbol_kind;

pub use error::{ErrorKind, Result, TreeIndexError};
pub use node::{Branch, Literal, Node};
pub use node_id::{NodeId, NodeIdParseError};
pub use span::Span;
pub use symbol_kind::SymbolKind;
