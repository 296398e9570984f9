//! Utility modules shared across features
//!
//! - `scope_stack`: enclosing type-definition names during extraction
//! - `tree_json`: depth-unlimited JSON decoding for parser trees

pub mod scope_stack;
pub mod tree_json;
