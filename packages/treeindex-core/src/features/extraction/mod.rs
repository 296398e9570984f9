//! Symbol & reference extraction
//!
//! One pre-order walk per file turns a parsed tree into symbol definitions
//! (types, callables) and name references (constants, calls). Which node
//! kinds play which role, and where each keeps its name, comes from
//! [`LanguageRules`].
//!
//! ## Structure
//! - `rules`     - node-kind roles and name positions
//! - `models`    - extracted records
//! - `extractor` - the walk

pub mod extractor;
pub mod models;
pub mod rules;

pub use extractor::SymbolExtractor;
pub use models::{ExtractedReference, ExtractedSymbol, FileExtraction};
pub use rules::{LanguageRules, NodeRole, NodeRule, RuleIndex};
