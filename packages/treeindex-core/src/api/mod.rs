//! Transport-agnostic method registry
//!
//! Maps query method names (`getSymbols`, `getCallHierarchy`, ...) to
//! [`QueryEngine`] calls taking and returning JSON values. Transports (the
//! CLI, an RPC server) parse requests, call [`MethodRegistry::dispatch`] and
//! serialize the result or [`error_response`].
//!
//! [`QueryEngine`]: crate::features::query_engine::QueryEngine

pub mod params;
pub mod registry;

pub use registry::{error_response, MethodHandler, MethodRegistry, MethodSpec};
