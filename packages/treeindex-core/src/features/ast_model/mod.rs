//! Addressable AST model
//!
//! Wraps a parsed tree so that every node can be named by a [`NodeId`] path,
//! looked up again from that path, found by kind, and placed in its ancestor
//! chain. The model borrows the tree and never mutates it.
//!
//! ```text
//! root                          class
//! root.children.0               ├─ const
//! root.children.2               └─ begin
//! root.children.2.children.0       ├─ def  (bark)
//! root.children.2.children.1       └─ def  (wag_tail)
//! ```
//!
//! [`NodeId`]: crate::shared::models::NodeId

mod addressable;
mod traversal;

pub use addressable::AddressableAst;
pub use traversal::PreOrder;
