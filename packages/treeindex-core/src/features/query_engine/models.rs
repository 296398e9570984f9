//! Query results

use serde::{Deserialize, Serialize};

use crate::features::storage::{ReferenceRecord, SymbolRecord};
use crate::shared::models::{Node, NodeId, Span};

/// A node together with its address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMatch {
    pub id: NodeId,
    pub node: Node,
}

impl NodeMatch {
    pub fn new(id: NodeId, node: &Node) -> Self {
        Self {
            id,
            node: node.clone(),
        }
    }
}

/// A callee name reached from a callable body
///
/// The call site is not resolved to a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundCall {
    pub name: String,
    /// First call site of this name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

/// Callers and callees of the smallest callable enclosing a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallHierarchy {
    pub symbol: SymbolRecord,
    pub inbound: Vec<ReferenceRecord>,
    pub outbound: Vec<OutboundCall>,
}

impl CallHierarchy {
    pub fn outbound_names(&self) -> Vec<&str> {
        self.outbound.iter().map(|c| c.name.as_str()).collect()
    }
}
