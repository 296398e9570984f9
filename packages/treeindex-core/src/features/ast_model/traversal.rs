//! Pre-order traversal with node ids

use crate::shared::models::{Node, NodeId};

/// Lazy pre-order walk yielding `(id, node)` for every node under a start node
///
/// Children are visited in order, literals included. The iterator owns an
/// explicit stack so deep trees do not recurse.
pub struct PreOrder<'a> {
    stack: Vec<(NodeId, &'a Node)>,
}

impl<'a> PreOrder<'a> {
    /// Walk the subtree at `node`, whose own id is `id`
    pub fn new(id: NodeId, node: &'a Node) -> Self {
        Self {
            stack: vec![(id, node)],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, node) = self.stack.pop()?;
        for (index, child) in node.children().iter().enumerate().rev() {
            self.stack.push((id.child(index), child));
        }
        Some((id, node))
    }
}
