use crate::shared::models::{Node, NodeId, Result, TreeIndexError};

use super::PreOrder;

/// Addressing, lookup and traversal over one parsed tree
#[derive(Debug, Clone, Copy)]
pub struct AddressableAst<'a> {
    root: &'a Node,
}

impl<'a> AddressableAst<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &'a Node {
        self.root
    }

    /// Id of the node reached by following `path` from the root
    ///
    /// Addressing is positional only; the path is not checked against the tree.
    pub fn id_of(path: &[usize]) -> NodeId {
        NodeId::from_path(path)
    }

    /// Node at `id`, or NotFound when any step is out of range
    pub fn lookup(&self, id: &NodeId) -> Result<&'a Node> {
        id.path()
            .iter()
            .try_fold(self.root, |node, &index| node.child(index))
            .ok_or_else(|| TreeIndexError::not_found(format!("No node at {}", id)))
    }

    /// Parse `text` as a NodeId and look it up; malformed text is NotFound
    pub fn lookup_str(&self, text: &str) -> Result<(NodeId, &'a Node)> {
        let id: NodeId = text
            .parse()
            .map_err(|e: crate::shared::models::NodeIdParseError| {
                TreeIndexError::not_found(e.to_string())
            })?;
        let node = self.lookup(&id)?;
        Ok((id, node))
    }

    /// Pre-order walk of the whole tree, root included
    ///
    /// Each call starts a fresh walk.
    pub fn traverse(&self) -> PreOrder<'a> {
        PreOrder::new(NodeId::root(), self.root)
    }

    /// Every node whose kind equals `kind`, in pre-order
    pub fn find_by_type(&self, kind: impl Into<String>) -> impl Iterator<Item = (NodeId, &'a Node)> + 'a {
        let kind = kind.into();
        self.traverse().filter(move |(_, node)| node.is_kind(&kind))
    }

    /// Strict ancestors of `id`, root first, parent last
    ///
    /// Root has no ancestors. Fails with NotFound when `id` itself does not
    /// resolve.
    pub fn ancestors_of(&self, id: &NodeId) -> Result<Vec<(NodeId, &'a Node)>> {
        let mut ancestors = Vec::with_capacity(id.depth());
        let mut current = NodeId::root();
        let mut node = self.root;

        for &index in id.path() {
            let child = node
                .child(index)
                .ok_or_else(|| TreeIndexError::not_found(format!("No node at {}", id)))?;
            ancestors.push((current.clone(), node));
            current = current.child(index);
            node = child;
        }

        Ok(ancestors)
    }

    /// Call nodes at or below `subtree_root`, in pre-order
    ///
    /// Ids in the result are relative to this model's root.
    pub fn outbound_calls<S: AsRef<str>>(
        &self,
        subtree_root: &NodeId,
        call_kinds: &[S],
    ) -> Result<Vec<(NodeId, &'a Node)>> {
        let start = self.lookup(subtree_root)?;
        Ok(PreOrder::new(subtree_root.clone(), start)
            .filter(|(_, node)| {
                node.kind()
                    .map(|kind| call_kinds.iter().any(|k| k.as_ref() == kind))
                    .unwrap_or(false)
            })
            .collect())
    }
}
