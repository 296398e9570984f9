//! Path-based node identifiers
//!
//! A `NodeId` is the sequence of child indices leading from a tree's root to
//! a node. Its text form is `root` followed by one `.children.<n>` step per
//! index, e.g. `root.children.0.children.2.children.0`.
//!
//! Ids are only meaningful relative to one file's current tree: a rebuild may
//! shift child indices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const ROOT_SEGMENT: &str = "root";
const CHILDREN_SEGMENT: &str = "children";

/// Address of a node within one tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    path: Vec<usize>,
}

/// Malformed NodeId text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed node id '{text}': {reason}")]
pub struct NodeIdParseError {
    pub text: String,
    pub reason: &'static str,
}

impl NodeId {
    /// Id of the tree root (empty path)
    pub fn root() -> Self {
        Self { path: Vec::new() }
    }

    /// Build an id from child indices, outermost first
    pub fn from_path(path: impl Into<Vec<usize>>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Number of steps from the root (root = 0)
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Id of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(index);
        Self { path }
    }

    pub fn parent(&self) -> Option<Self> {
        if self.path.is_empty() {
            return None;
        }
        Some(Self::from_path(&self.path[..self.path.len() - 1]))
    }

    /// All strict prefixes, root first
    pub fn strict_prefixes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.path.len()).map(move |len| Self::from_path(&self.path[..len]))
    }

    /// Whether `self` lies strictly above `other` on the same path
    pub fn is_ancestor_of(&self, other: &NodeId) -> bool {
        self.path.len() < other.path.len() && other.path.starts_with(&self.path)
    }

    /// Join `relative` (an id rooted at this node) onto this id
    pub fn join(&self, relative: &NodeId) -> Self {
        let mut path = self.path.clone();
        path.extend_from_slice(&relative.path);
        Self { path }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_SEGMENT)?;
        for index in &self.path {
            write!(f, ".{}.{}", CHILDREN_SEGMENT, index)?;
        }
        Ok(())
    }
}

impl FromStr for NodeId {
    type Err = NodeIdParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fail = |reason| NodeIdParseError {
            text: text.to_string(),
            reason,
        };

        let mut segments = text.split('.');
        if segments.next() != Some(ROOT_SEGMENT) {
            return Err(fail("must start with 'root'"));
        }

        let mut path = Vec::new();
        while let Some(segment) = segments.next() {
            if segment != CHILDREN_SEGMENT {
                return Err(fail("expected 'children' step"));
            }
            let index = segments.next().ok_or_else(|| fail("missing child index"))?;
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return Err(fail("child index must be a non-negative integer"));
            }
            let index = index
                .parse::<usize>()
                .map_err(|_| fail("child index out of range"))?;
            path.push(index);
        }

        Ok(Self { path })
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
