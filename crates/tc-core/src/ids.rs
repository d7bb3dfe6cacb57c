//! Typed node identifier.
//!
//! The inner integer is `pub` so matrices can index with `id.0 as usize`,
//! but callers should prefer [`NodeId::index`].

use std::fmt;

/// Stable identity of a node within one node set (`0..N`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Cast to `usize` for direct use as a matrix row/column.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Renders as `Node 7`, the form used in disruption notifications.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
