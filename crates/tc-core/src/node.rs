//! Nodes: the points a tour must visit.

use crate::{GeoPoint, NodeId, TcError, TcResult};

/// A location with a stable identity.
///
/// Node sets handed to the engine are slices whose ids are exactly `0..N`
/// in slice order, so `NodeId::index()` addresses both the slice and every
/// matrix row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

impl Node {
    #[inline]
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self { id, pos: GeoPoint::new(lat, lon) }
    }

    /// Number `[lat, lon]` pairs sequentially from 0.
    ///
    /// This is the shape the coordinate acquisition service returns.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> TcResult<Vec<Node>> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &[lat, lon])| {
                let id = NodeId::try_from(i)
                    .map_err(|_| TcError::InvalidInput(format!("node index {i} overflows u32")))?;
                Ok(Node::new(id, lat, lon))
            })
            .collect()
    }

    /// Check the node-set contract: at least two nodes, ids `0..N` in
    /// order, and every coordinate finite and on the globe.
    pub fn validate_set(nodes: &[Node]) -> TcResult<()> {
        if nodes.len() < 2 {
            return Err(TcError::InvalidInput(format!(
                "at least 2 nodes are required, got {}",
                nodes.len()
            )));
        }
        for (i, node) in nodes.iter().enumerate() {
            if node.id.index() != i {
                return Err(TcError::InvalidInput(format!(
                    "{} found at position {i}; ids must run 0..N in order",
                    node.id
                )));
            }
            if !node.pos.is_valid() {
                return Err(TcError::InvalidInput(format!(
                    "{} has malformed coordinates {}",
                    node.id, node.pos
                )));
            }
        }
        Ok(())
    }
}
