//! Dense square cost matrix.
//!
//! # Data layout
//!
//! Row-major `Vec<f64>`: the cost of `from → to` lives at
//! `data[from * size + to]`.  Rows are contiguous, which is what the
//! pairwise build loop and the CSV writer both walk.

use std::ops::{Index, IndexMut};

use tc_core::NodeId;

/// An `N × N` matrix of directed travel costs, indexed by node.
///
/// Asymmetric entries are allowed.  Larger is costlier; extreme values
/// (the impossible-cost sentinel) mark edges as effectively forbidden.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// An all-zero `size × size` matrix.
    pub fn new(size: usize) -> Self {
        Self { data: vec![0.0; size * size], size }
    }

    /// Wrap an explicit row-major grid.
    ///
    /// Returns `None` if `data.len() != size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Number of nodes (rows).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of travelling `from → to`.
    ///
    /// # Panics
    /// Panics if either id is out of range.
    #[inline]
    pub fn get(&self, from: NodeId, to: NodeId) -> f64 {
        self[(from.index(), to.index())]
    }

    #[inline]
    pub fn set(&mut self, from: NodeId, to: NodeId, cost: f64) {
        self[(from.index(), to.index())] = cost;
    }

    /// Outgoing costs of `from`, indexed by destination.
    #[inline]
    pub fn row(&self, from: NodeId) -> &[f64] {
        let start = from.index() * self.size;
        &self.data[start..start + self.size]
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Every `(from, to, cost)` triple in row-major order, diagonal included.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        let n = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(k, &c)| (NodeId((k / n) as u32), NodeId((k % n) as u32), c))
    }

    /// Smallest entry, or `0.0` for an empty matrix.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    /// Largest entry, or `0.0` for an empty matrix.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Smallest entry off the diagonal, `None` below 2 × 2.
    pub fn min_off_diagonal(&self) -> Option<f64> {
        self.iter()
            .filter(|(i, j, _)| i != j)
            .map(|(_, _, c)| c)
            .reduce(f64::min)
    }

    /// Add `delta` to every entry off the diagonal.
    pub fn shift_off_diagonal(&mut self, delta: f64) {
        let n = self.size;
        for (k, c) in self.data.iter_mut().enumerate() {
            if k / n != k % n {
                *c += delta;
            }
        }
    }

    pub fn diagonal_is_zero(&self) -> bool {
        (0..self.size).all(|i| self[(i, i)] == 0.0)
    }

    /// `true` if `|m[i][j] − m[j][i]| <= tol` for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self[(i, j)] - self[(j, i)]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// First non-finite entry as `(from, to, value)`, if any.
    pub fn first_non_finite(&self) -> Option<(NodeId, NodeId, f64)> {
        self.iter().find(|(_, _, c)| !c.is_finite())
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        &self.data[from * self.size + to]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    #[inline]
    fn index_mut(&mut self, (from, to): (usize, usize)) -> &mut f64 {
        &mut self.data[from * self.size + to]
    }
}
