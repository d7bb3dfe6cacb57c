//! The output of one build, and blending it into a single objective.

use tc_core::{TcError, TcResult};
use tc_zones::Zone;

use crate::{CatastrophicEvent, CostMatrix, Notification};

/// Everything one [`CostMatrixBuilder`](crate::CostMatrixBuilder) build
/// produces.  Either all of it exists or the build returned an error.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrices {
    /// Great-circle km.  Symmetric, zero diagonal.
    pub distance: CostMatrix,
    /// Hours.  Asymmetric after zone and disruption effects.
    pub time: CostMatrix,
    /// Unitless risk score.  Non-negative, zero diagonal, symmetric.
    pub safety: CostMatrix,
    /// The zones applied to `time`.
    pub zones: Vec<Zone>,
    /// Closed edges, in generation order.
    pub notifications: Vec<Notification>,
    pub catastrophe: Option<CatastrophicEvent>,
}

impl CostMatrices {
    pub fn node_count(&self) -> usize {
        self.distance.size()
    }

    /// Notification messages, in generation order.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.notifications.iter().map(ToString::to_string)
    }

    /// Element-wise `wd·distance + wt·time + ws·safety`.
    ///
    /// Lets a single-objective optimizer trade the three costs off against
    /// each other.
    pub fn weighted(&self, weights: ObjectiveWeights) -> TcResult<CostMatrix> {
        weights.validate()?;

        let data = self
            .distance
            .as_slice()
            .iter()
            .zip(self.time.as_slice())
            .zip(self.safety.as_slice())
            .map(|((&d, &t), &s)| weights.distance * d + weights.time * t + weights.safety * s)
            .collect();

        CostMatrix::from_data(self.node_count(), data).ok_or_else(|| {
            TcError::InvalidInput("distance, time and safety matrices differ in size".into())
        })
    }
}

// ── ObjectiveWeights ──────────────────────────────────────────────────────────

/// Weights for [`CostMatrices::weighted`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveWeights {
    pub distance: f64,
    pub time:     f64,
    pub safety:   f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self { distance: 0.3, time: 0.3, safety: 0.4 }
    }
}

impl ObjectiveWeights {
    pub fn new(distance: f64, time: f64, safety: f64) -> Self {
        Self { distance, time, safety }
    }

    pub fn validate(&self) -> TcResult<()> {
        for (name, w) in [("distance", self.distance), ("time", self.time), ("safety", self.safety)] {
            if !w.is_finite() || w < 0.0 {
                return Err(TcError::InvalidInput(format!(
                    "{name} weight must be finite and >= 0, got {w}"
                )));
            }
        }
        Ok(())
    }
}
