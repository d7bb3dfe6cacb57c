//! Stochastic structural failures layered on the time matrix.
//!
//! Two severities, reported through separate channels:
//!
//! - **Localized closures**: a handful of incident nodes each lose a random
//!   subset of their edges.  Every closed edge is written with the impossible
//!   cost in both directions and logged as a [`Notification`].
//! - **Catastrophic event**: with small probability one incident node has
//!   every remaining edge multiplied by a huge factor.  Reported once as a
//!   [`CatastrophicEvent`], never mixed into the notification log.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use tc_core::{DisruptionConfig, NodeId, RandomSource};

use crate::CostMatrix;

/// An edge closed by a localized disruption.
///
/// Renders as `Node 3 and Node 8 now impossible`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    /// The incident node.
    pub a: NodeId,
    /// The neighbour it was cut off from.
    pub b: NodeId,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {} now impossible", self.a, self.b)
    }
}

/// A major blocking event at one node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatastrophicEvent {
    pub node:       NodeId,
    /// Factor applied to the node's edges in both directions.
    pub multiplier: f64,
}

impl fmt::Display for CatastrophicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Major issue: all routes leading to/from {} now impossible/very difficult",
            self.node
        )
    }
}

// ── Phase 2 ───────────────────────────────────────────────────────────────────

/// Outcome of the localized-closure phase.
pub(crate) struct Closures {
    /// Drawn with replacement, so a node may appear more than once.
    pub incident:      Vec<NodeId>,
    pub notifications: Vec<Notification>,
}

/// Pick incident nodes and close a random subset of each one's edges.
pub(crate) fn close_edges<R: RandomSource + ?Sized>(
    time: &mut CostMatrix,
    cfg:  &DisruptionConfig,
    rng:  &mut R,
) -> Closures {
    let n = time.size();
    let num_affected = (cfg.affected_fraction.sample(rng) * n as f64).round() as usize;

    let incident: Vec<NodeId> = (0..num_affected)
        .map(|_| NodeId(rng.index(n) as u32))
        .collect();

    let mut notifications = Vec::new();
    let mut seen = FxHashSet::default();

    for &a in &incident {
        let fraction = cfg.neighbour_fraction.sample(rng);
        let candidates = (fraction * n as f64).round() as usize;

        seen.clear();
        for _ in 0..candidates {
            let b = rng.index(n);
            if b == a.index() || !seen.insert(b) {
                continue;
            }
            let b = NodeId(b as u32);
            time.set(a, b, cfg.impossible_cost);
            time.set(b, a, cfg.impossible_cost);
            notifications.push(Notification { a, b });
        }
    }

    debug!(
        incident = incident.len(),
        closed = notifications.len(),
        "localized disruptions applied"
    );
    Closures { incident, notifications }
}

// ── Phase 3 ───────────────────────────────────────────────────────────────────

/// Roll for a catastrophic event at one of the incident nodes.
///
/// Edges already at the impossible cost are left alone so a closed edge
/// always reads exactly the sentinel.
pub(crate) fn maybe_catastrophe<R: RandomSource + ?Sized>(
    time:     &mut CostMatrix,
    incident: &[NodeId],
    cfg:      &DisruptionConfig,
    rng:      &mut R,
) -> Option<CatastrophicEvent> {
    let roll = rng.uniform(0.0, 1.0);
    if roll <= 1.0 - cfg.catastrophe_probability {
        return None;
    }
    if incident.is_empty() {
        debug!("catastrophe rolled with no incident nodes; skipped");
        return None;
    }

    let node = incident[rng.index(incident.len())];
    let i = node.index();
    for k in 0..time.size() {
        if k == i {
            continue;
        }
        for (from, to) in [(i, k), (k, i)] {
            if time[(from, to)] != cfg.impossible_cost {
                time[(from, to)] *= cfg.catastrophe_multiplier;
            }
        }
    }

    let event = CatastrophicEvent { node, multiplier: cfg.catastrophe_multiplier };
    warn!(node = node.0, multiplier = event.multiplier, "{event}");
    Some(event)
}
