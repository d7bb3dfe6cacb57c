//! Fluent builder that assembles [`CostMatrices`] from a node set.
//!
//! # Phases
//!
//! 1. **Base costs**: for each pair `i < j`, haversine distance, time at
//!    the average speed, a random safety increment, then every zone the
//!    segment passes through.
//! 2. **Localized closures**: see [`disruption`](crate::disruption).
//! 3. **Catastrophic event**: rare, one node, reported separately.
//!
//! Inputs are validated before anything is allocated, and outputs are
//! checked for non-finite values before anything is returned or observed.
//! A build yields all matrices or an error.
//!
//! # Draw order
//!
//! Zones (unless supplied), then one safety draw per pair in row-major
//! `i < j` order, then phase 2, then phase 3.  A seeded [`WorldRng`]
//! therefore reproduces a build exactly.
//!
//! [`WorldRng`]: tc_core::WorldRng

use tracing::{debug, info};

use tc_core::{Node, RandomSource, TcError, TcResult, WorldConfig};
use tc_zones::{Zone, ZoneGenerator};

use crate::disruption::{close_edges, maybe_catastrophe};
use crate::{BuildObserver, CostMatrices, CostMatrix, NoopObserver};

/// Builder for one [`CostMatrices`] set.
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                        |
/// |--------------|------------------------------------------------|
/// | `.zones(v)`  | Drawn by `ZoneGenerator` from the build's RNG  |
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = WorldRng::new(seed);
/// let matrices = CostMatrixBuilder::new(&nodes, config).build(&mut rng)?;
/// ```
pub struct CostMatrixBuilder<'a> {
    nodes:  &'a [Node],
    config: WorldConfig,
    zones:  Option<Vec<Zone>>,
}

impl<'a> CostMatrixBuilder<'a> {
    pub fn new(nodes: &'a [Node], config: WorldConfig) -> Self {
        Self { nodes, config, zones: None }
    }

    /// Use exactly these zones instead of drawing them.
    ///
    /// An empty vector disables zone effects entirely.
    pub fn zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Run all three phases.
    pub fn build<R: RandomSource + ?Sized>(self, rng: &mut R) -> TcResult<CostMatrices> {
        self.build_observed(rng, &mut NoopObserver)
    }

    /// Like [`build`](Self::build), reporting zones, closures and any
    /// catastrophe to `observer` after the build succeeds.
    pub fn build_observed<R, O>(self, rng: &mut R, observer: &mut O) -> TcResult<CostMatrices>
    where
        R: RandomSource + ?Sized,
        O: BuildObserver + ?Sized,
    {
        // ── Validate ──────────────────────────────────────────────────────
        Node::validate_set(self.nodes)?;
        self.config.validate()?;
        if let Some(zones) = &self.zones {
            zones.iter().try_for_each(Zone::validate)?;
        }

        let zones = match self.zones {
            Some(z) => z,
            None => ZoneGenerator::new(self.config.zones.clone()).generate(self.nodes, rng)?,
        };

        // ── Phase 1: base costs ───────────────────────────────────────────
        let (distance, mut time, safety) =
            base_costs(self.nodes, &zones, self.config.avg_speed_kmh, rng);

        // ── Phase 2 & 3: disruptions ──────────────────────────────────────
        let closures = close_edges(&mut time, &self.config.disruption, rng);
        let catastrophe = maybe_catastrophe(&mut time, &closures.incident, &self.config.disruption, rng);

        for (name, m) in [("distance", &distance), ("time", &time), ("safety", &safety)] {
            if let Some((from, to, v)) = m.first_non_finite() {
                return Err(TcError::NumericDegenerate(format!(
                    "{name}[{from} -> {to}] is {v}"
                )));
            }
        }

        let matrices = CostMatrices {
            distance,
            time,
            safety,
            zones,
            notifications: closures.notifications,
            catastrophe,
        };

        info!(
            nodes = self.nodes.len(),
            zones = matrices.zones.len(),
            closed_edges = matrices.notifications.len(),
            catastrophe = matrices.catastrophe.is_some(),
            "cost matrices built"
        );

        observer.on_zones(&matrices.zones);
        for n in &matrices.notifications {
            observer.on_notification(n);
        }
        if let Some(event) = &matrices.catastrophe {
            observer.on_catastrophe(event);
        }

        Ok(matrices)
    }
}

/// Phase 1.  Returns `(distance, time, safety)`.
fn base_costs<R: RandomSource + ?Sized>(
    nodes:     &[Node],
    zones:     &[Zone],
    avg_speed: f64,
    rng:       &mut R,
) -> (CostMatrix, CostMatrix, CostMatrix) {
    let n = nodes.len();
    let bound = n as f64;

    let mut distance = CostMatrix::new(n);
    let mut time = CostMatrix::new(n);
    let mut safety = CostMatrix::new(n);
    let mut zone_hits = 0usize;

    for i in 0..n {
        let a = nodes[i].pos;
        for j in (i + 1)..n {
            let b = nodes[j].pos;

            let d = a.distance_km(b);
            distance[(i, j)] = d;
            distance[(j, i)] = d;

            let step = rng.uniform(-bound, bound);
            safety[(i, j)] += step;
            safety[(j, i)] += step;

            // i → j is "forward" for directional zones.
            let base = d / avg_speed;
            let (mut fwd, mut back) = (base, base);
            for zone in zones.iter().filter(|z| z.affects(a, b)) {
                (fwd, back) = zone.apply(fwd, back);
                zone_hits += 1;
            }
            time[(i, j)] = fwd;
            time[(j, i)] = back;
        }
    }

    normalize_safety(&mut safety);

    debug!(pairs = n * (n - 1) / 2, zone_hits, "base costs computed");
    (distance, time, safety)
}

/// Shift off-diagonal safety scores so the smallest is zero.
///
/// Equivalent to re-shifting by the running minimum after every pair: the
/// cumulative shift ends up as `max(0, −min)` over all raw increments.
pub(crate) fn normalize_safety(safety: &mut CostMatrix) {
    if let Some(min) = safety.min_off_diagonal() {
        if min < 0.0 {
            safety.shift_off_diagonal(-min);
        }
    }
}
