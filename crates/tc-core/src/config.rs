//! Build configuration.
//!
//! The defaults are empirical constants; none is derived from a model.
//!
//! Typically loaded from a TOML/JSON file by the application crate (enable
//! the `serde` feature) and passed to `CostMatrixBuilder`.

use crate::{RandomSource, TcError, TcResult};

// ── UniformRange ──────────────────────────────────────────────────────────────

/// Closed-open interval `[lo, hi)` sampled uniformly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRange {
    pub lo: f64,
    pub hi: f64,
}

impl UniformRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// A degenerate range that always samples `v`.
    pub const fn fixed(v: f64) -> Self {
        Self { lo: v, hi: v }
    }

    #[inline]
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.uniform(self.lo, self.hi)
    }

    fn check(&self, what: &str) -> TcResult<()> {
        if !self.lo.is_finite() || !self.hi.is_finite() || self.lo > self.hi {
            return Err(TcError::Config(format!(
                "{what}: [{}, {}) is not a finite ordered range",
                self.lo, self.hi
            )));
        }
        Ok(())
    }

    fn check_positive(&self, what: &str) -> TcResult<()> {
        self.check(what)?;
        if self.lo <= 0.0 {
            return Err(TcError::Config(format!("{what}: lower bound must be > 0, got {}", self.lo)));
        }
        Ok(())
    }

    /// A fraction of the node count: both bounds in `[0, 1]`.
    fn check_fraction(&self, what: &str) -> TcResult<()> {
        self.check(what)?;
        if self.lo < 0.0 || self.hi > 1.0 {
            return Err(TcError::Config(format!(
                "{what}: [{}, {}) must lie within [0, 1]",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

/// Hard ceiling on the number of zones drawn per build.
pub const MAX_ZONE_COUNT: usize = 10_000;

// ── ZoneConfig ────────────────────────────────────────────────────────────────

/// Controls how many world-element zones are drawn and what they look like.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneConfig {
    /// Constant term of `round(count_base + count_log_coeff · log10(N))`.
    pub count_base: f64,

    /// Growth of the zone count per decade of nodes.
    pub count_log_coeff: f64,

    /// Floor applied to the zone count (also the count for `N <= 1`).
    /// At most [`MAX_ZONE_COUNT`].
    pub min_count: usize,

    /// Radius as a fraction of the node set's latitude span.
    pub radius_fraction: UniformRange,

    /// Categorical weights, in order: hill, bad terrain, good terrain,
    /// bottleneck.  Need not sum to 1.
    pub kind_weights: [f64; 4],

    /// Uphill factor; downhill divides by the same draw.
    pub hill_scale: UniformRange,
    pub bad_terrain_scale: UniformRange,
    /// Below 1: good terrain speeds travel up.
    pub good_terrain_scale: UniformRange,
    pub bottleneck_scale: UniformRange,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            count_base: 4.0,
            count_log_coeff: 5.0,
            min_count: 4,
            radius_fraction: UniformRange::new(0.05, 0.25),
            kind_weights: [0.30, 0.30, 0.25, 0.15],
            hill_scale: UniformRange::new(1.25, 1.75),
            bad_terrain_scale: UniformRange::new(1.10, 1.50),
            good_terrain_scale: UniformRange::new(0.50, 0.90),
            bottleneck_scale: UniformRange::new(1.80, 3.00),
        }
    }
}

impl ZoneConfig {
    pub fn validate(&self) -> TcResult<()> {
        if !self.count_base.is_finite() || !self.count_log_coeff.is_finite() {
            return Err(TcError::Config("zone count coefficients must be finite".into()));
        }
        if self.min_count > MAX_ZONE_COUNT {
            return Err(TcError::Config(format!(
                "minimum zone count {} exceeds {MAX_ZONE_COUNT}",
                self.min_count
            )));
        }
        self.radius_fraction.check("zone radius fraction")?;

        if self.kind_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(TcError::Config(format!(
                "zone kind weights must be finite and >= 0, got {:?}",
                self.kind_weights
            )));
        }
        if self.kind_weights.iter().sum::<f64>() <= 0.0 {
            return Err(TcError::Config("zone kind weights sum to zero".into()));
        }

        self.hill_scale.check_positive("hill scale")?;
        self.bad_terrain_scale.check_positive("bad terrain scale")?;
        self.good_terrain_scale.check_positive("good terrain scale")?;
        self.bottleneck_scale.check_positive("bottleneck scale")?;
        Ok(())
    }
}

// ── DisruptionConfig ──────────────────────────────────────────────────────────

/// Extent and severity of the stochastic disruption phases.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisruptionConfig {
    /// Fraction of N drawn as the number of incident nodes.  Within `[0, 1]`.
    pub affected_fraction: UniformRange,

    /// Fraction of N drawn as the number of candidate neighbours per
    /// incident node.  Within `[0, 1]`.
    pub neighbour_fraction: UniformRange,

    /// Time cost written to a closed edge.
    pub impossible_cost: f64,

    /// Chance that one incident node suffers a catastrophic event.
    pub catastrophe_probability: f64,

    /// Factor applied to every edge touching the catastrophic node.
    pub catastrophe_multiplier: f64,
}

impl Default for DisruptionConfig {
    fn default() -> Self {
        Self {
            affected_fraction: UniformRange::new(0.05, 0.25),
            neighbour_fraction: UniformRange::new(0.4, 0.8),
            impossible_cost: 1e15,
            catastrophe_probability: 0.10,
            catastrophe_multiplier: 1e10,
        }
    }
}

impl DisruptionConfig {
    /// No closures and no catastrophe.
    pub fn disabled() -> Self {
        Self {
            affected_fraction: UniformRange::fixed(0.0),
            catastrophe_probability: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> TcResult<()> {
        self.affected_fraction.check_fraction("affected fraction")?;
        self.neighbour_fraction.check_fraction("neighbour fraction")?;

        if !self.impossible_cost.is_finite() || self.impossible_cost <= 0.0 {
            return Err(TcError::Config(format!(
                "impossible cost must be finite and > 0, got {}",
                self.impossible_cost
            )));
        }
        if !(0.0..=1.0).contains(&self.catastrophe_probability) {
            return Err(TcError::Config(format!(
                "catastrophe probability must be in [0, 1], got {}",
                self.catastrophe_probability
            )));
        }
        if !self.catastrophe_multiplier.is_finite() || self.catastrophe_multiplier <= 0.0 {
            return Err(TcError::Config(format!(
                "catastrophe multiplier must be finite and > 0, got {}",
                self.catastrophe_multiplier
            )));
        }
        Ok(())
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration for one cost-matrix build.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Average travel speed, km/h.  Time costs are in hours.
    pub avg_speed_kmh: f64,

    /// World-element zone generation.
    pub zones: ZoneConfig,

    /// Localized closures and the catastrophic event.
    pub disruption: DisruptionConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            avg_speed_kmh: 50.0,
            zones: ZoneConfig::default(),
            disruption: DisruptionConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Reject configurations the build cannot honour.
    ///
    /// A non-positive speed is an input error rather than a config error:
    /// it is the one knob callers routinely set per run.
    pub fn validate(&self) -> TcResult<()> {
        if !self.avg_speed_kmh.is_finite() || self.avg_speed_kmh <= 0.0 {
            return Err(TcError::InvalidInput(format!(
                "average speed must be finite and > 0, got {}",
                self.avg_speed_kmh
            )));
        }
        self.zones.validate()?;
        self.disruption.validate()
    }
}
