//! Circular world elements and their effect on travel time.

use tc_core::{GeoPoint, TcError, TcResult, UniformRange, ZoneConfig};

/// What a zone represents on the ground.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneKind {
    /// Slower in the forward direction of a segment, faster in reverse.
    Hill,
    /// Slower both ways.
    BadTerrain,
    /// Faster both ways.
    GoodTerrain,
    /// Much slower both ways.
    Bottleneck,
}

impl ZoneKind {
    /// Order matches `ZoneConfig::kind_weights`.
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Hill,
        ZoneKind::BadTerrain,
        ZoneKind::GoodTerrain,
        ZoneKind::Bottleneck,
    ];

    /// Scale range this kind draws from.
    pub fn scale_range(self, cfg: &ZoneConfig) -> UniformRange {
        match self {
            ZoneKind::Hill        => cfg.hill_scale,
            ZoneKind::BadTerrain  => cfg.bad_terrain_scale,
            ZoneKind::GoodTerrain => cfg.good_terrain_scale,
            ZoneKind::Bottleneck  => cfg.bottleneck_scale,
        }
    }

    /// `true` only for hills, whose effect depends on travel direction.
    #[inline]
    pub fn is_directional(self) -> bool {
        matches!(self, ZoneKind::Hill)
    }

    /// Human-readable label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneKind::Hill        => "hill",
            ZoneKind::BadTerrain  => "bad_terrain",
            ZoneKind::GoodTerrain => "good_terrain",
            ZoneKind::Bottleneck  => "bottleneck",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A circle in planar lon/lat degree space that scales the travel time of
/// every segment passing through it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    /// Radius in degrees.
    pub radius: f64,
    pub center: GeoPoint,
    pub kind:   ZoneKind,
    /// Multiplicative time factor.  Always `> 0`.
    pub scale:  f64,
}

impl Zone {
    /// Construct a zone, rejecting shapes the builder cannot apply.
    pub fn new(kind: ZoneKind, center: GeoPoint, radius: f64, scale: f64) -> TcResult<Self> {
        let zone = Self { radius, center, kind, scale };
        zone.validate()?;
        Ok(zone)
    }

    pub fn validate(&self) -> TcResult<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(TcError::InvalidInput(format!(
                "{} zone radius must be finite and >= 0, got {}",
                self.kind, self.radius
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TcError::InvalidInput(format!(
                "{} zone scale must be finite and > 0, got {}",
                self.kind, self.scale
            )));
        }
        if !self.center.lat.is_finite() || !self.center.lon.is_finite() {
            return Err(TcError::InvalidInput(format!(
                "{} zone center {} is not finite",
                self.kind, self.center
            )));
        }
        Ok(())
    }

    /// Does the segment `a → b` pass through this zone?
    #[inline]
    pub fn affects(&self, a: GeoPoint, b: GeoPoint) -> bool {
        a.segment_hits_circle(b, self.center, self.radius)
    }

    /// Apply this zone to the `(a → b, b → a)` travel times of a segment it
    /// affects.
    ///
    /// A hill treats `a → b` as uphill: multiplied going forward, divided
    /// coming back.  Every other kind multiplies both directions.
    #[inline]
    pub fn apply(&self, forward: f64, backward: f64) -> (f64, f64) {
        if self.kind.is_directional() {
            (forward * self.scale, backward / self.scale)
        } else {
            (forward * self.scale, backward * self.scale)
        }
    }
}
