//! Geographic coordinates, great-circle distance, and planar zone geometry.
//!
//! # Coordinate conventions
//!
//! Two spaces are in play and they are kept apart on purpose:
//!
//! - **Spherical**: [`haversine_km`] treats `(lat, lon)` as degrees on a
//!   sphere of radius 6371 km.  All distance and time costs come from here.
//! - **Planar degrees**: [`segment_circle_intersects`] treats longitude as
//!   `x` and latitude as `y` on a flat plane, with zone radii expressed in
//!   the same degree units.  Only zone hit-testing uses this space.
//!
//! The planar space is not geodesically exact.  A zone of radius `r` covers
//! `r` degrees of latitude but `r · cos(lat)` degrees' worth of ground
//! distance in longitude.  That distortion is accepted.

use crate::TcResult;
use crate::error::TcError;

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Haversine great-circle distance in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Does the segment `(x1, y1) → (x2, y2)` touch the circle at `(cx, cy)`
/// with radius `r`?
///
/// Solves `|P1 + t·(P2 − P1) − C|² = r²` for `t`.  The segment hits the
/// circle if either root lies in `[0, 1]`, or if the roots straddle the
/// interval (`t₁ < 0` and `t₂ > 1`), which is the segment lying wholly
/// inside the circle.
///
/// A zero-length segment has no quadratic term; it is tested as a point.
pub fn segment_circle_intersects(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    cx: f64,
    cy: f64,
    r: f64,
) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let fx = x1 - cx;
    let fy = y1 - cy;

    let a = dx * dx + dy * dy;
    let c = fx * fx + fy * fy - r * r;

    if a == 0.0 {
        return c <= 0.0;
    }

    let b = 2.0 * (fx * dx + fy * dy);
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return false;
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2) || (t1 < 0.0 && t2 > 1.0)
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A geographic coordinate in decimal degrees.
///
/// Double precision: the builder compares computed costs against
/// distance/speed exactly, and zone hit-tests near tangency are sensitive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }

    /// Planar hit-test of the segment `self → other` against a circle.
    #[inline]
    pub fn segment_hits_circle(self, other: GeoPoint, center: GeoPoint, radius: f64) -> bool {
        segment_circle_intersects(
            self.lon, self.lat, other.lon, other.lat, center.lon, center.lat, radius,
        )
    }

    /// Finite and inside `[-90, 90] × [-180, 180]`.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned lat/lon extent of a point set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Extent of `points`.  Fails on an empty iterator.
    pub fn of<I>(points: I) -> TcResult<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| TcError::InvalidInput("bounding box of an empty point set".into()))?;

        let mut bbox = BoundingBox {
            lat_min: first.lat,
            lat_max: first.lat,
            lon_min: first.lon,
            lon_max: first.lon,
        };
        for p in iter {
            bbox.lat_min = bbox.lat_min.min(p.lat);
            bbox.lat_max = bbox.lat_max.max(p.lat);
            bbox.lon_min = bbox.lon_min.min(p.lon);
            bbox.lon_max = bbox.lon_max.max(p.lon);
        }
        Ok(bbox)
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }
}
