//! Random zone placement over a node set's bounding box.
//!
//! All draws come from the caller's [`RandomSource`], in this order per
//! zone: radius, center latitude, center longitude, kind, scale.  Tests
//! that script a source rely on that order.

use tracing::debug;

use tc_core::{BoundingBox, GeoPoint, MAX_ZONE_COUNT, Node, RandomSource, TcResult, ZoneConfig};

use crate::{Zone, ZoneKind};

/// Number of zones to draw for `node_count` nodes:
/// `round(count_base + count_log_coeff · log10(node_count))`, never below
/// `min_count` and never above [`MAX_ZONE_COUNT`].
pub fn zone_count(node_count: usize, cfg: &ZoneConfig) -> usize {
    let floor = cfg.min_count.min(MAX_ZONE_COUNT);
    if node_count <= 1 {
        return floor;
    }
    let raw = (cfg.count_base + cfg.count_log_coeff * (node_count as f64).log10()).round();
    if raw.is_finite() && raw > 0.0 {
        (raw.min(MAX_ZONE_COUNT as f64) as usize).max(floor)
    } else {
        floor
    }
}

/// Draws a fresh zone set for each build.
///
/// Holds no randomness of its own; the same generator may be reused with
/// different sources.
#[derive(Clone, Debug, Default)]
pub struct ZoneGenerator {
    config: ZoneConfig,
}

impl ZoneGenerator {
    pub fn new(config: ZoneConfig) -> Self {
        Self { config }
    }

    /// Draw `zone_count(nodes.len())` zones inside the nodes' bounding box.
    ///
    /// Radii are a fraction of the latitude span, so a node set on a single
    /// parallel yields zero-radius zones that only catch segments passing
    /// exactly through their centers.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        nodes: &[Node],
        rng:   &mut R,
    ) -> TcResult<Vec<Zone>> {
        let bbox = BoundingBox::of(nodes.iter().map(|n| n.pos))?;
        let count = zone_count(nodes.len(), &self.config);
        let lat_span = bbox.lat_span();

        let mut zones = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = rng
                .uniform(
                    self.config.radius_fraction.lo * lat_span,
                    self.config.radius_fraction.hi * lat_span,
                )
                .abs();
            let lat = rng.uniform(bbox.lat_min, bbox.lat_max);
            let lon = rng.uniform(bbox.lon_min, bbox.lon_max);
            let kind = self.pick_kind(rng);
            let scale = kind.scale_range(&self.config).sample(rng);

            zones.push(Zone::new(kind, GeoPoint::new(lat, lon), radius, scale)?);
        }

        debug!(count, lat_span, "generated world-element zones");
        Ok(zones)
    }

    /// Categorical draw over `kind_weights`.
    fn pick_kind<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ZoneKind {
        let weights = &self.config.kind_weights;
        let total: f64 = weights.iter().sum();
        let mut u = rng.uniform(0.0, total);

        for (kind, &w) in ZoneKind::ALL.iter().zip(weights) {
            if u < w {
                return *kind;
            }
            u -= w;
        }
        // Rounding can leave `u` a hair past the last bucket.
        ZoneKind::ALL
            .iter()
            .zip(weights)
            .rev()
            .find(|(_, w)| **w > 0.0)
            .map(|(k, _)| *k)
            .unwrap_or(ZoneKind::Bottleneck)
    }
}
