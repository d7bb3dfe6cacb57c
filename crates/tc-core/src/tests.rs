//! Unit tests for tc-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display_matches_notification_form() {
        assert_eq!(NodeId(7).to_string(), "Node 7");
    }
}

#[cfg(test)]
mod node {
    use crate::{Node, NodeId, TcError};

    #[test]
    fn from_pairs_numbers_sequentially() {
        let nodes = Node::from_pairs(&[[30.0, -88.0], [31.0, -87.5], [29.5, -90.1]]).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2].id, NodeId(2));
        assert_eq!(nodes[1].pos.lat, 31.0);
        assert_eq!(nodes[1].pos.lon, -87.5);
        assert!(Node::validate_set(&nodes).is_ok());
    }

    #[test]
    fn fewer_than_two_nodes_rejected() {
        let one = Node::from_pairs(&[[0.0, 0.0]]).unwrap();
        assert!(matches!(Node::validate_set(&one), Err(TcError::InvalidInput(_))));
        assert!(matches!(Node::validate_set(&[]), Err(TcError::InvalidInput(_))));
    }

    #[test]
    fn out_of_order_ids_rejected() {
        let nodes = [Node::new(NodeId(1), 0.0, 0.0), Node::new(NodeId(0), 1.0, 1.0)];
        assert!(matches!(Node::validate_set(&nodes), Err(TcError::InvalidInput(_))));
    }

    #[test]
    fn malformed_coordinates_rejected() {
        let nan = Node::from_pairs(&[[0.0, 0.0], [f64::NAN, 1.0]]).unwrap();
        assert!(Node::validate_set(&nan).is_err());

        let off_globe = Node::from_pairs(&[[0.0, 0.0], [95.0, 1.0]]).unwrap();
        assert!(Node::validate_set(&off_globe).is_err());
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, GeoPoint, haversine_km, segment_circle_intersects};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn symmetric() {
        let d1 = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);
        let d2 = haversine_km(34.0522, -118.2437, 40.7128, -74.0060);
        assert_eq!(d1, d2);
        // New York → Los Angeles ≈ 3936 km
        assert!((d1 - 3936.0).abs() < 10.0, "got {d1}");
    }

    #[test]
    fn antipodal_points_do_not_nan() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * 6371.0).abs() < 1e-6);
    }

    #[test]
    fn endpoint_inside_circle_intersects() {
        // (0.5, 0) inside unit circle at origin; other end far away.
        assert!(segment_circle_intersects(0.5, 0.0, 10.0, 0.0, 0.0, 0.0, 1.0));
        assert!(segment_circle_intersects(10.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn crossing_segment_intersects() {
        assert!(segment_circle_intersects(-5.0, 0.0, 5.0, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn segment_wholly_inside_intersects() {
        assert!(segment_circle_intersects(-0.1, 0.0, 0.1, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn distant_segment_misses() {
        // Parallel line 2 units above the unit circle.
        assert!(!segment_circle_intersects(-5.0, 2.0, 5.0, 2.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn line_hits_but_segment_stops_short() {
        // The infinite line through the segment crosses the circle, the
        // segment itself ends before reaching it.
        assert!(!segment_circle_intersects(3.0, 0.0, 5.0, 0.0, 0.0, 0.0, 1.0));
        assert!(!segment_circle_intersects(-5.0, 0.0, -3.0, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn zero_length_segment_is_a_point_test() {
        assert!(segment_circle_intersects(0.2, 0.2, 0.2, 0.2, 0.0, 0.0, 1.0));
        assert!(!segment_circle_intersects(3.0, 3.0, 3.0, 3.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn geo_point_uses_lon_as_x() {
        let a = GeoPoint::new(0.0, -5.0);
        let b = GeoPoint::new(0.0, 5.0);
        assert!(a.segment_hits_circle(b, GeoPoint::new(0.5, 0.0), 1.0));
        // Same circle shifted 3° north: the east-west segment passes below it.
        assert!(!a.segment_hits_circle(b, GeoPoint::new(3.0, 0.0), 1.0));
    }

    #[test]
    fn bounding_box() {
        let pts = [GeoPoint::new(30.0, -90.0), GeoPoint::new(35.0, -85.0), GeoPoint::new(32.0, -95.0)];
        let bbox = BoundingBox::of(pts).unwrap();
        assert_eq!(bbox.lat_min, 30.0);
        assert_eq!(bbox.lat_max, 35.0);
        assert_eq!(bbox.lon_min, -95.0);
        assert_eq!(bbox.lon_max, -85.0);
        assert_eq!(bbox.lat_span(), 5.0);
        assert!(BoundingBox::of(std::iter::empty()).is_err());
    }
}

#[cfg(test)]
mod geo_props {
    use proptest::prelude::*;

    use crate::{haversine_km, segment_circle_intersects};

    fn lat() -> impl Strategy<Value = f64> {
        -60.0f64..60.0
    }

    fn lon() -> impl Strategy<Value = f64> {
        -179.0f64..179.0
    }

    proptest! {
        #[test]
        fn haversine_is_zero_on_identity(a in lat(), b in lon()) {
            prop_assert_eq!(haversine_km(a, b, a, b), 0.0);
        }

        #[test]
        fn haversine_is_symmetric(a1 in lat(), o1 in lon(), a2 in lat(), o2 in lon()) {
            let d1 = haversine_km(a1, o1, a2, o2);
            let d2 = haversine_km(a2, o2, a1, o1);
            prop_assert!(d1 >= 0.0);
            prop_assert!((d1 - d2).abs() < 1e-9);
        }

        #[test]
        fn haversine_triangle_inequality(
            a1 in 24.5f64..49.5, o1 in -124.8f64..-66.9,
            a2 in 24.5f64..49.5, o2 in -124.8f64..-66.9,
            a3 in 24.5f64..49.5, o3 in -124.8f64..-66.9,
        ) {
            let ab = haversine_km(a1, o1, a2, o2);
            let bc = haversine_km(a2, o2, a3, o3);
            let ac = haversine_km(a1, o1, a3, o3);
            prop_assert!(ac <= ab + bc + 1e-6);
        }

        #[test]
        fn endpoint_strictly_inside_always_hits(
            cx in -10.0f64..10.0, cy in -10.0f64..10.0, r in 0.1f64..5.0,
            frac in 0.0f64..0.99, angle in 0.0f64..std::f64::consts::TAU,
            x2 in -50.0f64..50.0, y2 in -50.0f64..50.0,
        ) {
            let x1 = cx + frac * r * angle.cos();
            let y1 = cy + frac * r * angle.sin();
            prop_assert!(segment_circle_intersects(x1, y1, x2, y2, cx, cy, r));
        }

        #[test]
        fn segment_beyond_radius_never_hits(
            r in 0.1f64..5.0, gap in 0.01f64..10.0,
            x1 in -50.0f64..50.0, x2 in -50.0f64..50.0,
        ) {
            // Horizontal segment at height r + gap above a circle at origin:
            // every point is farther than r from the center.
            let y = r + gap;
            prop_assert!(!segment_circle_intersects(x1, y, x2, y, 0.0, 0.0, r));
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, ReplayRng, WorldRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = WorldRng::new(12345);
        let mut r2 = WorldRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(-3.0, 3.0), r2.uniform(-3.0, 3.0));
            assert_eq!(r1.index(17), r2.index(17));
        }
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = WorldRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(0.4, 0.8);
            assert!((0.4..0.8).contains(&v));
        }
    }

    #[test]
    fn empty_range_returns_lower_bound() {
        let mut rng = WorldRng::new(0);
        assert_eq!(rng.uniform(0.0, 0.0), 0.0);
        assert_eq!(rng.uniform(2.5, 1.0), 2.5);
    }

    #[test]
    fn index_in_bounds() {
        let mut rng = WorldRng::new(9);
        for _ in 0..1000 {
            assert!(rng.index(5) < 5);
        }
    }

    #[test]
    fn replay_maps_and_cycles() {
        let mut rng = ReplayRng::new([0.5, 0.25]);
        assert_eq!(rng.uniform(0.0, 10.0), 5.0);
        assert_eq!(rng.index(8), 2);
        // Cycles back to the first draw.
        assert_eq!(rng.uniform(-1.0, 1.0), 0.0);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn replay_index_never_reaches_n() {
        let mut rng = ReplayRng::new([1.0]);
        assert_eq!(rng.index(4), 3);
    }

    #[test]
    fn children_diverge() {
        let mut root = WorldRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        assert_ne!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{DisruptionConfig, TcError, UniformRange, WorldConfig};

    #[test]
    fn defaults_are_valid() {
        assert!(WorldConfig::default().validate().is_ok());
        assert!(DisruptionConfig::disabled().validate().is_ok());
    }

    #[test]
    fn non_positive_speed_is_invalid_input() {
        let cfg = WorldConfig { avg_speed_kmh: 0.0, ..WorldConfig::default() };
        assert!(matches!(cfg.validate(), Err(TcError::InvalidInput(_))));

        let cfg = WorldConfig { avg_speed_kmh: -10.0, ..WorldConfig::default() };
        assert!(matches!(cfg.validate(), Err(TcError::InvalidInput(_))));
    }

    #[test]
    fn inverted_range_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.disruption.neighbour_fraction = UniformRange::new(0.8, 0.4);
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));
    }

    #[test]
    fn non_positive_scale_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.zones.good_terrain_scale = UniformRange::new(0.0, 0.9);
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.disruption.catastrophe_probability = 1.5;
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));
    }

    #[test]
    fn oversized_fraction_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.disruption.affected_fraction = UniformRange::fixed(1e30);
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));

        let mut cfg = WorldConfig::default();
        cfg.disruption.neighbour_fraction = UniformRange::new(0.4, 1.5);
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));

        let mut cfg = WorldConfig::default();
        cfg.disruption.affected_fraction = UniformRange::fixed(1.0);
        cfg.disruption.neighbour_fraction = UniformRange::fixed(1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn oversized_min_zone_count_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.zones.min_count = usize::MAX;
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));
    }

    #[test]
    fn zero_kind_weights_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.zones.kind_weights = [0.0; 4];
        assert!(matches!(cfg.validate(), Err(TcError::Config(_))));
    }
}
