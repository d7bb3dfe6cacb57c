//! `tc-core` — foundational types for the `terrain-cost` workspace.
//!
//! Every other `tc-*` crate depends on this one.  It has no `tc-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `NodeId`                                                   |
//! | [`node`]   | `Node`, node-set validation                                |
//! | [`geo`]    | `GeoPoint`, `BoundingBox`, haversine, segment/circle test  |
//! | [`rng`]    | `RandomSource` trait, `WorldRng`, `ReplayRng`              |
//! | [`config`] | `WorldConfig`, `ZoneConfig`, `DisruptionConfig`            |
//! | [`error`]  | `TcError`, `TcResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to nodes, points, config.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod node;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DisruptionConfig, MAX_ZONE_COUNT, UniformRange, WorldConfig, ZoneConfig};
pub use error::{TcError, TcResult};
pub use geo::{BoundingBox, GeoPoint, haversine_km, segment_circle_intersects};
pub use ids::NodeId;
pub use node::Node;
pub use rng::{RandomSource, ReplayRng, WorldRng};
