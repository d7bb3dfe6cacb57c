//! `tc-zones` — randomized circular world elements.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`zone`]      | `Zone`, `ZoneKind`, directional time effect            |
//! | [`generator`] | `ZoneGenerator`, `zone_count`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod generator;
pub mod zone;


pub use generator::{ZoneGenerator, zone_count};
pub use zone::{Zone, ZoneKind};
