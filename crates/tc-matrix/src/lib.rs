//! `tc-matrix` — the cost-matrix perturbation engine.
//!
//! Turns a node set into three `N × N` matrices (distance in km, time in
//! hours, and a unitless safety score) plus a log of closed edges.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`matrix`]     | `CostMatrix` dense row-major storage                     |
//! | [`builder`]    | `CostMatrixBuilder`, the three build phases              |
//! | [`disruption`] | `Notification`, `CatastrophicEvent`                      |
//! | [`matrices`]   | `CostMatrices` build output, `ObjectiveWeights`          |
//! | [`observer`]   | `BuildObserver` callbacks, `NoopObserver`                |
//!
//! # Example
//!
//! ```
//! use tc_core::{Node, WorldConfig, WorldRng};
//! use tc_matrix::CostMatrixBuilder;
//!
//! let nodes = Node::from_pairs(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]).unwrap();
//! let mut rng = WorldRng::new(42);
//! let m = CostMatrixBuilder::new(&nodes, WorldConfig::default())
//!     .zones(Vec::new())
//!     .build(&mut rng)
//!     .unwrap();
//! assert_eq!(m.distance.size(), 3);
//! assert!(m.safety.min() >= 0.0);
//! ```

pub mod builder;
pub mod disruption;
pub mod matrices;
pub mod matrix;
pub mod observer;


pub use builder::CostMatrixBuilder;
pub use disruption::{CatastrophicEvent, Notification};
pub use matrices::{CostMatrices, ObjectiveWeights};
pub use matrix::CostMatrix;
pub use observer::{BuildObserver, NoopObserver};
