//! `tc-output` — hand-off formats for the optimizer and the visualizer.
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`csv`]    | `CsvWriter`: matrices, zones, notifications                 |
//! | [`loader`] | `load_nodes_csv`, `load_nodes_reader`                       |
//! | [`error`]  | `OutputError`, `OutputResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tc_output::CsvWriter;
//!
//! let nodes = tc_output::load_nodes_csv(Path::new("nodes.csv"))?;
//! let matrices = CostMatrixBuilder::new(&nodes, config).build(&mut rng)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_all(&matrices)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod loader;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use loader::{load_nodes_csv, load_nodes_reader};
