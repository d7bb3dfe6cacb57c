//! CSV node loader.
//!
//! # CSV format
//!
//! One row per node, in id order.  Ids are assigned from row position.
//!
//! ```csv
//! lat,lon
//! 40.7128,-74.0060
//! 34.0522,-118.2437
//! 41.8781,-87.6298
//! ```
//!
//! Coordinates are only parsed here; range checks happen when the node set
//! reaches `CostMatrixBuilder`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tc_core::Node;

use crate::{OutputError, OutputResult};

#[derive(Deserialize)]
struct NodeRecord {
    lat: f64,
    lon: f64,
}

/// Load a node set from a CSV file.
pub fn load_nodes_csv(path: &Path) -> OutputResult<Vec<Node>> {
    let file = std::fs::File::open(path)?;
    load_nodes_reader(file)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R) -> OutputResult<Vec<Node>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let pairs = csv_reader
        .deserialize::<NodeRecord>()
        .enumerate()
        .map(|(row, result)| {
            result
                .map(|r| [r.lat, r.lon])
                .map_err(|e| OutputError::Parse(format!("node row {row}: {e}")))
        })
        .collect::<OutputResult<Vec<[f64; 2]>>>()?;

    Ok(Node::from_pairs(&pairs)?)
}
