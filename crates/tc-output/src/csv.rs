//! CSV output backend.
//!
//! Creates six files in the configured output directory:
//! - `distance.csv`, `time.csv`, `safety.csv`: long form `from,to,cost`,
//!   one row per ordered pair (diagonal included), row-major.
//! - `zones.csv`
//! - `notifications.csv`
//! - `alerts.csv`: the catastrophic event, if any.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use tc_matrix::{CatastrophicEvent, CostMatrices, CostMatrix, Notification};
use tc_zones::Zone;

use crate::OutputResult;

/// Writes one build's output to CSV files.
pub struct CsvWriter {
    distance:      Writer<File>,
    time:          Writer<File>,
    safety:        Writer<File>,
    zones:         Writer<File>,
    notifications: Writer<File>,
    alerts:        Writer<File>,
    finished:      bool,
}

impl CsvWriter {
    /// Open (or create) the files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let matrix = |name: &str| -> OutputResult<Writer<File>> {
            let mut w = Writer::from_path(dir.join(name))?;
            w.write_record(["from", "to", "cost"])?;
            Ok(w)
        };

        let mut zones = Writer::from_path(dir.join("zones.csv"))?;
        zones.write_record(["kind", "center_lat", "center_lon", "radius", "scale"])?;

        let mut notifications = Writer::from_path(dir.join("notifications.csv"))?;
        notifications.write_record(["node_a", "node_b", "message"])?;

        let mut alerts = Writer::from_path(dir.join("alerts.csv"))?;
        alerts.write_record(["node", "multiplier", "message"])?;

        Ok(Self {
            distance: matrix("distance.csv")?,
            time: matrix("time.csv")?,
            safety: matrix("safety.csv")?,
            zones,
            notifications,
            alerts,
            finished: false,
        })
    }

    /// Write every part of a build.
    pub fn write_all(&mut self, matrices: &CostMatrices) -> OutputResult<()> {
        write_matrix(&mut self.distance, &matrices.distance)?;
        write_matrix(&mut self.time, &matrices.time)?;
        write_matrix(&mut self.safety, &matrices.safety)?;
        self.write_zones(&matrices.zones)?;
        self.write_notifications(&matrices.notifications)?;
        if let Some(event) = &matrices.catastrophe {
            self.write_alert(event)?;
        }
        debug!(nodes = matrices.node_count(), "cost matrices written as CSV");
        Ok(())
    }

    pub fn write_zones(&mut self, zones: &[Zone]) -> OutputResult<()> {
        for z in zones {
            self.zones.write_record(&[
                z.kind.to_string(),
                z.center.lat.to_string(),
                z.center.lon.to_string(),
                z.radius.to_string(),
                z.scale.to_string(),
            ])?;
        }
        Ok(())
    }

    pub fn write_notifications(&mut self, notifications: &[Notification]) -> OutputResult<()> {
        for n in notifications {
            self.notifications
                .write_record(&[n.a.0.to_string(), n.b.0.to_string(), n.to_string()])?;
        }
        Ok(())
    }

    pub fn write_alert(&mut self, event: &CatastrophicEvent) -> OutputResult<()> {
        self.alerts.write_record(&[
            event.node.0.to_string(),
            event.multiplier.to_string(),
            event.to_string(),
        ])?;
        Ok(())
    }

    /// Flush all underlying file handles.
    ///
    /// Idempotent; later calls return `Ok(())` without flushing again.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for w in [
            &mut self.distance,
            &mut self.time,
            &mut self.safety,
            &mut self.zones,
            &mut self.notifications,
            &mut self.alerts,
        ] {
            w.flush()?;
        }
        Ok(())
    }
}

fn write_matrix(w: &mut Writer<File>, m: &CostMatrix) -> OutputResult<()> {
    for (from, to, cost) in m.iter() {
        w.write_record(&[from.0.to_string(), to.0.to_string(), cost.to_string()])?;
    }
    Ok(())
}
