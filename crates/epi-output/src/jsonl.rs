//! JSON-lines output backend.
//!
//! Creates two newline-delimited JSON files in the configured output
//! directory, `agent_snapshots.ndjson` and `daily_stats.ndjson`.  Every
//! record carries the run's `simulation_id` so files from several runs can
//! be concatenated and still told apart by a downstream ingester.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, DailyStatsRow, OutputResult};

/// A row with the run label spliced in ahead of the row's own fields.
#[derive(Serialize)]
struct Stamped<'a, T: Serialize> {
    simulation_id: &'a str,
    #[serde(flatten)]
    record: &'a T,
}

/// Writes simulation output as one JSON document per line.
pub struct JsonlWriter {
    snapshots:     BufWriter<File>,
    stats:         BufWriter<File>,
    simulation_id: String,
    finished:      bool,
}

impl JsonlWriter {
    /// Create the two `.ndjson` files under `dir`, stamping every record
    /// with `simulation_id`.
    pub fn new(dir: &Path, simulation_id: &str) -> OutputResult<Self> {
        let snapshots = BufWriter::new(File::create(dir.join("agent_snapshots.ndjson"))?);
        let stats = BufWriter::new(File::create(dir.join("daily_stats.ndjson"))?);
        Ok(Self {
            snapshots,
            stats,
            simulation_id: simulation_id.to_owned(),
            finished: false,
        })
    }

    fn write_line<T: Serialize>(
        out: &mut BufWriter<File>,
        simulation_id: &str,
        record: &T,
    ) -> OutputResult<()> {
        let stamped = Stamped { simulation_id, record };
        serde_json::to_writer(&mut *out, &stamped)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl OutputWriter for JsonlWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            Self::write_line(&mut self.snapshots, &self.simulation_id, row)?;
        }
        Ok(())
    }

    fn write_daily_stats(&mut self, row: &DailyStatsRow) -> OutputResult<()> {
        Self::write_line(&mut self.stats, &self.simulation_id, row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.snapshots.flush()?;
            self.stats.flush()?;
        }
        Ok(())
    }
}
