//! CSV output backend: `agent_snapshots.csv` and `daily_stats.csv`.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, DailyStatsRow, OutputResult};

/// Plain-file backend keeping one CSV per table.
///
/// Header rows are written up front so an empty run still produces
/// well-formed files; data rows go through serde, so the columns always track
/// the row structs.
pub struct CsvWriter {
    snapshots: Writer<File>,
    stats:     Writer<File>,
    finished:  bool,
}

fn open_table(path: PathBuf, header: &[&str]) -> OutputResult<Writer<File>> {
    // serde would re-emit a header on the first row, so header handling
    // stays manual here.
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record(header)?;
    Ok(w)
}

impl CsvWriter {
    /// Create both files under `dir` and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let snapshots = open_table(
            dir.join("agent_snapshots.csv"),
            &["agent_id", "day", "x", "y", "health_state"],
        )?;
        let stats = open_table(
            dir.join("daily_stats.csv"),
            &[
                "day",
                "healthy_count",
                "infected_count",
                "hospitalized_count",
                "cured_count",
                "dead_count",
                "work_percentage",
            ],
        )?;
        Ok(Self {
            snapshots,
            stats,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn write_daily_stats(&mut self, row: &DailyStatsRow) -> OutputResult<()> {
        // A `None` work percentage serialises to an empty field.
        self.stats.serialize(row)?;
        Ok(())
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
