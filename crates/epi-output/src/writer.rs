//! Backend-agnostic writer interface.

use crate::{AgentSnapshotRow, DailyStatsRow, OutputResult};

/// Sink for simulation output, implemented by the CSV, JSONL, and SQLite
/// backends.
///
/// [`SimOutputObserver`](crate::SimOutputObserver) drives these methods from
/// the observer hooks, stashing the first failure instead of propagating it.
pub trait OutputWriter {
    /// Append a batch of per-agent snapshot rows.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Append the statistics row for one completed day.
    fn write_daily_stats(&mut self, row: &DailyStatsRow) -> OutputResult<()>;

    /// Flush buffers and release file handles. Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
