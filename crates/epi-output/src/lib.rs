//! `epi-output` — output backends for `episim` runs.
//!
//! | Backend | Files written                                  | Feature  |
//! |---------|------------------------------------------------|----------|
//! | CSV     | `agent_snapshots.csv`, `daily_stats.csv`       | built in |
//! | JSONL   | `agent_snapshots.ndjson`, `daily_stats.ndjson` | built in |
//! | SQLite  | `output.db`                                    | `sqlite` |
//!
//! Every backend implements [`OutputWriter`]. [`SimOutputObserver`] adapts a
//! writer to the `epi_sim::SimObserver` hooks: one statistics row per
//! completed day, a batch of agent snapshots whenever the snapshot interval
//! fires, and `finish` once the run stops.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new("out"))?);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod jsonl;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use jsonl::JsonlWriter;
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, DailyStatsRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
