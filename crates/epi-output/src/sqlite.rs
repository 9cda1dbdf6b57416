//! SQLite backend (feature `sqlite`): one `output.db` per run.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, DailyStatsRow, OutputResult};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS agent_snapshots (
        agent_id     INTEGER NOT NULL,
        day          INTEGER NOT NULL,
        x            REAL    NOT NULL,
        y            REAL    NOT NULL,
        health_state TEXT    NOT NULL
    );
    CREATE TABLE IF NOT EXISTS daily_stats (
        day                INTEGER PRIMARY KEY,
        healthy_count      INTEGER NOT NULL,
        infected_count     INTEGER NOT NULL,
        hospitalized_count INTEGER NOT NULL,
        cured_count        INTEGER NOT NULL,
        dead_count         INTEGER NOT NULL,
        work_percentage    REAL
    );
";

/// Single-file database backend holding both output tables.
///
/// `work_percentage` is the only nullable column; it is NULL for runs with
/// workforce tracking disabled.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open `output.db` under `dir`, creating the tables if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots (agent_id, day, x, y, health_state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.day,
                    row.x,
                    row.y,
                    row.health_state,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_daily_stats(&mut self, row: &DailyStatsRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO daily_stats (day, healthy_count, infected_count, \
             hospitalized_count, cured_count, dead_count, work_percentage) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        stmt.execute(rusqlite::params![
            row.day,
            row.healthy_count,
            row.infected_count,
            row.hospitalized_count,
            row.cured_count,
            row.dead_count,
            row.work_percentage,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        }
        Ok(())
    }
}
