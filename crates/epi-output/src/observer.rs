//! Adapter feeding simulation events into an [`OutputWriter`].

use epi_agent::Population;
use epi_core::Day;
use epi_sim::{DayStats, SimObserver, StopReason};

use crate::row::{AgentSnapshotRow, DailyStatsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// [`SimObserver`] that turns day-end and snapshot events into writer calls.
///
/// Observer hooks cannot return errors, so the first writer failure is kept
/// aside; call [`take_error`][Self::take_error] once the run is over to find
/// out whether the output is trustworthy.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// First writer failure of the run, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Give the backend writer back, e.g. to look at its files in tests.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record_failure(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Later failures are dropped; the first one names the cause.
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, _day: Day, stats: &DayStats) {
        let row = DailyStatsRow {
            day:                stats.day.0,
            healthy_count:      stats.healthy,
            infected_count:     stats.infected,
            hospitalized_count: stats.hospitalized,
            cured_count:        stats.cured,
            dead_count:         stats.dead,
            work_percentage:    stats.work_percentage,
        };
        let result = self.writer.write_daily_stats(&row);
        self.record_failure(result);
    }

    fn on_snapshot(&mut self, day: Day, population: &Population, _stats: &DayStats) {
        let rows: Vec<AgentSnapshotRow> = population
            .agents
            .iter()
            .enumerate()
            .map(|(i, agent)| AgentSnapshotRow {
                agent_id:     i as u32,
                day:          day.0,
                x:            agent.position.x,
                y:            agent.position.y,
                health_state: agent.health.as_str(),
            })
            .collect();

        let result = self.writer.write_snapshots(&rows);
        self.record_failure(result);
    }

    fn on_sim_end(&mut self, _final_day: Day, _reason: StopReason) {
        let result = self.writer.finish();
        self.record_failure(result);
    }
}
