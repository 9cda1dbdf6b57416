//! Hook points the day loop exposes to embedders.

use epi_agent::Population;
use epi_core::Day;

use crate::{DayStats, StopReason};

/// Event hooks fired by [`Sim::run`][crate::Sim::run] as the day loop
/// advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks return nothing; observers that
/// can fail (output writers, say) stash their first error and expose it for
/// collection after the run.
///
/// # Example
///
/// ```rust,ignore
/// struct DayPrinter;
///
/// impl SimObserver for DayPrinter {
///     fn on_day_end(&mut self, day: Day, stats: &DayStats) {
///         println!("{day}: {} infected, {} dead", stats.infected, stats.dead);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each stepped day, before any processing.
    /// Day 0 is not stepped and gets no start callback.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called once per recorded day with that day's statistics, day 0
    /// included.
    fn on_day_end(&mut self, _day: Day, _stats: &DayStats) {}

    /// Called on snapshot days (every `snapshot_interval_days`, day 0
    /// included; never when the interval is 0).
    ///
    /// Provides read-only access to the full population so output writers
    /// can record per-agent state without the sim knowing about any specific
    /// output format.
    fn on_snapshot(&mut self, _day: Day, _population: &Population, _stats: &DayStats) {}

    /// Called exactly once, after the run has stopped for `reason`.
    fn on_sim_end(&mut self, _final_day: Day, _reason: StopReason) {}
}

/// Observer with every hook left at the default no-op, for callers that run
/// the sim purely for its end state.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
