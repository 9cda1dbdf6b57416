//! The `Sim` struct and its day loop.

use std::fmt;

use epi_agent::{HealthState, Population};
use epi_core::{AgentId, Day, SimParams, SimRng};

use crate::{interact, movement, vitals};
use crate::{CancelToken, DayStats, SimObserver, SimResult};

// ── StopReason ────────────────────────────────────────────────────────────────

/// Why a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StopReason {
    /// The Healthy head-count reached zero: everyone has been drawn into the
    /// outbreak.
    NoMoreHealthy,
    /// The configured `day_cap` was reached.
    DayCapReached,
    /// Daily statistics repeated beyond `stagnation_window` consecutive
    /// days: the outbreak has frozen in place.
    Stagnant,
    /// The [`CancelToken`] fired.
    Cancelled,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::NoMoreHealthy => "no healthy agents remain",
            StopReason::DayCapReached => "day cap reached",
            StopReason::Stagnant      => "statistics stagnant",
            StopReason::Cancelled     => "cancelled",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the full run state — population, parameters, the append-only
/// statistics history — and drives the day loop documented in the crate
/// root.  Create via [`SimBuilder`][crate::SimBuilder], which seeds patient
/// zero on day 0.
pub struct Sim {
    /// Global configuration.  Validated at build time; not mutated after.
    pub params: SimParams,

    /// All agents.  Indices are stable for the whole run.
    pub population: Population,

    /// One record per recorded day, day 0 first.  Append-only.
    pub stats: Vec<DayStats>,

    /// The most recently completed day.
    pub day: Day,

    patient_zero:  AgentId,
    rng:           SimRng,
    cancel:        CancelToken,
    stagnant_days: u32,
}

impl Sim {
    pub(crate) fn new(
        params:       SimParams,
        population:   Population,
        rng:          SimRng,
        patient_zero: AgentId,
        cancel:       CancelToken,
    ) -> Sim {
        Sim {
            params,
            population,
            stats: Vec::new(),
            day: Day::ZERO,
            patient_zero,
            rng,
            cancel,
            stagnant_days: 0,
        }
    }

    // ── Accessors and run loop ────────────────────────────────────────────

    /// The agent seeded on day 0.
    pub fn patient_zero(&self) -> AgentId {
        self.patient_zero
    }

    /// The most recent daily record, if any day has been recorded yet.
    pub fn latest_stats(&self) -> Option<&DayStats> {
        self.stats.last()
    }

    /// Run until a stop condition holds and return it.
    ///
    /// Records the day-0 baseline first if it has not been recorded yet,
    /// then advances day by day.  Observer hooks fire at every boundary;
    /// `on_sim_end` fires exactly once, whatever the reason — including
    /// cancellation.  Use [`NoopObserver`][crate::NoopObserver] if you don't
    /// need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StopReason> {
        let label = self.params.simulation_label();
        log::info!(
            "{label}: starting run, {} agents, seed {}, day cap {}",
            self.population.len(),
            self.params.seed,
            self.params.day_cap
        );

        if self.stats.is_empty() {
            self.record_day(observer);
        }
        let reason = loop {
            if self.cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            if let Some(reason) = self.stop_reason() {
                break reason;
            }
            self.advance_day(observer)?;
        };

        log::info!("{label}: run ended at {}: {reason}", self.day);
        observer.on_sim_end(self.day, reason);
        Ok(reason)
    }

    /// Advance exactly one day, ignoring stop conditions.
    ///
    /// Useful for tests and incremental stepping.  Unlike [`Sim::run`], this
    /// does not record a day-0 baseline first and never calls `on_sim_end`.
    pub fn advance_day<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let day = self.day.next();
        observer.on_day_start(day);

        // yesterday's states drive today's transmission membership
        let yesterday: Vec<HealthState> =
            self.population.agents.iter().map(|a| a.health).collect();
        self.day = day;

        vitals::kill_step(&mut self.population, &self.params, &mut self.rng);
        vitals::hospitalize_step(&mut self.population, &self.params, &mut self.rng);
        vitals::cure_step(&mut self.population, &self.params, day);
        movement::random_walk_step(&mut self.population, &self.params, &mut self.rng);
        let newly_infected = interact::transmission_step(
            &mut self.population,
            &self.params,
            &mut self.rng,
            day,
            &yesterday,
        )?;
        log::trace!("{day}: {newly_infected} new infections");

        self.record_day(observer);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Tally and append today's record, maintain the stagnation streak, and
    /// fire the per-day observer hooks.
    fn record_day<O: SimObserver>(&mut self, observer: &mut O) {
        let rec = DayStats::tally(self.day, &self.population, self.params.workforce.is_some());
        match self.stats.last() {
            Some(prev) if prev.same_outcome(&rec) => self.stagnant_days += 1,
            _ => self.stagnant_days = 0,
        }

        observer.on_day_end(self.day, &rec);
        if self.snapshot_due() {
            observer.on_snapshot(self.day, &self.population, &rec);
        }
        self.stats.push(rec);
    }

    fn snapshot_due(&self) -> bool {
        let interval = self.params.snapshot_interval_days;
        interval > 0 && self.day.0 % interval == 0
    }

    /// Check stop conditions against the latest record, in precedence order.
    fn stop_reason(&self) -> Option<StopReason> {
        let last = self.stats.last()?;
        if last.healthy == 0 {
            return Some(StopReason::NoMoreHealthy);
        }
        if self.day.0 >= self.params.day_cap {
            return Some(StopReason::DayCapReached);
        }
        if self.stagnant_days > self.params.stagnation_window {
            return Some(StopReason::Stagnant);
        }
        None
    }
}
