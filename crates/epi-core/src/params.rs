//! Run configuration.
//!
//! Every tunable lives in one `SimParams` struct: no global state, no
//! scattered constants.  The struct is serde-loadable so a whole run can be
//! described by a JSON file, and `validate()` rejects bad values up front —
//! before any population is generated or any output file is opened.

use serde::{Deserialize, Serialize};

use crate::{EpiError, EpiResult, WorldBounds};

/// Minimum mover head-count whenever motion is enabled at all.  Tiny
/// populations are clamped down to their own size.
pub const MIN_MOVERS: usize = 5;

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from CLI flags or loaded from a JSON file by the
/// application crate and handed to `SimBuilder`.  All fields have defaults,
/// so a partial JSON document is enough to describe a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Number of agents to generate.  Must be at least 1.
    pub population_size: u32,

    /// Exclusive upper bound of the world on the x axis.
    pub x_limit: u32,

    /// Exclusive upper bound of the world on the y axis.
    pub y_limit: u32,

    /// Transmission radius: contact closer than this (Euclidean) can infect.
    pub dist_limit: f64,

    /// Fraction of the population that moves each day.  0 disables motion
    /// entirely; any positive rate gets at least [`MIN_MOVERS`] movers.
    pub motion_rate: f64,

    /// Daily death fraction, applied to the combined Infected + Hospitalized
    /// head-count to size the sample.
    pub kill_prob: f64,

    /// Daily hospitalization fraction of the Infected head-count.
    pub hosp_prob: f64,

    /// An Infected agent recovers once strictly more than this many days
    /// have passed since infection.
    pub infected_cure_days: u32,

    /// A Hospitalized agent recovers once strictly more than this many days
    /// have passed since infection (not since admission).
    pub hospitalized_cure_days: u32,

    /// Through this day (inclusive) every transmission attempt succeeds;
    /// afterwards attempts pass with `late_transmission_prob`.
    pub early_spread_days: u32,

    /// Per-attempt success probability once the early spread window closes.
    pub late_transmission_prob: f64,

    /// Hard stop: the run never advances past this day.
    pub day_cap: u32,

    /// Stop once the streak of consecutive identical daily records exceeds
    /// this many days — the outbreak has frozen in place.
    pub stagnation_window: u32,

    /// Emit a per-agent snapshot every N days.  1 = every day; 0 = never
    /// (daily aggregate statistics are always recorded regardless).
    pub snapshot_interval_days: u32,

    /// RNG seed; a repeated seed replays the run draw for draw.
    pub seed: u64,

    /// Label stamped on document-sink output.  Empty = derive one from the
    /// seed (see [`SimParams::simulation_label`]).
    pub simulation_id: String,

    /// Occupation / working-hours tracking.  `None` leaves agents
    /// occupation-less and omits the workforce column from statistics.
    pub workforce: Option<WorkforceParams>,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            population_size:        300,
            x_limit:                30,
            y_limit:                30,
            dist_limit:             1.5,
            motion_rate:            0.1,
            kill_prob:              0.005,
            hosp_prob:              0.03,
            infected_cure_days:     10,
            hospitalized_cure_days: 21,
            early_spread_days:      3,
            late_transmission_prob: 0.75,
            day_cap:                100,
            stagnation_window:      8,
            snapshot_interval_days: 1,
            seed:                   42,
            simulation_id:          String::new(),
            workforce:              None,
        }
    }
}

impl SimParams {
    /// Check every field, returning `EpiError::InvalidParameter` naming the
    /// first offending one.  Call before building anything from the params.
    pub fn validate(&self) -> EpiResult<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.x_limit == 0 || self.y_limit == 0 {
            return Err(invalid("x_limit and y_limit must be at least 1"));
        }
        if !(self.dist_limit.is_finite() && self.dist_limit > 0.0) {
            return Err(invalid("dist_limit must be finite and positive"));
        }
        check_fraction("motion_rate", self.motion_rate)?;
        check_fraction("kill_prob", self.kill_prob)?;
        check_fraction("hosp_prob", self.hosp_prob)?;
        check_fraction("late_transmission_prob", self.late_transmission_prob)?;
        if let Some(wf) = &self.workforce {
            wf.validate()?;
        }
        Ok(())
    }

    /// World limits as floating-point bounds.
    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.x_limit as f64, self.y_limit as f64)
    }

    /// How many agents move, after the zero-rate / minimum / population
    /// clamps: rate 0 means none at all; any positive rate yields at least
    /// `min(MIN_MOVERS, N)` and at most N.
    pub fn mover_count(&self) -> usize {
        let n = self.population_size as usize;
        if self.motion_rate == 0.0 {
            return 0;
        }
        let raw = (n as f64 * self.motion_rate).floor() as usize;
        raw.max(MIN_MOVERS.min(n)).min(n)
    }

    /// The run's label: `simulation_id` if set, otherwise `sim-<seed hex>`.
    pub fn simulation_label(&self) -> String {
        if self.simulation_id.is_empty() {
            format!("sim-{:08x}", self.seed)
        } else {
            self.simulation_id.clone()
        }
    }
}

// ── WorkforceParams ───────────────────────────────────────────────────────────

/// Occupation mix and the full-time hours figure behind the daily
/// work-percentage statistic.
///
/// Proportions are fractions of the population assigned to each category in
/// declaration order; floors of `proportion * N` fill the slots and any
/// remainder falls to the first category before the assignment is shuffled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkforceParams {
    pub student: f64,
    pub working: f64,
    pub child:   f64,
    pub old:     f64,

    /// Weekly hours credited to each Working agent while healthy.
    pub full_time_hours: u32,
}

impl Default for WorkforceParams {
    fn default() -> Self {
        WorkforceParams {
            student:         0.1,
            working:         0.7,
            child:           0.1,
            old:             0.1,
            full_time_hours: 40,
        }
    }
}

impl WorkforceParams {
    pub fn validate(&self) -> EpiResult<()> {
        for (name, p) in [
            ("workforce.student", self.student),
            ("workforce.working", self.working),
            ("workforce.child", self.child),
            ("workforce.old", self.old),
        ] {
            if !(p.is_finite() && p >= 0.0) {
                return Err(invalid(format!("{name} must be a non-negative fraction")));
            }
        }
        // tolerance absorbs float summation noise on an exact-1.0 mix
        if self.student + self.working + self.child + self.old > 1.0 + 1e-9 {
            return Err(invalid("workforce proportions must sum to at most 1"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> EpiError {
    EpiError::InvalidParameter(msg.into())
}

fn check_fraction(name: &str, value: f64) -> EpiResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must lie within [0, 1]")))
    }
}
