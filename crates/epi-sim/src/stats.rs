//! Daily aggregate statistics.

use epi_agent::{HealthState, Population};
use epi_core::Day;

/// One day's aggregate record: a head-count per health state plus the
/// workforce output percentage when workforce tracking is enabled.
///
/// Records are append-only; the full `Vec<DayStats>` on the sim is the run's
/// history and the input to the stagnation stop condition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DayStats {
    pub day:          Day,
    pub healthy:      u32,
    pub infected:     u32,
    pub hospitalized: u32,
    pub cured:        u32,
    pub dead:         u32,

    /// Current working hours as a percentage of the generation-time
    /// baseline.  `None` when workforce tracking is off; 100.0 when the
    /// baseline itself is zero.
    pub work_percentage: Option<f64>,
}

impl DayStats {
    /// Count every agent's state in one pass.
    pub fn tally(day: Day, population: &Population, track_workforce: bool) -> DayStats {
        let mut rec = DayStats {
            day,
            healthy: 0,
            infected: 0,
            hospitalized: 0,
            cured: 0,
            dead: 0,
            work_percentage: None,
        };
        for agent in &population.agents {
            match agent.health {
                HealthState::Healthy      => rec.healthy += 1,
                HealthState::Infected     => rec.infected += 1,
                HealthState::Hospitalized => rec.hospitalized += 1,
                HealthState::Cured        => rec.cured += 1,
                HealthState::Dead         => rec.dead += 1,
            }
        }
        if track_workforce {
            rec.work_percentage = Some(if population.baseline_working_hours == 0 {
                100.0
            } else {
                population.total_working_hours() as f64 * 100.0
                    / population.baseline_working_hours as f64
            });
        }
        rec
    }

    /// Sum of all five head-counts — always the population size.
    pub fn total(&self) -> u32 {
        self.healthy + self.infected + self.hospitalized + self.cured + self.dead
    }

    /// Field-wise equality ignoring `day`.  Two days with the same outcome
    /// feed the stagnation streak even though their day indices differ.
    pub fn same_outcome(&self, other: &DayStats) -> bool {
        self.healthy == other.healthy
            && self.infected == other.infected
            && self.hospitalized == other.hospitalized
            && self.cured == other.cured
            && self.dead == other.dead
            && self.work_percentage == other.work_percentage
    }
}
