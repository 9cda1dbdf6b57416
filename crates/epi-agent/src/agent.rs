//! The per-agent record.

use epi_core::{Day, Position};

use crate::{HealthState, Occupation};

/// One agent's complete state.
///
/// Fields are `pub` for direct access from the engine and from scenario
/// construction; health-state writes should nevertheless go through the
/// [`Population`](crate::Population) transition methods, which enforce the
/// legal transition graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    /// Location on the plane, wrapped into world bounds after every step.
    pub position: Position,

    pub health: HealthState,

    /// Day of the Healthy → Infected transition.  Written exactly once, on
    /// infection; hospitalization does not re-stamp it, so both cure clocks
    /// measure from the original infection day.  `None` = never infected.
    pub infected_day: Option<Day>,

    /// Whether this agent was drawn into the mover subset at generation.
    /// Stays `true` even after an immobilizing state retires the agent from
    /// the active mover set.
    pub is_mover: bool,

    /// `None` unless workforce tracking is enabled for the run.
    pub occupation: Option<Occupation>,

    /// Hours currently credited per week: zeroed on infection, restored for
    /// `Working` agents on cure.
    pub working_hours: u32,
}

impl Agent {
    /// A healthy, stationary, occupation-less agent at `position`.
    pub fn new(position: Position) -> Agent {
        Agent {
            position,
            health: HealthState::Healthy,
            infected_day: None,
            is_mover: false,
            occupation: None,
            working_hours: 0,
        }
    }
}
