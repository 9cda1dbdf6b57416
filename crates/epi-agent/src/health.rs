//! Health states and the legal transition graph.
//!
//! The graph is:
//!
//! ```text
//! Healthy ──► Infected ──► Hospitalized ──► Cured
//!                 │
//!                 ├──► Cured
//!                 └──► Dead
//! ```
//!
//! Cured and Dead are terminal.  There is no Hospitalized → Dead edge and no
//! reinfection edge; the [`Population`](crate::Population) transition methods
//! are the only writers and silently refuse anything outside this graph.

/// An agent's current standing in the outbreak.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum HealthState {
    /// Never infected (default state).
    #[default]
    Healthy,
    /// Carrying and transmitting the disease.
    Infected,
    /// Isolated in care: no longer transmitting, no longer moving.
    Hospitalized,
    /// Recovered and immune.  Terminal.
    Cured,
    /// Terminal.
    Dead,
}

impl HealthState {
    /// `true` for states that pin an agent in place: a Hospitalized or Dead
    /// mover leaves the active mover set for good.
    #[inline]
    pub fn is_immobile(self) -> bool {
        matches!(self, HealthState::Hospitalized | HealthState::Dead)
    }

    /// `true` for the two terminal states.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthState::Cured | HealthState::Dead)
    }

    /// Human-readable label, useful for CSV/JSON column values.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Healthy      => "healthy",
            HealthState::Infected     => "infected",
            HealthState::Hospitalized => "hospitalized",
            HealthState::Cured        => "cured",
            HealthState::Dead         => "dead",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
