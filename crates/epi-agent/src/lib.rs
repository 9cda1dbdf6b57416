//! `epi-agent` — agent records and population state for the `episim`
//! epidemic simulator.
//!
//! The population is a plain `Vec<Agent>`: an agent's index is its identity
//! for the entire run (nobody joins, nobody is removed — the Dead stay in
//! place and simply stop participating).  All health-state transitions go
//! through [`Population`] methods so the legal transition graph lives in
//! exactly one file.
//!
//! # What lives here
//!
//! | Module         | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | [`health`]     | `HealthState` and its transition graph          |
//! | [`occupation`] | `Occupation` categories                         |
//! | [`agent`]      | The per-agent record                            |
//! | [`population`] | `Population`: generation, infection, vitals     |

pub mod agent;
pub mod health;
pub mod occupation;
pub mod population;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use health::HealthState;
pub use occupation::Occupation;
pub use population::Population;
