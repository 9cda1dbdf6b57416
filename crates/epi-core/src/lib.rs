//! `epi-core` — foundational types for the `episim` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `AgentId`                                           |
//! | [`grid`]   | `Position`, `WorldBounds`, toroidal wrap math       |
//! | [`time`]   | `Day`                                               |
//! | [`rng`]    | `SimRng` (seeded, deterministic)                    |
//! | [`params`] | `SimParams`, `WorkforceParams`                      |
//! | [`error`]  | `EpiError`, `EpiResult`                             |

pub mod error;
pub mod grid;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use grid::{Position, WorldBounds};
pub use ids::AgentId;
pub use params::{SimParams, WorkforceParams};
pub use rng::SimRng;
pub use time::Day;
