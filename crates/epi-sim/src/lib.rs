//! `epi-sim` — day-loop orchestrator for the `episim` epidemic simulator.
//!
//! # The day loop
//!
//! ```text
//! record day 0 (post-seeding baseline)
//! loop:
//!   ① Cancel check — cooperative CancelToken poll.
//!   ② Stop check   — no Healthy left / day cap / stagnant statistics.
//!   ③ Snapshot     — copy yesterday's health states for the transmission
//!                    sweep.
//!   ④ Vitals       — deaths, then hospitalizations, then cures.
//!   ⑤ Movement     — active movers take a wrapped random step.
//!   ⑥ Transmission — O(n²) proximity sweep against the snapshot; contacts
//!                    closer than dist_limit attempt infection.
//!   ⑦ Record       — tally DayStats, fire observer hooks.
//! ```
//!
//! The engine is single-threaded and fully deterministic for a given
//! `SimParams` (see `epi_core::rng` for the draw-order contract).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::SimParams;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimParams::default()).build()?;
//! let reason = sim.run(&mut NoopObserver)?;
//! println!("stopped: {reason}, {} days recorded", sim.stats.len());
//! ```

pub mod builder;
pub mod cancel;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;

mod interact;
mod movement;
mod vitals;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use cancel::CancelToken;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, StopReason};
pub use stats::DayStats;
