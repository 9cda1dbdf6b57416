//! Cooperative cancellation.
//!
//! The day loop polls its token at the top of every iteration, so a cancelled
//! run always stops at a day boundary with consistent statistics and a final
//! `on_sim_end` callback — never mid-step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancel flag shared between the run loop and any controlling
/// thread.
///
/// Cancelling is sticky: once set, the flag never resets.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run stop at the next day boundary.
    pub fn cancel(&self) {
        // Relaxed: the flag guards no other memory
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
