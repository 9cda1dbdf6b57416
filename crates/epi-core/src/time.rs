//! The day counter that serves as the engine's only clock.
//!
//! Time is a monotonically increasing `Day` counter.  One iteration of the
//! outbreak loop advances exactly one day; there is no sub-day resolution and
//! no wall-clock mapping.  Using an integer day as the canonical time unit
//! means all cure-window arithmetic is exact and comparisons are O(1).

use std::fmt;

/// An absolute simulation day counter.
///
/// Day 0 is the seeding day (patient zero is infected on day 0); the first
/// stepped day is day 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// Days elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Underflows (a debug-build panic) when `earlier` is later than `self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Day) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
