//! Planar world geometry.
//!
//! Agents live on a rectangular `[0, x) × [0, y)` plane with toroidal
//! topology: a step past either limit wraps around to the opposite edge, so
//! the world has no corners for an outbreak to hide in.  Distances are plain
//! Euclidean and ignore the wrap seam; two agents hugging opposite edges are
//! far apart for the proximity check.

use std::fmt;

// ── Position ─────────────────────────────────────────────────────────────────

/// An agent's location on the plane.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance — cheaper when only comparing against a
    /// threshold (compare against `limit * limit` and skip the sqrt).
    #[inline]
    pub fn distance_squared(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Translate by `(dx, dy)` and wrap each axis back into `bounds`.
    ///
    /// A coordinate landing exactly on a limit wraps to 0; overshoot keeps
    /// its remainder (`x_limit + 0.3` becomes `0.3`).
    #[inline]
    pub fn offset_wrapped(self, dx: f64, dy: f64, bounds: WorldBounds) -> Position {
        Position {
            x: (self.x + dx).rem_euclid(bounds.x),
            y: (self.y + dy).rem_euclid(bounds.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── WorldBounds ───────────────────────────────────────────────────────────────

/// Exclusive upper limits of the plane on each axis.
///
/// Cheap to copy; built once from the config limits and passed by value.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WorldBounds {
    pub x: f64,
    pub y: f64,
}

impl WorldBounds {
    pub fn new(x: f64, y: f64) -> Self {
        WorldBounds { x, y }
    }

    /// `true` when `pos` lies inside `[0, x) × [0, y)`.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        (0.0..self.x).contains(&pos.x) && (0.0..self.y).contains(&pos.y)
    }
}

impl fmt::Display for WorldBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}
