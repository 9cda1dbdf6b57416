//! Occupation categories for workforce tracking.
//!
//! Assignment order during generation follows the variant declaration order;
//! only `Working` agents carry non-zero working hours.

/// An agent's occupation, assigned once at generation and never changed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Occupation {
    Student,
    Working,
    Child,
    Old,
}

impl Occupation {
    /// All variants in declaration order — the order the generation fill
    /// walks, and the category absorbing floor-rounding shortfall.
    pub const ALL: [Occupation; 4] = [
        Occupation::Student,
        Occupation::Working,
        Occupation::Child,
        Occupation::Old,
    ];

    /// Human-readable label, useful for CSV/JSON column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Occupation::Student => "student",
            Occupation::Working => "working",
            Occupation::Child   => "child",
            Occupation::Old     => "old",
        }
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
