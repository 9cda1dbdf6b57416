//! Serializable row types shared by all backends.

use serde::Serialize;

/// One agent's position and health on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub day:      u32,
    pub x:        f64,
    pub y:        f64,
    /// Lower-case state name (`"healthy"`, `"infected"`, …).
    pub health_state: &'static str,
}

/// Aggregate statistics for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyStatsRow {
    pub day:                u32,
    pub healthy_count:      u32,
    pub infected_count:     u32,
    pub hospitalized_count: u32,
    pub cured_count:        u32,
    pub dead_count:         u32,
    /// `None` when workforce tracking is disabled for the run.
    pub work_percentage:    Option<f64>,
}
