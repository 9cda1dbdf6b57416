//! Daily proximity-transmission sweep.

use epi_agent::{HealthState, Population};
use epi_core::{AgentId, Day, EpiResult, SimParams, SimRng};

/// Sweep every (snapshot-Healthy, snapshot-Infected) pair; a Healthy agent
/// with any infectious contact closer than `dist_limit` becomes an infection
/// candidate and receives exactly one infection attempt.
///
/// Membership on both sides comes from `yesterday` — the health states as
/// they stood before today's vitals ran — so an agent infected earlier today
/// never transmits today, and an agent who died this morning still counts as
/// yesterday's infectious contact.  Distances use today's post-movement
/// positions.  The pair sweep is a plain O(n²) scan; candidates are
/// attempted in ascending id order to keep the gate draws reproducible.
///
/// Returns the number of new infections.
pub(crate) fn transmission_step(
    pop: &mut Population,
    params: &SimParams,
    rng: &mut SimRng,
    day: Day,
    yesterday: &[HealthState],
) -> EpiResult<usize> {
    let infectious: Vec<usize> = yesterday
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == HealthState::Infected)
        .map(|(i, _)| i)
        .collect();
    if infectious.is_empty() {
        return Ok(0);
    }

    let limit_sq = params.dist_limit * params.dist_limit;
    let mut candidates: Vec<AgentId> = Vec::new();
    for (i, state) in yesterday.iter().enumerate() {
        if *state != HealthState::Healthy {
            continue;
        }
        let pos = pop.agents[i].position;
        // one infectious contact suffices — a candidate is attempted once
        // per day no matter how many neighbors it has
        let exposed = infectious
            .iter()
            .any(|&j| pos.distance_squared(pop.agents[j].position) < limit_sq);
        if exposed {
            candidates.push(AgentId(i as u32));
        }
    }

    let mut newly_infected = 0;
    for candidate in candidates {
        if pop.try_infect(rng, params, day, candidate)? {
            newly_infected += 1;
        }
    }
    Ok(newly_infected)
}
