//! Daily vital-status steps: deaths, hospitalizations, cures.
//!
//! The three steps run in that order and each sees the previous one's
//! result: the hospitalization sample is sized from the post-death Infected
//! count.  Sample sizes use floor arithmetic; a sample that cannot be drawn
//! from the eligible agents skips the whole step for the day rather than
//! clamping.

use epi_agent::{HealthState, Population};
use epi_core::{AgentId, Day, SimParams, SimRng};

/// Death step: `floor((infected + hospitalized) * kill_prob)` agents die,
/// drawn uniformly from the Infected only.
pub(crate) fn kill_step(pop: &mut Population, params: &SimParams, rng: &mut SimRng) {
    let infected = pop.in_state(HealthState::Infected);
    let pool = infected.len() + pop.count_state(HealthState::Hospitalized);
    let sample_size = (pool as f64 * params.kill_prob).floor() as usize;
    if sample_size == 0 {
        return;
    }
    if sample_size > infected.len() {
        log::debug!(
            "death step skipped: sample {sample_size} exceeds {} infected",
            infected.len()
        );
        return;
    }
    for index in rng.sample_indices(infected.len(), sample_size) {
        pop.kill(infected[index]);
    }
}

/// Hospitalization step: `floor(infected * hosp_prob)` of the (post-death)
/// Infected are admitted.
pub(crate) fn hospitalize_step(pop: &mut Population, params: &SimParams, rng: &mut SimRng) {
    let infected = pop.in_state(HealthState::Infected);
    let sample_size = (infected.len() as f64 * params.hosp_prob).floor() as usize;
    if sample_size == 0 {
        return;
    }
    if sample_size > infected.len() {
        log::debug!(
            "hospitalization step skipped: sample {sample_size} exceeds {} infected",
            infected.len()
        );
        return;
    }
    for index in rng.sample_indices(infected.len(), sample_size) {
        pop.hospitalize(infected[index]);
    }
}

/// Cure step: recovery once strictly more days than the state's cure window
/// have passed since infection.  Both windows measure from the original
/// infection day.
pub(crate) fn cure_step(pop: &mut Population, params: &SimParams, day: Day) {
    let full_time_hours = params.workforce.as_ref().map_or(0, |wf| wf.full_time_hours);
    for i in 0..pop.len() {
        let agent = &pop.agents[i];
        let due = match (agent.health, agent.infected_day) {
            (HealthState::Infected, Some(d)) => day.since(d) > params.infected_cure_days,
            (HealthState::Hospitalized, Some(d)) => day.since(d) > params.hospitalized_cure_days,
            _ => false,
        };
        if due {
            pop.cure(AgentId(i as u32), full_time_hours);
        }
    }
}
