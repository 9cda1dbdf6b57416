//! Daily random-walk step.

use epi_agent::Population;
use epi_core::{SimParams, SimRng};

/// Walk every active mover: one offset per axis, drawn from `[1, limit/3)`,
/// wrapped toroidally into the world.
///
/// Movers pinned by an immobilizing state are retired from the active set
/// first — permanently, so a later cure never resumes their movement.
/// Offsets are drawn in ascending mover order (x before y per agent) to keep
/// the RNG stream reproducible.
pub(crate) fn random_walk_step(pop: &mut Population, params: &SimParams, rng: &mut SimRng) {
    pop.retire_immobile_movers();
    let bounds = params.bounds();
    for i in 0..pop.active_movers.len() {
        let id = pop.active_movers[i];
        let dx = walk_offset(rng, bounds.x);
        let dy = walk_offset(rng, bounds.y);
        let agent = &mut pop.agents[id.index()];
        agent.position = agent.position.offset_wrapped(dx, dy, bounds);
    }
}

/// One axis offset in `[1, limit/3)`.  Worlds of 3 or fewer units collapse
/// the range to a fixed unit step.
fn walk_offset(rng: &mut SimRng, limit: f64) -> f64 {
    let upper = limit / 3.0;
    if upper <= 1.0 {
        1.0
    } else {
        rng.gen_range(1.0..upper)
    }
}
