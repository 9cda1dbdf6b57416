//! The population: generation, infection attempts, and vital-status
//! transitions.
//!
//! Random draws during generation happen in a fixed order — positions (x then
//! y per agent), the mover sample, the occupation shuffle — so a seed fully
//! determines the initial state.

use epi_core::{AgentId, Day, EpiError, EpiResult, Position, SimParams, SimRng, WorkforceParams};

use crate::{Agent, HealthState, Occupation};

/// All agents of a run, plus the derived state the engine consults daily.
///
/// Indices are stable for the whole run; `AgentId(i)` always names
/// `agents[i]`.
pub struct Population {
    pub agents: Vec<Agent>,

    /// Movers still eligible to walk, ascending.  Shrinks permanently as
    /// movers become Hospitalized or Dead; never regrows, not even on cure.
    pub active_movers: Vec<AgentId>,

    /// Working-hours sum at generation time, before any infection.  The
    /// denominator of the daily work-percentage statistic.
    pub baseline_working_hours: u64,
}

impl Population {
    // ── Construction ──────────────────────────────────────────────────────

    /// Generate a fresh all-Healthy population from validated parameters.
    ///
    /// Positions are uniform over the world, the mover subset is sampled per
    /// [`SimParams::mover_count`], and occupations (when workforce tracking
    /// is on) are filled proportionally and shuffled.
    pub fn generate(params: &SimParams, rng: &mut SimRng) -> EpiResult<Population> {
        params.validate()?;
        let n = params.population_size as usize;
        let bounds = params.bounds();

        let mut agents: Vec<Agent> = (0..n)
            .map(|_| {
                let x = rng.gen_range(0.0..bounds.x);
                let y = rng.gen_range(0.0..bounds.y);
                Agent::new(Position::new(x, y))
            })
            .collect();

        let mover_count = params.mover_count();
        for index in rng.sample_indices(n, mover_count) {
            agents[index].is_mover = true;
        }

        if let Some(wf) = &params.workforce {
            assign_occupations(&mut agents, wf, rng);
        }

        log::debug!("generated population: {n} agents, {mover_count} movers");
        Population::from_agents(agents)
    }

    /// Build a population from hand-placed agents (scenario setups and
    /// embedders with their own initial conditions).
    ///
    /// The active mover set and the working-hours baseline are derived from
    /// the records: every `is_mover` agent not already immobile is active.
    pub fn from_agents(agents: Vec<Agent>) -> EpiResult<Population> {
        if agents.is_empty() {
            return Err(EpiError::InvalidParameter(
                "population must contain at least one agent".into(),
            ));
        }
        let active_movers = agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_mover && !a.health.is_immobile())
            .map(|(i, _)| AgentId(i as u32))
            .collect();
        let baseline_working_hours = agents.iter().map(|a| u64::from(a.working_hours)).sum();
        Ok(Population {
            agents,
            active_movers,
            baseline_working_hours,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Every `AgentId`, lowest index first.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// How many agents are currently in `state`.  One O(n) pass.
    pub fn count_state(&self, state: HealthState) -> usize {
        self.agents.iter().filter(|a| a.health == state).count()
    }

    /// Ids of all agents currently in `state`, ascending.
    pub fn in_state(&self, state: HealthState) -> Vec<AgentId> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.health == state)
            .map(|(i, _)| AgentId(i as u32))
            .collect()
    }

    /// Hours currently credited across the whole population.
    pub fn total_working_hours(&self) -> u64 {
        self.agents.iter().map(|a| u64::from(a.working_hours)).sum()
    }

    // ── Infection ─────────────────────────────────────────────────────────

    /// Attempt to infect `target` on `day`.
    ///
    /// Through `params.early_spread_days` the attempt always reaches the
    /// target; afterwards it first passes a single per-call gate with
    /// probability `params.late_transmission_prob`.  A target that is not
    /// Healthy is left untouched (`Ok(false)`).  Returns `Ok(true)` only
    /// when the Healthy → Infected transition actually happened.
    pub fn try_infect(
        &mut self,
        rng: &mut SimRng,
        params: &SimParams,
        day: Day,
        target: AgentId,
    ) -> EpiResult<bool> {
        if target.index() >= self.agents.len() {
            return Err(EpiError::AgentNotFound(target));
        }
        // gate before the state check: the draw stream is a function of the
        // candidate sequence alone, not of who happened to be Healthy
        if day.0 > params.early_spread_days && !rng.gen_bool(params.late_transmission_prob) {
            return Ok(false);
        }
        let agent = &mut self.agents[target.index()];
        if agent.health != HealthState::Healthy {
            return Ok(false);
        }
        agent.health = HealthState::Infected;
        agent.infected_day = Some(day);
        agent.working_hours = 0;
        Ok(true)
    }

    // ── Vital-status transitions ──────────────────────────────────────────
    //
    // These index directly: ids must come from this population (the engine
    // only passes ids it just enumerated).  Illegal transitions are silent
    // no-ops returning false.

    /// Infected → Dead.
    pub fn kill(&mut self, id: AgentId) -> bool {
        let agent = &mut self.agents[id.index()];
        if agent.health != HealthState::Infected {
            return false;
        }
        agent.health = HealthState::Dead;
        true
    }

    /// Infected → Hospitalized.
    pub fn hospitalize(&mut self, id: AgentId) -> bool {
        let agent = &mut self.agents[id.index()];
        if agent.health != HealthState::Infected {
            return false;
        }
        agent.health = HealthState::Hospitalized;
        true
    }

    /// Infected or Hospitalized → Cured, restoring `full_time_hours` for
    /// Working agents.
    pub fn cure(&mut self, id: AgentId, full_time_hours: u32) -> bool {
        let agent = &mut self.agents[id.index()];
        match agent.health {
            HealthState::Infected | HealthState::Hospitalized => {
                agent.health = HealthState::Cured;
                if agent.occupation == Some(Occupation::Working) {
                    agent.working_hours = full_time_hours;
                }
                true
            }
            _ => false,
        }
    }

    // ── Mover bookkeeping ─────────────────────────────────────────────────

    /// Drop movers pinned by an immobilizing state from the active set.
    /// Removal is permanent; a later cure does not restore movement.
    pub fn retire_immobile_movers(&mut self) {
        let agents = &self.agents;
        self.active_movers
            .retain(|id| !agents[id.index()].health.is_immobile());
    }
}

/// Fill occupations in declaration order with `floor(proportion * N)` slots
/// each; `resize` both truncates overflow and pads shortfall (the first
/// category absorbs it) before the shuffle spreads the assignment.
fn assign_occupations(agents: &mut [Agent], wf: &WorkforceParams, rng: &mut SimRng) {
    let n = agents.len();
    let mut assignment: Vec<Occupation> = Vec::with_capacity(n);
    for (occupation, proportion) in [
        (Occupation::Student, wf.student),
        (Occupation::Working, wf.working),
        (Occupation::Child, wf.child),
        (Occupation::Old, wf.old),
    ] {
        let slots = (n as f64 * proportion).floor() as usize;
        assignment.extend(std::iter::repeat_n(occupation, slots));
    }
    assignment.resize(n, Occupation::ALL[0]);
    rng.shuffle(&mut assignment);

    for (agent, occupation) in agents.iter_mut().zip(assignment) {
        agent.occupation = Some(occupation);
        agent.working_hours = if occupation == Occupation::Working {
            wf.full_time_hours
        } else {
            0
        };
    }
}
