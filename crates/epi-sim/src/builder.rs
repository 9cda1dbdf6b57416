//! Assembles a ready-to-run [`Sim`] from parameters and optional parts.

use epi_agent::Population;
use epi_core::{AgentId, Day, SimParams, SimRng};

use crate::{CancelToken, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimParams`] — population size, world limits, probabilities, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                    |
/// |--------------------|--------------------------------------------|
/// | `.population(p)`   | `Population::generate` from the params     |
/// | `.patient_zero(a)` | A uniformly random agent                   |
/// | `.cancel_token(t)` | A token nobody ever cancels                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimParams::default())
///     .patient_zero(AgentId(0))
///     .build()?;
/// let reason = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    params:       SimParams,
    population:   Option<Population>,
    patient_zero: Option<AgentId>,
    cancel:       Option<CancelToken>,
}

impl SimBuilder {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            population:   None,
            patient_zero: None,
            cancel:       None,
        }
    }

    /// Supply a hand-built population instead of generating one.
    ///
    /// Its length must match `params.population_size`.  Generation RNG draws
    /// are skipped entirely, so the seed's draw sequence starts at the
    /// patient-zero pick.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Pin the day-0 seeding target instead of picking one at random.
    pub fn patient_zero(mut self, agent: AgentId) -> Self {
        self.patient_zero = Some(agent);
        self
    }

    /// Supply a cancellation token shared with a controlling thread.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Validate inputs, generate the population if none was supplied, seed
    /// patient zero on day 0, and return a ready-to-run [`Sim`].
    ///
    /// Day-0 seeding uses the same attempt semantics as transmission; on a
    /// fresh all-Healthy population it always lands.  A supplied population
    /// whose target is not Healthy starts the run uninfected.
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;
        let mut rng = SimRng::new(self.params.seed);

        let mut population = match self.population {
            Some(p) => {
                let expected = self.params.population_size as usize;
                if p.len() != expected {
                    return Err(SimError::PopulationSizeMismatch {
                        expected,
                        got: p.len(),
                    });
                }
                p
            }
            None => Population::generate(&self.params, &mut rng)?,
        };

        let patient_zero = match self.patient_zero {
            Some(id) => {
                if id.index() >= population.len() {
                    return Err(SimError::PatientZeroOutOfRange(id));
                }
                id
            }
            None => AgentId(rng.gen_range(0..population.len() as u32)),
        };
        population.try_infect(&mut rng, &self.params, Day::ZERO, patient_zero)?;

        Ok(Sim::new(
            self.params,
            population,
            rng,
            patient_zero,
            self.cancel.unwrap_or_default(),
        ))
    }
}
