use epi_core::{AgentId, EpiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("population length {got} does not match configured population_size {expected}")]
    PopulationSizeMismatch { expected: usize, got: usize },

    #[error("patient zero {0} is outside the population")]
    PatientZeroOutOfRange(AgentId),

    #[error("{0}")]
    Core(#[from] EpiError),
}

pub type SimResult<T> = Result<T, SimError>;
