//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as a variant
//! where core operations can fail beneath them.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    /// A configuration value failed validation.  Raised before any state is
    /// mutated; the message names the offending field.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
