//! Domain error types

use crate::core::role::Role;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Confidence {0} is outside [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),

    #[error("Duplicate role in plan: {0}")]
    DuplicateRole(Role),

    #[error("No weight assigned to role: {0}")]
    MissingWeight(Role),

    #[error("Invalid weight {weight} for role {role}: must be a non-negative finite number")]
    InvalidWeight { role: Role, weight: f64 },
}
