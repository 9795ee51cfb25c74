//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    #[error("no blocks defined for country: {0}")]
    EmptyCountry(String),

    #[error("unknown profile: {0} (expected 'compact' or 'extended')")]
    UnknownProfile(String),
}
