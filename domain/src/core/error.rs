//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The validation messages are user-facing: the CLI prints them verbatim
/// before exiting, so keep their wording stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Number of agents must be at least 2")]
    TooFewAgents,

    #[error("Number of groups must be at least 1")]
    TooFewGroups,

    #[error("Number of agents must be divisible by number of groups")]
    UnevenGroups,

    #[error("Number of agents per group must be at least 2")]
    GroupTooSmall,

    #[error("Number of rounds must be at least 1")]
    TooFewRounds,

    #[error("Number of steps must be at least 2")]
    TooFewSteps,

    #[error("Must provide either text or file for context")]
    MissingContext,

    #[error("At least one model must be configured")]
    NoModels,

    #[error("Subgroup size must be at least 1")]
    InvalidSubgroupSize,
}

impl DomainError {
    /// Check if this error comes from panel settings validation
    pub fn is_settings_error(&self) -> bool {
        !matches!(self, DomainError::InvalidSubgroupSize)
    }
}
