use crate::strategy::StrategyKind;
use thiserror::Error;

/// Errors surfaced by selection and materialization.
///
/// Every call either succeeds with a complete result or fails with exactly
/// one of these; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    #[error("Invalid component profile: {0}")]
    InvalidProfile(String),

    #[error("No applicable strategy for profile {profile}")]
    NoApplicableStrategy { profile: String },

    #[error("Strategy {strategy} injects its own ref prop, but the shape already declares '{prop}'")]
    IncompatibleShape { strategy: StrategyKind, prop: String },
}

pub type RefResult<T> = Result<T, RefError>;

/// Defects found while building or validating a strategy catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog is empty")]
    Empty,

    #[error("Duplicate priority {0}")]
    DuplicatePriority(u32),

    #[error("Duplicate strategy id '{0}'")]
    DuplicateId(String),

    #[error("Profile {profile} is matched by both '{first}' and '{second}'")]
    Overlap {
        profile: String,
        first: String,
        second: String,
    },

    #[error("Profile {0} is not matched by any strategy")]
    Uncovered(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}
