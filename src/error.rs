use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by the solver port and the branch-and-cut driver.
#[derive(Error, Debug)]
pub enum SolverError {
    /// A candidate reached the cut generator with a broken degree constraint.
    /// This is a defect in the driver/backend interaction, not a user error.
    #[error("degree constraint violated at point index {point}: degree {degree}, expected 2")]
    InvariantViolation { point: usize, degree: usize },

    /// The backend reported an unbounded model. Cannot occur for a tour
    /// objective with non-negative edge weights; surfaced as a defect.
    #[error("solver backend reported an unbounded model")]
    Unbounded,

    #[error("solver backend error: {0}")]
    Backend(String),
}

/// Errors raised while reconstructing an ordered tour from an edge set.
///
/// Both variants signal that the drive loop's `Optimal` contract was broken
/// upstream: the accepted edge set did not form a single Hamiltonian cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    #[error("candidate edge set is empty")]
    NoEdges,

    #[error("tour closed after visiting {visited} of {expected} points")]
    IncompleteTour { visited: usize, expected: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Tour(#[from] TourError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
