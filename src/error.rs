//! Error types.
//!
//! Instance and configuration problems are reported as values; the engine
//! never panics on user-supplied data. Internal contract violations in the
//! pure helpers (empty slices, mismatched parent lengths) still panic.

/// A [`Instance`](crate::gdp::Instance) could not be built from the given data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InstanceError {
    #[error("EmptyInstance: an instance needs at least one node")]
    Empty,
    #[error("DistanceShape: row {row} has {len} entries, expected {expected}")]
    DistanceShape {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("AsymmetricDistance: d({i},{j})={forward} but d({j},{i})={backward}")]
    Asymmetric {
        i: usize,
        j: usize,
        forward: f64,
        backward: f64,
    },
    #[error("InvalidDistance: d({i},{j})={value} must be finite and non-negative")]
    InvalidDistance { i: usize, j: usize, value: f64 },
    #[error("LengthMismatch: {field} has {len} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("NodeOutOfRange: node {node} is outside 1..={n}")]
    NodeOutOfRange { node: usize, n: usize },
}

/// An [`Nsga2Config`](crate::nsga2::Nsga2Config) holds unusable parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("PopulationTooSmall: population_size={0}, must be at least 2")]
    PopulationTooSmall(usize),
    #[error("NoGenerations: generations must be at least 1")]
    NoGenerations,
    #[error("InvalidCrossoverRate: {0} is outside [0, 1]")]
    InvalidCrossoverRate(f64),
    #[error("InvalidMutationRate: {0} is outside [0, 1]")]
    InvalidMutationRate(f64),
}

/// Errors returned by [`Nsga2Runner`](crate::nsga2::Nsga2Runner).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Nsga2Error {
    #[error("InvalidConfig: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("EmptyProblem: the problem has no genes")]
    EmptyProblem,
    #[error("ObjectiveCount: evaluation returned {found} objectives, expected {expected}")]
    ObjectiveCount { expected: usize, found: usize },
}
