//! Crate-wide error type.
//!
//! All failures are raised at construction time — building a
//! [`DistanceMatrix`](crate::distance::DistanceMatrix) from mismatched data,
//! validating an [`EngineConfig`](crate::ga::EngineConfig), or wrapping a
//! non-permutation into a [`Route`](crate::ga::Route). Once an
//! [`Engine`](crate::ga::Engine) exists, stepping it cannot fail.

/// Errors raised while constructing or validating optimizer inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Reproduction consumes parents in pairs, so the population size must
    /// be even, and at least 4 to give crossover something to work with.
    #[error("population size must be even and at least 4, got {0}")]
    InvalidPopulationSize(usize),

    /// Mutation rate is a probability.
    #[error("mutation rate must be within [0.0, 1.0], got {0}")]
    InvalidMutationRate(f64),

    /// Distance data does not form a square matrix of the declared side.
    #[error("distance data has {actual} entries, expected {side}x{side}")]
    DimensionMismatch { side: usize, actual: usize },

    /// The problem must have at least one location.
    #[error("at least one location is required")]
    NoLocations,

    /// A matrix entry is NaN, infinite, or negative.
    #[error("distance from {from} to {to} is {value}; entries must be finite and non-negative")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    /// A visiting order is not a permutation of `0..n` (wrong length,
    /// duplicate, or out-of-range index).
    #[error("route of length {len} is not a permutation of 0..{n}")]
    InvalidRoute { len: usize, n: usize },
}
