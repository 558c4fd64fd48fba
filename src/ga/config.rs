//! Engine configuration.

use crate::error::Error;

use super::selection::Selection;

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use route_evo::ga::{EngineConfig, Selection};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.mutation_rate, 1.0);
/// assert_eq!(config.selection, Selection::AdjacentPairing);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use route_evo::ga::{EngineConfig, Selection};
///
/// let config = EngineConfig::default()
///     .with_population_size(40)
///     .with_selection(Selection::Tournament(3))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of routes in the population.
    ///
    /// Must be even (reproduction consumes parents in pairs) and at least 4.
    /// The size stays fixed across generations.
    pub population_size: usize,

    /// Probability of mutating each child (0.0–1.0).
    ///
    /// Defaults to 1.0: every child is perturbed exactly once per
    /// generation. Lower it explicitly to trade exploration for stability.
    pub mutation_rate: f64,

    /// Strategy for forming breeding pairs.
    ///
    /// Defaults to [`Selection::AdjacentPairing`], which applies no fitness
    /// pressure beyond population order.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 1.0,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the pairing strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Population size must be even and at least 4; the mutation rate must
    /// be a probability. Raised at engine construction, never mid-run.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 4 || self.population_size % 2 != 0 {
            return Err(Error::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) || self.mutation_rate.is_nan() {
            return Err(Error::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
