//! Parent pairing strategies.
//!
//! The engine breeds the next generation from pairs of parents. How those
//! pairs are formed is the only selection pressure in the algorithm, and it
//! is pluggable:
//!
//! - [`Selection::AdjacentPairing`] (default) pairs consecutive members of
//!   the population in its existing order — no fitness pressure at all;
//!   which routes breed depends only on position.
//! - [`Selection::Tournament`] and [`Selection::FitnessProportional`] are
//!   explicit opt-ins that bias pairing toward shorter routes. They change
//!   convergence behavior and are never applied unless configured.
//!
//! All strategies assume minimization (lower route distance = better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Strategy for forming breeding pairs from the current population.
///
/// # Examples
///
/// ```
/// use route_evo::ga::Selection;
///
/// // Positional pairing: members (0,1), (2,3), …
/// let sel = Selection::AdjacentPairing;
///
/// // Moderate pressure: each parent wins a 3-way tournament
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Pair consecutive members `(p[0], p[1]), (p[2], p[3]), …` of the
    /// population in its existing order. Route costs are ignored.
    AdjacentPairing,

    /// Tournament selection: each parent is the best of `k` members drawn
    /// uniformly with replacement. Higher `k` = stronger pressure.
    ///
    /// # Complexity
    /// O(k) per parent
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection over inverse route
    /// cost, so shorter routes are drawn more often.
    ///
    /// # Complexity
    /// O(n) per parent (linear scan)
    FitnessProportional,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::AdjacentPairing
    }
}

impl Selection {
    /// Forms `costs.len() / 2` breeding pairs of population indices.
    ///
    /// `costs[i]` is the total distance of population member `i`.
    ///
    /// # Panics
    ///
    /// Panics if the population size is odd or less than 2.
    pub fn pair_parents<R: Rng>(&self, costs: &[f64], rng: &mut R) -> Vec<(usize, usize)> {
        let n = costs.len();
        assert!(
            n >= 2 && n % 2 == 0,
            "population size must be even and at least 2"
        );

        match *self {
            Selection::AdjacentPairing => (0..n).step_by(2).map(|i| (i, i + 1)).collect(),
            Selection::Tournament(k) => (0..n / 2)
                .map(|_| (tournament(costs, k, rng), tournament(costs, k, rng)))
                .collect(),
            Selection::FitnessProportional => {
                let weights = inverse_cost_weights(costs);
                (0..n / 2)
                    .map(|_| (roulette(&weights, rng), roulette(&weights, rng)))
                    .collect()
            }
        }
    }
}

/// Tournament selection: draw k random members, return the cheapest.
fn tournament<R: Rng>(costs: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = costs.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if costs[idx] < costs[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Inverse-cost weights for roulette selection.
///
/// For minimization: `weight_i = max_cost - cost_i + epsilon`, so the
/// cheapest route gets the largest weight.
fn inverse_cost_weights(costs: &[f64]) -> Vec<f64> {
    let max_cost = costs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let epsilon = 1e-10;
    costs
        .iter()
        .map(|&c| {
            let w = max_cost - c + epsilon;
            if w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect()
}

/// Roulette wheel draw over precomputed weights.
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
