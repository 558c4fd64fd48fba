//! Generational evolution engine.
//!
//! [`Engine`] owns the full optimization state — distance matrix, RNG,
//! population, generation counter, current best — and advances it one
//! generation at a time. Callers drive [`step`](Engine::step) in a loop at
//! whatever pace they want (visualization layers typically sleep between
//! steps) and read the current best between steps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::DistanceMatrix;
use crate::error::Error;

use super::config::EngineConfig;
use super::evaluation;
use super::operators::{order_crossover, swap_mutation};
use super::population::random_population;
use super::route::Route;

/// Generational genetic algorithm over visiting orders.
///
/// Construction validates the configuration and the distance matrix, builds
/// a random initial population, and evaluates it: the engine starts at
/// generation 0 with a best route already available. Each
/// [`step`](Engine::step) breeds a full replacement population from parent
/// pairs, re-evaluates the best, and increments the generation counter.
///
/// The engine owns its population exclusively; readers only get snapshots
/// between steps, and a step is never observable half-done.
///
/// # Examples
///
/// ```
/// use route_evo::distance::DistanceMatrix;
/// use route_evo::ga::{Engine, EngineConfig};
///
/// // Four locations on a line: the optimal open path 0-1-2-3 costs 6.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs() * 2.0);
///     }
/// }
///
/// let config = EngineConfig::default().with_population_size(8).with_seed(42);
/// let mut engine = Engine::new(dm, config).unwrap();
/// assert_eq!(engine.generation(), 0);
///
/// engine.run(20);
/// assert_eq!(engine.generation(), 20);
/// assert_eq!(engine.best_route().len(), 4);
/// assert!(engine.best_distance().is_finite());
/// ```
#[derive(Debug)]
pub struct Engine {
    distances: DistanceMatrix,
    config: EngineConfig,
    rng: StdRng,
    population: Vec<Route>,
    best: Route,
    best_distance: f64,
    generation: usize,
    history: Vec<f64>,
}

impl Engine {
    /// Creates an engine with a random, already-evaluated initial population.
    ///
    /// Fails with a configuration error if the population size is odd or
    /// below 4, the mutation rate is out of range, the matrix is empty, or
    /// any matrix entry is NaN, infinite, or negative. Nothing fails after
    /// construction succeeds.
    pub fn new(distances: DistanceMatrix, config: EngineConfig) -> Result<Self, Error> {
        config.validate()?;
        if distances.size() == 0 {
            return Err(Error::NoLocations);
        }
        distances.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let population = random_population(config.population_size, distances.size(), &mut rng)?;
        let (best, best_distance) = evaluation::best(&population, &distances);
        let best = best.clone();

        Ok(Self {
            distances,
            config,
            rng,
            population,
            best,
            best_distance,
            generation: 0,
            history: vec![best_distance],
        })
    }

    /// Advances exactly one generation.
    ///
    /// Breeding pairs are formed by the configured
    /// [`Selection`](super::Selection) strategy; each pair `(a, b)` yields
    /// two children, `mutate(crossover(a, b))` and `mutate(crossover(b, a))`.
    /// The new population replaces the old wholesale, the best route is
    /// recomputed over the replacement (no elitism — the best may regress),
    /// and the generation counter increments.
    pub fn step(&mut self) {
        let size = self.population.len();
        let costs: Vec<f64> = self
            .population
            .iter()
            .map(|r| evaluation::total_distance(r, &self.distances))
            .collect();
        let pairs = self.config.selection.pair_parents(&costs, &mut self.rng);

        let mut next = Vec::with_capacity(size);
        for (a, b) in pairs {
            next.push(self.breed(a, b));
            next.push(self.breed(b, a));
        }
        self.population = next;

        let (best, best_distance) = evaluation::best(&self.population, &self.distances);
        self.best = best.clone();
        self.best_distance = best_distance;
        self.generation += 1;
        self.history.push(best_distance);

        tracing::debug!(
            generation = self.generation,
            best_distance = self.best_distance,
            "generation complete"
        );
    }

    /// Runs `generations` consecutive steps.
    pub fn run(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// One child: crossover of the parents at the given population indices,
    /// then mutation with the configured probability.
    fn breed(&mut self, parent_a: usize, parent_b: usize) -> Route {
        let mut child = order_crossover(
            self.population[parent_a].order(),
            self.population[parent_b].order(),
            &mut self.rng,
        );
        if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
            swap_mutation(&mut child, &mut self.rng);
        }
        Route::new(child).expect("genetic operators preserve the permutation invariant")
    }

    /// The best route in the current population.
    pub fn best_route(&self) -> &Route {
        &self.best
    }

    /// Total distance of the current best route.
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Number of completed generations; 0 until the first [`step`](Engine::step).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Read snapshot of the current population.
    pub fn population(&self) -> &[Route] {
        &self.population
    }

    /// Best distance at generation 0 and after each step since.
    pub fn best_history(&self) -> &[f64] {
        &self.history
    }
}
