//! Generational genetic algorithm over visiting orders.
//!
//! The engine evolves a fixed-size population of [`Route`]s — permutations
//! of the location indices — toward lower open-path total distance, one
//! full breed-and-replace generation per [`Engine::step`].
//!
//! # Key Types
//!
//! - [`Engine`]: owns the population and advances it generation by generation
//! - [`EngineConfig`]: algorithm parameters (population size, mutation rate,
//!   pairing strategy, seed)
//! - [`Route`]: a validated permutation of the location indices
//! - [`Selection`]: pluggable parent-pairing policy
//!
//! # Submodules
//!
//! - [`operators`]: cut-point ordered crossover and swap mutation
//! - [`population`]: random initial population construction
//! - [`evaluation`]: route scoring and best-of-population selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod engine;
pub mod evaluation;
pub mod operators;
pub mod population;
mod route;
mod selection;

pub use config::EngineConfig;
pub use engine::Engine;
pub use route::Route;
pub use selection::Selection;
