//! # route-evo
//!
//! Generational genetic algorithm for traveling-salesman-style route
//! optimization. Given N locations and an N×N cost matrix, the engine
//! searches the permutations of `0..N` for a visiting order minimizing
//! total traversed distance across consecutive visits (an open path — the
//! route does not return to its start).
//!
//! ## Modules
//!
//! - [`distance`] — Dense pairwise cost matrix and open-path totals
//! - [`ga`] — Routes, genetic operators, pairing strategies, and the
//!   stepwise evolution engine
//! - [`error`] — Construction-time error type
//!
//! ## Usage
//!
//! ```
//! use route_evo::distance::DistanceMatrix;
//! use route_evo::ga::{Engine, EngineConfig};
//!
//! let dm = DistanceMatrix::from_data(
//!     3,
//!     vec![
//!         0.0, 2.0, 9.0, //
//!         2.0, 0.0, 3.0, //
//!         9.0, 3.0, 0.0,
//!     ],
//! )?;
//!
//! let config = EngineConfig::default().with_population_size(10).with_seed(7);
//! let mut engine = Engine::new(dm, config)?;
//!
//! // Presentation layers drive the loop at their own pace and read
//! // snapshots between steps.
//! for _ in 0..50 {
//!     engine.step();
//! }
//! println!(
//!     "generation {}: {:?} at distance {}",
//!     engine.generation(),
//!     engine.best_route().order(),
//!     engine.best_distance()
//! );
//! # Ok::<(), route_evo::Error>(())
//! ```

pub mod distance;
pub mod error;
pub mod ga;

pub use error::Error;
