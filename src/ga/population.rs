//! Initial population construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;

use super::route::Route;

/// Creates one uniformly-random route over `n` locations.
///
/// Fisher–Yates shuffle of the identity permutation.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn random_route<R: Rng>(n: usize, rng: &mut R) -> Route {
    assert!(n > 0, "a route needs at least one location");
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    Route::new(order).expect("a shuffled identity permutation is always valid")
}

/// Creates an initial generation of `size` independent random routes.
///
/// Routes are sampled independently; duplicate individuals across the
/// population are permitted and not deduplicated. Fails with
/// [`Error::InvalidPopulationSize`] if `size` is zero and
/// [`Error::NoLocations`] if `n` is zero.
pub fn random_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Result<Vec<Route>, Error> {
    if size == 0 {
        return Err(Error::InvalidPopulationSize(size));
    }
    if n == 0 {
        return Err(Error::NoLocations);
    }
    Ok((0..size).map(|_| random_route(n, rng)).collect())
}
