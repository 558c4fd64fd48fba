//! Pairwise travel costs between locations.

mod matrix;

pub use matrix::DistanceMatrix;
