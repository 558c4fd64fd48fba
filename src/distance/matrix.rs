//! Dense distance matrix.

use crate::error::Error;

/// A dense n×n cost matrix stored in row-major order.
///
/// Costs are directional: `get(from, to)` is always looked up in visiting
/// order, and symmetry is never assumed. TSP-style inputs are symmetric in
/// practice; [`is_symmetric`](Self::is_symmetric) checks.
///
/// # Examples
///
/// ```
/// use route_evo::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 7.0, 0.0]).unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(1, 0), 7.0);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    ///
    /// Intended for incremental construction via [`set`](Self::set). An
    /// all-zero matrix passes [`validate`](Self::validate) but triggers its
    /// unset-entry warning, since zero off-diagonal costs usually mean the
    /// data was never filled in.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the data length is not
    /// `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, Error> {
        if data.len() != size * size {
            return Err(Error::DimensionMismatch {
                side: size,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the cost of traveling from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost of traveling from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cost of visiting the given locations in order.
    ///
    /// Sums `get(order[k], order[k+1])` over consecutive pairs: the cost of
    /// an **open path** that does not return to its start. Orders with fewer
    /// than two locations cost 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_evo::distance::DistanceMatrix;
    ///
    /// let mut dm = DistanceMatrix::new(3);
    /// dm.set(0, 1, 2.0);
    /// dm.set(1, 2, 3.0);
    /// assert_eq!(dm.path_distance(&[0, 1, 2]), 5.0);
    /// assert_eq!(dm.path_distance(&[0]), 0.0);
    /// ```
    pub fn path_distance(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.get(pair[0], pair[1]))
            .sum()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every entry is usable as a cost.
    ///
    /// Fails with [`Error::InvalidDistance`] on the first NaN, infinite, or
    /// negative entry. Exact-zero off-diagonal entries are legal but logged
    /// as a warning: a zero cost between two distinct locations makes them
    /// artificially attractive neighbors and usually indicates unset data.
    pub fn validate(&self) -> Result<(), Error> {
        let mut zero_entries = 0usize;
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidDistance { from, to, value });
                }
                if from != to && value == 0.0 {
                    zero_entries += 1;
                }
            }
        }
        if zero_entries > 0 {
            tracing::warn!(
                zero_entries,
                size = self.size,
                "distance matrix has zero off-diagonal entries; unset costs bias the search"
            );
        }
        Ok(())
    }
}
