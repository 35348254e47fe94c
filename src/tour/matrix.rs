//! Dense distance matrix.

use crate::error::{Result, SearchError};

/// An N×N matrix of non-negative distances, stored row-major.
///
/// The matrix is immutable once built. Engines borrow it, so a single
/// matrix can back any number of searches.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::tour::DistanceMatrix;
///
/// let square = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
/// let matrix = DistanceMatrix::from_coordinates(&square);
/// assert_eq!(matrix.get(0, 2), 14.0);
/// assert_eq!(matrix.tour_cost(&[0, 1, 2, 3]), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidMatrix`] if the rows do not form a
    /// square matrix or contain a negative or non-finite entry.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SearchError::invalid_matrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(j) = row.iter().position(|d| !d.is_finite() || *d < 0.0) {
                return Err(SearchError::invalid_matrix(format!(
                    "entry ({i}, {j}) must be finite and non-negative, got {}",
                    row[j]
                )));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Builds the matrix of Euclidean distances rounded to the nearest
    /// integer, ties to even. The diagonal is zero.
    ///
    /// Coordinates must be finite; [`crate::instance`] rejects anything else
    /// at parse time.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Self {
        let n = coordinates.len();
        let mut data = vec![0.0; n * n];
        for (i, &(x1, y1)) in coordinates.iter().enumerate() {
            for (j, &(x2, y2)) in coordinates.iter().enumerate() {
                if i != j {
                    let (dx, dy) = (x1 - x2, y1 - y2);
                    data[i * n + j] = (dx * dx + dy * dy).sqrt().round_ties_even();
                }
            }
        }
        Self { n, data }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from city `from` to city `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.n..(from + 1) * self.n]
    }

    /// Length of the closed tour. See [`super::tour_cost`].
    #[inline]
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        super::tour_cost(tour, self)
    }

    /// Whether `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
