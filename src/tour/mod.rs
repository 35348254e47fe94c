//! Tour model: permutations of city indices and their closed-loop cost.
//!
//! A [`Tour`] is a plain `Vec<usize>` holding each city `0..n` exactly
//! once. Moves never edit a tour in place; they return a fresh vector.
//!
//! # Key Items
//!
//! - [`DistanceMatrix`]: immutable N×N distances shared by all engines
//! - [`tour_cost`]: length of the closed tour, including the return edge
//! - [`random_tour`]: uniform random permutation
//! - [`is_permutation`] / [`validate_tour`]: invariant checks used by
//!   engine constructors

mod matrix;

pub use matrix::DistanceMatrix;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SearchError};

/// A visiting order: a permutation of `0..n`.
pub type Tour = Vec<usize>;

/// Total length of the closed tour, wrapping from the last city back to
/// the first.
///
/// Callers guarantee that `tour` is a permutation of `0..matrix.len()`.
/// An empty tour costs zero.
///
/// # Complexity
/// O(n)
pub fn tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    let n = tour.len();
    (0..n).map(|i| matrix.get(tour[i], tour[(i + 1) % n])).sum()
}

/// Uniformly random permutation of `0..n` (Fisher-Yates).
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Whether `tour` contains every city of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Checks that `tour` is a permutation matching `matrix`.
pub(crate) fn validate_tour(tour: &[usize], matrix: &DistanceMatrix) -> Result<()> {
    if tour.len() != matrix.len() {
        return Err(SearchError::invalid_tour(format!(
            "tour has {} cities but the matrix has {}",
            tour.len(),
            matrix.len()
        )));
    }
    if !is_permutation(tour, matrix.len()) {
        return Err(SearchError::invalid_tour(
            "duplicate or out-of-range city identifier",
        ));
    }
    Ok(())
}

/// Rejects instances too small to sample a move from.
pub(crate) fn require_cities(n: usize) -> Result<()> {
    if n < 2 {
        return Err(SearchError::invalid_config(format!(
            "at least 2 cities are required, got {n}"
        )));
    }
    Ok(())
}
