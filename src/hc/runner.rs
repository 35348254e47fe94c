//! Hill-Climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the given tour
//! 2. Repeat:
//!    - **Best**: evaluate every neighbor, keep the first one attaining
//!      the minimum, adopt it if strictly better than the current tour
//!    - **First**: scan pairs `i < j` in order, adopt the first strictly
//!      better neighbor
//! 3. Stop when an iteration adopts nothing (local optimum)

use rayon::prelude::*;
use tracing::debug;

use super::config::{HcConfig, HcMode};
use crate::error::Result;
use crate::neighborhood::pairs;
use crate::tour::{validate_tour, DistanceMatrix, Tour};

/// Result of a Hill-Climbing run.
#[derive(Debug, Clone, PartialEq)]
pub struct HcResult {
    /// The local optimum reached.
    pub tour: Tour,

    /// Cost of `tour`.
    pub cost: f64,

    /// Number of improving moves adopted.
    pub iterations: usize,

    /// Number of neighbor costs evaluated.
    pub evaluations: usize,
}

/// Hill-Climbing over a fixed distance matrix.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::hc::{HcConfig, HcMode, HillClimbing};
/// use tsp_localsearch::tour::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_coordinates(&[
///     (0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0),
/// ]);
/// let hc = HillClimbing::new(&matrix, vec![0, 2, 1, 3], HcConfig::new(HcMode::First))?;
/// let result = hc.run();
/// assert_eq!(result.cost, 40.0);
/// # Ok::<(), tsp_localsearch::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbing<'a> {
    matrix: &'a DistanceMatrix,
    current: Tour,
    current_cost: f64,
    config: HcConfig,
}

impl<'a> HillClimbing<'a> {
    /// Creates an engine positioned at `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SearchError::InvalidTour`] if `initial` is not a
    /// permutation of the matrix's cities.
    pub fn new(matrix: &'a DistanceMatrix, initial: Tour, config: HcConfig) -> Result<Self> {
        validate_tour(&initial, matrix)?;
        Ok(Self::from_valid(matrix, initial, config))
    }

    /// Skips the permutation check for tours built by [`random_tour`].
    ///
    /// [`random_tour`]: crate::tour::random_tour
    pub(crate) fn from_valid(matrix: &'a DistanceMatrix, initial: Tour, config: HcConfig) -> Self {
        let current_cost = matrix.tour_cost(&initial);
        Self {
            matrix,
            current: initial,
            current_cost,
            config,
        }
    }

    /// Cost of the tour the search currently sits on.
    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    /// Climbs until no neighbor is strictly better.
    pub fn run(mut self) -> HcResult {
        debug!(
            event = "hc_start",
            mode = %self.config.mode,
            neighborhood = %self.config.neighborhood,
            cities = self.current.len(),
            cost = self.current_cost,
        );

        let mut iterations = 0usize;
        let mut evaluations = 0usize;
        while self.step(&mut evaluations) {
            iterations += 1;
        }

        debug!(
            event = "hc_end",
            iterations = iterations,
            evaluations = evaluations,
            cost = self.current_cost,
        );

        HcResult {
            tour: self.current,
            cost: self.current_cost,
            iterations,
            evaluations,
        }
    }

    /// One iteration. Returns whether a move was adopted.
    fn step(&mut self, evaluations: &mut usize) -> bool {
        match self.config.mode {
            HcMode::Best => self.best_improvement(evaluations),
            HcMode::First => self.first_improvement(evaluations),
        }
    }

    fn best_improvement(&mut self, evaluations: &mut usize) -> bool {
        let matrix = self.matrix;
        let mut neighbors = self.config.neighborhood.all_neighbors(&self.current);
        *evaluations += neighbors.len();

        let costs: Vec<f64> = if self.config.parallel {
            neighbors.par_iter().map(|t| matrix.tour_cost(t)).collect()
        } else {
            neighbors.iter().map(|t| matrix.tour_cost(t)).collect()
        };

        // Strict comparison keeps the earliest neighbor among equal minima.
        let mut best: Option<usize> = None;
        let mut best_cost = self.current_cost;
        for (idx, &cost) in costs.iter().enumerate() {
            if cost < best_cost {
                best_cost = cost;
                best = Some(idx);
            }
        }

        match best {
            Some(idx) => {
                self.current = neighbors.swap_remove(idx);
                self.current_cost = best_cost;
                true
            }
            None => false,
        }
    }

    fn first_improvement(&mut self, evaluations: &mut usize) -> bool {
        let family = self.config.neighborhood;
        for (i, j) in pairs(self.current.len()) {
            let neighbor = family.apply(&self.current, i, j);
            let cost = self.matrix.tour_cost(&neighbor);
            *evaluations += 1;
            if cost < self.current_cost {
                self.current = neighbor;
                self.current_cost = cost;
                return true;
            }
        }
        false
    }
}
