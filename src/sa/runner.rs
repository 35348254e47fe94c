//! SA execution loop.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use super::config::SaConfig;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::tour::{require_cities, validate_tour, DistanceMatrix, Tour};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SaResult {
    /// The best tour seen during the run (not necessarily the last one).
    pub tour: Tour,

    /// Cost of the best tour.
    pub cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,
}

/// What one iteration did with its neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Improved,
    Accepted,
    Rejected,
}

/// Simulated Annealing over a fixed distance matrix.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::sa::{SaConfig, SimulatedAnnealing};
/// use tsp_localsearch::tour::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_coordinates(&[
///     (0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0),
/// ]);
/// let config = SaConfig::default().with_seed(42);
/// let result = SimulatedAnnealing::new(&matrix, vec![0, 2, 1, 3], config)?.run();
/// assert!(result.cost <= 48.0);
/// # Ok::<(), tsp_localsearch::SearchError>(())
/// ```
#[derive(Debug)]
pub struct SimulatedAnnealing<'a, R: Rng = StdRng> {
    matrix: &'a DistanceMatrix,
    current: Tour,
    current_cost: f64,
    best: Tour,
    best_cost: f64,
    temperature: f64,
    config: SaConfig,
    rng: R,
}

impl<'a> SimulatedAnnealing<'a, StdRng> {
    /// Creates an engine whose generator is seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, an initial tour that is not a
    /// permutation of the matrix's cities, or fewer than 2 cities.
    pub fn new(matrix: &'a DistanceMatrix, initial: Tour, config: SaConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(matrix, initial, config, rng)
    }
}

impl<'a, R: Rng> SimulatedAnnealing<'a, R> {
    /// Creates an engine drawing neighbors and acceptance samples from
    /// `rng`. `config.seed` is ignored.
    pub fn with_rng(
        matrix: &'a DistanceMatrix,
        initial: Tour,
        config: SaConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        validate_tour(&initial, matrix)?;
        require_cities(initial.len())?;

        let current_cost = matrix.tour_cost(&initial);
        Ok(Self {
            matrix,
            best: initial.clone(),
            best_cost: current_cost,
            current: initial,
            current_cost,
            temperature: config.initial_temperature,
            config,
            rng,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Anneals until the temperature reaches `min_temperature` and returns
    /// the best tour seen.
    pub fn run(mut self) -> SaResult {
        debug!(
            event = "sa_start",
            initial_temperature = self.config.initial_temperature,
            alpha = self.config.alpha,
            min_temperature = self.config.min_temperature,
            neighborhood = %self.config.neighborhood,
            cost = self.current_cost,
        );

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while self.temperature > self.config.min_temperature {
            match self.step() {
                Outcome::Improved => {
                    improving_moves += 1;
                    accepted_moves += 1;
                }
                Outcome::Accepted => accepted_moves += 1,
                Outcome::Rejected => {}
            }
            iterations += 1;
        }

        debug!(
            event = "sa_end",
            iterations = iterations,
            accepted = accepted_moves,
            improving = improving_moves,
            final_temperature = self.temperature,
            cost = self.best_cost,
        );

        SaResult {
            tour: self.best,
            cost: self.best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: self.temperature,
        }
    }

    /// One Metropolis step followed by one cooling step.
    fn step(&mut self) -> Outcome {
        let neighbor = self
            .config
            .neighborhood
            .random_neighbor(&self.current, &mut self.rng);
        let neighbor_cost = self.matrix.tour_cost(&neighbor);
        let delta = neighbor_cost - self.current_cost;

        let outcome = if delta < 0.0 {
            self.current = neighbor;
            self.current_cost = neighbor_cost;
            if self.current_cost < self.best_cost {
                self.best = self.current.clone();
                self.best_cost = self.current_cost;
            }
            Outcome::Improved
        } else {
            // delta >= 0, so the probability lies in (0, 1].
            let probability = (-delta / self.temperature).exp();
            if self.rng.random_range(0.0..1.0) < probability {
                self.current = neighbor;
                self.current_cost = neighbor_cost;
                Outcome::Accepted
            } else {
                Outcome::Rejected
            }
        };

        self.temperature *= self.config.alpha;
        outcome
    }
}
