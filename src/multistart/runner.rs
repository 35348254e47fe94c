//! Multi-Start execution loop.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::MultiStartConfig;
use crate::error::Result;
use crate::hc::HillClimbing;
use crate::random::rng_from_seed;
use crate::tour::{random_tour, DistanceMatrix, Tour};

/// Result of a Multi-Start run.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStartResult {
    /// Best local optimum over all restarts.
    pub tour: Tour,

    /// Cost of `tour`; the minimum of `restart_costs`.
    pub cost: f64,

    /// Number of restarts performed.
    pub starts: usize,

    /// Final cost of each restart, in run order.
    pub restart_costs: Vec<f64>,

    /// Neighbor evaluations summed over all restarts.
    pub evaluations: usize,
}

/// Repeated Hill-Climbing from uniformly random tours.
///
/// Restarts share nothing except the incumbent bookkeeping.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::multistart::{MultiStartConfig, MultiStartHillClimbing};
/// use tsp_localsearch::tour::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_coordinates(&[
///     (0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0),
/// ]);
/// let config = MultiStartConfig::default().with_num_starts(5).with_seed(42);
/// let result = MultiStartHillClimbing::new(&matrix, config)?.run();
/// assert_eq!(result.cost, 40.0);
/// assert_eq!(result.restart_costs.len(), 5);
/// # Ok::<(), tsp_localsearch::SearchError>(())
/// ```
#[derive(Debug)]
pub struct MultiStartHillClimbing<'a, R: Rng = StdRng> {
    matrix: &'a DistanceMatrix,
    config: MultiStartConfig,
    rng: R,
}

impl<'a> MultiStartHillClimbing<'a, StdRng> {
    /// Creates an engine whose generator is seeded from `config.seed`.
    pub fn new(matrix: &'a DistanceMatrix, config: MultiStartConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(matrix, config, rng)
    }
}

impl<'a, R: Rng> MultiStartHillClimbing<'a, R> {
    /// Creates an engine drawing its random tours from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(matrix: &'a DistanceMatrix, config: MultiStartConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            matrix,
            config,
            rng,
        })
    }

    /// Runs every restart and returns the best local optimum.
    pub fn run(mut self) -> MultiStartResult {
        let n = self.matrix.len();
        let hc_config = self.config.hc_config();

        debug!(
            event = "multistart_start",
            starts = self.config.num_starts,
            mode = %self.config.mode,
            cities = n,
        );

        let mut best_tour = Tour::new();
        let mut best_cost = f64::INFINITY;
        let mut restart_costs = Vec::with_capacity(self.config.num_starts);
        let mut evaluations = 0usize;

        for start in 0..self.config.num_starts {
            let initial = random_tour(n, &mut self.rng);
            let result = HillClimbing::from_valid(self.matrix, initial, hc_config.clone()).run();

            trace!(event = "restart_end", start = start, cost = result.cost);

            evaluations += result.evaluations;
            restart_costs.push(result.cost);
            if result.cost < best_cost {
                best_cost = result.cost;
                best_tour = result.tour;
            }
        }

        debug!(event = "multistart_end", cost = best_cost, evaluations = evaluations);

        MultiStartResult {
            tour: best_tour,
            cost: best_cost,
            starts: self.config.num_starts,
            restart_costs,
            evaluations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::hc::{HcConfig, HcMode};
    use crate::random::create_rng;
    use crate::tour::is_permutation;

    fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = create_rng(seed);
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..500.0), rng.random_range(0.0..500.0)))
            .collect();
        DistanceMatrix::from_coordinates(&coords)
    }

    #[test]
    fn test_best_is_minimum_of_restarts() {
        let matrix = random_instance(12, 1);
        let config = MultiStartConfig::default().with_num_starts(8).with_seed(42);
        let result = MultiStartHillClimbing::new(&matrix, config).unwrap().run();

        let min = result
            .restart_costs
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.cost, min);
        assert_eq!(result.starts, 8);
        assert_eq!(result.cost, matrix.tour_cost(&result.tour));
        assert!(is_permutation(&result.tour, 12));
    }

    #[test]
    fn test_restarts_replay_plain_hill_climbing() {
        // Same generator, same tours: each restart cost must match a
        // stand-alone Hill-Climbing run from the same random start.
        let matrix = random_instance(10, 2);
        let config = MultiStartConfig::default()
            .with_num_starts(4)
            .with_mode(HcMode::First);
        let result = MultiStartHillClimbing::with_rng(&matrix, config, create_rng(9))
            .unwrap()
            .run();

        let mut rng = create_rng(9);
        for &cost in &result.restart_costs {
            let start = random_tour(10, &mut rng);
            let single = HillClimbing::new(&matrix, start, HcConfig::new(HcMode::First))
                .unwrap()
                .run();
            assert_eq!(single.cost, cost);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let matrix = random_instance(15, 3);
        let config = MultiStartConfig::default().with_num_starts(5).with_seed(123);
        let a = MultiStartHillClimbing::new(&matrix, config.clone()).unwrap().run();
        let b = MultiStartHillClimbing::new(&matrix, config).unwrap().run();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_starts_rejected() {
        let matrix = random_instance(5, 4);
        let config = MultiStartConfig::default().with_num_starts(0);
        assert!(matches!(
            MultiStartHillClimbing::new(&matrix, config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
