//! Repeated independent runs with timing.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::config::{AlgorithmConfig, ExperimentConfig};
use super::stats::RunSummary;
use crate::error::Result;
use crate::hc::HillClimbing;
use crate::instance::Instance;
use crate::multistart::MultiStartHillClimbing;
use crate::random::create_rng;
use crate::sa::SimulatedAnnealing;
use crate::tour::{random_tour, DistanceMatrix};

/// Executes benchmarking protocols.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Loads the configured instance and benchmarks every algorithm.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the instance can't be read.
    pub fn run(config: &ExperimentConfig) -> Result<Vec<RunSummary>> {
        config.validate()?;
        let instance = Instance::load(&config.instance)?;
        Self::run_on(&instance.distance_matrix(), config)
    }

    /// Benchmarks every algorithm of `config` on an already built matrix.
    /// `config.instance` is not read.
    pub fn run_on(matrix: &DistanceMatrix, config: &ExperimentConfig) -> Result<Vec<RunSummary>> {
        config.validate()?;
        let base_seed = config.seed.unwrap_or_else(rand::random);
        info!(
            event = "experiment_start",
            cities = matrix.len(),
            runs = config.runs,
            algorithms = config.algorithms.len(),
            seed = base_seed,
        );

        config
            .algorithms
            .iter()
            .map(|algorithm| Self::run_algorithm(matrix, algorithm, config.runs, base_seed))
            .collect()
    }

    /// Runs one algorithm `runs` times.
    ///
    /// Run `k` owns a generator seeded with `base_seed + k`, which draws
    /// its initial tour (Multi-Start draws its own tours) and drives every
    /// random choice of the engine. Only `run` itself is timed.
    pub fn run_algorithm(
        matrix: &DistanceMatrix,
        algorithm: &AlgorithmConfig,
        runs: usize,
        base_seed: u64,
    ) -> Result<RunSummary> {
        let label = algorithm.label();
        info!(event = "algorithm_start", algorithm = %label, runs = runs);

        let n = matrix.len();
        let mut costs = Vec::with_capacity(runs);
        let mut times = Vec::with_capacity(runs);

        for run in 0..runs {
            let mut rng = create_rng(base_seed.wrapping_add(run as u64));

            let (cost, elapsed) = match algorithm {
                AlgorithmConfig::HillClimbing(c) => {
                    let initial = random_tour(n, &mut rng);
                    let engine = HillClimbing::new(matrix, initial, c.clone())?;
                    timed(|| engine.run().cost)
                }
                AlgorithmConfig::MultiStart(c) => {
                    let engine = MultiStartHillClimbing::with_rng(matrix, c.clone(), rng)?;
                    timed(|| engine.run().cost)
                }
                AlgorithmConfig::SimulatedAnnealing(c) => {
                    let initial = random_tour(n, &mut rng);
                    let engine = SimulatedAnnealing::with_rng(matrix, initial, c.clone(), rng)?;
                    timed(|| engine.run().cost)
                }
            };

            debug!(
                event = "run_end",
                run = run,
                cost = cost,
                elapsed_ms = elapsed.as_millis() as u64,
            );
            costs.push(cost);
            times.push(elapsed);
        }

        let summary = RunSummary::from_samples(label, &costs, &times);
        info!(
            event = "algorithm_end",
            algorithm = %summary.label,
            best = summary.best_cost,
            mean = summary.mean_cost,
            std_dev = summary.std_dev,
            mean_time_ms = summary.mean_time.as_millis() as u64,
        );
        Ok(summary)
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
