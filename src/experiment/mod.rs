//! Statistical benchmarking of the search engines.
//!
//! Each algorithm of an [`ExperimentConfig`] runs a number of independent
//! times on one instance, each run from its own seeded generator, and the
//! final costs and wall-clock times are summarised in a [`RunSummary`]
//! (best, mean, sample standard deviation, mean time).

mod config;
mod runner;
mod stats;

pub use config::{AlgorithmConfig, ExperimentConfig};
pub use runner::ExperimentRunner;
pub use stats::RunSummary;
