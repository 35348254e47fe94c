//! Experiment configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::hc::{HcConfig, HcMode};
use crate::multistart::MultiStartConfig;
use crate::sa::SaConfig;

/// One algorithm variant to benchmark.
///
/// In TOML each entry of `[[algorithms]]` carries a `type` key naming the
/// variant; the remaining keys are that engine's configuration. Seeds set
/// here are ignored: the runner seeds every run itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlgorithmConfig {
    HillClimbing(HcConfig),
    MultiStart(MultiStartConfig),
    SimulatedAnnealing(SaConfig),
}

impl AlgorithmConfig {
    /// Human-readable name used in reports.
    pub fn label(&self) -> String {
        match self {
            AlgorithmConfig::HillClimbing(c) => {
                format!("HC ({} improvement, {})", c.mode, c.neighborhood)
            }
            AlgorithmConfig::MultiStart(c) => format!(
                "Multi-Start HC ({} starts, {} improvement, {})",
                c.num_starts, c.mode, c.neighborhood
            ),
            AlgorithmConfig::SimulatedAnnealing(c) => format!(
                "Simulated Annealing (T0={}, alpha={}, T_min={}, {})",
                c.initial_temperature, c.alpha, c.min_temperature, c.neighborhood
            ),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            AlgorithmConfig::HillClimbing(_) => Ok(()),
            AlgorithmConfig::MultiStart(c) => c.validate(),
            AlgorithmConfig::SimulatedAnnealing(c) => c.validate(),
        }
    }
}

/// A benchmarking protocol: one instance, a number of independent runs,
/// and the algorithms to compare.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::experiment::{AlgorithmConfig, ExperimentConfig};
///
/// let config = ExperimentConfig::from_toml_str(r#"
///     instance = "data/berlin52.tsp"
///     runs = 10
///     seed = 42
///
///     [[algorithms]]
///     type = "hill_climbing"
///     mode = "first"
///
///     [[algorithms]]
///     type = "simulated_annealing"
///     initial_temperature = 5000.0
///     alpha = 0.9995
///     min_temperature = 0.1
/// "#)?;
///
/// assert_eq!(config.runs, 10);
/// assert_eq!(config.algorithms.len(), 2);
/// assert!(matches!(config.algorithms[1], AlgorithmConfig::SimulatedAnnealing(_)));
/// # Ok::<(), tsp_localsearch::SearchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Path of the TSPLIB instance.
    pub instance: PathBuf,

    /// Independent runs per algorithm.
    #[serde(default = "default_runs")]
    pub runs: usize,

    /// Base seed; run `k` uses `seed + k`. `None` draws a fresh base seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Algorithms to compare, in report order.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<AlgorithmConfig>,
}

fn default_runs() -> usize {
    30
}

/// HC first, HC best and a slowly cooled SA.
fn default_algorithms() -> Vec<AlgorithmConfig> {
    vec![
        AlgorithmConfig::HillClimbing(HcConfig::new(HcMode::First)),
        AlgorithmConfig::HillClimbing(HcConfig::new(HcMode::Best)),
        AlgorithmConfig::SimulatedAnnealing(
            SaConfig::default()
                .with_initial_temperature(5000.0)
                .with_alpha(0.9995)
                .with_min_temperature(0.1),
        ),
    ]
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            instance: PathBuf::from("data/berlin52.tsp"),
            runs: default_runs(),
            seed: None,
            algorithms: default_algorithms(),
        }
    }
}

impl ExperimentConfig {
    /// Default protocol on the given instance.
    pub fn for_instance(path: impl Into<PathBuf>) -> Self {
        Self {
            instance: path.into(),
            ..Self::default()
        }
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<AlgorithmConfig>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, contains invalid TOML, or
    /// describes an invalid protocol.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(SearchError::invalid_config("runs must be at least 1"));
        }
        if self.algorithms.is_empty() {
            return Err(SearchError::invalid_config("no algorithms configured"));
        }
        for algorithm in &self.algorithms {
            algorithm.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::Neighborhood;

    #[test]
    fn test_default_protocol() {
        let config = ExperimentConfig::default();
        assert_eq!(config.runs, 30);
        assert_eq!(config.algorithms.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_defaults_fill_missing_keys() {
        let config = ExperimentConfig::from_toml_str(r#"instance = "a.tsp""#).unwrap();
        assert_eq!(config.runs, 30);
        assert_eq!(config.algorithms, default_algorithms());
    }

    #[test]
    fn test_toml_multi_start_and_neighborhood() {
        let config = ExperimentConfig::from_toml_str(
            r#"
            instance = "a.tsp"

            [[algorithms]]
            type = "multi_start"
            num_starts = 10
            mode = "best"
            neighborhood = "two_opt"
            "#,
        )
        .unwrap();
        match &config.algorithms[0] {
            AlgorithmConfig::MultiStart(c) => {
                assert_eq!(c.num_starts, 10);
                assert_eq!(c.neighborhood, Neighborhood::TwoOpt);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_toml_unknown_mode_is_rejected() {
        let result = ExperimentConfig::from_toml_str(
            r#"
            instance = "a.tsp"

            [[algorithms]]
            type = "hill_climbing"
            mode = "greedy"
            "#,
        );
        assert!(matches!(result, Err(SearchError::Toml(_))));
    }

    #[test]
    fn test_validate_rejects_zero_runs() {
        let config = ExperimentConfig::default().with_runs(0);
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_checks_each_algorithm() {
        let config = ExperimentConfig::default().with_algorithms(vec![
            AlgorithmConfig::SimulatedAnnealing(SaConfig::default().with_alpha(2.0)),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_labels() {
        let hc = AlgorithmConfig::HillClimbing(HcConfig::new(HcMode::First));
        assert_eq!(hc.label(), "HC (first improvement, swap)");
    }
}
