//! SA configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::neighborhood::Neighborhood;

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(5000.0)
///     .with_alpha(0.9995)
///     .with_min_temperature(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaConfig {
    /// Initial temperature `T0`. Higher values allow more exploration.
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,

    /// Cooling factor in (0, 1). Higher = slower cooling.
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Minimum temperature `T_min`. The algorithm stops once `T <= T_min`.
    #[serde(default = "default_min_temperature")]
    pub min_temperature: f64,

    /// Move family used to draw the single neighbor of each iteration.
    #[serde(default)]
    pub neighborhood: Neighborhood,

    /// Random seed for reproducibility.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_initial_temperature() -> f64 {
    1000.0
}

fn default_alpha() -> f64 {
    0.99
}

fn default_min_temperature() -> f64 {
    0.1
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: default_initial_temperature(),
            alpha: default_alpha(),
            min_temperature: default_min_temperature(),
            neighborhood: Neighborhood::Swap,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of iterations the cooling schedule allows.
    ///
    /// Replays the schedule with the same floating-point steps as the
    /// engine, so the count is exact.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if the config does not pass
    /// [`validate`](Self::validate), since such a schedule may never end.
    pub fn iteration_count(&self) -> Result<usize> {
        self.validate()?;
        let mut temperature = self.initial_temperature;
        let mut count = 0;
        while temperature > self.min_temperature {
            temperature *= self.alpha;
            count += 1;
        }
        Ok(count)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(SearchError::invalid_config(
                "initial_temperature must be positive and finite",
            ));
        }
        if !(self.min_temperature > 0.0) {
            return Err(SearchError::invalid_config("min_temperature must be positive"));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(SearchError::invalid_config(
                "min_temperature must be less than initial_temperature",
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(SearchError::invalid_config(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}
