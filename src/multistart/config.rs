//! Multi-Start configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::hc::{HcConfig, HcMode};
use crate::neighborhood::Neighborhood;

/// Configuration for Multi-Start Hill-Climbing.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::hc::HcMode;
/// use tsp_localsearch::multistart::MultiStartConfig;
///
/// let config = MultiStartConfig::default()
///     .with_num_starts(10)
///     .with_mode(HcMode::First)
///     .with_seed(7);
/// assert_eq!(config.num_starts, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStartConfig {
    /// Number of independent Hill-Climbing runs.
    #[serde(default = "default_num_starts")]
    pub num_starts: usize,

    /// Improvement mode of every sub-run.
    #[serde(default)]
    pub mode: HcMode,

    /// Move family of every sub-run.
    #[serde(default)]
    pub neighborhood: Neighborhood,

    /// Random seed for reproducibility.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_num_starts() -> usize {
    30
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            num_starts: default_num_starts(),
            mode: HcMode::Best,
            neighborhood: Neighborhood::Swap,
            seed: None,
        }
    }
}

impl MultiStartConfig {
    pub fn with_num_starts(mut self, n: usize) -> Self {
        self.num_starts = n;
        self
    }

    pub fn with_mode(mut self, mode: HcMode) -> Self {
        self.mode = mode;
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

    /// Hill-Climbing configuration shared by all restarts.
    pub fn hc_config(&self) -> HcConfig {
        HcConfig::new(self.mode).with_neighborhood(self.neighborhood)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_starts == 0 {
            return Err(SearchError::invalid_config("num_starts must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MultiStartConfig::default();
        assert_eq!(config.num_starts, 30);
        assert_eq!(config.mode, HcMode::Best);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_zero_starts() {
        let config = MultiStartConfig::default().with_num_starts(0);
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_hc_config_carries_mode() {
        let config = MultiStartConfig::default()
            .with_mode(HcMode::First)
            .with_neighborhood(Neighborhood::TwoOpt);
        let hc = config.hc_config();
        assert_eq!(hc.mode, HcMode::First);
        assert_eq!(hc.neighborhood, Neighborhood::TwoOpt);
    }
}
