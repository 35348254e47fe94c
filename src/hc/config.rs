//! Hill-Climbing configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::neighborhood::Neighborhood;

/// Which improving neighbor Hill-Climbing commits to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HcMode {
    /// Scan lazily, adopt the first strictly improving neighbor.
    First,
    /// Scan the whole neighborhood, adopt the strict best.
    #[default]
    Best,
}

impl HcMode {
    pub fn name(self) -> &'static str {
        match self {
            HcMode::First => "first",
            HcMode::Best => "best",
        }
    }
}

impl fmt::Display for HcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HcMode {
    type Err = SearchError;

    /// Accepts `"first"` or `"best"` (any case). Anything else is an
    /// invalid configuration rather than a search that does nothing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(HcMode::First),
            "best" => Ok(HcMode::Best),
            other => Err(SearchError::invalid_config(format!(
                "unknown hill-climbing mode '{other}', expected 'first' or 'best'"
            ))),
        }
    }
}

/// Configuration for Hill-Climbing.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::hc::{HcConfig, HcMode};
/// use tsp_localsearch::neighborhood::Neighborhood;
///
/// let config = HcConfig::default()
///     .with_mode(HcMode::First)
///     .with_neighborhood(Neighborhood::TwoOpt);
/// assert_eq!(config.mode, HcMode::First);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HcConfig {
    /// First or best improvement.
    #[serde(default)]
    pub mode: HcMode,

    /// Move family explored at each iteration.
    #[serde(default)]
    pub neighborhood: Neighborhood,

    /// Whether best-improvement evaluates neighbor costs in parallel
    /// using rayon. Has no effect in first-improvement mode.
    #[serde(default)]
    pub parallel: bool,
}

impl HcConfig {
    pub fn new(mode: HcMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: HcMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
