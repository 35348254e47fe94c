//! Summary statistics over repeated runs.

use std::fmt;
use std::time::Duration;

/// Aggregate of the independent runs of one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Algorithm label.
    pub label: String,
    /// Number of runs aggregated.
    pub runs: usize,
    /// Lowest final cost.
    pub best_cost: f64,
    /// Mean final cost.
    pub mean_cost: f64,
    /// Sample standard deviation (n - 1) of the final costs; 0 for one run.
    pub std_dev: f64,
    /// Mean wall-clock time of `run`.
    pub mean_time: Duration,
}

impl RunSummary {
    /// Summarises per-run costs and timings.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use tsp_localsearch::experiment::RunSummary;
    ///
    /// let times = [Duration::from_millis(10), Duration::from_millis(30)];
    /// let summary = RunSummary::from_samples("demo", &[40.0, 44.0], &times);
    /// assert_eq!(summary.best_cost, 40.0);
    /// assert_eq!(summary.mean_cost, 42.0);
    /// assert_eq!(summary.mean_time, Duration::from_millis(20));
    /// ```
    pub fn from_samples(label: impl Into<String>, costs: &[f64], times: &[Duration]) -> Self {
        let runs = costs.len();
        let best_cost = costs.iter().copied().fold(f64::INFINITY, f64::min);
        let mean_cost = mean(costs);
        let std_dev = if runs > 1 {
            let ss: f64 = costs.iter().map(|c| (c - mean_cost).powi(2)).sum();
            (ss / (runs - 1) as f64).sqrt()
        } else {
            0.0
        };
        let mean_time = mean_duration(times.iter().sum(), times.len());

        Self {
            label: label.into(),
            runs,
            best_cost,
            mean_cost,
            std_dev,
            mean_time,
        }
    }
}

fn mean_duration(total: Duration, count: usize) -> Duration {
    match u32::try_from(count) {
        Ok(0) => Duration::ZERO,
        Ok(n) => total / n,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / count as f64),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for {} ({} runs):", self.label, self.runs)?;
        writeln!(f, "  -> Best cost : {}", self.best_cost)?;
        writeln!(f, "  -> Mean cost : {:.2}", self.mean_cost)?;
        writeln!(f, "  -> Std dev   : {:.2}", self.std_dev)?;
        write!(f, "  -> Mean time : {:.4} s", self.mean_time.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_std_dev() {
        // mean 5, squared deviations sum to 32, 32 / 7 under n - 1
        let costs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = RunSummary::from_samples("x", &costs, &[]);
        assert!((summary.mean_cost - 5.0).abs() < 1e-12);
        assert!((summary.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(summary.best_cost, 2.0);
        assert_eq!(summary.mean_time, Duration::ZERO);
    }

    #[test]
    fn test_single_run_has_zero_std_dev() {
        let summary = RunSummary::from_samples("x", &[7542.0], &[Duration::from_secs(1)]);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.mean_cost, 7542.0);
        assert_eq!(summary.mean_time, Duration::from_secs(1));
    }

    #[test]
    fn test_display_format() {
        let summary = RunSummary::from_samples(
            "HC",
            &[40.0, 48.0],
            &[Duration::from_millis(1), Duration::from_millis(3)],
        );
        let text = summary.to_string();
        assert!(text.starts_with("Results for HC (2 runs):"));
        assert!(text.contains("Best cost : 40"));
        assert!(text.contains("Mean cost : 44.00"));
        assert!(text.contains("Std dev   : 5.66"));
        assert!(text.contains("Mean time : 0.0020 s"));
    }

    #[test]
    fn test_mean_duration_beyond_u32_count() {
        let count = u32::MAX as usize + 1;
        let total = Duration::from_secs(count as u64);
        let mean = mean_duration(total, count);
        assert!((mean.as_secs_f64() - 1.0).abs() < 1e-9);
        assert_eq!(mean_duration(Duration::from_secs(9), 3), Duration::from_secs(3));
        assert_eq!(mean_duration(Duration::ZERO, 0), Duration::ZERO);
    }
}
