//! Configuration parsing for statistics thresholds
//!
//! Thresholds are limits a benchmark's [`Statistics`] must stay under for
//! the run to pass. They are read from TOML:
//!
//! ```toml
//! [thresholds]
//! max_mean = 2.5   # milliseconds
//! max_p99 = 4.0    # milliseconds
//! max_rme = 5.0    # percent
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::stats::Statistics;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Limits evaluated against each statistics record
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A field has the wrong type
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bench_stats::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("thresholds.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!("Loading thresholds from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use bench_stats::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str("[thresholds]\nmax_p99 = 4.0")?;
    /// assert_eq!(config.thresholds.max_p99, Some(4.0));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Upper limits for a statistics record, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Mean threshold, in the sample unit
    #[serde(default)]
    pub max_mean: Option<f64>,
    /// 99th percentile threshold, in the sample unit
    #[serde(default)]
    pub max_p99: Option<f64>,
    /// Relative margin of error threshold, in percent
    #[serde(default)]
    pub max_rme: Option<f64>,
}

impl Thresholds {
    /// Check `stats` against every configured limit.
    ///
    /// Returns one message per exceeded limit; an empty vector means the
    /// record passes. A non-finite `rme` (zero mean) is reported with a
    /// warning but never counts as a failure.
    pub fn evaluate(&self, stats: &Statistics) -> Vec<String> {
        let mut failures = Vec::new();

        if let Some(threshold) = self.max_mean {
            if stats.mean > threshold {
                failures.push(format!(
                    "mean ({:.4}) exceeds threshold ({:.4})",
                    stats.mean, threshold
                ));
            }
        }

        if let Some(threshold) = self.max_p99 {
            if stats.p99 > threshold {
                failures.push(format!(
                    "p99 ({:.4}) exceeds threshold ({:.4})",
                    stats.p99, threshold
                ));
            }
        }

        if let Some(threshold) = self.max_rme {
            if !stats.rme.is_finite() {
                warn!(rme = stats.rme, "Skipping rme threshold for non-finite value");
            } else if stats.rme > threshold {
                failures.push(format!(
                    "rme ({:.2}%) exceeds threshold ({:.2}%)",
                    stats.rme, threshold
                ));
            }
        }

        failures
    }

    /// Whether no limit is configured.
    pub fn is_empty(&self) -> bool {
        self.max_mean.is_none() && self.max_p99.is_none() && self.max_rme.is_none()
    }
}
