//! Analysis settings loaded from an optional YAML file.

use std::fs;
use std::path::Path;

use cbaplan_core::DEFAULT_DISCOUNT_RATE;
use cbaplan_core::analysis::{DEFAULT_HISTOGRAM_BINS, MonteCarloConfig};
use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    pub samples: usize,
    pub seed: u64,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        let defaults = MonteCarloConfig::default();
        Self {
            samples: defaults.n_samples,
            seed: defaults.seed,
        }
    }
}

/// Settings of a report run; every field falls back to its default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Rate used for scenarios, tornado, waterfall and Monte Carlo
    pub discount_rate: f64,
    pub monte_carlo: MonteCarloSettings,
    pub histogram_bins: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            monte_carlo: MonteCarloSettings::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl AnalysisSettings {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Load settings from `path`, or defaults when no path is given.
    ///
    /// A path that does not exist also yields defaults; a file that fails to
    /// parse is an error.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let settings = Self::from_yaml(&content)
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded analysis settings");
        Ok(settings)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, samples: Option<usize>, seed: Option<u64>) -> Self {
        if let Some(samples) = samples {
            self.monte_carlo.samples = samples;
        }
        if let Some(seed) = seed {
            self.monte_carlo.seed = seed;
        }
        self
    }

    pub fn monte_carlo_config(&self) -> MonteCarloConfig {
        MonteCarloConfig {
            n_samples: self.monte_carlo.samples,
            seed: self.monte_carlo.seed,
            rate: self.discount_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = AnalysisSettings::from_yaml("monte_carlo:\n  seed: 42\n").unwrap();
        assert_eq!(settings.monte_carlo.seed, 42);
        assert_eq!(settings.monte_carlo.samples, 10_000);
        assert_eq!(settings.discount_rate, DEFAULT_DISCOUNT_RATE);
        assert_eq!(settings.histogram_bins, DEFAULT_HISTOGRAM_BINS);
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = AnalysisSettings {
            discount_rate: 0.03,
            monte_carlo: MonteCarloSettings {
                samples: 500,
                seed: 7,
            },
            histogram_bins: 20,
        };
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(AnalysisSettings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_overrides() {
        let settings = AnalysisSettings::default().with_overrides(Some(100), None);
        assert_eq!(settings.monte_carlo.samples, 100);
        assert_eq!(settings.monte_carlo.seed, 0);

        let config = settings.monte_carlo_config();
        assert_eq!(config.n_samples, 100);
        assert_eq!(config.rate, DEFAULT_DISCOUNT_RATE);
    }

    #[test]
    fn test_load_missing_and_malformed() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.yaml");
        assert_eq!(
            AnalysisSettings::load(Some(&missing)).unwrap(),
            AnalysisSettings::default()
        );

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "discount_rate: [not, a, number]\n").unwrap();
        let err = AnalysisSettings::load(Some(&bad)).unwrap_err();
        assert!(format!("{err}").contains("bad.yaml"));
    }
}
