//! Benchmark configuration
//!
//! Loaded from JSON (every field optional) and overridden by CLI flags.

use crate::metrics::MetricWeights;
use restosim_core::{Error, Result};
use restosim_similarity::FeatureWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of a benchmark run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of query items to draw
    pub sample_size: usize,
    /// Length of each ranking
    pub top_k: usize,
    /// RNG seed for a reproducible sample; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Compute quality metrics for each ranking
    pub evaluate: bool,
    /// Process sampled queries on the rayon thread pool
    pub parallel: bool,
    pub feature_weights: FeatureWeights,
    pub metric_weights: MetricWeights,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            top_k: 5,
            seed: None,
            evaluate: true,
            parallel: false,
            feature_weights: FeatureWeights::default(),
            metric_weights: MetricWeights::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Read a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(Error::InvalidConfig("sample_size must be at least 1".to_string()));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }
        self.feature_weights.validate()?;
        self.metric_weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.sample_size, 100);
        assert_eq!(config.top_k, 5);
        assert!(config.evaluate);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let config = BenchmarkConfig { sample_size: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = BenchmarkConfig { top_k: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");
        std::fs::write(
            &path,
            r#"{"sample_size": 25, "seed": 9, "feature_weights": {"category": 0.5}}"#,
        )
        .unwrap();

        let config = BenchmarkConfig::from_json_file(&path).unwrap();
        assert_eq!(config.sample_size, 25);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.feature_weights.category, 0.5);
        assert_eq!(config.feature_weights.rating, 0.4);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");
        std::fs::write(&path, r#"{"top_k": 0}"#).unwrap();
        assert!(matches!(
            BenchmarkConfig::from_json_file(&path),
            Err(Error::InvalidConfig(_))
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            BenchmarkConfig::from_json_file(&path),
            Err(Error::Serialization(_))
        ));
    }
}
