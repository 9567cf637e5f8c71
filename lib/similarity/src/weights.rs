//! Fixed weights of the feature-based scorer
//!
//! Weights are configuration, not learned parameters. Unlike a normalised
//! schema they are used as given: the three terms add up to 1.0 with the
//! defaults, but nothing forces that.

use restosim_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Weights of the category, price and rating terms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureWeights {
    #[serde(default = "default_category")]
    pub category: f64,
    #[serde(default = "default_price")]
    pub price: f64,
    #[serde(default = "default_rating")]
    pub rating: f64,
}

fn default_category() -> f64 {
    0.3
}

fn default_price() -> f64 {
    0.3
}

fn default_rating() -> f64 {
    0.4
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            category: default_category(),
            price: default_price(),
            rating: default_rating(),
        }
    }
}

impl FeatureWeights {
    pub fn new(category: f64, price: f64, rating: f64) -> Self {
        Self { category, price, rating }
    }

    /// Reject negative or non-finite weights
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("category", self.category),
            ("price", self.price),
            ("rating", self.rating),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "feature weight '{}' must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}
