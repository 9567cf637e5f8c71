//! Feature-based analytic scorer
//!
//! ```text
//! score = w_category * category_exact_match
//!       + w_price    * (1 - |Δprice| / 4)
//!       + w_rating   * (1 - |Δrating| / 5)
//! ```
//!
//! With the default weights (0.3, 0.3, 0.4) identical items score 1.0.
//! Every term is symmetric in its arguments, so the score is too.

use crate::distance::{category_exact_match, price_similarity, rating_similarity};
use crate::explain::FeatureBreakdown;
use crate::strategy::SimilarityStrategy;
use crate::weights::FeatureWeights;
use restosim_core::{Item, Result};

/// Scores items on category label, price level and average rating
#[derive(Debug, Clone, Default)]
pub struct FeatureSimilarityScorer {
    weights: FeatureWeights,
}

impl FeatureSimilarityScorer {
    /// Create a scorer with the default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weights
    pub fn with_weights(weights: FeatureWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    /// Similarity of `candidate` to `query`.
    ///
    /// Fails with `MissingAttribute` if either item lacks a price level or
    /// rating.
    pub fn score(&self, query: &Item, candidate: &Item) -> Result<f64> {
        Ok(self.explain(query, candidate)?.total)
    }

    /// Score broken down into weighted per-term contributions
    pub fn explain(&self, query: &Item, candidate: &Item) -> Result<FeatureBreakdown> {
        let price = price_similarity(query.price()?, candidate.price()?);
        let rating = rating_similarity(query.rating()?, candidate.rating()?);
        let category = category_exact_match(&query.categories, &candidate.categories);

        Ok(FeatureBreakdown::new(
            self.weights.category * category,
            self.weights.price * price,
            self.weights.rating * rating,
        ))
    }
}

impl SimilarityStrategy for FeatureSimilarityScorer {
    fn name(&self) -> &'static str {
        "feature"
    }

    fn score(&self, query: &Item, candidate: &Item) -> Result<Option<f64>> {
        FeatureSimilarityScorer::score(self, query, candidate).map(Some)
    }
}
