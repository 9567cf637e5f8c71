//! Recommendation quality metrics
//!
//! Scores a ranked list against its query item on five independent axes and
//! combines them into one weighted overall score.
//!
//! ## Metrics Overview
//!
//! - **category_match**: mean share of the query's tags each candidate carries
//! - **price_level_accuracy**: mean of `1 - |Δprice| / 4`
//! - **rating_similarity**: mean of `1 - |Δrating| / 5`
//! - **location_relevance**: mean of 1.0 / 0.5 / 0.0 for same city / same state / elsewhere
//! - **variety_score**: distinct tags across the list over `n * VARIETY_BASELINE`

use ahash::AHashSet;
use restosim_core::{Error, Item, Result};
use restosim_similarity::distance::{
    category_overlap, location_relevance, price_similarity, rating_similarity,
};
use restosim_similarity::ScoredCandidate;
use serde::{Deserialize, Serialize};

/// Assumed number of categories per item when normalising `variety_score`.
///
/// Not clamped: a list whose items average more than three distinct tags
/// scores above 1.0.
pub const VARIETY_BASELINE: f64 = 3.0;

/// Weights of the five metrics in `overall_score`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricWeights {
    pub category_match: f64,
    pub price_level_accuracy: f64,
    pub rating_similarity: f64,
    pub location_relevance: f64,
    pub variety_score: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            category_match: 0.3,
            price_level_accuracy: 0.2,
            rating_similarity: 0.2,
            location_relevance: 0.2,
            variety_score: 0.1,
        }
    }
}

impl MetricWeights {
    /// Reject negative or non-finite weights
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("category_match", self.category_match),
            ("price_level_accuracy", self.price_level_accuracy),
            ("rating_similarity", self.rating_similarity),
            ("location_relevance", self.location_relevance),
            ("variety_score", self.variety_score),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "metric weight '{}' must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}

/// Quality of one ranked list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricResult {
    pub category_match: f64,
    pub price_level_accuracy: f64,
    pub rating_similarity: f64,
    pub location_relevance: f64,
    pub variety_score: f64,
    pub overall_score: f64,
}

impl MetricResult {
    /// Metric names in report order
    pub const NAMES: [&'static str; 6] = [
        "category_match",
        "price_level_accuracy",
        "rating_similarity",
        "location_relevance",
        "variety_score",
        "overall_score",
    ];

    /// `(name, value)` pairs in report order
    pub fn values(&self) -> [(&'static str, f64); 6] {
        [
            (Self::NAMES[0], self.category_match),
            (Self::NAMES[1], self.price_level_accuracy),
            (Self::NAMES[2], self.rating_similarity),
            (Self::NAMES[3], self.location_relevance),
            (Self::NAMES[4], self.variety_score),
            (Self::NAMES[5], self.overall_score),
        ]
    }
}

/// Share of the query's category tags carried by `candidate`
/// (0.0 when the query has no tags)
pub fn category_accuracy(query: &Item, candidate: &Item) -> f64 {
    category_overlap(&query.categories, &candidate.categories)
}

/// Computes [`MetricResult`]s
#[derive(Debug, Clone, Default)]
pub struct EvaluationMetricsCalculator {
    weights: MetricWeights,
}

impl EvaluationMetricsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: MetricWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &MetricWeights {
        &self.weights
    }

    /// Evaluate `ranked` against `query`.
    ///
    /// Fails with `EmptyCandidateSet` for an empty list and with
    /// `MissingAttribute` if any item lacks a price level or rating.
    pub fn evaluate<'a, I>(&self, query: &Item, ranked: I) -> Result<MetricResult>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let query_price = query.price()?;
        let query_rating = query.rating()?;

        let mut n = 0usize;
        let mut category = 0.0;
        let mut price = 0.0;
        let mut rating = 0.0;
        let mut location = 0.0;
        let mut distinct_tags: AHashSet<&str> = AHashSet::new();

        for candidate in ranked {
            n += 1;
            category += category_accuracy(query, candidate);
            price += price_similarity(candidate.price()?, query_price);
            rating += rating_similarity(candidate.rating()?, query_rating);
            location += location_relevance(query, candidate);
            distinct_tags.extend(candidate.categories.tags().iter().map(String::as_str));
        }

        if n == 0 {
            return Err(Error::EmptyCandidateSet);
        }

        let count = n as f64;
        let mut result = MetricResult {
            category_match: category / count,
            price_level_accuracy: price / count,
            rating_similarity: rating / count,
            location_relevance: location / count,
            variety_score: distinct_tags.len() as f64 / (count * VARIETY_BASELINE),
            overall_score: 0.0,
        };
        result.overall_score = self.overall(&result);
        Ok(result)
    }

    /// Evaluate the items of a top-K result
    pub fn evaluate_ranked(&self, query: &Item, ranked: &[ScoredCandidate<'_>]) -> Result<MetricResult> {
        self.evaluate(query, ranked.iter().map(|c| c.item))
    }

    fn overall(&self, m: &MetricResult) -> f64 {
        let w = &self.weights;
        m.category_match * w.category_match
            + m.price_level_accuracy * w.price_level_accuracy
            + m.rating_similarity * w.rating_similarity
            + m.location_relevance * w.location_relevance
            + m.variety_score * w.variety_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> Item {
        Item::new("q", "Query", "Italian, Pizza")
            .with_price(2)
            .with_rating(4.0)
            .with_location("Philadelphia", "PA")
    }

    fn candidate(id: &str, categories: &str, price: u8, rating: f64, city: &str, state: &str) -> Item {
        Item::new(id, id, categories)
            .with_price(price)
            .with_rating(rating)
            .with_location(city, state)
    }

    #[test]
    fn test_location_relevance_example() {
        let ranked = vec![
            candidate("a", "Italian", 2, 4.0, "Philadelphia", "PA"),
            candidate("b", "Italian", 2, 4.0, "Tampa", "FL"),
        ];
        let m = EvaluationMetricsCalculator::new().evaluate(&query(), &ranked).unwrap();
        assert!((m.location_relevance - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_all_metrics() {
        let ranked = vec![
            // 2/2 tags, same price, same rating, same city
            candidate("a", "Italian, Pizza", 2, 4.0, "Philadelphia", "PA"),
            // 1/2 tags, price off by 2, rating off by 1, same state
            candidate("b", "Pizza, Sandwiches, Delis", 4, 3.0, "Pittsburgh", "PA"),
        ];
        let m = EvaluationMetricsCalculator::new().evaluate(&query(), &ranked).unwrap();

        assert!((m.category_match - 0.75).abs() < 1e-12);
        assert!((m.price_level_accuracy - 0.75).abs() < 1e-12);
        assert!((m.rating_similarity - 0.9).abs() < 1e-12);
        assert!((m.location_relevance - 0.75).abs() < 1e-12);
        // {Italian, Pizza, Sandwiches, Delis} over 2 * 3
        assert!((m.variety_score - 4.0 / 6.0).abs() < 1e-12);

        let expected = 0.3 * 0.75 + 0.2 * 0.75 + 0.2 * 0.9 + 0.2 * 0.75 + 0.1 * (4.0 / 6.0);
        assert!((m.overall_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_variety_can_exceed_one() {
        let ranked = vec![candidate("a", "A, B, C, D, E", 2, 4.0, "X", "Y")];
        let m = EvaluationMetricsCalculator::new().evaluate(&query(), &ranked).unwrap();
        assert!((m.variety_score - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_query_without_categories() {
        let query = Item::new("q", "Q", "").with_price(2).with_rating(4.0);
        let ranked = vec![candidate("a", "Italian", 2, 4.0, "X", "Y")];
        let m = EvaluationMetricsCalculator::new().evaluate(&query, &ranked).unwrap();
        assert_eq!(m.category_match, 0.0);
    }

    #[test]
    fn test_empty_list_rejected() {
        let ranked: Vec<Item> = Vec::new();
        let result = EvaluationMetricsCalculator::new().evaluate(&query(), &ranked);
        assert!(matches!(result, Err(Error::EmptyCandidateSet)));
    }

    #[test]
    fn test_missing_attribute_rejected() {
        let ranked = vec![Item::new("a", "A", "Italian").with_price(2)];
        let result = EvaluationMetricsCalculator::new().evaluate(&query(), &ranked);
        assert!(matches!(result, Err(Error::MissingAttribute { .. })));
    }

    #[test]
    fn test_evaluate_ranked() {
        let a = candidate("a", "Italian, Pizza", 2, 4.0, "Philadelphia", "PA");
        let ranked = vec![ScoredCandidate { item: &a, score: 1.0, rank: 1 }];
        let m = EvaluationMetricsCalculator::new().evaluate_ranked(&query(), &ranked).unwrap();
        assert_eq!(m.category_match, 1.0);
        assert_eq!(m.location_relevance, 1.0);
    }

    #[test]
    fn test_custom_weights() {
        let weights = MetricWeights {
            category_match: 1.0,
            price_level_accuracy: 0.0,
            rating_similarity: 0.0,
            location_relevance: 0.0,
            variety_score: 0.0,
        };
        let calc = EvaluationMetricsCalculator::with_weights(weights).unwrap();
        let ranked = vec![candidate("a", "Pizza", 4, 1.0, "X", "Y")];
        let m = calc.evaluate(&query(), &ranked).unwrap();
        assert!((m.overall_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = MetricWeights { variety_score: -0.1, ..MetricWeights::default() };
        assert!(EvaluationMetricsCalculator::with_weights(weights).is_err());
    }

    #[test]
    fn test_category_accuracy() {
        let c = candidate("a", "Pizza, Burgers", 2, 4.0, "X", "Y");
        assert!((category_accuracy(&query(), &c) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_values_order() {
        let m = MetricResult {
            category_match: 1.0,
            price_level_accuracy: 2.0,
            rating_similarity: 3.0,
            location_relevance: 4.0,
            variety_score: 5.0,
            overall_score: 6.0,
        };
        let values = m.values();
        assert_eq!(values[0], ("category_match", 1.0));
        assert_eq!(values[5], ("overall_score", 6.0));
    }
}
