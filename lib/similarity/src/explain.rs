//! Explainability for similarity results
//!
//! Per-term contributions of the feature score and summary statistics of a
//! ranked list.

use crate::topk::ScoredCandidate;
use serde::Serialize;

/// Weighted contribution of each feature term to a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureBreakdown {
    pub category: f64,
    pub price: f64,
    pub rating: f64,
    /// Sum of the three contributions
    pub total: f64,
}

impl FeatureBreakdown {
    pub fn new(category: f64, price: f64, rating: f64) -> Self {
        Self {
            category,
            price,
            rating,
            total: category + price + rating,
        }
    }

    /// Name of the term contributing most to the score
    pub fn top_contributor(&self) -> &'static str {
        let mut best = ("category", self.category);
        for term in [("price", self.price), ("rating", self.rating)] {
            if term.1 > best.1 {
                best = term;
            }
        }
        best.0
    }
}

/// Summary statistics for a ranked list
#[derive(Debug, Clone, Serialize)]
pub struct RankingStats {
    /// Number of candidates considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Average score of results
    pub avg_score: f64,
    /// Score of best result
    pub best_score: Option<f64>,
}

impl RankingStats {
    /// Compute stats from ranked results (assumed sorted best first)
    pub fn compute(results: &[ScoredCandidate<'_>], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: None,
            };
        }

        let avg_score = results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64;

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score: Some(results[0].score),
        }
    }
}
