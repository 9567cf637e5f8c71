//! Summary statistics over benchmark columns

use crate::metrics::MetricResult;
use serde::Serialize;

/// Count, mean, min and max of a column of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Summarise `values`; `None` when there are none
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            mean: sum / count as f64,
            min,
            max,
        })
    }
}

/// Mean of `values`, `None` when there are none
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    SummaryStats::from_values(values).map(|s| s.mean)
}

/// Per-metric statistics over many evaluations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub category_match: SummaryStats,
    pub price_level_accuracy: SummaryStats,
    pub rating_similarity: SummaryStats,
    pub location_relevance: SummaryStats,
    pub variety_score: SummaryStats,
    pub overall_score: SummaryStats,
}

impl MetricSummary {
    /// Summarise `results`; `None` when there are none
    pub fn compute(results: &[MetricResult]) -> Option<Self> {
        let column = |f: fn(&MetricResult) -> f64| SummaryStats::from_values(results.iter().map(f));

        Some(Self {
            category_match: column(|m| m.category_match)?,
            price_level_accuracy: column(|m| m.price_level_accuracy)?,
            rating_similarity: column(|m| m.rating_similarity)?,
            location_relevance: column(|m| m.location_relevance)?,
            variety_score: column(|m| m.variety_score)?,
            overall_score: column(|m| m.overall_score)?,
        })
    }

    /// `(name, stats)` pairs in report order
    pub fn columns(&self) -> [(&'static str, &SummaryStats); 6] {
        let names = MetricResult::NAMES;
        [
            (names[0], &self.category_match),
            (names[1], &self.price_level_accuracy),
            (names[2], &self.rating_similarity),
            (names[3], &self.location_relevance),
            (names[4], &self.variety_score),
            (names[5], &self.overall_score),
        ]
    }
}
