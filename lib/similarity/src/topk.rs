//! Top-K selection
//!
//! Scores every candidate against the query with a [`SimilarityStrategy`],
//! drops the query itself and any candidate the strategy cannot score, and
//! keeps the K best.
//!
//! Ordering is deterministic: a stable sort on the score keeps equal-score
//! candidates in their input order, and `f64::total_cmp` gives NaN a fixed
//! place instead of an inconsistent comparison.

use crate::strategy::SimilarityStrategy;
use restosim_core::{Item, Result};
use serde::Serialize;
use tracing::debug;

/// A ranked candidate
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate<'a> {
    pub item: &'a Item,
    pub score: f64,
    /// 1-based position in the ranking
    pub rank: usize,
}

impl ScoredCandidate<'_> {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }
}

/// Keeps the `k` highest-scoring candidates
#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    k: usize,
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Selector that keeps every eligible candidate
    pub fn unbounded() -> Self {
        Self { k: usize::MAX }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Rank `candidates` against `query`.
    ///
    /// Returns at most `k` results, fewer when fewer candidates are eligible,
    /// and an empty list when none are. Scoring errors abort the selection.
    pub fn select<'a, S, I>(
        &self,
        query: &Item,
        candidates: I,
        scorer: &S,
    ) -> Result<Vec<ScoredCandidate<'a>>>
    where
        S: SimilarityStrategy + ?Sized,
        I: IntoIterator<Item = &'a Item>,
    {
        let mut scored: Vec<(&'a Item, f64)> = Vec::new();
        let mut skipped = 0usize;

        for candidate in candidates {
            if candidate.id == query.id {
                continue;
            }
            match scorer.score(query, candidate)? {
                Some(score) => scored.push((candidate, score)),
                None => skipped += 1,
            }
        }

        // Stable: ties keep input order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.k);

        debug!(
            "{} top-{} for {}: {} results, {} not applicable",
            scorer.name(),
            self.k,
            query.id,
            scored.len(),
            skipped
        );

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(i, (item, score))| ScoredCandidate {
                item,
                score,
                rank: i + 1,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureSimilarityScorer;
    use restosim_core::Error;

    /// Scores by the candidate's review count; items with zero reviews are
    /// not applicable
    struct ReviewCountStrategy;

    impl SimilarityStrategy for ReviewCountStrategy {
        fn name(&self) -> &'static str {
            "reviews"
        }

        fn score(&self, _query: &Item, candidate: &Item) -> Result<Option<f64>> {
            if candidate.review_count == 0 {
                Ok(None)
            } else {
                Ok(Some(f64::from(candidate.review_count)))
            }
        }
    }

    fn item(id: &str, reviews: u32) -> Item {
        Item::new(id, id.to_uppercase(), "Restaurants").with_review_count(reviews)
    }

    fn ids<'a>(results: &'a [ScoredCandidate<'_>]) -> Vec<&'a str> {
        results.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_sorted_descending_with_ranks() {
        let query = item("q", 1);
        let pool = vec![item("a", 10), item("b", 30), item("c", 20)];
        let results = TopKSelector::new(3)
            .select(&query, &pool, &ReviewCountStrategy)
            .unwrap();
        assert_eq!(ids(&results), vec!["b", "c", "a"]);
        assert_eq!(
            results.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_query_excluded() {
        let query = item("q", 100);
        let pool = vec![item("a", 10), query.clone(), item("b", 5)];
        let results = TopKSelector::new(10)
            .select(&query, &pool, &ReviewCountStrategy)
            .unwrap();
        assert!(results.iter().all(|r| r.id() != "q"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_length_is_min_of_k_and_eligible() {
        let query = item("q", 1);
        let pool: Vec<Item> = (1..=6).map(|i| item(&format!("i{}", i), i)).collect();
        for k in 0..10 {
            let results = TopKSelector::new(k)
                .select(&query, &pool, &ReviewCountStrategy)
                .unwrap();
            assert_eq!(results.len(), k.min(6));
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let query = item("q", 1);
        let pool = vec![item("first", 5), item("top", 9), item("second", 5), item("third", 5)];
        let results = TopKSelector::new(3)
            .select(&query, &pool, &ReviewCountStrategy)
            .unwrap();
        assert_eq!(ids(&results), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_not_applicable_skipped_not_zeroed() {
        let query = item("q", 1);
        let pool = vec![item("none", 0), item("a", 1), item("b", 2)];
        let results = TopKSelector::new(5)
            .select(&query, &pool, &ReviewCountStrategy)
            .unwrap();
        assert_eq!(ids(&results), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_when_nothing_eligible() {
        let query = item("q", 1);
        let pool = vec![query.clone(), item("none", 0)];
        let results = TopKSelector::new(5)
            .select(&query, &pool, &ReviewCountStrategy)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let scorer = FeatureSimilarityScorer::new();
        let query = Item::new("q", "Q", "Italian").with_price(2).with_rating(4.0);
        let pool: Vec<Item> = (0..20)
            .map(|i| {
                Item::new(format!("i{}", i), "X", if i % 3 == 0 { "Italian" } else { "Thai" })
                    .with_price((i % 4 + 1) as u8)
                    .with_rating(f64::from(i % 5))
            })
            .collect();
        let selector = TopKSelector::new(7);
        let first = selector.select(&query, &pool, &scorer).unwrap();
        let second = selector.select(&query, &pool, &scorer).unwrap();
        let key = |r: &[ScoredCandidate<'_>]| {
            r.iter().map(|c| (c.id().to_string(), c.score)).collect::<Vec<_>>()
        };
        assert_eq!(key(&first), key(&second));
    }

    #[test]
    fn test_scoring_error_propagates() {
        let scorer = FeatureSimilarityScorer::new();
        let query = Item::new("q", "Q", "Italian").with_price(2).with_rating(4.0);
        let pool = vec![Item::new("broken", "Broken", "Italian")];
        let result = TopKSelector::new(3).select(&query, &pool, &scorer);
        assert!(matches!(result, Err(Error::MissingAttribute { .. })));
    }

    #[test]
    fn test_unbounded() {
        let query = item("q", 1);
        let pool: Vec<Item> = (1..=50).map(|i| item(&format!("i{}", i), i)).collect();
        let results = TopKSelector::unbounded()
            .select(&query, &pool, &ReviewCountStrategy)
            .unwrap();
        assert_eq!(results.len(), 50);
        assert_eq!(results[0].id(), "i50");
    }
}
