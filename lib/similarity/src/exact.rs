//! Exact-match lookup
//!
//! The degenerate case of the feature scorer: candidates whose category
//! label, price level and average rating all equal the query's. Near
//! matches do not count.

use crate::feature::FeatureSimilarityScorer;
use crate::topk::{ScoredCandidate, TopKSelector};
use restosim_core::{Item, Result};

/// Whether `candidate` matches `query` on all three feature attributes
pub fn is_exact_match(query: &Item, candidate: &Item) -> bool {
    query.categories.same_label(&candidate.categories)
        && query.price_level.is_some()
        && query.price_level == candidate.price_level
        && query.avg_rating.is_some()
        && query.avg_rating == candidate.avg_rating
}

/// Finds items with identical feature attributes
#[derive(Debug, Clone, Default)]
pub struct ExactMatchFinder {
    scorer: FeatureSimilarityScorer,
}

impl ExactMatchFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(scorer: FeatureSimilarityScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &FeatureSimilarityScorer {
        &self.scorer
    }

    /// All exact matches of `query` among `candidates`, ordered by feature
    /// score descending with ties in input order. The query itself is never
    /// returned. Empty when nothing matches exactly; falling back to a
    /// top-K is up to the caller.
    ///
    /// Fails with `MissingAttribute` if the query lacks a price or rating.
    pub fn find_exact<'a, I>(&self, query: &Item, candidates: I) -> Result<Vec<ScoredCandidate<'a>>>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        query.price()?;
        query.rating()?;

        let matches = candidates
            .into_iter()
            .filter(|candidate| is_exact_match(query, candidate));
        TopKSelector::unbounded().select(query, matches, &self.scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restosim_core::Error;

    fn query() -> Item {
        Item::new("q", "Query", "Italian, Pizza")
            .with_price(2)
            .with_rating(4.0)
    }

    #[test]
    fn test_finds_exact_matches_in_order() {
        let pool = vec![
            Item::new("m1", "Match 1", "Italian, Pizza").with_price(2).with_rating(4.0),
            Item::new("near", "Near", "Italian, Pizza").with_price(2).with_rating(4.5),
            query(),
            Item::new("m2", "Match 2", "Italian, Pizza").with_price(2).with_rating(4.0),
        ];
        let matches = ExactMatchFinder::new().find_exact(&query(), &pool).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
        assert!(matches.iter().all(|m| (m.score - 1.0).abs() < 1e-12));
        assert_eq!(matches[1].rank, 2);
    }

    #[test]
    fn test_near_matches_are_not_exact() {
        let pool = vec![
            Item::new("a", "A", "Italian, Pizza").with_price(3).with_rating(4.0),
            Item::new("b", "B", "Italian, Pizza").with_price(2).with_rating(3.5),
            Item::new("c", "C", "Pizza, Italian").with_price(2).with_rating(4.0),
            Item::new("d", "D", "Italian, Pizza").with_rating(4.0),
        ];
        let matches = ExactMatchFinder::new().find_exact(&query(), &pool).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_query_missing_attribute() {
        let query = Item::new("q", "Query", "Italian").with_price(2);
        let pool = vec![Item::new("a", "A", "Italian").with_price(2)];
        let result = ExactMatchFinder::new().find_exact(&query, &pool);
        assert!(matches!(result, Err(Error::MissingAttribute { .. })));
    }

    #[test]
    fn test_is_exact_match() {
        let q = query();
        assert!(is_exact_match(&q, &q.clone()));
        assert!(!is_exact_match(&q, &Item::new("x", "X", "Italian, Pizza").with_price(2)));
    }
}
