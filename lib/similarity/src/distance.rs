//! Per-attribute similarity terms
//!
//! Building blocks shared by the feature scorer and the evaluation metrics.
//! None of these clamp: out-of-range inputs yield out-of-range terms.

use restosim_core::{Categories, Item};

/// Largest possible price-level difference (tiers 1..=4)
pub const MAX_PRICE_DELTA: f64 = 4.0;

/// Largest possible rating difference (stars 0..=5)
pub const MAX_RATING_DELTA: f64 = 5.0;

/// 1.0 if both labels are identical, 0.0 otherwise. No partial credit.
#[inline]
pub fn category_exact_match(a: &Categories, b: &Categories) -> f64 {
    if a.same_label(b) {
        1.0
    } else {
        0.0
    }
}

/// Fraction of the query's tags that the candidate shares.
///
/// Not symmetric: normalised by the query's tag count. A query without tags
/// scores 0.0.
pub fn category_overlap(query: &Categories, candidate: &Categories) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    query.overlap(candidate) as f64 / query.len() as f64
}

/// Linear distance penalty: `1 - |a - b| / max_delta`
#[inline]
pub fn linear_similarity(a: f64, b: f64, max_delta: f64) -> f64 {
    1.0 - (a - b).abs() / max_delta
}

/// Price term over the four price tiers
#[inline]
pub fn price_similarity(a: u8, b: u8) -> f64 {
    linear_similarity(f64::from(a), f64::from(b), MAX_PRICE_DELTA)
}

/// Rating term over the five-star scale
#[inline]
pub fn rating_similarity(a: f64, b: f64) -> f64 {
    linear_similarity(a, b, MAX_RATING_DELTA)
}

/// Three-tier location score: 1.0 for same city and state, 0.5 for same
/// state only, 0.0 otherwise
pub fn location_relevance(query: &Item, candidate: &Item) -> f64 {
    if query.state != candidate.state {
        0.0
    } else if query.city == candidate.city {
        1.0
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_exact_match() {
        let a = Categories::parse("Italian, Pizza");
        assert_eq!(category_exact_match(&a, &Categories::parse("Italian, Pizza")), 1.0);
        assert_eq!(category_exact_match(&a, &Categories::parse("Italian")), 0.0);
        // Same tags in another order is not an exact match
        assert_eq!(category_exact_match(&a, &Categories::parse("Pizza, Italian")), 0.0);
    }

    #[test]
    fn test_category_overlap() {
        let query = Categories::parse("Italian, Pizza, Bars");
        let candidate = Categories::parse("Pizza, Sandwiches");
        assert!((category_overlap(&query, &candidate) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(category_overlap(&Categories::parse(""), &candidate), 0.0);
    }

    #[test]
    fn test_price_similarity() {
        assert_eq!(price_similarity(2, 2), 1.0);
        assert_eq!(price_similarity(1, 4), 0.25);
        assert_eq!(price_similarity(4, 2), 0.5);
    }

    #[test]
    fn test_rating_similarity() {
        assert_eq!(rating_similarity(4.0, 4.0), 1.0);
        assert!((rating_similarity(4.0, 2.0) - 0.6).abs() < 1e-12);
        assert_eq!(rating_similarity(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_out_of_range_goes_negative() {
        // Price tier 9 is bad data; the term is not clamped
        assert!(price_similarity(1, 9) < 0.0);
    }

    #[test]
    fn test_location_tiers() {
        let query = Item::new("q", "Q", "").with_location("Tampa", "FL");
        let same_city = Item::new("a", "A", "").with_location("Tampa", "FL");
        let same_state = Item::new("b", "B", "").with_location("Orlando", "FL");
        let elsewhere = Item::new("c", "C", "").with_location("Tampa", "AZ");
        assert_eq!(location_relevance(&query, &same_city), 1.0);
        assert_eq!(location_relevance(&query, &same_state), 0.5);
        assert_eq!(location_relevance(&query, &elsewhere), 0.0);
    }
}
