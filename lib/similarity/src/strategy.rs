//! The similarity strategy abstraction
//!
//! Both ranking strategies score a `(query, candidate)` pair through the same
//! trait, so top-K selection and benchmarking are written once.

use restosim_core::{Item, Result};

/// A pairwise similarity measure between catalog items.
///
/// `Ok(None)` means the strategy cannot be applied to this pair (for example
/// a missing embedding). Callers skip such candidates instead of scoring them
/// zero. `Err` is reserved for bad input such as a missing attribute.
pub trait SimilarityStrategy {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Similarity of `candidate` to `query`; higher is more similar
    fn score(&self, query: &Item, candidate: &Item) -> Result<Option<f64>>;
}

impl<S: SimilarityStrategy + ?Sized> SimilarityStrategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn score(&self, query: &Item, candidate: &Item) -> Result<Option<f64>> {
        (**self).score(query, candidate)
    }
}

impl<S: SimilarityStrategy + ?Sized> SimilarityStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn score(&self, query: &Item, candidate: &Item) -> Result<Option<f64>> {
        (**self).score(query, candidate)
    }
}
