//! Vector-embedding scorer
//!
//! Ranks by cosine similarity (`1 - cosine_distance`) between review
//! embeddings. Items without an embedding are "not applicable" rather than
//! an error.

use crate::strategy::SimilarityStrategy;
use restosim_core::{EmbeddingVector, Error, Item, ItemCatalog, Result};

/// Cosine similarity between two embeddings of equal dimension
pub fn score_vectors(query: &EmbeddingVector, candidate: &EmbeddingVector) -> Result<f64> {
    if query.dim() != candidate.dim() {
        return Err(Error::InvalidDimension {
            expected: query.dim(),
            actual: candidate.dim(),
        });
    }
    Ok(1.0 - query.vector.cosine_distance(&candidate.vector))
}

/// Scores items by the cosine similarity of their catalog embeddings
pub struct VectorSimilarityScorer<'c, C: ItemCatalog + ?Sized> {
    catalog: &'c C,
}

impl<'c, C: ItemCatalog + ?Sized> VectorSimilarityScorer<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self { catalog }
    }

    /// Whether `item` has an embedding to compare with
    pub fn is_applicable(&self, item: &Item) -> bool {
        self.catalog.get_embedding(&item.id).is_some()
    }
}

impl<C: ItemCatalog + ?Sized> Clone for VectorSimilarityScorer<'_, C> {
    fn clone(&self) -> Self {
        Self { catalog: self.catalog }
    }
}

impl<C: ItemCatalog + ?Sized> SimilarityStrategy for VectorSimilarityScorer<'_, C> {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn score(&self, query: &Item, candidate: &Item) -> Result<Option<f64>> {
        let (Some(q), Some(c)) = (
            self.catalog.get_embedding(&query.id),
            self.catalog.get_embedding(&candidate.id),
        ) else {
            return Ok(None);
        };
        score_vectors(q, c).map(Some)
    }
}
