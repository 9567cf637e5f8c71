//! # restosim
//!
//! Restaurant similarity engine: ranks catalog items against a query item
//! with two interchangeable strategies and benchmarks them against each other.
//!
//! - **Feature strategy**: weighted mix of category label, price level and average rating
//! - **Vector strategy**: cosine similarity of review embeddings
//!
//! ## Quick Start
//!
//! ### From the Command Line
//!
//! ```bash
//! restosim --catalog catalog.json similar <item-id> --top-k 5
//! restosim --catalog catalog.json bench --sample-size 100 --seed 42 --output report.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use restosim::prelude::*;
//!
//! let items = vec![
//!     Item::new("r1", "Trattoria", "Italian, Pizza").with_price(2).with_rating(4.0),
//!     Item::new("r2", "Pizzeria", "Italian, Pizza").with_price(2).with_rating(4.5),
//!     Item::new("r3", "Sushi Bar", "Sushi").with_price(4).with_rating(3.0),
//! ];
//! let catalog = InMemoryCatalog::new(items, Vec::new()).unwrap();
//!
//! let comparison = compare(&catalog, "r1", 2).unwrap();
//! assert_eq!(comparison.feature.results[0].id(), "r2");
//! assert!(comparison.vector.is_none());
//! ```
//!
//! ## Crate Structure
//!
//! - [`restosim-core`](https://docs.rs/restosim-core) - Items, embeddings, catalog snapshots, errors
//! - [`restosim-similarity`](https://docs.rs/restosim-similarity) - Scorers, top-K selection, exact matches
//! - [`restosim-eval`](https://docs.rs/restosim-eval) - Quality metrics and the benchmark harness

// Re-export core types
pub use restosim_core::{
    CatalogSnapshot, Categories, EmbeddingVector, Error, InMemoryCatalog, Item, ItemCatalog,
    Result, Vector,
};

// Re-export similarity
pub use restosim_similarity::{
    ExactMatchFinder, FeatureBreakdown, FeatureSimilarityScorer, FeatureWeights, RankingStats,
    ScoredCandidate, SimilarityStrategy, TopKSelector, VectorSimilarityScorer,
};

// Re-export evaluation
pub use restosim_eval::{
    compare, evaluate_query, perfect_matches, BenchmarkConfig, BenchmarkHarness, BenchmarkReport,
    EvaluationMetricsCalculator, MatchOutcome, MetricResult, MetricWeights,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compare, evaluate_query, perfect_matches, BenchmarkConfig, BenchmarkHarness,
        EmbeddingVector, Error, EvaluationMetricsCalculator, FeatureSimilarityScorer,
        InMemoryCatalog, Item, ItemCatalog, MatchOutcome, Result, SimilarityStrategy,
        TopKSelector, VectorSimilarityScorer,
    };
}
