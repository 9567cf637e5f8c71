//! # restosim Similarity
//!
//! Two interchangeable ranking strategies for catalog items and the
//! machinery to rank with them.
//!
//! ## Features
//!
//! - **Similarity Strategy**: one trait for every pairwise scorer
//! - **Feature Scorer**: fixed-weight mix of category, price and rating terms
//! - **Vector Scorer**: cosine similarity of review embeddings
//! - **Top-K Selection**: self-exclusion and deterministic tie-breaking
//! - **Exact Matches**: items identical on every feature attribute
//! - **Explainability**: per-term contributions of the feature score
//!
//! ## Example
//!
//! ```rust
//! use restosim_core::{EmbeddingVector, InMemoryCatalog, Item, ItemCatalog};
//! use restosim_similarity::{FeatureSimilarityScorer, TopKSelector, VectorSimilarityScorer};
//!
//! let items = vec![
//!     Item::new("q", "Pizzeria", "Italian, Pizza").with_price(2).with_rating(4.0),
//!     Item::new("a", "Trattoria", "Italian, Pizza").with_price(2).with_rating(4.5),
//!     Item::new("b", "Sushi Bar", "Sushi").with_price(4).with_rating(2.0),
//! ];
//! let embeddings = vec![
//!     EmbeddingVector::new("q", vec![1.0, 0.0]),
//!     EmbeddingVector::new("a", vec![0.9, 0.1]),
//! ];
//! let catalog = InMemoryCatalog::new(items, embeddings).unwrap();
//! let query = catalog.get_item("q").unwrap();
//! let pool = catalog.all_other_items("q");
//!
//! let selector = TopKSelector::new(5);
//! let by_feature = selector
//!     .select(query, pool.iter().copied(), &FeatureSimilarityScorer::new())
//!     .unwrap();
//! assert_eq!(by_feature[0].id(), "a");
//!
//! // "b" has no embedding and is skipped by the vector scorer
//! let by_vector = selector
//!     .select(query, pool.iter().copied(), &VectorSimilarityScorer::new(&catalog))
//!     .unwrap();
//! assert_eq!(by_vector.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Feature    │     │   Vector    │
//! │  scorer     │     │   scorer    │
//! └──────┬──────┘     └──────┬──────┘
//!        │ SimilarityStrategy│
//!        └─────────┬─────────┘
//!           ┌──────┴──────┐
//!           │  TopK       │
//!           │  selector   │
//!           └─────────────┘
//! ```

pub mod distance;
pub mod embedding;
pub mod exact;
pub mod explain;
pub mod feature;
pub mod strategy;
pub mod topk;
pub mod weights;

// Re-export main types for convenience
pub use embedding::{score_vectors, VectorSimilarityScorer};
pub use exact::{is_exact_match, ExactMatchFinder};
pub use explain::{FeatureBreakdown, RankingStats};
pub use feature::FeatureSimilarityScorer;
pub use strategy::SimilarityStrategy;
pub use topk::{ScoredCandidate, TopKSelector};
pub use weights::FeatureWeights;
