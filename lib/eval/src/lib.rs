//! # restosim Eval
//!
//! Quality metrics for ranked lists and the harness that benchmarks the
//! feature and vector strategies against each other.
//!
//! ## Features
//!
//! - **Metrics**: category, price, rating, location and variety scores plus a weighted overall score
//! - **Benchmark Harness**: sampled queries, timed top-K, optional rayon parallelism
//! - **Summaries**: count / mean / min / max per timing and metric column
//! - **Lookups**: single-query comparison, exact matches and evaluation
//!
//! ## Example
//!
//! ```rust
//! use restosim_core::{EmbeddingVector, InMemoryCatalog, Item};
//! use restosim_eval::{BenchmarkConfig, BenchmarkHarness};
//!
//! let items = vec![
//!     Item::new("a", "Trattoria", "Italian").with_price(2).with_rating(4.0),
//!     Item::new("b", "Pizzeria", "Italian").with_price(2).with_rating(3.5),
//!     Item::new("c", "Sushi Bar", "Sushi").with_price(3).with_rating(4.5),
//! ];
//! let embeddings = vec![
//!     EmbeddingVector::new("a", vec![1.0, 0.0]),
//!     EmbeddingVector::new("b", vec![0.8, 0.2]),
//!     EmbeddingVector::new("c", vec![0.0, 1.0]),
//! ];
//! let catalog = InMemoryCatalog::new(items, embeddings).unwrap();
//!
//! let config = BenchmarkConfig { sample_size: 2, top_k: 1, seed: Some(7), ..Default::default() };
//! let report = BenchmarkHarness::new(&catalog, config).unwrap().run().unwrap();
//! assert_eq!(report.records.len(), 2);
//! ```

pub mod config;
pub mod harness;
pub mod lookup;
pub mod metrics;
pub mod stats;

pub use config::BenchmarkConfig;
pub use harness::{BenchmarkHarness, BenchmarkRecord, BenchmarkReport, BenchmarkSummary};
pub use lookup::{
    compare, evaluate_query, perfect_matches, MatchOutcome, QueryComparison, QueryEvaluation,
    TimedRanking,
};
pub use metrics::{
    category_accuracy, EvaluationMetricsCalculator, MetricResult, MetricWeights, VARIETY_BASELINE,
};
pub use stats::{MetricSummary, SummaryStats};
