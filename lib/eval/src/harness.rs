//! Feature-vs-vector benchmark harness
//!
//! Draws a sample of query items, ranks the rest of the catalog for each one
//! with both strategies, times each ranking, optionally evaluates the
//! rankings, and aggregates everything into a [`BenchmarkReport`].
//!
//! Timers wrap only the top-K selection; the candidate pool is fetched before
//! the clock starts.

use crate::config::BenchmarkConfig;
use crate::metrics::{EvaluationMetricsCalculator, MetricResult};
use crate::stats::{mean, MetricSummary, SummaryStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use restosim_core::{Item, ItemCatalog, Result};
use restosim_similarity::{
    FeatureSimilarityScorer, ScoredCandidate, TopKSelector, VectorSimilarityScorer,
};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run `f` and return its result with the elapsed wall-clock seconds
pub(crate) fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64())
}

fn top_match(ranked: &[ScoredCandidate<'_>]) -> (Option<String>, Option<f64>) {
    ranked
        .first()
        .map(|c| (c.name().to_string(), c.score))
        .unzip()
}

/// One sampled query
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRecord {
    pub query_id: String,
    pub query_name: String,
    pub categories: String,
    /// Seconds spent in the feature top-K selection
    pub feature_secs: f64,
    /// Seconds spent in the vector top-K selection; `None` when the query has
    /// no embedding
    pub vector_secs: Option<f64>,
    pub feature_top_match: Option<String>,
    pub feature_top_score: Option<f64>,
    pub vector_top_match: Option<String>,
    pub vector_top_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_metrics: Option<MetricResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_metrics: Option<MetricResult>,
}

/// Aggregates over all records
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub sample_size: usize,
    pub feature_time: Option<SummaryStats>,
    pub vector_time: Option<SummaryStats>,
    /// Mean top-1 feature score
    pub feature_mean_score: Option<f64>,
    /// Mean top-1 vector score
    pub vector_mean_score: Option<f64>,
    pub feature_metrics: Option<MetricSummary>,
    pub vector_metrics: Option<MetricSummary>,
}

impl BenchmarkSummary {
    pub fn compute(records: &[BenchmarkRecord]) -> Self {
        let feature_metrics: Vec<MetricResult> =
            records.iter().filter_map(|r| r.feature_metrics).collect();
        let vector_metrics: Vec<MetricResult> =
            records.iter().filter_map(|r| r.vector_metrics).collect();

        Self {
            sample_size: records.len(),
            feature_time: SummaryStats::from_values(records.iter().map(|r| r.feature_secs)),
            vector_time: SummaryStats::from_values(records.iter().filter_map(|r| r.vector_secs)),
            feature_mean_score: mean(records.iter().filter_map(|r| r.feature_top_score)),
            vector_mean_score: mean(records.iter().filter_map(|r| r.vector_top_score)),
            feature_metrics: MetricSummary::compute(&feature_metrics),
            vector_metrics: MetricSummary::compute(&vector_metrics),
        }
    }
}

/// Full output of a benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub records: Vec<BenchmarkRecord>,
    pub summary: BenchmarkSummary,
}

/// Benchmarks both strategies over a catalog
pub struct BenchmarkHarness<'c, C: ItemCatalog + ?Sized> {
    catalog: &'c C,
    config: BenchmarkConfig,
    selector: TopKSelector,
    feature: FeatureSimilarityScorer,
    vector: VectorSimilarityScorer<'c, C>,
    metrics: EvaluationMetricsCalculator,
}

impl<'c, C> BenchmarkHarness<'c, C>
where
    C: ItemCatalog + Sync + ?Sized,
{
    /// Create a harness; fails if `config` is invalid
    pub fn new(catalog: &'c C, config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            selector: TopKSelector::new(config.top_k),
            feature: FeatureSimilarityScorer::with_weights(config.feature_weights)?,
            vector: VectorSimilarityScorer::new(catalog),
            metrics: EvaluationMetricsCalculator::with_weights(config.metric_weights)?,
            config,
        })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Sample, rank, time, evaluate and aggregate
    pub fn run(&self) -> Result<BenchmarkReport> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sample = self.catalog.sample_items(self.config.sample_size, &mut rng);

        if sample.len() < self.config.sample_size {
            warn!(
                "Requested {} queries but only {} items are eligible",
                self.config.sample_size,
                sample.len()
            );
        }
        info!(
            "Benchmarking {} queries (top-{}, parallel: {})",
            sample.len(),
            self.config.top_k,
            self.config.parallel
        );

        let records = if self.config.parallel {
            sample
                .par_iter()
                .map(|query| self.run_query(query))
                .collect::<Result<Vec<_>>>()?
        } else {
            sample
                .iter()
                .map(|query| self.run_query(query))
                .collect::<Result<Vec<_>>>()?
        };

        let summary = BenchmarkSummary::compute(&records);
        info!("Benchmark finished: {} records", summary.sample_size);
        Ok(BenchmarkReport { records, summary })
    }

    /// Rank, time and evaluate a single query
    pub fn run_query(&self, query: &Item) -> Result<BenchmarkRecord> {
        let pool = self.catalog.all_other_items(&query.id);

        let (feature, feature_secs) =
            timed(|| self.selector.select(query, pool.iter().copied(), &self.feature));
        let feature = feature?;

        let vector = if self.vector.is_applicable(query) {
            let (ranked, secs) =
                timed(|| self.selector.select(query, pool.iter().copied(), &self.vector));
            Some((ranked?, secs))
        } else {
            None
        };

        let (feature_metrics, vector_metrics) = if self.config.evaluate {
            (
                self.evaluate(query, "feature", &feature)?,
                match &vector {
                    Some((ranked, _)) => self.evaluate(query, "vector", ranked)?,
                    None => None,
                },
            )
        } else {
            (None, None)
        };

        debug!(
            "Query {}: feature {:.6}s, vector {:?}",
            query.id,
            feature_secs,
            vector.as_ref().map(|(_, secs)| *secs)
        );

        let (feature_top_match, feature_top_score) = top_match(&feature);
        let (vector_top_match, vector_top_score) = match &vector {
            Some((ranked, _)) => top_match(ranked),
            None => (None, None),
        };

        Ok(BenchmarkRecord {
            query_id: query.id.clone(),
            query_name: query.name.clone(),
            categories: query.categories.label().to_string(),
            feature_secs,
            vector_secs: vector.as_ref().map(|(_, secs)| *secs),
            feature_top_match,
            feature_top_score,
            vector_top_match,
            vector_top_score,
            feature_metrics,
            vector_metrics,
        })
    }

    /// Metrics for a non-empty ranking; an empty ranking is logged and skipped
    fn evaluate(
        &self,
        query: &Item,
        strategy: &str,
        ranked: &[ScoredCandidate<'_>],
    ) -> Result<Option<MetricResult>> {
        if ranked.is_empty() {
            warn!("No {} candidates for {}, skipping evaluation", strategy, query.id);
            return Ok(None);
        }
        self.metrics.evaluate_ranked(query, ranked).map(Some)
    }
}
