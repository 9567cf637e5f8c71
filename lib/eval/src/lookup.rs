//! Single-query operations
//!
//! What the CLI runs for one item id: rank with both strategies, look for
//! exact matches, or evaluate both rankings.

use crate::harness::timed;
use crate::metrics::{EvaluationMetricsCalculator, MetricResult};
use restosim_core::{Item, ItemCatalog, Result};
use restosim_similarity::{
    ExactMatchFinder, FeatureBreakdown, FeatureSimilarityScorer, RankingStats, ScoredCandidate, SimilarityStrategy,
    TopKSelector, VectorSimilarityScorer,
};
use serde::Serialize;
use tracing::{debug, warn};

/// A ranking produced by one strategy, with its selection time
#[derive(Debug, Clone, Serialize)]
pub struct TimedRanking<'a> {
    pub strategy: &'static str,
    pub elapsed_secs: f64,
    pub results: Vec<ScoredCandidate<'a>>,
    pub stats: RankingStats,
}

impl<'a> TimedRanking<'a> {
    fn run<S>(selector: &TopKSelector, query: &Item, pool: &[&'a Item], scorer: &S) -> Result<Self>
    where
        S: SimilarityStrategy + ?Sized,
    {
        let (results, elapsed_secs) = timed(|| selector.select(query, pool.iter().copied(), scorer));
        let results = results?;
        let stats = RankingStats::compute(&results, pool.len());
        Ok(Self {
            strategy: scorer.name(),
            elapsed_secs,
            results,
            stats,
        })
    }
}

/// Both strategies' rankings for one query
#[derive(Debug, Clone, Serialize)]
pub struct QueryComparison<'a> {
    pub query: &'a Item,
    pub feature: TimedRanking<'a>,
    /// Per-term contributions of each feature result, in ranking order
    pub breakdowns: Vec<FeatureBreakdown>,
    /// `None` when the query has no embedding
    pub vector: Option<TimedRanking<'a>>,
}

/// Rank the catalog against item `id` with both strategies.
///
/// Fails with `ItemNotFound` for an unknown id and with `MissingAttribute`
/// if the query lacks a price level or rating.
pub fn compare<'a, C>(catalog: &'a C, id: &str, top_k: usize) -> Result<QueryComparison<'a>>
where
    C: ItemCatalog + ?Sized,
{
    let query = catalog.require_item(id)?;
    let pool = catalog.all_other_items(id);
    let selector = TopKSelector::new(top_k);

    let scorer = FeatureSimilarityScorer::new();
    let feature = TimedRanking::run(&selector, query, &pool, &scorer)?;
    let breakdowns = feature
        .results
        .iter()
        .map(|c| scorer.explain(query, c.item))
        .collect::<Result<Vec<_>>>()?;

    let vector_scorer = VectorSimilarityScorer::new(catalog);
    let vector = if vector_scorer.is_applicable(query) {
        Some(TimedRanking::run(&selector, query, &pool, &vector_scorer)?)
    } else {
        warn!("Item {} has no embedding, skipping vector ranking", id);
        None
    };

    Ok(QueryComparison {
        query,
        feature,
        breakdowns,
        vector,
    })
}

/// Result of an exact-match lookup
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "matches", rename_all = "snake_case")]
pub enum MatchOutcome<'a> {
    /// Items identical on category label, price level and rating
    Exact(Vec<ScoredCandidate<'a>>),
    /// No exact match; the best feature matches instead
    Closest(Vec<ScoredCandidate<'a>>),
}

impl<'a> MatchOutcome<'a> {
    pub fn matches(&self) -> &[ScoredCandidate<'a>] {
        match self {
            MatchOutcome::Exact(m) | MatchOutcome::Closest(m) => m,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, MatchOutcome::Exact(_))
    }
}

/// Exact matches of item `id`, or its `top_k` closest feature matches when
/// there are none
pub fn perfect_matches<'a, C>(catalog: &'a C, id: &str, top_k: usize) -> Result<MatchOutcome<'a>>
where
    C: ItemCatalog + ?Sized,
{
    let query = catalog.require_item(id)?;
    let pool = catalog.all_other_items(id);
    let finder = ExactMatchFinder::new();

    let exact = finder.find_exact(query, pool.iter().copied())?;
    if !exact.is_empty() {
        debug!("{} exact matches for {}", exact.len(), id);
        return Ok(MatchOutcome::Exact(exact));
    }

    debug!("No exact match for {}, falling back to top-{}", id, top_k);
    let closest = TopKSelector::new(top_k).select(query, pool.iter().copied(), finder.scorer())?;
    Ok(MatchOutcome::Closest(closest))
}

/// Metrics of both strategies' rankings for one query
#[derive(Debug, Clone, Serialize)]
pub struct QueryEvaluation<'a> {
    pub comparison: QueryComparison<'a>,
    pub feature_metrics: Option<MetricResult>,
    pub vector_metrics: Option<MetricResult>,
}

/// Rank item `id` with both strategies and evaluate both rankings.
///
/// An empty ranking has no metrics.
pub fn evaluate_query<'a, C>(catalog: &'a C, id: &str, top_k: usize) -> Result<QueryEvaluation<'a>>
where
    C: ItemCatalog + ?Sized,
{
    let comparison = compare(catalog, id, top_k)?;
    let calculator = EvaluationMetricsCalculator::new();

    let evaluate = |ranking: &TimedRanking<'_>| -> Result<Option<MetricResult>> {
        if ranking.results.is_empty() {
            warn!("No {} candidates for {}", ranking.strategy, id);
            return Ok(None);
        }
        calculator.evaluate_ranked(comparison.query, &ranking.results).map(Some)
    };

    let feature_metrics = evaluate(&comparison.feature)?;
    let vector_metrics = match &comparison.vector {
        Some(ranking) => evaluate(ranking)?,
        None => None,
    };

    Ok(QueryEvaluation {
        comparison,
        feature_metrics,
        vector_metrics,
    })
}
