use anyhow::Context;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use clap::{Parser, Subcommand};
use restosim_core::{InMemoryCatalog, Item, ItemCatalog};
use restosim_eval::{
    compare, evaluate_query, perfect_matches, BenchmarkConfig, BenchmarkHarness, BenchmarkReport,
    MatchOutcome, MetricResult, SummaryStats, TimedRanking,
};
use restosim_similarity::ScoredCandidate;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Compare feature-based and embedding-based restaurant recommendations
#[derive(Parser, Debug)]
#[command(name = "restosim")]
#[command(about = "Restaurant similarity engine", long_about = None)]
struct Args {
    /// Path to the catalog snapshot (JSON)
    #[arg(short, long, default_value = "./data/catalog.json")]
    catalog: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank similar items with both strategies
    Similar {
        id: String,
        #[arg(short = 'k', long, default_value_t = 5)]
        top_k: usize,
    },
    /// Find items identical on category, price and rating
    Exact {
        id: String,
        /// Number of closest matches shown when there is no exact match
        #[arg(short = 'k', long, default_value_t = 5)]
        top_k: usize,
    },
    /// Evaluate both strategies' rankings for one item
    Evaluate {
        id: String,
        #[arg(short = 'k', long, default_value_t = 5)]
        top_k: usize,
    },
    /// Benchmark both strategies over a random sample of items
    Bench {
        /// Benchmark configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        sample_size: Option<usize>,
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Process queries in parallel
        #[arg(long)]
        parallel: bool,
        /// Write the full report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting restosim v{}", env!("CARGO_PKG_VERSION"));

    let catalog = InMemoryCatalog::load(&args.catalog)
        .with_context(|| format!("failed to load catalog {:?}", args.catalog))?;

    match args.command {
        Command::Similar { id, top_k } => {
            let comparison = compare(&catalog, &id, top_k)?;
            print_item("Query", comparison.query);
            print_ranking(&comparison.feature);
            for (c, breakdown) in comparison.feature.results.iter().zip(&comparison.breakdowns) {
                println!(
                    "      {}: category {:.3} + price {:.3} + rating {:.3} (mostly {})",
                    c.name(),
                    breakdown.category,
                    breakdown.price,
                    breakdown.rating,
                    breakdown.top_contributor()
                );
            }
            match &comparison.vector {
                Some(ranking) => print_ranking(ranking),
                None => println!("\nNo review embedding for {}; vector ranking skipped", id),
            }
        }
        Command::Exact { id, top_k } => {
            let query = catalog.require_item(&id)?;
            print_item("Looking for perfect matches for", query);
            match perfect_matches(&catalog, &id, top_k)? {
                MatchOutcome::Exact(matches) => {
                    println!("\nPerfect matches found:");
                    print_candidates(&matches);
                }
                MatchOutcome::Closest(matches) => {
                    println!("\nNo perfect matches found.\n\nClosest matches:");
                    print_candidates(&matches);
                }
            }
        }
        Command::Evaluate { id, top_k } => {
            let evaluation = evaluate_query(&catalog, &id, top_k)?;
            print_item("Query", evaluation.comparison.query);
            print_metrics("feature", evaluation.feature_metrics.as_ref());
            print_metrics("vector", evaluation.vector_metrics.as_ref());
        }
        Command::Bench {
            config,
            sample_size,
            top_k,
            seed,
            parallel,
            output,
        } => {
            let mut bench_config = match &config {
                Some(path) => BenchmarkConfig::from_json_file(path)
                    .with_context(|| format!("failed to read benchmark config {:?}", path))?,
                None => BenchmarkConfig::default(),
            };
            if let Some(n) = sample_size {
                bench_config.sample_size = n;
            }
            if let Some(k) = top_k {
                bench_config.top_k = k;
            }
            if seed.is_some() {
                bench_config.seed = seed;
            }
            bench_config.parallel |= parallel;

            let report = BenchmarkHarness::new(&catalog, bench_config)?.run()?;
            print_summary(&report);

            if let Some(path) = output {
                write_report(&path, &report)?;
                info!("Report written to {:?}", path);
            }
        }
    }

    Ok(())
}

fn write_report(path: &Path, report: &BenchmarkReport) -> anyhow::Result<()> {
    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| serde_json::to_writer_pretty(f, report))
        .with_context(|| format!("failed to write report {:?}", path))
}

fn print_item(heading: &str, item: &Item) {
    println!("\n{}: {}", heading, item.name);
    println!("Categories: {}", item.categories.label());
    println!("Price Level: {}", display_opt(item.price_level));
    println!("Average Rating: {}", display_opt(item.avg_rating));
    if !item.city.is_empty() || !item.state.is_empty() {
        println!("Location: {}, {}", item.city, item.state);
    }
}

fn print_ranking(ranking: &TimedRanking<'_>) {
    println!(
        "\n{} similarity ({:.4}s, {} of {} candidates):",
        ranking.strategy,
        ranking.elapsed_secs,
        ranking.stats.results_count,
        ranking.stats.candidates_count
    );
    print_candidates(&ranking.results);
}

fn print_candidates(candidates: &[ScoredCandidate<'_>]) {
    if candidates.is_empty() {
        println!("  (none)");
    }
    for c in candidates {
        println!(
            "  {:>2}. {} [{}] price {} rating {} score {:.4}",
            c.rank,
            c.name(),
            c.item.categories.label(),
            display_opt(c.item.price_level),
            display_opt(c.item.avg_rating),
            c.score
        );
    }
}

fn print_metrics(strategy: &str, metrics: Option<&MetricResult>) {
    println!("\n{} recommendations:", strategy);
    match metrics {
        Some(m) => {
            for (name, value) in m.values() {
                println!("  {:<22} {:.4}", name, value);
            }
        }
        None => println!("  (no recommendations to evaluate)"),
    }
}

fn print_summary(report: &BenchmarkReport) {
    let summary = &report.summary;
    println!("\nBenchmark over {} queries", summary.sample_size);

    println!("\nSelection time (s):");
    print_stats("feature", summary.feature_time.as_ref());
    print_stats("vector", summary.vector_time.as_ref());

    println!("\nMean top-1 score:");
    println!("  {:<22} {}", "feature", display_opt(summary.feature_mean_score));
    println!("  {:<22} {}", "vector", display_opt(summary.vector_mean_score));

    for (strategy, metrics) in [
        ("feature", &summary.feature_metrics),
        ("vector", &summary.vector_metrics),
    ] {
        if let Some(metrics) = metrics {
            println!("\n{} metrics:", strategy);
            for (name, stats) in metrics.columns() {
                print_stats(name, Some(stats));
            }
        }
    }
}

fn print_stats(name: &str, stats: Option<&SummaryStats>) {
    match stats {
        Some(s) => println!(
            "  {:<22} mean {:.6}  min {:.6}  max {:.6}  (n={})",
            name, s.mean, s.min, s.max, s.count
        ),
        None => println!("  {:<22} n/a", name),
    }
}

fn display_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}
