use advisor::{BatchAdvisor, DatasetAssessment};
use anyhow::{anyhow, Context, Result};
use catalog::{find_dataset, reference_datasets, search_datasets, Dataset};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::guide::{algorithm_guide, AlgorithmCategory};
use engine::{
    estimated_memory_gb, graph_density, recommend, GraphDescriptor, PerformanceTier,
    Recommendation,
};
use rand::Rng;
use std::time::Instant;

/// RankAdvisor - PageRank strategy recommendation engine
#[derive(Parser)]
#[command(name = "rank-advisor")]
#[command(about = "Recommends a PageRank computation strategy from coarse graph statistics", long_about = None)]
struct Cli {
    /// Accelerator memory budget in GB
    #[arg(short, long, default_value_t = engine::DEFAULT_MEMORY_LIMIT_GB, global = true)]
    memory_limit: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a recommendation for a manually described graph
    Recommend {
        /// Number of nodes
        #[arg(long)]
        nodes: u64,

        /// Number of edges
        #[arg(long)]
        edges: u64,

        /// Treat the graph as undirected
        #[arg(long)]
        undirected: bool,

        /// Convergence tolerance (omit for standard precision)
        #[arg(long)]
        tolerance: Option<f64>,

        /// Emit the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare recommendations across the reference catalog
    Compare {
        /// Comma-separated dataset ids (default: the whole catalog)
        #[arg(long)]
        datasets: Option<String>,

        /// Emit the assessments as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the reference datasets
    Catalog,

    /// Search reference datasets by name
    Search {
        /// Name fragment to search for (case-insensitive substring match)
        #[arg(long)]
        name: String,
    },

    /// Show the algorithm reference guide
    Algorithms,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of recommendations to compute
        #[arg(long, default_value = "10000")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            nodes,
            edges,
            undirected,
            tolerance,
            json,
        } => handle_recommend(nodes, edges, undirected, tolerance, cli.memory_limit, json),
        Commands::Compare { datasets, json } => handle_compare(datasets, cli.memory_limit, json),
        Commands::Catalog => handle_catalog(),
        Commands::Search { name } => handle_search(name),
        Commands::Algorithms => handle_algorithms(),
        Commands::Benchmark { requests } => handle_benchmark(requests, cli.memory_limit),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    nodes: u64,
    edges: u64,
    undirected: bool,
    tolerance: Option<f64>,
    memory_limit: f64,
    json: bool,
) -> Result<()> {
    let mut descriptor = GraphDescriptor::new(nodes, edges, !undirected);
    if let Some(t) = tolerance {
        descriptor = descriptor.with_tolerance(t);
    }

    let rec = recommend(&descriptor, memory_limit).context("Failed to produce recommendation")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Graph: {} nodes, {} edges ({}), density {:.2}",
            nodes,
            edges,
            if undirected { "undirected" } else { "directed" },
            graph_density(nodes, edges)
        )
        .bold()
        .blue()
    );
    print_recommendation(&rec);
    Ok(())
}

/// Handle the 'compare' command
fn handle_compare(ids: Option<String>, memory_limit: f64, json: bool) -> Result<()> {
    let datasets = resolve_datasets(ids)?;

    let advisor = BatchAdvisor::new(memory_limit);
    let assessments = advisor
        .assess(&datasets)
        .context("Failed to assess datasets")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessments)?);
        return Ok(());
    }

    print_comparison_table(&assessments);

    // Per-dataset detail below the table
    for assessment in &assessments {
        println!();
        println!(
            "{}",
            format!("{} - analysis", assessment.dataset_name).bold().blue()
        );
        print_recommendation(&assessment.recommendation);
    }
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog() -> Result<()> {
    println!("{}", "Reference datasets:".bold().blue());
    for dataset in reference_datasets() {
        print_dataset(&dataset);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(name: String) -> Result<()> {
    let matches = search_datasets(&name);
    println!(
        "{}",
        format!("Search results for '{}':", name).bold().blue()
    );
    if matches.is_empty() {
        println!("  (no datasets matched)");
        return Ok(());
    }
    for dataset in matches {
        print_dataset(&dataset);
    }
    Ok(())
}

/// Handle the 'algorithms' command
fn handle_algorithms() -> Result<()> {
    let categories = [
        AlgorithmCategory::RecentResearch,
        AlgorithmCategory::StationaryNumerical,
        AlgorithmCategory::KrylovSubspace,
    ];
    for category in categories {
        println!("{}", category.to_string().bold().green());
        for profile in algorithm_guide()
            .iter()
            .filter(|p| p.category == category)
        {
            println!("  {} - {}", profile.name.bold(), profile.summary);
            println!("    {}", profile.note.dimmed());
        }
        println!();
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(requests: usize, memory_limit: f64) -> Result<()> {
    let mut rng = rand::rng();
    let tolerances = [None, Some(1e-4), Some(1e-6), Some(1e-8)];

    // Generate a spread of graph shapes up front so only the engine is timed
    let descriptors: Vec<GraphDescriptor> = (0..requests)
        .map(|_| {
            let nodes = rng.random_range(1_000..100_000_000u64);
            let edges = nodes.saturating_mul(rng.random_range(1..40));
            let mut descriptor = GraphDescriptor::new(nodes, edges, rng.random_bool(0.5));
            if let Some(t) = tolerances[rng.random_range(0..tolerances.len())] {
                descriptor = descriptor.with_tolerance(t);
            }
            descriptor
        })
        .collect();

    let total_start = Instant::now();
    let mut timings = Vec::with_capacity(requests);
    for descriptor in &descriptors {
        let start = Instant::now();
        let rec = recommend(descriptor, memory_limit)?;
        timings.push(start.elapsed());
        std::hint::black_box(rec);
    }
    let total_time = total_start.elapsed();

    // Calculate and display statistics:
    //    - Total time
    //    - Average latency
    //    - P50, P95, P99 latencies
    //    - Throughput (requests/second)
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Resolve a comma-separated id list against the catalog, or return the
/// whole catalog when no list was given
fn resolve_datasets(ids: Option<String>) -> Result<Vec<Dataset>> {
    match ids {
        None => Ok(reference_datasets()),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| find_dataset(id).ok_or_else(|| anyhow!("Unknown dataset id '{}'", id)))
            .collect(),
    }
}

/// Helper to print one catalog entry
fn print_dataset(dataset: &Dataset) {
    println!(
        "{}: {} ({})",
        dataset.id.green(),
        dataset.name.bold(),
        if dataset.directed { "directed" } else { "undirected" }
    );
    println!(
        "  {} nodes, {} edges, density {:.2}, est. memory {:.2} GB",
        dataset.node_count,
        dataset.edge_count,
        graph_density(dataset.node_count, dataset.edge_count),
        estimated_memory_gb(dataset.edge_count)
    );
    println!("  {}", dataset.description.dimmed());
}

/// Helper to render one recommendation in detail
fn print_recommendation(rec: &Recommendation) {
    println!(
        "Recommended: {} {}",
        rec.algorithm.bold().blue(),
        format!("[{}]", rec.framework).dimmed()
    );
    println!("Performance: {}", tier_badge(rec.performance_tier));
    if let Some(mteps) = rec.estimated_throughput_mteps {
        println!("Throughput: {} MTEPS", mteps);
    }
    if let Some(time) = &rec.expected_time_range {
        println!("Expected time: {}", time);
    }
    if let Some(convergence) = &rec.convergence_iteration_range {
        println!("Convergence: {}", convergence);
    }
    println!("Memory: {:.2} GB", rec.memory_usage_gb);
    println!("Reasoning: {}", rec.reasoning);
    if !rec.alternatives.is_empty() {
        println!("Alternatives: {}", rec.alternatives.join(", "));
    }
    if let Some(partitions) = rec.partition_count {
        println!(
            "{}",
            format!(
                "Partitioning: split into {} parts sized at 80% of the budget; \
                 overlap boundary nodes when merging partial results",
                partitions
            )
            .yellow()
        );
    }
}

/// Helper to print the comparison table
fn print_comparison_table(assessments: &[DatasetAssessment]) {
    println!("{}", "Recommendation comparison:".bold().blue());
    println!(
        "{:<28} {:<34} {:<12} {:<10} {:<18} {:>10} {:>12}",
        "Dataset", "Algorithm", "Tier", "Time", "Convergence", "Memory", "Partitions"
    );
    for assessment in assessments {
        let rec = &assessment.recommendation;
        println!(
            "{:<28} {:<34} {:<12} {:<10} {:<18} {:>7.2} GB {:>12}",
            assessment.dataset_name,
            rec.algorithm,
            rec.performance_tier.label(),
            rec.expected_time_range.as_deref().unwrap_or("N/A"),
            rec.convergence_iteration_range.as_deref().unwrap_or("N/A"),
            rec.memory_usage_gb,
            rec.partition_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "none".to_string()),
        );
    }
}

/// Color a tier label the way the original comparison badges were colored
fn tier_badge(tier: PerformanceTier) -> String {
    let label = tier.label();
    match tier {
        PerformanceTier::Highest => label.green().bold().to_string(),
        PerformanceTier::VeryHigh => label.blue().bold().to_string(),
        PerformanceTier::High => label.yellow().to_string(),
        PerformanceTier::MediumHigh | PerformanceTier::Medium => label.normal().to_string(),
    }
}
