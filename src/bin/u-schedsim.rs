//! u-schedsim CLI
//!
//! Runs the queue simulator or the schedulability analyzer and prints
//! results to stdout. Logs go to stderr (`RUST_LOG`, default `info`).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;
use u_schedsim::analysis::{AnalyzerConfig, SchedulabilityAnalyzer};
use u_schedsim::models::ProbabilityRange;
use u_schedsim::queue::{IntensitySweep, QueueRunConfig, SweepConfig};
use u_schedsim::{random, report, SimError};

#[derive(Parser)]
#[command(name = "u-schedsim")]
#[command(about = "Queue and schedulability simulators")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single-server FIFO queue for one or more arrival probabilities
    Queue {
        /// Arrival probabilities (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "0.1")]
        intensity: Vec<f64>,

        /// Sweep intensities as start,end,step (end exclusive); overrides --intensity
        #[arg(long, value_delimiter = ',')]
        intensity_range: Option<Vec<f64>>,

        /// Shortest service length
        #[arg(long, default_value = "1")]
        min_service: u32,

        /// Longest service length
        #[arg(long, default_value = "15")]
        max_service: u32,

        /// Tasks to serve per run
        #[arg(long, default_value = "1000")]
        tasks: u64,

        /// Print the queue-depth trace of each run
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Estimate greedy schedulability of random compatibility matrices
    Schedulability {
        /// Matrix dimension
        #[arg(long, default_value = "20")]
        size: usize,

        /// Density sweep as start,end,step (end exclusive)
        #[arg(long, value_delimiter = ',', default_value = "0,1,0.003")]
        density_range: Vec<f64>,

        /// Explicit densities (comma-separated); overrides --density-range
        #[arg(long, value_delimiter = ',')]
        density: Option<Vec<f64>>,

        /// Random matrices per density
        #[arg(long, default_value = "100")]
        experiments: u32,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Random seed
    #[arg(long, default_value_t = random::DEFAULT_SEED)]
    seed: u64,

    /// Evaluate sweep points on a single thread
    #[arg(long)]
    sequential: bool,

    /// Load the full configuration from a JSON file; other parameter flags are ignored
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, SimError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn range(values: &[f64]) -> Result<ProbabilityRange, String> {
    match values {
        [start, end, step] => Ok(ProbabilityRange::new(*start, *end, *step)),
        _ => Err(format!("expected start,end,step, got {} values", values.len())),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Queue {
            intensity,
            intensity_range,
            min_service,
            max_service,
            tasks,
            trace,
            run,
        } => {
            let config: SweepConfig = match &run.config {
                Some(path) => load_config(path)?,
                None => {
                    let base = QueueRunConfig::default()
                        .with_service_range(min_service, max_service)
                        .with_total_task_count(tasks)
                        .with_trace(trace);
                    let config = SweepConfig::default()
                        .with_base(base)
                        .with_seed(run.seed)
                        .with_parallel(!run.sequential);
                    match intensity_range {
                        Some(values) => config.with_intensity_range(range(&values)?),
                        None => config.with_intensities(intensity),
                    }
                }
            };

            let points = IntensitySweep::new(config)?.run();
            match cli.format {
                OutputFormat::Json => println!("{}", report::to_json(&points)?),
                OutputFormat::Text => {
                    print!("{}", report::queue_lines(&points));
                    for point in points.iter().filter(|p| !p.result.depth_trace.is_empty()) {
                        println!("# depth trace, intensity {}", point.arrival_probability);
                        print!("{}", report::depth_trace_lines(point));
                    }
                }
            }
        }

        Commands::Schedulability {
            size,
            density_range,
            density,
            experiments,
            run,
        } => {
            let config: AnalyzerConfig = match &run.config {
                Some(path) => load_config(path)?,
                None => {
                    let config = AnalyzerConfig::default()
                        .with_matrix_size(size)
                        .with_experiments_per_density(experiments)
                        .with_seed(run.seed)
                        .with_parallel(!run.sequential);
                    match density {
                        Some(values) => config.with_densities(values),
                        None => config.with_density_range(range(&density_range)?),
                    }
                }
            };

            let points = SchedulabilityAnalyzer::new(config)?.run()?;
            match cli.format {
                OutputFormat::Json => println!("{}", report::to_json(&points)?),
                OutputFormat::Text => print!("{}", report::density_lines(&points)),
            }
        }
    }

    Ok(())
}
