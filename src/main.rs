//! Command-line interface for dgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Default study: 100 persons, 50 cases, written to ./out
//! dgen generate --output-dir out
//!
//! # Reproducible, smaller population
//! dgen generate -o out --persons 20 --cases 5 --dead-controls 2 --dead-cases 3 --seed 42
//!
//! # Inspect generated participants before denormalisation
//! dgen preview --count 2 --seed 42
//! ```
//!
//! Every option can also be set through a `DGEN_*` environment variable.
//! Logging is controlled by `RUST_LOG`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dgen::{generate_population, PopulationArgs, PopulationConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dgen")]
#[command(about = "Generate synthetic case-control clinical datasets with realistic errors")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a population and write the linkage tables as CSV
    Generate {
        /// Output directory for CSV files (one file per table)
        #[arg(long, short = 'o', default_value = ".", env = "DGEN_OUTPUT_DIR")]
        output_dir: PathBuf,

        #[command(flatten)]
        population: PopulationArgs,
    },
    /// Print generated participants as JSON
    Preview {
        /// Number of participants to print
        #[arg(long, default_value = "1", env = "DGEN_PREVIEW_COUNT")]
        count: usize,

        #[command(flatten)]
        population: PopulationArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output_dir,
            population,
        } => {
            let config = PopulationConfig::from(population);
            let summary = dgen::run(&config, &output_dir).with_context(|| {
                format!("Failed to generate dataset in {}", output_dir.display())
            })?;

            for (table, rows) in &summary.rows {
                println!("{table}: {rows} rows");
            }
            println!("{} cells perturbed", summary.perturbed_cells);
        }
        Commands::Preview { count, population } => {
            let config = PopulationConfig::from(population);
            let mut rng = config.rng();
            let participants = generate_population(&config, &mut rng)
                .context("Failed to generate population")?;

            let shown = &participants[..count.min(participants.len())];
            println!("{}", serde_json::to_string_pretty(shown)?);
        }
    }

    Ok(())
}
