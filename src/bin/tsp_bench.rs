//! Command-line benchmark driver.
//!
//! ```text
//! tsp-bench --instance data/berlin52.tsp --runs 30 --seed 42
//! tsp-bench --config experiment.toml
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tsp_localsearch::experiment::{ExperimentConfig, ExperimentRunner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmark TSP local-search algorithms", long_about = None)]
struct Args {
    /// TOML experiment configuration
    #[arg(short, long, conflicts_with = "instance")]
    config: Option<PathBuf>,

    /// TSPLIB instance to run the default protocol on
    #[arg(short, long, required_unless_present = "config")]
    instance: Option<PathBuf>,

    /// Independent runs per algorithm (overrides the configuration)
    #[arg(short, long)]
    runs: Option<usize>,

    /// Base random seed (overrides the configuration)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_config(args: &Args) -> tsp_localsearch::Result<ExperimentConfig> {
    // clap guarantees exactly one of `--config` / `--instance`.
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_toml_file(path)?,
        None => ExperimentConfig::for_instance(args.instance.clone().unwrap_or_default()),
    };
    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let result = build_config(&args).and_then(|config| {
        println!("=== Experiment on {} ===", config.instance.display());
        ExperimentRunner::run(&config)
    });

    match result {
        Ok(summaries) => {
            for summary in summaries {
                println!("{summary}\n");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "experiment_failed", error = %e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
