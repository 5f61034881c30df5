//! BigMap Differential Checker
//!
//! Runs seeded random workloads against `BigMap` and a reference model.

use bigmap::check::Checker;
use bigmap::CheckConfig;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// BigMap Checker
#[derive(Parser, Debug)]
#[command(name = "bigmap-check")]
#[command(about = "Differential checker for the sharded ordered map")]
#[command(version)]
struct Args {
    /// Number of rounds (defaults to the preset's value)
    #[arg(short, long)]
    rounds: Option<usize>,

    /// Operations per round (defaults to the preset's value)
    #[arg(short, long)]
    ops: Option<usize>,

    /// Workload seed
    #[arg(short, long, default_value = "24301")]
    seed: u64,

    /// Use the larger workload preset
    #[arg(short, long)]
    wide: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bigmap=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    let preset = if args.wide {
        CheckConfig::wide()
    } else {
        CheckConfig::default()
    };
    let mut builder = bigmap::config::ConfigBuilder::from_config(preset).seed(args.seed);
    if let Some(rounds) = args.rounds {
        builder = builder.rounds(rounds);
    }
    if let Some(ops) = args.ops {
        builder = builder.ops_per_round(ops);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("BigMap Checker v{}", bigmap::VERSION);
    tracing::info!("Workload: {:?}", config);

    let mut checker = match Checker::new(config) {
        Ok(checker) => checker,
        Err(e) => {
            tracing::error!("Failed to start checker: {}", e);
            std::process::exit(1);
        }
    };

    let rounds = checker.config().rounds;
    let mut operations = 0;
    for round in 0..rounds {
        if round % 5 == 0 {
            tracing::info!("======== round {} ========", round);
        }
        match checker.run_round() {
            Ok(stats) => {
                operations += stats.inserts + stats.erases + stats.lookups + stats.seeks;
            }
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    tracing::info!("All {} rounds passed ({} operations)", rounds, operations);
}
