// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use relief_cli::commands::{inspect, run, verify};
use relief_node::config::NodeConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Relief Hours Ledger - replay, inspect and verify volunteer hour ledgers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script against a fresh (or restored) ledger.
    Run {
        script: PathBuf,

        /// Node config (JSON). Defaults apply when omitted.
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Write the resulting ledger snapshot here. Defaults to the
        /// config's `snapshot_path`.
        #[arg(long, short)]
        snapshot: Option<PathBuf>,

        /// Print Prometheus metrics after the run.
        #[arg(long)]
        metrics: bool,
    },
    /// Show the contents of a snapshot file
    Inspect {
        snapshot_path: PathBuf,
    },
    /// Verify checksum and invariants of a snapshot file
    Verify {
        snapshot_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            script,
            config,
            snapshot,
            metrics,
        } => {
            let cfg = match &config {
                Some(path) => NodeConfig::load(path)?,
                None => NodeConfig::default(),
            };
            relief_node::telemetry::init_telemetry(&cfg.log_filter);
            run::run(&script, cfg, snapshot.as_deref(), metrics).await
        }
        Commands::Inspect { snapshot_path } => inspect::run(&snapshot_path),
        Commands::Verify { snapshot_path } => verify::run(&snapshot_path),
    }
}
