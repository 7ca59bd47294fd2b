// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ccl", about = "Zero-knowledge eligibility proofs for carbon-credit lending")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Development key generation (not a production ceremony)
    Setup {
        /// Deterministic keys from a fixed seed
        #[arg(long)]
        seed: Option<u64>,
        /// Overwrite existing artifacts
        #[arg(long)]
        force: bool,
    },
    /// Circuit shape and artifact status
    Inspect,
    /// Prove eligibility for a request JSON file
    Prove {
        /// Request with thresholds, borrower and lender stats
        request: PathBuf,
        /// Write the proof here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Verify a proof JSON file
    Verify {
        proof: PathBuf,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    Show,
    Set { key: String, value: String },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    let config = ccl_sdk::config::load();
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_tracing(&filter);
    let config = config?;

    match cli.command {
        Cmd::Setup { seed, force } => commands::setup::run(&config, seed, force)?,
        Cmd::Inspect => commands::inspect::run(&config)?,
        Cmd::Prove { request, out } => commands::prove::run(&config, &request, out.as_deref()).await?,
        Cmd::Verify { proof } => return commands::verify::run(&config, &proof),
        Cmd::Config { action } => match action {
            ConfigCmd::Show => commands::config::show(&config)?,
            ConfigCmd::Set { key, value } => commands::config::set(config, &key, &value)?,
        },
    }
    Ok(ExitCode::SUCCESS)
}
