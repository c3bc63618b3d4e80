// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `damcalc`: compute, validate and explore gravity dam designs, and manage
//! stored simulation records.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dam_types::config::AppConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "damcalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gravity dam performance calculator", long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute performance metrics for one parameter set
    Compute(commands::compute::ComputeArgs),
    /// Check a parameter set for errors and warnings
    Validate(commands::validate::ValidateArgs),
    /// Sweep bottom width and find the minimum safe base
    Sweep(commands::sweep::SweepArgs),
    /// Sample random designs and report the Pareto frontier
    Sample(commands::sample::SampleArgs),
    /// Manage stored simulation records
    #[command(subcommand)]
    Records(commands::records::RecordsCommand),
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy();
            AppConfig::from_file(&path).with_context(|| format!("loading config {path}"))?
        }
        None => AppConfig::default(),
    };

    let level = parse_level(cli.log_level.as_deref().unwrap_or(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args, &config),
        Commands::Validate(args) => commands::validate::execute(args, &config),
        Commands::Sweep(args) => commands::sweep::execute(args, &config),
        Commands::Sample(args) => commands::sample::execute(args),
        Commands::Records(cmd) => commands::records::execute(cmd, &config),
    }
}
