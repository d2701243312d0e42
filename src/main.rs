//! herostats CLI - entry point
//!
//! Usage: herostats <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use herostats::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing; skipped-fetch warnings must be visible without
    // RUST_LOG, so the fallback filter is "warn" rather than "error".
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Run(args) => herostats::cli::run::run(args),
        Commands::Fetch(args) => herostats::cli::fetch::run(args),
        Commands::Image(args) => herostats::cli::image::run(args),
    }
}
