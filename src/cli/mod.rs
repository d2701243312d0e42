//! CLI module - command definitions and handlers

use clap::{Parser, Subcommand};

pub mod fetch;
pub mod image;
pub mod run;

/// herostats - superhero roster explorer
///
/// Fetches superhero records from the lookup service and a local roster
/// file, reconciles them, and explores them interactively with chart
/// export and optional AI portraits.
#[derive(Parser, Debug)]
#[command(name = "herostats")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the roster and explore it interactively
    Run(run::RunArgs),

    /// Fetch a single character by id and print it
    Fetch(fetch::FetchArgs),

    /// Generate an AI portrait for a character name
    Image(image::ImageArgs),
}
