//! `herostats run` command
//!
//! The full flow: fetch remote records, load the local roster, reconcile,
//! project, then loop - prompt for a name, render charts for the match,
//! generate a portrait. Empty input exits the loop.
//!
//! # Usage
//! ```bash
//! herostats run
//! herostats run --local-file data/superheros.json --limit 5
//! herostats run --output-dir charts/ --no-images
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use tabled::Table;

use crate::chart::{ChartRenderer, PlottersRenderer};
use crate::config::Config;
use crate::core::character::{project, ProjectedCharacter};
use crate::core::local::load_local;
use crate::core::reconcile::reconcile;
use crate::core::select::select;
use crate::image::ImageGenerator;
use crate::remote::LookupClient;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the local roster file
    #[arg(long, default_value = "superheros.json")]
    pub local_file: PathBuf,

    /// Records to take from each source
    #[arg(long, default_value = "5")]
    pub limit: usize,

    /// First remote id to fetch (the next `limit` ids are requested)
    #[arg(long, default_value = "1")]
    pub first_id: u32,

    /// Directory for generated charts and portraits
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip AI portrait generation
    #[arg(long)]
    pub no_images: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    // All credentials are validated up front, before any network call.
    let config = Config::from_env()?;
    let client = LookupClient::new(&config)?;
    let generator = ImageGenerator::new(&config)?.with_output_dir(&args.output_dir);
    let renderer = PlottersRenderer::new(&args.output_dir);

    let ids = batch_ids(args.first_id, args.limit);
    let remote = client.fetch_many(&ids);
    println!("fetched {} of {} remote records", remote.len(), ids.len());

    let local = load_local(&args.local_file, args.limit)?;
    println!(
        "loaded {} local records from {}",
        local.len(),
        args.local_file.display()
    );

    let roster = project(&reconcile(remote, local))?;
    println!("\n{}", "Available characters:".bold());
    println!("{}", Table::new(&roster));

    loop {
        let query: String = Input::new()
            .with_prompt("Character name (empty to quit)")
            .allow_empty(true)
            .interact_text()?;

        if query.trim().is_empty() {
            break;
        }

        match select(&roster, &query) {
            Some(character) => {
                explore(character, &renderer)?;
                if !args.no_images {
                    generator.generate(&character.name);
                }
            }
            None => {
                println!(
                    "{}",
                    format!("Character '{query}' is not in the roster").yellow()
                );
            }
        }
    }

    Ok(())
}

/// Ids to request: `limit` consecutive ids from `first_id`, stopping at the
/// top of the id space instead of overflowing.
fn batch_ids(first_id: u32, limit: usize) -> Vec<u32> {
    (0..limit)
        .scan(Some(first_id), |next, _| {
            let id = (*next)?;
            *next = id.checked_add(1);
            Some(id)
        })
        .collect()
}

fn explore(character: &ProjectedCharacter, renderer: &PlottersRenderer) -> Result<()> {
    println!(
        "{} (id {}): intelligence {}, strength {}, speed {}",
        character.name.bold(),
        character.id,
        character.intelligence.to_string().green(),
        character.strength.to_string().red(),
        character.speed.to_string().blue(),
    );

    for file in renderer.render(character)? {
        println!("{} chart written to {}", "✓".green(), file.display());
    }

    Ok(())
}
