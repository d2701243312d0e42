//! `herostats fetch` command
//!
//! Single remote lookup by id, printed as a stat line or raw JSON.
//!
//! # Usage
//! ```bash
//! herostats fetch 70
//! herostats fetch 70 --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::Config;
use crate::core::character::ProjectedCharacter;
use crate::remote::LookupClient;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Remote character id
    pub id: u32,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub fn run(args: FetchArgs) -> Result<()> {
    let config = Config::from_env()?;
    let client = LookupClient::new(&config)?;

    let character = client.fetch(args.id)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&character)?),
        _ => match ProjectedCharacter::from_character(&character)? {
            Some(projected) => println!(
                "{} (id {}): intelligence {}, strength {}, speed {}",
                projected.name.bold(),
                projected.id,
                projected.intelligence,
                projected.strength,
                projected.speed,
            ),
            None => println!(
                "{} has non-numeric powerstats; use --format json to inspect the raw record",
                character.name.bold(),
            ),
        },
    }

    Ok(())
}
