//! `herostats image` command
//!
//! Standalone portrait generation for a character name.
//!
//! # Usage
//! ```bash
//! herostats image "A-Bomb"
//! herostats image "Abe Sapien" --output-dir portraits/
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::config::Config;
use crate::image::ImageGenerator;

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Character name to draw
    pub name: String,

    /// Directory to write the portrait into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

pub fn run(args: ImageArgs) -> Result<()> {
    let config = Config::from_env()?;
    let generator = ImageGenerator::new(&config)?.with_output_dir(&args.output_dir);

    // generate() logs its own failure cause; the standalone command still
    // needs a non-zero exit for scripting.
    match generator.generate(&args.name) {
        Some(_) => Ok(()),
        None => bail!("portrait generation failed for '{}'", args.name),
    }
}
