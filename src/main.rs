//! Checkergen - numbered checkerboard fixture images.

mod cli;
mod config;
mod error;
mod generator;
mod glyphs;
mod output;
mod params;
mod pattern;

use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::GenError;
use crate::generator::generate_batch;
use crate::params::{default_output_dir, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GenError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    log::debug!("config: {}", config_path.display());
    let config = Config::load(&config_path).map_err(GenError::Config)?;

    // Resolve parameters: CLI flag, then config, then built-in default
    let format = match cli.format {
        Some(f) => f,
        None => config.default_format().map_err(GenError::Config)?.unwrap_or(OutputFormat::Png),
    };
    let target_dir = cli.out.unwrap_or_else(|| default_output_dir(cli.width, cli.height));

    let mut rng = match cli.seed.or(config.defaults.seed) {
        Some(seed) => {
            log::debug!("seed: {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    println!(
        "Generating {} {}s in: {}",
        cli.num_images,
        format.extension().to_uppercase(),
        target_dir.display()
    );

    generate_batch(cli.width, cli.height, cli.num_images, &target_dir, format, &mut rng)?;

    println!("Finished successfully.");
    Ok(())
}
