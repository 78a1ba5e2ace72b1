//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{parse_dimension, parse_format, OutputFormat};

/// Generate numbered checkerboard images for use as test fixtures.
#[derive(Parser, Debug)]
#[command(name = "checkergen", version, about)]
pub struct Cli {
    /// Width of each image in pixels.
    #[arg(value_parser = parse_dimension)]
    pub width: u32,

    /// Height of each image in pixels.
    #[arg(value_parser = parse_dimension)]
    pub height: u32,

    /// Number of images to generate.
    pub num_images: u32,

    /// Override the default output directory (`<a>to<b>_<width>by<height>`).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Image format: png, jpg, jpeg (default: png).
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Seed the color source for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
