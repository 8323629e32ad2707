use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use pattern_common::PatternConfig;
use std::path::PathBuf;
use std::time::Instant;

// Define modules used by main
mod experiment;
mod pattern;
mod render;

use experiment::Experiment;

/// Command-line arguments for the pattern runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional path to a config.toml with [experiment] and [display] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output image file path (.png)
    #[arg(short, long, default_value = "double_slit.png")]
    output: PathBuf,

    /// Number of particles the curve is scaled to (overrides config)
    #[arg(long)]
    particles: Option<u32>,

    /// Width of the detection screen (overrides config)
    #[arg(long)]
    screen_width: Option<f64>,

    /// Distance between the two slits (overrides config)
    #[arg(long)]
    slit_spacing: Option<f64>,

    /// Width of the output image in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Height of the output image in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();
    run_with_args(args)
}

fn run_with_args(args: Args) -> Result<()> {
    info!("Starting Double-Slit Pattern Runner...");

    // --- Load Configuration ---
    let mut config = if let Some(config_path) = &args.config {
        match PatternConfig::load(config_path) {
            Ok(config) => {
                info!("Loaded configuration from {}", config_path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load config file '{}': {}. Using defaults.",
                    config_path.display(),
                    e
                );
                PatternConfig::default()
            }
        }
    } else {
        info!("No config file given, using default configuration.");
        PatternConfig::default()
    };

    // Command-line overrides take precedence over file and default values.
    if let Some(particles) = args.particles {
        config.experiment.particle_count = particles;
    }
    if let Some(screen_width) = args.screen_width {
        config.experiment.screen_width = screen_width;
    }
    if let Some(slit_spacing) = args.slit_spacing {
        config.experiment.slit_spacing = slit_spacing;
    }
    if let Some(width) = args.width {
        config.display.width_px = width;
    }
    if let Some(height) = args.height {
        config.display.height_px = height;
    }

    let experiment = Experiment::new(config.experiment)?;
    let params = experiment.config();
    info!(
        "Experiment: {} particles | screen width {:.1} | slit spacing {:.1} | {} samples",
        params.particle_count, params.screen_width, params.slit_spacing, params.sample_count
    );
    info!(
        "Output: {} ({}x{} px)",
        args.output.display(),
        config.display.width_px,
        config.display.height_px
    );

    // --- Run the Experiment ---
    let start_time = Instant::now();
    experiment.run(&config.display, &args.output)?;

    info!(
        "Completed in {:.2} ms.",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
