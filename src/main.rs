use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use image::Rgb;
use logoops::{
    load_rgba, save_png, to_hex, DominantColor, Palette, RemoveStrayText, StrayTextRemoval,
};

const DEFAULT_LOGO: &str = "assets/images/app_logo.png";

#[derive(Parser)]
#[command(name = "logoops")]
#[command(about = "Accent color sampling and caption removal for logo assets")]
struct Cli {
    /// Log per-component decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dominant warm accent color of a logo
    ExtractColor {
        /// Input image path
        #[arg(short, long, default_value = DEFAULT_LOGO)]
        input: PathBuf,
    },
    /// Remove small caption text below the main subject and crop to content
    Crop {
        /// Input image path
        #[arg(short, long, default_value = DEFAULT_LOGO)]
        input: PathBuf,

        /// Output PNG path (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "logoops=debug"
    } else {
        "logoops=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time(),
        )
        .init();

    let result = match cli.command {
        Commands::ExtractColor { input } => extract_color(input),
        Commands::Crop { input, output } => {
            let output = output.unwrap_or_else(|| input.clone());
            crop(input, output)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn extract_color(input: PathBuf) -> anyhow::Result<()> {
    let image = load_rgba(&input)?;

    for line in color_report(image.dominant_color(), &Palette::css3()) {
        println!("{line}");
    }
    Ok(())
}

/// Result lines of `extract-color`. These go to stdout regardless of the
/// log filter.
fn color_report(color: Option<Rgb<u8>>, palette: &Palette) -> Vec<String> {
    match color {
        None => vec!["No orange found.".to_string()],
        Some(color) => vec![
            format!("Dominant Orange: {}", to_hex(color)),
            format!("Closest named color: {}", palette.closest_name(color)),
        ],
    }
}

fn crop(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let image = load_rgba(&input)?;

    let removal = image
        .remove_stray_text()
        .with_context(|| format!("processing {}", input.display()))?;

    match removal {
        StrayTextRemoval::Empty => Ok(()),
        StrayTextRemoval::Cropped { image, .. } => {
            save_png(&image, &output)?;
            println!("Saved processed image to {}", output.display());
            Ok(())
        }
    }
}
