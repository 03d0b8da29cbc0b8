//! Rootwise asset generator CLI
//!
//! Writes the app icon, adaptive icon, splash screen and favicon PNGs.
//! With no arguments it renders the leaf design into `./assets`.

use anyhow::{Context, Result};
use clap::Parser;
use rootwise_assets::{generate_each, AssetRenderer, AssetsConfig, Design};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate placeholder branding assets for the Rootwise mobile app
#[derive(Parser, Debug)]
#[command(name = "rootwise-assets")]
#[command(about = "Generate placeholder branding assets for the Rootwise mobile app")]
#[command(version)]
struct Args {
    /// Output directory (default: assets)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Visual design
    #[arg(short, long, value_enum)]
    design: Option<Design>,

    /// Font file tried before falling back to the built-in font
    #[arg(long)]
    font: Option<PathBuf>,

    /// Config file (default: ./assets.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let mut config = AssetsConfig::discover(args.config.as_deref(), &cwd)?;

    if let Some(dir) = args.out_dir {
        config.output.dir = dir;
    }
    if let Some(design) = args.design {
        config.design.variant = design;
    }
    if let Some(font) = args.font {
        config.font.path = Some(font);
    }

    let design = config.design.variant;
    let palette = config.palette()?;
    let typeface = config.font_source().resolve();
    tracing::debug!("Rendering {:?} design with {}", design, typeface.name());

    let mut renderer = AssetRenderer::new(design, palette, typeface);
    generate_each(&mut renderer, &config.output.dir, |asset| {
        println!("✅ Created {}", asset.path.display());
    })
    .with_context(|| format!("Failed to generate assets in {}", config.output.dir.display()))?;

    println!("\n🎉 {}", design.completion_message());

    Ok(())
}
