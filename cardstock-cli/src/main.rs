//! Cardstock — carousel card batch renderer.
//!
//! # Usage
//!
//! ```text
//! cardstock <content.json> <output-dir>
//! ```
//!
//! Renders one 1080x1350 PNG per slide into the output directory, then
//! writes a `metadata.json` manifest describing the batch. Exits non-zero on
//! any pipeline failure; no partial-success mode.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cardstock_core::{document, types::ContentDocument};
use cardstock_export::{batch, BatchResult, SvgRasterEngine};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cardstock",
    version,
    about = "Render a carousel card batch from a content document",
    long_about = None,
)]
struct Cli {
    /// Path to the content document (JSON).
    content: PathBuf,

    /// Directory that receives slide_N.png files and metadata.json.
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let document = document::load(&cli.content).with_context(|| {
        format!("failed to load content document '{}'", cli.content.display())
    })?;

    println!("Rendering {} slides...", document.slides.len());

    let mut engine = SvgRasterEngine::new().context("raster engine failed to start")?;
    let result = batch::export_batch(&document, &cli.output_dir, &mut engine)
        .with_context(|| format!("export failed for '{}'", cli.output_dir.display()))?;

    print_summary(&document, &result);
    Ok(())
}

fn print_summary(document: &ContentDocument, result: &BatchResult) {
    println!(
        "{} '{}' rendered ({} images)",
        "✓".green(),
        document.title,
        result.images.len()
    );
    for image in &result.images {
        println!("  ✎  {image}");
    }
    if !document.tags.is_empty() {
        println!("Tags: {}", document.tags.join(" "));
    }
    println!("Manifest: {}", result.manifest_path.display());
}
