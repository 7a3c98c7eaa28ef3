//! huebatch - batch hue/saturation/brightness adjustment.
//!
//! Scans a folder for PNG/JPEG images, applies the HSB transform pipeline
//! to each one, and writes the results to a target folder under
//! collision-avoiding `processed_*` names.
//!
//! Run with `RUST_LOG=info` for per-file progress.

mod save;
mod scan;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use huebatch_core::{apply_to_all, HsbAdjustments, ImagePair};

/// Batch hue/saturation/brightness adjustment for a folder of images.
#[derive(Debug, Parser)]
#[command(name = "huebatch", version, about)]
struct Args {
    /// Folder scanned (non-recursively) for .png/.jpg/.jpeg files
    #[arg(short, long)]
    input: PathBuf,

    /// Folder the processed images are written to
    #[arg(short, long)]
    output: PathBuf,

    /// Hue rotation in whole degrees (0-360)
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=360))]
    hue: Option<u16>,

    /// Saturation factor (0.0-2.0; 1.0 leaves the image unchanged)
    #[arg(long, value_parser = parse_factor)]
    saturation: Option<f32>,

    /// Brightness factor (0.0-2.0; 1.0 leaves the image unchanged)
    #[arg(long, value_parser = parse_factor)]
    brightness: Option<f32>,

    /// JSON preset with hue/saturation/brightness fields; explicit flags win
    #[arg(long)]
    preset: Option<PathBuf>,

    /// JPEG quality for .jpg/.jpeg output (1-100)
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,
}

/// Range check for the saturation/brightness sliders.
fn parse_factor(raw: &str) -> Result<f32, String> {
    let value: f32 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is out of range (0.0-2.0)"))
    }
}

/// Merge the preset file (if any) with explicit flags; flags win.
fn resolve_adjustments(args: &Args) -> Result<HsbAdjustments> {
    let mut adjustments = match &args.preset {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading preset {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing preset {}", path.display()))?
        }
        None => HsbAdjustments::default(),
    };

    if let Some(hue) = args.hue {
        adjustments.hue = hue as f32;
    }
    if let Some(saturation) = args.saturation {
        adjustments.saturation = saturation;
    }
    if let Some(brightness) = args.brightness {
        adjustments.brightness = brightness;
    }

    Ok(adjustments)
}

fn run(args: Args) -> Result<()> {
    let adjustments = resolve_adjustments(&args)?;
    log::info!(
        "adjustments: hue {} deg, saturation {}, brightness {}",
        adjustments.hue,
        adjustments.saturation,
        adjustments.brightness
    );

    let files = scan::scan_folder(&args.input)?;
    if files.is_empty() {
        println!("no images found in {}", args.input.display());
        return Ok(());
    }

    // Load failures are reported per file and never abort the batch.
    let mut pairs = Vec::new();
    let mut load_failures = 0usize;
    for path in &files {
        match ImagePair::load(path) {
            Ok(pair) => {
                log::info!("loaded {}", path.display());
                pairs.push(pair);
            }
            Err(e) => {
                load_failures += 1;
                log::warn!("skipping {}: {e}", path.display());
            }
        }
    }
    if pairs.is_empty() {
        bail!("none of the {} scanned files could be loaded", files.len());
    }

    apply_to_all(&mut pairs, &adjustments);

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output folder {}", args.output.display()))?;
    let report = save::save_all(&pairs, &args.output, args.jpeg_quality);

    println!(
        "{} of {} images saved to {} ({} load failures)",
        report.saved.len(),
        pairs.len(),
        args.output.display(),
        load_failures
    );

    if let Some((path, reason)) = &report.failed {
        bail!("batch aborted at {}: {reason}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // env_logger prints error-level records even unconfigured.
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
