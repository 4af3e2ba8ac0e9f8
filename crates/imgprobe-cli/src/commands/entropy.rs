//! Local-entropy heatmap command.
//!
//! Stills: greyscale reduction, entropy map, heatmap PNG (or a printed
//! summary when no output path is given). GIF inputs: one heatmap per
//! frame, assembled into a looping GIF.

use crate::EntropyArgs;
use anyhow::{bail, Context, Result};
use imgprobe_core::{RgbFrame, ScalarGrid};
use imgprobe_io::{gif, heatmap, Palette};
use imgprobe_ops::{entropy, parallel};
use std::path::Path;
use tracing::debug;

/// Runs the entropy command.
pub fn run(args: EntropyArgs, verbose: bool) -> Result<()> {
    let palette: Palette = args.palette.into();

    if super::is_gif(&args.input) {
        run_sequence(&args, palette)
    } else {
        run_still(&args, palette, verbose)
    }
}

fn run_still(args: &EntropyArgs, palette: Palette, verbose: bool) -> Result<()> {
    let grid = imgprobe_io::read_luma(&args.input)
        .with_context(|| format!("Failed to load: {}", args.input.display()))?;
    if verbose {
        let (w, h) = grid.dimensions();
        println!("{}: {}x{}, radius {}", args.input.display(), w, h, args.radius);
    }

    let map = parallel::entropy_map(&grid, args.radius);

    match &args.output {
        Some(path) => {
            heatmap::write_png(path, &map, palette)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!("Wrote: {}", path.display());
        }
        None => print_summary(&args.input, grid.as_slice(), &map),
    }
    Ok(())
}

fn run_sequence(args: &EntropyArgs, palette: Palette) -> Result<()> {
    let frames = super::load_gif(&args.input)?;

    let maps: Vec<ScalarGrid> = frames
        .iter()
        .map(|frame| parallel::entropy_map(&frame.to_luma(), args.radius))
        .collect();
    debug!(frames = maps.len(), radius = args.radius, "computed per-frame entropy maps");

    match &args.output {
        Some(path) => {
            if !super::is_gif(path) {
                bail!(
                    "{}: sequence output must be a .gif path",
                    path.display()
                );
            }
            // Each frame is normalized over its own range, matching how the
            // reference rendered per-frame figures.
            let heat_frames: Vec<RgbFrame> = maps
                .iter()
                .map(|map| heatmap::colorize(map, palette))
                .collect();
            gif::write_gif(path, &heat_frames, args.delay_ms)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!("Wrote: {} ({} frames)", path.display(), heat_frames.len());
        }
        None => {
            println!("{} ({} frames)", args.input.display(), maps.len());
            for (index, (frame, map)) in frames.iter().zip(&maps).enumerate() {
                let global = entropy::entropy(frame.to_luma().as_slice());
                let (_, max) = map.min_max();
                println!(
                    "  frame {:03}: global {:.4} bits, local max {:.4} bits",
                    index, global, max
                );
            }
        }
    }
    Ok(())
}

/// Prints the textual summary used when no heatmap output is requested.
fn print_summary(path: &Path, luma: &[u8], map: &ScalarGrid) {
    let global = entropy::entropy(luma);
    let (min, max) = map.min_max();
    let mean = map.as_slice().iter().sum::<f64>() / map.as_slice().len() as f64;

    println!("{}", path.display());
    println!("  Global entropy: {:.4} bits", global);
    println!("  Local entropy:  min {:.4}, mean {:.4}, max {:.4} bits", min, mean, max);
}
