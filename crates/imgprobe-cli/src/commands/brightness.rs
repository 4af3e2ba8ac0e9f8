//! Brightness report command.
//!
//! Stills get the full five-estimator report; GIF inputs get a per-frame
//! series of one chosen estimator.

use crate::{BrightnessArgs, Estimator};
use anyhow::Result;
use imgprobe_core::RgbFrame;
use imgprobe_ops::brightness::{self, BrightnessReport};
use std::path::Path;

/// Runs the brightness command over every input path.
pub fn run(args: BrightnessArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        if super::is_gif(path) {
            run_sequence(path, args.estimator)?;
        } else {
            let frame = super::load_frame(path)?;
            print_report(path, &frame, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

/// Prints the full report for one still image.
fn print_report(path: &Path, frame: &RgbFrame, verbose: bool) {
    let report: BrightnessReport = brightness::report(frame);

    println!("{}", path.display());
    if verbose {
        let (w, h) = frame.dimensions();
        println!("  Resolution:            {}x{}", w, h);
    }
    println!("  Mean brightness:       {:.4}", report.mean);
    println!("  RMS brightness:        {:.4}", report.rms);
    println!("  Perceived (means):     {:.4}", report.perceived_of_means);
    println!("  Perceived (RMS):       {:.4}", report.perceived_of_rms);
    println!("  Perceived (per-pixel): {:.4}", report.mean_perceived);
}

/// Prints a per-frame series of one estimator for a GIF.
fn run_sequence(path: &Path, estimator: Estimator) -> Result<()> {
    let frames = super::load_gif(path)?;

    println!("{} ({} frames, {:?})", path.display(), frames.len(), estimator);
    for (index, frame) in frames.iter().enumerate() {
        println!("  frame {:03}: {:.4}", index, evaluate(estimator, frame));
    }
    Ok(())
}

fn evaluate(estimator: Estimator, frame: &RgbFrame) -> f64 {
    match estimator {
        Estimator::Mean => brightness::mean(&frame.to_luma()),
        Estimator::Rms => brightness::rms(&frame.to_luma()),
        Estimator::PerceivedMean => brightness::perceived_of_means(frame),
        Estimator::PerceivedRms => brightness::perceived_of_rms(frame),
        Estimator::MeanPerceived => brightness::mean_perceived(frame),
    }
}
