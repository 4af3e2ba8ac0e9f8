//! imgprobe - brightness and local-entropy analysis CLI
//!
//! Prints brightness reports and renders local-entropy heatmaps for still
//! images and animated GIF sequences.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use imgprobe_io::Palette;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "imgprobe")]
#[command(author, version, about = "Brightness and local-entropy analysis for images and GIF sequences")]
#[command(long_about = "
Analyse the brightness and local Shannon entropy of images.

Examples:
  imgprobe brightness photo.jpg               # Five-estimator brightness report
  imgprobe brightness anim.gif --estimator rms
  imgprobe entropy photo.jpg                  # Print entropy summary
  imgprobe entropy photo.jpg -o heat.png      # Write a jet heatmap
  imgprobe entropy anim.gif -o heat.gif --radius 5 --palette grey
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print brightness statistics
    #[command(visible_alias = "b")]
    Brightness(BrightnessArgs),

    /// Compute a local-entropy map and render it as a heatmap
    #[command(visible_alias = "e")]
    Entropy(EntropyArgs),
}

#[derive(Args)]
struct BrightnessArgs {
    /// Input images (PNG/JPEG) or GIF sequences
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Estimator for GIF per-frame series
    #[arg(long, value_enum, default_value = "mean")]
    estimator: Estimator,
}

/// Brightness estimator selector for per-frame series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Estimator {
    /// Average greyscale intensity
    Mean,
    /// Root-mean-square greyscale intensity
    Rms,
    /// Perceived brightness of channel means
    PerceivedMean,
    /// Perceived brightness of channel RMS
    PerceivedRms,
    /// Per-pixel perceived brightness, averaged
    MeanPerceived,
}

#[derive(Args)]
struct EntropyArgs {
    /// Input image (PNG/JPEG) or GIF sequence
    input: PathBuf,

    /// Output heatmap (.png for stills, .gif for sequences); prints a
    /// summary when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Window radius; interior windows cover 2*radius x 2*radius samples
    #[arg(short, long, default_value_t = imgprobe_ops::DEFAULT_WINDOW_RADIUS)]
    radius: u32,

    /// Heatmap palette
    #[arg(long, value_enum, default_value = "jet")]
    palette: PaletteArg,

    /// Frame delay for GIF output, in milliseconds
    #[arg(long, default_value_t = imgprobe_io::gif::DEFAULT_FRAME_DELAY_MS)]
    delay_ms: u32,
}

/// Palette selector mirroring [`imgprobe_io::Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PaletteArg {
    /// Blue-cyan-yellow-red ramp
    Jet,
    /// Greyscale ramp
    Grey,
}

impl From<PaletteArg> for Palette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Jet => Palette::Jet,
            PaletteArg::Grey => Palette::Grey,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Brightness(args) => commands::brightness::run(args, cli.verbose),
        Commands::Entropy(args) => commands::entropy::run(args, cli.verbose),
    }
}

/// Routes tracing output to stderr; `--verbose` lowers the filter to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_entropy_invocation() {
        let cli = Cli::parse_from([
            "imgprobe", "entropy", "in.gif", "-o", "out.gif", "--radius", "3", "--palette",
            "grey",
        ]);
        match cli.command {
            Commands::Entropy(args) => {
                assert_eq!(args.radius, 3);
                assert_eq!(args.palette, PaletteArg::Grey);
                assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out.gif")));
            }
            _ => panic!("expected entropy subcommand"),
        }
    }

    #[test]
    fn default_radius_matches_reference() {
        let cli = Cli::parse_from(["imgprobe", "entropy", "in.png"]);
        match cli.command {
            Commands::Entropy(args) => assert_eq!(args.radius, 5),
            _ => panic!("expected entropy subcommand"),
        }
    }
}
