//! CLI command implementations

pub mod brightness;
pub mod entropy;

use anyhow::{Context, Result};
use imgprobe_core::RgbFrame;
use std::path::Path;

/// True when the path names an animated GIF sequence.
pub fn is_gif(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}

/// Load a still image from path
pub fn load_frame(path: &Path) -> Result<RgbFrame> {
    imgprobe_io::read_rgb(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Load all frames of a GIF sequence
pub fn load_gif(path: &Path) -> Result<Vec<RgbFrame>> {
    let frames = imgprobe_io::read_gif_frames(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    if frames.is_empty() {
        anyhow::bail!("{}: GIF contains no frames", path.display());
    }
    Ok(frames)
}
