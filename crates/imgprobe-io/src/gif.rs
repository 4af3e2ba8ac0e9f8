//! Animated GIF assembly.
//!
//! Collects a sequence of [`RgbFrame`]s (typically per-frame heatmaps) into
//! one looping GIF with a uniform frame delay.

use crate::{IoError, IoResult};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use imgprobe_core::RgbFrame;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Frame delay the reference sequences were rendered with.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;

/// Writes `frames` to `path` as a looping animated GIF.
///
/// All frames share `delay_ms`. Frames may differ in size; the codec stores
/// each at its own dimensions.
///
/// # Errors
///
/// Returns [`IoError::Unsupported`] when `frames` is empty, plus the usual
/// file and codec errors.
pub fn write_gif(path: impl AsRef<Path>, frames: &[RgbFrame], delay_ms: u32) -> IoResult<()> {
    let path = path.as_ref();
    if frames.is_empty() {
        return Err(IoError::Unsupported("no frames to encode".into()));
    }

    let file = File::create(path)?;
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    for frame in frames {
        let (width, height) = frame.dimensions();
        let rgba: Vec<u8> = frame
            .pixels()
            .flat_map(|[r, g, b]| [r, g, b, 255])
            .collect();
        let buffer = RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| IoError::Unsupported("frame buffer size mismatch".into()))?;
        encoder.encode_frame(Frame::from_parts(buffer, 0, 0, delay))?;
    }
    debug!(path = %path.display(), count = frames.len(), delay_ms, "wrote GIF");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_gif_frames;

    fn solid(rgb: [u8; 3], w: u32, h: u32) -> RgbFrame {
        let data: Vec<u8> = (0..(w * h) as usize).flat_map(|_| rgb).collect();
        RgbFrame::from_raw(w, h, data).unwrap()
    }

    #[test]
    fn rejects_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_gif(dir.path().join("out.gif"), &[], 50).unwrap_err();
        assert!(matches!(err, IoError::Unsupported(_)));
    }

    #[test]
    fn round_trips_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let frames = vec![solid([255, 0, 0], 8, 8), solid([0, 0, 255], 8, 8)];

        write_gif(&path, &frames, DEFAULT_FRAME_DELAY_MS).unwrap();

        let decoded = read_gif_frames(&path).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].dimensions(), (8, 8));
        assert_eq!(decoded[0].get(0, 0), Some([255, 0, 0]));
        assert_eq!(decoded[1].get(7, 7), Some([0, 0, 255]));
    }
}
