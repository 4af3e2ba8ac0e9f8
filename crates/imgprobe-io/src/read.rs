//! Decoding still images and GIF sequences into imgprobe containers.

use crate::IoResult;
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use imgprobe_core::{PixelGrid, RgbFrame};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Decodes a still image into an [`RgbFrame`].
///
/// Any format the `image` crate is built with (PNG, JPEG, GIF first frame)
/// is accepted; alpha is dropped.
pub fn read_rgb(path: impl AsRef<Path>) -> IoResult<RgbFrame> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    let (width, height) = (img.width(), img.height());
    debug!(path = %path.display(), width, height, "decoded still image");
    Ok(RgbFrame::from_raw(width, height, img.into_raw())?)
}

/// Decodes a still image straight to its greyscale [`PixelGrid`].
///
/// Equivalent to [`read_rgb`] followed by
/// [`RgbFrame::to_luma`](imgprobe_core::RgbFrame::to_luma), so the same
/// Rec.601 reduction is used everywhere.
pub fn read_luma(path: impl AsRef<Path>) -> IoResult<PixelGrid> {
    Ok(read_rgb(path)?.to_luma())
}

/// Decodes every frame of an animated GIF into [`RgbFrame`]s.
///
/// Frames come back in presentation order with alpha dropped. A
/// single-frame GIF yields one frame; frame delays are not preserved.
pub fn read_gif_frames(path: impl AsRef<Path>) -> IoResult<Vec<RgbFrame>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let decoder = GifDecoder::new(reader)?;

    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let rgba = frame?.into_buffer();
        let (width, height) = (rgba.width(), rgba.height());
        let rgb: Vec<u8> = rgba
            .pixels()
            .flat_map(|px| [px.0[0], px.0[1], px.0[2]])
            .collect();
        frames.push(RgbFrame::from_raw(width, height, rgb)?);
    }
    debug!(path = %path.display(), count = frames.len(), "decoded GIF sequence");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn write_test_png(dir: &std::path::Path) -> std::path::PathBuf {
        let img = RgbImage::from_fn(4, 2, |x, y| image::Rgb([(x * 60) as u8, (y * 100) as u8, 30]));
        let path = dir.join("test.png");
        img.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn read_rgb_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());

        let frame = read_rgb(&path).unwrap();
        assert_eq!(frame.dimensions(), (4, 2));
        assert_eq!(frame.get(1, 1), Some([60, 100, 30]));
    }

    #[test]
    fn read_luma_matches_frame_reduction() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());

        let frame = read_rgb(&path).unwrap();
        let grid = read_luma(&path).unwrap();
        assert_eq!(grid, frame.to_luma());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_rgb("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, crate::IoError::Io(_) | crate::IoError::Image(_)));
    }
}
