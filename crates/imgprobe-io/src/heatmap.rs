//! Heatmap colorization and PNG export for scalar maps.
//!
//! Maps a [`ScalarGrid`] onto a color palette after min/max normalization.
//! [`Palette::Jet`] reproduces the blue-to-red ramp the reference analyses
//! rendered entropy maps with; [`Palette::Grey`] is a plain intensity ramp.

use crate::{IoError, IoResult};
use image::{ImageFormat, RgbImage};
use imgprobe_core::{RgbFrame, ScalarGrid};
use std::path::Path;
use tracing::debug;

/// Color palette for heatmap rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Blue-cyan-yellow-red ramp (the classic "jet" map).
    #[default]
    Jet,
    /// Greyscale ramp, dark to light.
    Grey,
}

impl Palette {
    /// Maps a normalized value in `[0, 1]` to an RGB color.
    #[inline]
    pub fn color(self, t: f64) -> [u8; 3] {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Jet => jet(t),
            Self::Grey => {
                let v = (t * 255.0).round() as u8;
                [v, v, v]
            }
        }
    }
}

impl std::str::FromStr for Palette {
    type Err = IoError;

    fn from_str(s: &str) -> IoResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jet" => Ok(Self::Jet),
            "grey" | "gray" => Ok(Self::Grey),
            other => Err(IoError::Unsupported(format!("unknown palette '{other}'"))),
        }
    }
}

/// Piecewise-linear approximation of the jet colormap.
#[inline]
fn jet(t: f64) -> [u8; 3] {
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

/// Colorizes a scalar map into an [`RgbFrame`].
///
/// Values are normalized by the map's min/max before palette lookup. A flat
/// map (all cells equal, e.g. the all-zero entropy map of a constant image)
/// renders entirely in the palette floor color.
pub fn colorize(map: &ScalarGrid, palette: Palette) -> RgbFrame {
    let (min, max) = map.min_max();
    let span = max - min;

    let mut data = Vec::with_capacity(map.as_slice().len() * 3);
    for &v in map.as_slice() {
        let t = if span > 0.0 { (v - min) / span } else { 0.0 };
        data.extend_from_slice(&palette.color(t));
    }
    match RgbFrame::from_raw(map.width(), map.height(), data) {
        Ok(frame) => frame,
        Err(_) => unreachable!("colorized buffer matches map shape"),
    }
}

/// Colorizes a scalar map and writes it as a PNG.
pub fn write_png(path: impl AsRef<Path>, map: &ScalarGrid, palette: Palette) -> IoResult<()> {
    let path = path.as_ref();
    let frame = colorize(map, palette);
    let (width, height) = frame.dimensions();
    let img = RgbImage::from_raw(width, height, frame.into_raw())
        .ok_or_else(|| IoError::Unsupported("heatmap buffer size mismatch".into()))?;
    img.save_with_format(path, ImageFormat::Png)?;
    debug!(path = %path.display(), width, height, "wrote heatmap PNG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jet_endpoints() {
        // Dark blue at the floor, dark red at the ceiling
        assert_eq!(Palette::Jet.color(0.0), [0, 0, 128]);
        assert_eq!(Palette::Jet.color(1.0), [128, 0, 0]);
        // Saturated green mid-ramp
        assert_eq!(Palette::Jet.color(0.5), [128, 255, 128]);
    }

    #[test]
    fn grey_ramp() {
        assert_eq!(Palette::Grey.color(0.0), [0, 0, 0]);
        assert_eq!(Palette::Grey.color(1.0), [255, 255, 255]);
    }

    #[test]
    fn palette_from_str() {
        assert_eq!("jet".parse::<Palette>().unwrap(), Palette::Jet);
        assert_eq!("Gray".parse::<Palette>().unwrap(), Palette::Grey);
        assert!("viridis".parse::<Palette>().is_err());
    }

    #[test]
    fn colorize_normalizes_by_range() {
        let map = ScalarGrid::from_raw(2, 1, vec![1.0, 3.0]).unwrap();
        let frame = colorize(&map, Palette::Grey);
        assert_eq!(frame.get(0, 0), Some([0, 0, 0]));
        assert_eq!(frame.get(1, 0), Some([255, 255, 255]));
    }

    #[test]
    fn flat_map_renders_floor_color() {
        let map = ScalarGrid::from_raw(3, 3, vec![0.0; 9]).unwrap();
        let frame = colorize(&map, Palette::Jet);
        let floor = Palette::Jet.color(0.0);
        assert!((0..3).all(|y| (0..3).all(|x| frame.get(x, y) == Some(floor))));
    }

    #[test]
    fn write_png_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heat.png");
        let map = ScalarGrid::from_raw(4, 3, (0..12).map(|v| v as f64).collect()).unwrap();

        write_png(&path, &map, Palette::Jet).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (4, 3));
    }
}
