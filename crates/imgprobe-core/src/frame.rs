//! RGB frame container.
//!
//! [`RgbFrame`] holds one decoded image or one frame of an animated
//! sequence as interleaved 8-bit RGB. The brightness estimators in
//! `imgprobe-ops` read it directly; everything entropy-related goes through
//! the greyscale reduction in [`RgbFrame::to_luma`].

use crate::{luma_rec601, Error, PixelGrid, Result};

/// Interleaved 8-bit RGB frame.
///
/// Cells are stored row-major as `[R G B R G B ...]`. Like
/// [`PixelGrid`], a frame is validated at construction and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    /// Interleaved RGB buffer
    data: Vec<u8>,
    /// Frame width in pixels
    width: u32,
    /// Frame height in pixels
    height: u32,
}

impl RgbFrame {
    /// Creates a frame from an interleaved RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] for zero dimensions and
    /// [`Error::InvalidDimensions`] if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::empty_grid(width, height));
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes of RGB data, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the frame dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the RGB triple at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Iterates over pixels as RGB triples, row-major.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
    }

    /// Returns the interleaved RGB buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the frame and returns its buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Reduces the frame to a greyscale [`PixelGrid`] with Rec.601 weights.
    pub fn to_luma(&self) -> PixelGrid {
        let luma: Vec<u8> = self.pixels().map(luma_rec601).collect();
        // Dimensions were validated at construction, so this cannot fail.
        PixelGrid::from_raw(self.width, self.height, luma)
            .unwrap_or_else(|_| unreachable!("frame dimensions are valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_checks_length() {
        assert!(RgbFrame::from_raw(2, 2, vec![0; 12]).is_ok());
        assert!(RgbFrame::from_raw(2, 2, vec![0; 11]).is_err());
        assert!(RgbFrame::from_raw(0, 2, vec![]).is_err());
    }

    #[test]
    fn pixel_access() {
        let data = vec![
            1, 2, 3, 4, 5, 6, //
            7, 8, 9, 10, 11, 12,
        ];
        let frame = RgbFrame::from_raw(2, 2, data).unwrap();
        assert_eq!(frame.get(0, 0), Some([1, 2, 3]));
        assert_eq!(frame.get(1, 1), Some([10, 11, 12]));
        assert_eq!(frame.get(2, 0), None);
        assert_eq!(frame.pixels().count(), 4);
    }

    #[test]
    fn to_luma_matches_per_pixel_formula() {
        let frame = RgbFrame::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        let grid = frame.to_luma();
        assert_eq!(grid.dimensions(), (2, 1));
        assert_eq!(grid.get(0, 0), Some(luma_rec601([255, 0, 0])));
        assert_eq!(grid.get(1, 0), Some(luma_rec601([0, 255, 0])));
    }
}
