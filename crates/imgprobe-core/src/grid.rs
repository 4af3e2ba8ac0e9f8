//! Grid container types for image analysis.
//!
//! This module provides the two grid containers the analysis operations
//! work with:
//!
//! - [`PixelGrid`] - Owned 2-D grid of 8-bit greyscale intensities
//! - [`ScalarGrid`] - Same-shaped grid of `f64` measurement values
//!
//! # Memory Layout
//!
//! Both grids store cells in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [c c c c ...]  <- Row 0
//!         [c c c c ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use imgprobe_core::PixelGrid;
//!
//! let grid = PixelGrid::from_raw(3, 2, vec![0, 10, 20, 30, 40, 50]).unwrap();
//! assert_eq!(grid.dimensions(), (3, 2));
//! assert_eq!(grid.get(1, 1), Some(40));
//! ```
//!
//! # Dependencies
//!
//! - [`crate::error::Error`] - Construction/bounds errors
//!
//! # Used By
//!
//! - `imgprobe-ops` - Entropy and brightness computations
//! - `imgprobe-io` - Frame decoding and heatmap export

use crate::{Error, Result, Window};

/// Owned 2-D grid of 8-bit greyscale intensity values.
///
/// A `PixelGrid` is the read-only input to every analysis operation. It is
/// validated at construction: width and height are always at least 1 and the
/// buffer length always equals `width * height`.
///
/// # Example
///
/// ```rust
/// use imgprobe_core::PixelGrid;
///
/// let grid = PixelGrid::new(640, 480).unwrap();
/// assert_eq!(grid.get(0, 0), Some(0));
/// assert_eq!(grid.get(640, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Intensity buffer, row-major
    data: Vec<u8>,
    /// Grid width in cells
    width: u32,
    /// Grid height in cells
    height: u32,
}

impl PixelGrid {
    /// Creates a new grid filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::empty_grid(width, height));
        }
        Ok(Self {
            data: vec![0; width as usize * height as usize],
            width,
            height,
        })
    }

    /// Creates a grid from an existing row-major intensity buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] for zero dimensions and
    /// [`Error::InvalidDimensions`] if `data.len() != width * height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgprobe_core::PixelGrid;
    ///
    /// let grid = PixelGrid::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(255));
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::empty_grid(width, height));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} cells, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a grid from nested rows.
    ///
    /// All rows must have the same, non-zero length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] when there are no rows or row 0 is empty,
    /// and [`Error::RaggedRows`] when a later row differs in length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(Error::empty_grid(width as u32, height as u32));
        }
        let mut data = Vec::with_capacity(width * height);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
            data.extend_from_slice(cells);
        }
        Ok(Self {
            data,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Returns the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the grid dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: grids are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the intensity at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Returns the intensity at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when the coordinates are outside the
    /// grid.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Result<u8> {
        self.get(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterates over rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Returns the whole row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the grid and returns its buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the slices of rows `window.y0..window.y1`, each cut to
    /// `window.x0..window.x1`.
    ///
    /// Windows produced by [`Window::clipped`] for this grid are always in
    /// bounds; an empty window yields no slices.
    #[inline]
    pub fn window_rows(&self, window: Window) -> impl Iterator<Item = &[u8]> {
        let (x0, x1) = (window.x0 as usize, window.x1 as usize);
        (window.y0..window.y1).map(move |y| &self.row(y)[x0..x1])
    }
}

/// Grid of `f64` measurement values, one per cell of a source [`PixelGrid`].
///
/// Produced by analysis passes (the local-entropy map) and consumed by the
/// heatmap export in `imgprobe-io`. Shares the row-major layout of
/// [`PixelGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    data: Vec<f64>,
    width: u32,
    height: u32,
}

impl ScalarGrid {
    /// Creates a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::empty_grid(width, height));
        }
        Ok(Self {
            data: vec![0.0; width as usize * height as usize],
            width,
            height,
        })
    }

    /// Creates a grid from an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] for zero dimensions and
    /// [`Error::InvalidDimensions`] on a length mismatch.
    pub fn from_raw(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::empty_grid(width, height));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} cells, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the grid dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the value at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Returns the whole row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the (min, max) of all values.
    ///
    /// The grid is never empty, so both always exist.
    pub fn min_max(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.data {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        (min, max)
    }
}
