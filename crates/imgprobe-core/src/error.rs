//! Error types for imgprobe-core operations.
//!
//! The [`Error`] enum covers the failure modes of grid and frame
//! construction and access:
//!
//! - Empty or mismatched dimensions
//! - Ragged nested-row input
//! - Out-of-bounds cell access
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::grid::PixelGrid`] - Construction and bounds checking
//! - [`crate::frame::RgbFrame`] - Construction
//! - `imgprobe-io` - Wrapped into its own error type

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or accessing grids and frames.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid has zero rows or zero columns.
    ///
    /// Every analysis expects at least one pixel; an empty grid is a caller
    /// input error, reported synchronously and never retried.
    #[error("empty grid: {width}x{height} has no pixels")]
    EmptyGrid {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Nested-row input where some row has a different length.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Column count of row 0
        expected: usize,
        /// Column count actually found
        got: usize,
    },

    /// Cell coordinates are outside grid bounds.
    #[error("cell ({x}, {y}) out of bounds for grid {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },

    /// Buffer length does not match the stated dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Stated width
        width: u32,
        /// Stated height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Generic error with custom message.
    ///
    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::EmptyGrid`] error.
    #[inline]
    pub fn empty_grid(width: u32, height: u32) -> Self {
        Self::EmptyGrid { width, height }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is a shape/construction error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyGrid { .. } | Self::RaggedRows { .. } | Self::InvalidDimensions { .. }
        )
    }
}
