//! # imgprobe-core
//!
//! Core types for greyscale image analysis.
//!
//! This crate provides the foundational types used throughout the imgprobe
//! workspace:
//!
//! - [`PixelGrid`] - Owned 2-D grid of 8-bit greyscale intensities
//! - [`ScalarGrid`] - Same-shaped grid of `f64` measurements (entropy maps)
//! - [`RgbFrame`] - Interleaved 8-bit RGB frame with greyscale reduction
//! - [`Window`] - Clipped square neighborhood of a grid cell
//!
//! ## Design Philosophy
//!
//! Grids are validated at construction: a `PixelGrid` always has at least one
//! row and one column, and its buffer length always matches its dimensions.
//! Analysis code downstream can therefore index without re-checking shape.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. The other imgprobe crates depend on it:
//!
//! ```text
//! imgprobe-core (this crate)
//!    ^
//!    |
//!    +-- imgprobe-ops (entropy, brightness)
//!    +-- imgprobe-io  (frame loading, heatmap export)
//!    +-- imgprobe-cli (command-line front-end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod frame;
pub mod grid;
pub mod pixel;
pub mod window;

// Re-exports for convenience
pub use error::{Error, Result};
pub use frame::RgbFrame;
pub use grid::{PixelGrid, ScalarGrid};
pub use pixel::{luma_rec601, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R};
pub use window::Window;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use imgprobe_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::frame::RgbFrame;
    pub use crate::grid::{PixelGrid, ScalarGrid};
    pub use crate::pixel::luma_rec601;
    pub use crate::window::Window;
}
