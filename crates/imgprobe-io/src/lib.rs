//! # imgprobe-io
//!
//! Frame loading and result export for the imgprobe analyses.
//!
//! Codec work is delegated to the [`image`] crate; this crate only adapts
//! between its buffer types and the imgprobe containers:
//!
//! - [`read`] - Decode still images and GIF sequences into
//!   [`RgbFrame`](imgprobe_core::RgbFrame) / [`PixelGrid`](imgprobe_core::PixelGrid)
//! - [`heatmap`] - Colorize a [`ScalarGrid`](imgprobe_core::ScalarGrid)
//!   and write it as a PNG
//! - [`gif`] - Assemble frames into a looping animated GIF

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod gif;
pub mod heatmap;
pub mod read;

pub use error::{IoError, IoResult};
pub use heatmap::Palette;
pub use read::{read_gif_frames, read_luma, read_rgb};
