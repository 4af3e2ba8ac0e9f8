//! # imgprobe-ops
//!
//! Analysis operations over greyscale grids and RGB frames.
//!
//! This crate provides the two analyses imgprobe reports on:
//!
//! - [`entropy`] - Shannon entropy of a sample and per-cell local entropy
//!   maps over a clipped square neighborhood
//! - [`brightness`] - Mean, RMS and perceived-brightness estimators
//!
//! # Example
//!
//! ```rust
//! use imgprobe_core::PixelGrid;
//! use imgprobe_ops::{entropy, DEFAULT_WINDOW_RADIUS};
//!
//! let grid = PixelGrid::from_raw(3, 3, (0..9).collect()).unwrap();
//! let map = entropy::entropy_map(&grid, DEFAULT_WINDOW_RADIUS);
//! assert_eq!(map.dimensions(), grid.dimensions());
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - Row-parallel entropy maps via [`rayon`] in
//!   [`parallel`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod brightness;
pub mod entropy;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use entropy::DEFAULT_WINDOW_RADIUS;
pub use error::{OpsError, OpsResult};
