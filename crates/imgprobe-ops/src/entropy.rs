//! Windowed Shannon-entropy computation over greyscale grids.
//!
//! For every cell of a [`PixelGrid`] the engine takes the clipped square
//! neighborhood described by [`Window`], treats the intensities inside it as
//! a multiset, and computes the Shannon entropy (in bits) of their empirical
//! distribution. The result is a [`ScalarGrid`] of the same shape: flat
//! regions score near 0, textured regions approach `log2(distinct values)`.
//!
//! Windows at the grid border shrink rather than being padded, so edge
//! cells are scored over fewer samples. That behavior is part of the
//! contract, not an artifact.
//!
//! Each window is rebuilt from scratch, giving `O(rows * cols *
//! window_area)` work overall. That is the dominant cost on large grids; a
//! sliding-histogram variant would remove the `window_area` factor but is
//! not needed at the frame sizes imgprobe handles.
//!
//! # Example
//!
//! ```rust
//! use imgprobe_core::PixelGrid;
//! use imgprobe_ops::entropy::{entropy, entropy_map};
//!
//! // Two equally likely symbols carry exactly one bit.
//! assert_eq!(entropy(&[0, 0, 1, 1]), 1.0);
//!
//! let grid = PixelGrid::from_raw(4, 4, (0..16).collect()).unwrap();
//! let map = entropy_map(&grid, 2);
//! assert_eq!(map.dimensions(), (4, 4));
//! ```

use crate::{OpsError, OpsResult};
use imgprobe_core::{PixelGrid, ScalarGrid, Window};
use tracing::debug;

/// Window radius used by the reference analyses.
///
/// An interior window then covers a 10x10 = 100-sample neighborhood.
pub const DEFAULT_WINDOW_RADIUS: u32 = 5;

/// Number of histogram bins: one per 8-bit intensity.
const BINS: usize = 256;

/// Shannon entropy, in bits, of the empirical distribution of `values`.
///
/// Counts occurrences per intensity in a fixed 256-bin array, then sums
/// `p * log2(1/p)` over the occupied bins. A value occurring with
/// probability 1 contributes nothing (`log2(1) = 0`), so constant samples
/// score exactly 0.0. The empty sample also scores 0.0.
///
/// # Example
///
/// ```rust
/// use imgprobe_ops::entropy::entropy;
///
/// assert_eq!(entropy(&[5]), 0.0);
/// assert_eq!(entropy(&[0, 1, 2, 3]), 2.0);
/// ```
pub fn entropy(values: &[u8]) -> f64 {
    let mut counts = [0u32; BINS];
    for &v in values {
        counts[v as usize] += 1;
    }
    entropy_from_counts(&counts, values.len())
}

/// Entropy in bits from a pre-built histogram with `total` samples.
fn entropy_from_counts(counts: &[u32; BINS], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut ent = 0.0;
    for &count in counts {
        if count == 0 {
            continue;
        }
        let p = count as f64 / total;
        ent += p * (1.0 / p).log2();
    }
    ent
}

/// Computes the local-entropy map of `grid` for the given window radius.
///
/// Every output cell holds the Shannon entropy (bits) of the clipped
/// window around the matching input cell. The output has the same shape as
/// the input; the input is not modified. The computation is deterministic:
/// identical inputs produce bit-identical maps.
///
/// A radius of 0 degenerates every window to the empty sample and yields an
/// all-zero map.
pub fn entropy_map(grid: &PixelGrid, radius: u32) -> ScalarGrid {
    let (width, height) = grid.dimensions();
    debug!(width, height, radius, "computing entropy map");

    let mut data = vec![0.0f64; grid.len()];
    for (y, row_out) in data.chunks_exact_mut(width as usize).enumerate() {
        entropy_row(grid.as_slice(), width, height, radius, y as u32, row_out);
    }
    match ScalarGrid::from_raw(width, height, data) {
        Ok(map) => map,
        // Output shape mirrors a validated grid.
        Err(_) => unreachable!("entropy map shape matches source grid"),
    }
}

/// Computes a local-entropy map over a raw row-major intensity buffer.
///
/// Slice-level twin of [`entropy_map`] for callers that don't hold a
/// [`PixelGrid`]. Returns the map as a row-major `Vec<f64>` of
/// `width * height` values.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] when `width` or `height` is
/// zero, the dimensions overflow, or `src.len() != width * height`, and
/// [`OpsError::InvalidParameter`] for a radius that doesn't fit in `u32`.
pub fn entropy_map_raw(
    src: &[u8],
    width: usize,
    height: usize,
    radius: usize,
) -> OpsResult<Vec<f64>> {
    let (width, height) = validate_dimensions(src, width, height)?;
    let radius = u32::try_from(radius)
        .map_err(|_| OpsError::InvalidParameter("radius does not fit in u32".into()))?;

    let mut data = vec![0.0f64; src.len()];
    for (y, row_out) in data.chunks_exact_mut(width as usize).enumerate() {
        entropy_row(src, width, height, radius, y as u32, row_out);
    }
    Ok(data)
}

/// Fills `out` with the entropy values of row `y`.
///
/// Shared by the serial and parallel map builders so both produce
/// bit-identical results.
pub(crate) fn entropy_row(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    y: u32,
    out: &mut [f64],
) {
    let w = width as usize;
    let mut counts = [0u32; BINS];
    for (x, cell) in out.iter_mut().enumerate() {
        let win = Window::clipped(x as u32, y, radius, width, height);
        counts.fill(0);
        for wy in win.y0..win.y1 {
            let row = &src[wy as usize * w..wy as usize * w + w];
            for &v in &row[win.x0 as usize..win.x1 as usize] {
                counts[v as usize] += 1;
            }
        }
        *cell = entropy_from_counts(&counts, win.area());
    }
}

/// Validates a raw buffer against its stated dimensions.
pub(crate) fn validate_dimensions(
    src: &[u8],
    width: usize,
    height: usize,
) -> OpsResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(OpsError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))?;
    if src.len() != expected {
        return Err(OpsError::InvalidDimensions(format!(
            "expected {} pixels, got {}",
            expected,
            src.len()
        )));
    }
    let width = u32::try_from(width)
        .map_err(|_| OpsError::InvalidDimensions("width does not fit in u32".into()))?;
    let height = u32::try_from(height)
        .map_err(|_| OpsError::InvalidDimensions("height does not fit in u32".into()))?;
    Ok((width, height))
}

// ============================================================================
// Tests
// ============================================================================
