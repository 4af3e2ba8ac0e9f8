//! Row-parallel entropy maps using Rayon.
//!
//! Every cell's window is independent of every other cell's, so rows of the
//! map can be filled on worker threads without coordination. Results are
//! bit-identical to the serial builders in [`crate::entropy`]; parallelism
//! here is a throughput choice, not a semantic one.
//!
//! # Example
//!
//! ```rust
//! use imgprobe_core::PixelGrid;
//! use imgprobe_ops::parallel;
//!
//! let grid = PixelGrid::from_raw(16, 16, vec![0; 256]).unwrap();
//! let map = parallel::entropy_map(&grid, 5);
//! assert_eq!(map.dimensions(), (16, 16));
//! ```

use crate::entropy::{entropy_row, validate_dimensions};
use crate::OpsResult;
use imgprobe_core::{PixelGrid, ScalarGrid};
use rayon::prelude::*;
use tracing::debug;

/// Row-parallel version of [`crate::entropy::entropy_map`].
///
/// Produces bit-identical output; rows are distributed over the Rayon
/// thread pool.
pub fn entropy_map(grid: &PixelGrid, radius: u32) -> ScalarGrid {
    let (width, height) = grid.dimensions();
    debug!(width, height, radius, "computing entropy map (parallel)");

    let src = grid.as_slice();
    let mut data = vec![0.0f64; grid.len()];
    data.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row_out)| {
            entropy_row(src, width, height, radius, y as u32, row_out);
        });
    match ScalarGrid::from_raw(width, height, data) {
        Ok(map) => map,
        Err(_) => unreachable!("entropy map shape matches source grid"),
    }
}

/// Row-parallel version of [`crate::entropy::entropy_map_raw`].
///
/// # Errors
///
/// Same validation as the serial builder.
pub fn entropy_map_raw(
    src: &[u8],
    width: usize,
    height: usize,
    radius: usize,
) -> OpsResult<Vec<f64>> {
    let (width, height) = validate_dimensions(src, width, height)?;
    let radius = u32::try_from(radius).map_err(|_| {
        crate::OpsError::InvalidParameter("radius does not fit in u32".into())
    })?;

    let mut data = vec![0.0f64; src.len()];
    data.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row_out)| {
            entropy_row(src, width, height, radius, y as u32, row_out);
        });
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy;

    #[test]
    fn matches_serial_bit_for_bit() {
        let data: Vec<u8> = (0..400).map(|v| (v * 31 % 253) as u8).collect();
        let grid = PixelGrid::from_raw(20, 20, data).unwrap();

        let serial = entropy::entropy_map(&grid, 5);
        let par = entropy_map(&grid, 5);
        assert_eq!(serial.as_slice(), par.as_slice());
    }

    #[test]
    fn raw_matches_serial_raw() {
        let data: Vec<u8> = (0..96).map(|v| (v % 7) as u8).collect();
        let serial = entropy::entropy_map_raw(&data, 12, 8, 3).unwrap();
        let par = entropy_map_raw(&data, 12, 8, 3).unwrap();
        assert_eq!(serial, par);
    }

    #[test]
    fn raw_rejects_bad_input() {
        assert!(entropy_map_raw(&[0; 5], 2, 2, 1).is_err());
    }
}
