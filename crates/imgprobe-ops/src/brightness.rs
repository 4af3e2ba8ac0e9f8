//! Brightness estimators for frames and greyscale grids.
//!
//! Five estimators, each a different answer to "how bright is this image":
//!
//! - [`mean`] / [`rms`] - plain and root-mean-square greyscale intensity
//! - [`perceived_of_means`] / [`perceived_of_rms`] - the weighted
//!   perceived-brightness formula applied to per-channel aggregates
//! - [`mean_perceived`] - perceived brightness per pixel, then averaged
//!
//! The perceived formula is `sqrt(0.241 R^2 + 0.691 G^2 + 0.068 B^2)`, the
//! widely used photometric approximation for gamma-encoded 8-bit RGB.
//! [`BrightnessReport`] bundles all five for one frame.

use imgprobe_core::{PixelGrid, RgbFrame};

/// Perceived-brightness weight for red.
pub const PERCEIVED_R: f64 = 0.241;

/// Perceived-brightness weight for green.
pub const PERCEIVED_G: f64 = 0.691;

/// Perceived-brightness weight for blue.
pub const PERCEIVED_B: f64 = 0.068;

/// Average greyscale intensity of a grid.
pub fn mean(grid: &PixelGrid) -> f64 {
    let sum: u64 = grid.as_slice().iter().map(|&v| v as u64).sum();
    sum as f64 / grid.len() as f64
}

/// Root-mean-square greyscale intensity of a grid.
///
/// Weighs bright regions more heavily than [`mean`]; always >= the mean.
pub fn rms(grid: &PixelGrid) -> f64 {
    let sum_sq: u64 = grid.as_slice().iter().map(|&v| v as u64 * v as u64).sum();
    (sum_sq as f64 / grid.len() as f64).sqrt()
}

/// Per-channel mean of an RGB frame, as `[r, g, b]`.
pub fn channel_means(frame: &RgbFrame) -> [f64; 3] {
    let mut sums = [0u64; 3];
    for [r, g, b] in frame.pixels() {
        sums[0] += r as u64;
        sums[1] += g as u64;
        sums[2] += b as u64;
    }
    let n = frame.pixel_count() as f64;
    [sums[0] as f64 / n, sums[1] as f64 / n, sums[2] as f64 / n]
}

/// Per-channel root-mean-square of an RGB frame, as `[r, g, b]`.
pub fn channel_rms(frame: &RgbFrame) -> [f64; 3] {
    let mut sums = [0u64; 3];
    for [r, g, b] in frame.pixels() {
        sums[0] += r as u64 * r as u64;
        sums[1] += g as u64 * g as u64;
        sums[2] += b as u64 * b as u64;
    }
    let n = frame.pixel_count() as f64;
    [
        (sums[0] as f64 / n).sqrt(),
        (sums[1] as f64 / n).sqrt(),
        (sums[2] as f64 / n).sqrt(),
    ]
}

/// Perceived brightness of one RGB value.
///
/// `sqrt(0.241 r^2 + 0.691 g^2 + 0.068 b^2)`
#[inline]
pub fn perceived(rgb: [f64; 3]) -> f64 {
    (PERCEIVED_R * rgb[0] * rgb[0] + PERCEIVED_G * rgb[1] * rgb[1] + PERCEIVED_B * rgb[2] * rgb[2])
        .sqrt()
}

/// Perceived brightness of the per-channel means.
pub fn perceived_of_means(frame: &RgbFrame) -> f64 {
    perceived(channel_means(frame))
}

/// Perceived brightness of the per-channel RMS values.
pub fn perceived_of_rms(frame: &RgbFrame) -> f64 {
    perceived(channel_rms(frame))
}

/// Per-pixel perceived brightness, averaged over the frame.
///
/// The most faithful (and slowest) of the perceived estimators: the
/// nonlinear formula is applied before averaging instead of after.
pub fn mean_perceived(frame: &RgbFrame) -> f64 {
    let sum: f64 = frame
        .pixels()
        .map(|[r, g, b]| perceived([r as f64, g as f64, b as f64]))
        .sum();
    sum / frame.pixel_count() as f64
}

/// All five brightness estimators for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessReport {
    /// Average greyscale intensity
    pub mean: f64,
    /// Root-mean-square greyscale intensity
    pub rms: f64,
    /// Perceived brightness of channel means
    pub perceived_of_means: f64,
    /// Perceived brightness of channel RMS
    pub perceived_of_rms: f64,
    /// Per-pixel perceived brightness, averaged
    pub mean_perceived: f64,
}

/// Computes the full [`BrightnessReport`] for a frame.
///
/// The greyscale estimators run on the frame's Rec.601 luma reduction.
pub fn report(frame: &RgbFrame) -> BrightnessReport {
    let luma = frame.to_luma();
    BrightnessReport {
        mean: mean(&luma),
        rms: rms(&luma),
        perceived_of_means: perceived_of_means(frame),
        perceived_of_rms: perceived_of_rms(frame),
        mean_perceived: mean_perceived(frame),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn solid(rgb: [u8; 3], w: u32, h: u32) -> RgbFrame {
        let data: Vec<u8> = (0..(w * h) as usize).flat_map(|_| rgb).collect();
        RgbFrame::from_raw(w, h, data).unwrap()
    }

    #[test]
    fn black_frame_is_zero_everywhere() {
        let rep = report(&solid([0, 0, 0], 8, 8));
        assert_eq!(rep.mean, 0.0);
        assert_eq!(rep.rms, 0.0);
        assert_eq!(rep.perceived_of_means, 0.0);
        assert_eq!(rep.perceived_of_rms, 0.0);
        assert_eq!(rep.mean_perceived, 0.0);
    }

    #[test]
    fn white_frame_saturates_every_estimator() {
        let rep = report(&solid([255, 255, 255], 8, 8));
        assert_relative_eq!(rep.mean, 255.0, epsilon = EPSILON);
        assert_relative_eq!(rep.rms, 255.0, epsilon = EPSILON);
        // Weights sum to 1.0, so white maps to 255 under the perceived formula.
        assert_relative_eq!(rep.perceived_of_means, 255.0, epsilon = 1e-6);
        assert_relative_eq!(rep.perceived_of_rms, 255.0, epsilon = 1e-6);
        assert_relative_eq!(rep.mean_perceived, 255.0, epsilon = 1e-6);
    }

    #[test]
    fn mean_of_two_level_grid() {
        let grid = PixelGrid::from_raw(2, 1, vec![0, 100]).unwrap();
        assert_relative_eq!(mean(&grid), 50.0, epsilon = EPSILON);
        // RMS weighs the bright half more: sqrt((0 + 10000)/2)
        assert_relative_eq!(rms(&grid), 5000.0f64.sqrt(), epsilon = EPSILON);
        assert!(rms(&grid) > mean(&grid));
    }

    #[test]
    fn channel_aggregates() {
        let mut data = vec![200, 0, 0, 0, 100, 0];
        data.extend_from_slice(&[0, 0, 50, 0, 0, 0]);
        let frame = RgbFrame::from_raw(2, 2, data).unwrap();
        assert_relative_eq!(channel_means(&frame)[0], 50.0, epsilon = EPSILON);
        assert_relative_eq!(channel_means(&frame)[1], 25.0, epsilon = EPSILON);
        assert_relative_eq!(channel_means(&frame)[2], 12.5, epsilon = EPSILON);
        assert_relative_eq!(channel_rms(&frame)[0], 100.0, epsilon = EPSILON);
    }

    #[test]
    fn perceived_matches_formula() {
        let v = perceived([100.0, 50.0, 25.0]);
        let expected = (0.241 * 10000.0 + 0.691 * 2500.0 + 0.068 * 625.0f64).sqrt();
        assert_relative_eq!(v, expected, epsilon = EPSILON);
    }

    #[test]
    fn estimators_agree_on_constant_frames() {
        // Averaging before or after the formula is the same on a solid color.
        let frame = solid([120, 80, 40], 4, 4);
        assert_relative_eq!(
            perceived_of_means(&frame),
            mean_perceived(&frame),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            perceived_of_means(&frame),
            perceived_of_rms(&frame),
            epsilon = EPSILON
        );
    }

    #[test]
    fn green_reads_brighter_than_blue() {
        let green = report(&solid([0, 200, 0], 4, 4));
        let blue = report(&solid([0, 0, 200], 4, 4));
        assert!(green.mean_perceived > blue.mean_perceived);
        assert!(green.mean > blue.mean);
    }
}
