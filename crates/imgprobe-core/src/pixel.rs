//! Pixel-level constants and conversions.
//!
//! Greyscale reduction uses the ITU-R BT.601 luma weights, the same
//! weighting PIL applies for its `'L'` mode. Reports and entropy maps built
//! on top of this reduction stay comparable with the reference analyses.

/// Rec.601 luma coefficient for red.
///
/// Used in the standard luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luma coefficient for green.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luma coefficient for blue.
pub const REC601_LUMA_B: f32 = 0.114;

/// Converts an 8-bit RGB triple to its Rec.601 luma value.
///
/// The weighted sum is rounded to the nearest integer intensity.
///
/// # Example
///
/// ```rust
/// use imgprobe_core::luma_rec601;
///
/// assert_eq!(luma_rec601([255, 255, 255]), 255);
/// assert_eq!(luma_rec601([0, 0, 0]), 0);
/// ```
#[inline]
pub fn luma_rec601(rgb: [u8; 3]) -> u8 {
    let y = REC601_LUMA_R * rgb[0] as f32
        + REC601_LUMA_G * rgb[1] as f32
        + REC601_LUMA_B * rgb[2] as f32;
    y.round().min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weights_sum_to_one() {
        assert_relative_eq!(
            REC601_LUMA_R + REC601_LUMA_G + REC601_LUMA_B,
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn extremes() {
        assert_eq!(luma_rec601([0, 0, 0]), 0);
        assert_eq!(luma_rec601([255, 255, 255]), 255);
    }

    #[test]
    fn green_dominates() {
        let g = luma_rec601([0, 255, 0]);
        let r = luma_rec601([255, 0, 0]);
        let b = luma_rec601([0, 0, 255]);
        assert!(g > r && r > b);
        assert_eq!(g, 150); // 0.587 * 255, rounded
    }
}
