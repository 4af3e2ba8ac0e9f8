//! Clipped square neighborhoods of grid cells.
//!
//! A [`Window`] is the local sample region used by the windowed entropy
//! engine: the square of side `2 * radius` around a cell, cut down to the
//! grid bounds. Border windows shrink instead of being padded or wrapped;
//! edge-cell statistics are computed over fewer samples on purpose.

/// Clipped square neighborhood of a cell, as half-open ranges.
///
/// For a cell at `(x, y)` with radius `r` in a `width x height` grid the
/// window spans columns `[max(0, x - r), min(width, x + r))` and rows
/// `[max(0, y - r), min(height, y + r))`. The upper bound is exclusive, so
/// an interior window covers `2r` columns by `2r` rows (`r = 5` gives the
/// 10x10 = 100-sample neighborhood) and `r = 0` gives an empty window.
///
/// # Example
///
/// ```rust
/// use imgprobe_core::Window;
///
/// let win = Window::clipped(0, 0, 5, 100, 100);
/// assert_eq!((win.x0, win.x1, win.y0, win.y1), (0, 5, 0, 5));
/// assert_eq!(win.area(), 25);
///
/// let interior = Window::clipped(50, 50, 5, 100, 100);
/// assert_eq!(interior.area(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First column (inclusive)
    pub x0: u32,
    /// Last column (exclusive)
    pub x1: u32,
    /// First row (inclusive)
    pub y0: u32,
    /// Last row (exclusive)
    pub y1: u32,
}

impl Window {
    /// Computes the window of radius `radius` around `(x, y)`, clipped to a
    /// `width x height` grid.
    ///
    /// The result is always within bounds for that grid. Degenerate windows
    /// (radius 0, or a cell in the bottom-right corner region with a small
    /// radius) are empty, not an error.
    #[inline]
    pub fn clipped(x: u32, y: u32, radius: u32, width: u32, height: u32) -> Self {
        let x0 = x.saturating_sub(radius);
        let y0 = y.saturating_sub(radius);
        let x1 = x.saturating_add(radius).min(width).max(x0);
        let y1 = y.saturating_add(radius).min(height).max(y0);
        Self { x0, x1, y0, y1 }
    }

    /// Returns the window width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Returns the window height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Returns the number of cells in the window.
    #[inline]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Returns `true` if the window contains no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_window_is_2r_square() {
        let win = Window::clipped(50, 40, 5, 100, 100);
        assert_eq!((win.x0, win.x1), (45, 55));
        assert_eq!((win.y0, win.y1), (35, 45));
        assert_eq!(win.area(), 100);
    }

    #[test]
    fn corner_windows_shrink() {
        // Top-left: only the lower bound clips
        let tl = Window::clipped(0, 0, 5, 100, 100);
        assert_eq!(tl.area(), 25);

        // Bottom-right: the exclusive upper bound clips to the grid edge
        let br = Window::clipped(99, 99, 5, 100, 100);
        assert_eq!((br.x0, br.x1), (94, 100));
        assert_eq!(br.area(), 36);
    }

    #[test]
    fn radius_zero_is_empty() {
        let win = Window::clipped(3, 3, 0, 10, 10);
        assert!(win.is_empty());
        assert_eq!(win.area(), 0);
    }

    #[test]
    fn single_cell_grid() {
        let win = Window::clipped(0, 0, 5, 1, 1);
        assert_eq!(win.area(), 1);
    }

    #[test]
    fn huge_radius_covers_grid() {
        let win = Window::clipped(2, 1, 1000, 7, 5);
        assert_eq!((win.x0, win.x1, win.y0, win.y1), (0, 7, 0, 5));
    }

    #[test]
    fn cell_beyond_grid_is_empty_without_overflow() {
        let win = Window::clipped(u32::MAX, u32::MAX, 5, 100, 100);
        assert!(win.is_empty());
    }
}
