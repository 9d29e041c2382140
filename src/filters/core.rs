//! Core utilities for image processing filters.
//!
//! This module provides shared functionality used by multiple filters:
//! - Exact round-half-away-from-zero division
//! - Per-channel pixel averaging
//! - 3x3 neighborhood enumeration with bounds checking
//! - Row dispatch (rayon when the `parallel` feature is enabled)

use ndarray::{ArrayViewMut1, ArrayViewMut2, Axis};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::image::Pixel;

/// Row and column offsets of a 3x3 neighborhood.
const OFFSETS: [isize; 3] = [-1, 0, 1];

/// Divide `sum` by `count`, rounding halves away from zero.
///
/// Inputs are never negative, so this is `floor(sum / count + 0.5)` computed
/// without floating point. `count` must be non-zero.
#[inline]
pub fn round_div(sum: u32, count: u32) -> u32 {
    let (sum, count) = (sum as u64, count as u64);
    ((2 * sum + count) / (2 * count)) as u32
}

/// Rounded per-channel mean of a set of pixels.
///
/// Returns black for an empty set.
pub fn average<I>(pixels: I) -> Pixel
where
    I: IntoIterator<Item = Pixel>,
{
    let mut sum = [0u32; 3];
    let mut count = 0u32;
    for p in pixels {
        sum[0] += p.red as u32;
        sum[1] += p.green as u32;
        sum[2] += p.blue as u32;
        count += 1;
    }
    if count == 0 {
        return Pixel::BLACK;
    }

    // Mean of u8 values stays within u8
    Pixel::rgb(
        round_div(sum[0], count) as u8,
        round_div(sum[1], count) as u8,
        round_div(sum[2], count) as u8,
    )
}

/// Positions of the 3x3 neighborhood around `(row, col)` that fall inside a
/// `height` x `width` grid, including `(row, col)` itself.
///
/// Yields 9 positions for interior pixels, 6 on an edge, 4 in a corner, and
/// fewer on grids narrower than 2 pixels.
pub fn neighborhood(
    row: usize,
    col: usize,
    height: usize,
    width: usize,
) -> impl Iterator<Item = (usize, usize)> {
    OFFSETS
        .into_iter()
        .flat_map(|dy| OFFSETS.into_iter().map(move |dx| (dy, dx)))
        .filter_map(move |(dy, dx)| {
            let sy = row as isize + dy;
            let sx = col as isize + dx;
            if sy < 0 || sy >= height as isize || sx < 0 || sx >= width as isize {
                return None;
            }
            Some((sy as usize, sx as usize))
        })
}

/// Run `f` on every row of `pixels`, passing the row index.
///
/// Rows are processed in parallel with the `parallel` feature. Callers must
/// not depend on processing order.
pub(crate) fn for_each_row<F>(mut pixels: ArrayViewMut2<'_, Pixel>, f: F)
where
    F: Fn(usize, ArrayViewMut1<'_, Pixel>) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        pixels
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in pixels.axis_iter_mut(Axis(0)).enumerate() {
            f(y, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Rounding
    // ========================================================================

    #[test]
    fn test_round_div_ties_round_up() {
        assert_eq!(round_div(10, 4), 3); // 2.5
        assert_eq!(round_div(9, 6), 2); // 1.5
        assert_eq!(round_div(3, 2), 2); // 1.5
        assert_eq!(round_div(1, 2), 1); // 0.5
    }

    #[test]
    fn test_round_div_nearest() {
        assert_eq!(round_div(9, 4), 2); // 2.25
        assert_eq!(round_div(11, 4), 3); // 2.75
        assert_eq!(round_div(1, 3), 0); // 0.33
        assert_eq!(round_div(2, 3), 1); // 0.67
        assert_eq!(round_div(255 * 9, 9), 255);
        assert_eq!(round_div(0, 9), 0);
    }

    #[test]
    fn test_round_div_large_sums() {
        assert_eq!(round_div(u32::MAX, 1), u32::MAX);
        assert_eq!(round_div(u32::MAX, 2), u32::MAX / 2 + 1); // x.5 rounds up
        assert_eq!(round_div(u32::MAX - 1, u32::MAX), 1);
    }

    #[test]
    fn test_average_per_channel() {
        let px = average([Pixel::rgb(10, 0, 255), Pixel::rgb(11, 1, 254)]);
        // 10.5 -> 11, 0.5 -> 1, 254.5 -> 255
        assert_eq!(px, Pixel::rgb(11, 1, 255));
    }

    #[test]
    fn test_average_empty_is_black() {
        assert_eq!(average(std::iter::empty()), Pixel::BLACK);
    }

    // ========================================================================
    // Neighborhood
    // ========================================================================

    #[test]
    fn test_neighborhood_counts_3x3() {
        let count = |r, c| neighborhood(r, c, 3, 3).count();
        for (r, c) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(count(r, c), 4, "corner ({r}, {c})");
        }
        for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(count(r, c), 6, "edge ({r}, {c})");
        }
        assert_eq!(count(1, 1), 9);
    }

    #[test]
    fn test_neighborhood_top_left_positions() {
        let cells: Vec<_> = neighborhood(0, 0, 5, 5).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_neighborhood_degenerate() {
        assert_eq!(neighborhood(0, 0, 1, 1).collect::<Vec<_>>(), vec![(0, 0)]);
        assert_eq!(neighborhood(0, 0, 1, 5).count(), 2);
        assert_eq!(neighborhood(0, 2, 1, 5).count(), 3);
        assert_eq!(neighborhood(4, 0, 5, 1).count(), 2);
    }

    #[test]
    fn test_for_each_row_visits_every_row() {
        let mut pixels = ndarray::Array2::from_elem((4, 3), Pixel::BLACK);
        for_each_row(pixels.view_mut(), |y, mut row| {
            row.fill(Pixel::gray(y as u8));
        });
        for (y, row) in pixels.outer_iter().enumerate() {
            assert!(row.iter().all(|&p| p == Pixel::gray(y as u8)));
        }
    }
}
