//! 3x3 box blur.
//!
//! Each pixel becomes the rounded per-channel mean of itself and its
//! in-bounds neighbors (diagonals included). The divisor is the number of
//! positions actually inside the image: 9 in the interior, 6 on an edge,
//! 4 in a corner, and 1-3 on single-row or single-column images.
//!
//! All reads come from a snapshot taken before the pass, so already-blurred
//! values are never fed back in and rows can be processed in any order.

use log::{debug, trace};

use super::core::{average, for_each_row, neighborhood};
use crate::image::Image;

/// Apply a 3x3 box blur to an image in place.
pub fn box_blur(image: &mut Image) {
    let (height, width) = image.dim();
    debug!("box_blur: {}x{}", height, width);

    let snapshot = image.pixels().to_owned();
    trace!("box_blur: snapshot of {} pixels", snapshot.len());

    for_each_row(image.pixels_mut(), |y, mut row| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = average(neighborhood(y, x, height, width).map(|(sy, sx)| snapshot[[sy, sx]]));
        }
    });
}
