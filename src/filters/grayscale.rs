//! Grayscale conversion filter.
//!
//! Uses the plain arithmetic mean of red, green and blue (not a luminosity
//! weighting), rounded half away from zero.

use log::debug;

use super::core::{for_each_row, round_div};
use crate::image::{Image, Pixel};

/// Gray value of a single pixel: rounded mean of its three channels.
#[inline]
pub fn gray_value(p: Pixel) -> u8 {
    let sum = p.red as u32 + p.green as u32 + p.blue as u32;
    round_div(sum, 3) as u8
}

/// Convert an image to grayscale in place.
///
/// Every pixel gets R=G=B=round((R + G + B) / 3).
pub fn grayscale(image: &mut Image) {
    debug!("grayscale: {}x{}", image.height(), image.width());

    for_each_row(image.pixels_mut(), |_, mut row| {
        row.map_inplace(|p| *p = Pixel::gray(gray_value(*p)));
    });
}
