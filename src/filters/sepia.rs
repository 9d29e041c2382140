//! Sepia toning filter.
//!
//! Applies the classic fixed linear sepia transform:
//!
//! | Output | Red | Green | Blue |
//! |--------|-----|-------|------|
//! | red    | 0.393 | 0.769 | 0.189 |
//! | green  | 0.349 | 0.686 | 0.168 |
//! | blue   | 0.272 | 0.534 | 0.131 |
//!
//! The weights are stored per mille so every product is an exact integer and
//! rounding (half away from zero) does not depend on float representation.
//! Results above 255 are clamped; nothing can go negative.

use log::debug;

use super::core::for_each_row;
use crate::image::{Image, Pixel};

/// Sepia weights in thousandths, rows = output red/green/blue,
/// columns = input red/green/blue.
pub const SEPIA_WEIGHTS: [[u32; 3]; 3] = [
    [393, 769, 189],
    [349, 686, 168],
    [272, 534, 131],
];

/// Weighted sum of `rgb` with `weights` (per mille), rounded and clamped.
#[inline]
fn weighted_channel(weights: [u32; 3], rgb: [u8; 3]) -> u8 {
    let per_mille: u32 = weights
        .iter()
        .zip(rgb)
        .map(|(&w, c)| w * c as u32)
        .sum();
    ((per_mille + 500) / 1000).min(255) as u8
}

/// Sepia-toned version of a single pixel.
#[inline]
pub fn sepia_pixel(p: Pixel) -> Pixel {
    let rgb = p.to_rgb();
    Pixel::rgb(
        weighted_channel(SEPIA_WEIGHTS[0], rgb),
        weighted_channel(SEPIA_WEIGHTS[1], rgb),
        weighted_channel(SEPIA_WEIGHTS[2], rgb),
    )
}

/// Apply sepia toning to an image in place.
pub fn sepia(image: &mut Image) {
    debug!("sepia: {}x{}", image.height(), image.width());

    for_each_row(image.pixels_mut(), |_, mut row| {
        row.map_inplace(|p| *p = sepia_pixel(*p));
    });
}
