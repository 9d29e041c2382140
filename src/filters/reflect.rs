//! Horizontal reflection (left-right mirror).

use log::debug;

use super::core::for_each_row;
use crate::image::Image;

/// Mirror an image left to right in place.
///
/// Column `x` swaps with column `width - 1 - x`; the middle column of an odd
/// width stays put. Pixels never leave their row.
pub fn reflect(image: &mut Image) {
    let width = image.width();
    debug!("reflect: {}x{}", image.height(), width);

    for_each_row(image.pixels_mut(), |_, mut row| {
        for x in 0..width / 2 {
            row.swap(x, width - 1 - x);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Pixel;

    fn numbered(height: usize, width: usize) -> Image {
        let pixels = (0..height * width)
            .map(|i| Pixel::rgb(i as u8, (i * 2) as u8, (i * 3) as u8))
            .collect();
        Image::from_pixels(height, width, pixels).unwrap()
    }

    #[test]
    fn test_reflect_even_width() {
        let mut img = numbered(1, 4);
        let orig = img.clone();
        reflect(&mut img);

        for x in 0..4 {
            assert_eq!(img[(0, x)], orig[(0, 3 - x)]);
        }
    }

    #[test]
    fn test_reflect_odd_width_keeps_middle() {
        let mut img = numbered(2, 5);
        let orig = img.clone();
        reflect(&mut img);

        for y in 0..2 {
            assert_eq!(img[(y, 2)], orig[(y, 2)]);
            assert_eq!(img[(y, 0)], orig[(y, 4)]);
            assert_eq!(img[(y, 1)], orig[(y, 3)]);
        }
    }

    #[test]
    fn test_reflect_single_column_noop() {
        let mut img = numbered(3, 1);
        let orig = img.clone();
        reflect(&mut img);
        assert_eq!(img, orig);
    }

    #[test]
    fn test_reflect_involution() {
        for width in [1, 2, 3, 6, 7] {
            let mut img = numbered(3, width);
            let orig = img.clone();
            reflect(&mut img);
            reflect(&mut img);
            assert_eq!(img, orig, "width {width}");
        }
    }

    #[test]
    fn test_reflect_preserves_rows() {
        let mut img = numbered(4, 5);
        let orig = img.clone();
        reflect(&mut img);

        for y in 0..4 {
            let mut before: Vec<_> = orig.pixels().row(y).iter().map(|p| p.to_rgb()).collect();
            let mut after: Vec<_> = img.pixels().row(y).iter().map(|p| p.to_rgb()).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after, "row {y}");
        }
    }
}
