//! In-memory bitmap model.
//!
//! An [`Image`] is a fixed-size, row-major grid of [`Pixel`]s backed by an
//! `ndarray::Array2`. Dimensions are validated on construction and never
//! change afterwards, so filters can treat them as trusted.
//!
//! ## Array Conversion
//!
//! | Format | Shape | Type | Channel order |
//! |--------|-------|------|---------------|
//! | RGB8 array | (H, W, 3) | u8 | red, green, blue |
//! | RGB8 bytes | H * W * 3 | u8 | red, green, blue (interleaved) |

use std::ops::{Index, IndexMut};

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, ArrayViewMut2};

use crate::error::{Error, Result};

/// One 24-bit pixel, laid out like a BMP triple (blue first).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    /// Build a pixel from channels given in red, green, blue order.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// Same pixel with every channel set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Pixel::rgb(red, green, blue)
    }
}

/// Mutable rectangular grid of pixels, `height` rows by `width` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pixels: Array2<Pixel>,
}

impl Image {
    /// Create an all-black image.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        element_count(height, width, 1)?;
        Ok(Self {
            pixels: Array2::from_elem((height, width), Pixel::BLACK),
        })
    }

    /// Create an image from row-major pixels.
    ///
    /// # Arguments
    /// * `height` - Number of rows (must be positive)
    /// * `width` - Number of columns (must be positive)
    /// * `pixels` - Exactly `height * width` pixels, row by row
    pub fn from_pixels(height: usize, width: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = element_count(height, width, 1)?;
        if pixels.len() != expected {
            return Err(Error::Shape {
                expected,
                actual: pixels.len(),
            });
        }
        let pixels = Array2::from_shape_vec((height, width), pixels)
            .map_err(|_| Error::TooLarge { height, width })?;
        Ok(Self { pixels })
    }

    /// Create an image from a (height, width, 3) RGB u8 array.
    pub fn from_rgb_array(input: ArrayView3<u8>) -> Result<Self> {
        let (height, width, channels) = input.dim();
        if channels != 3 {
            return Err(Error::UnsupportedChannels(channels));
        }
        element_count(height, width, 3)?;

        let pixels = Array2::from_shape_fn((height, width), |(y, x)| {
            Pixel::rgb(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
        });
        Ok(Self { pixels })
    }

    /// Create an image from flat interleaved RGB bytes.
    pub fn from_rgb_bytes(height: usize, width: usize, data: &[u8]) -> Result<Self> {
        let expected = element_count(height, width, 3)?;
        if data.len() != expected {
            return Err(Error::Shape {
                expected,
                actual: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(3)
            .map(|c| Pixel::rgb(c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(height, width, pixels)
    }

    /// Convert to a (height, width, 3) RGB u8 array.
    pub fn to_rgb_array(&self) -> Array3<u8> {
        let (height, width) = self.dim();
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| self.pixels[[y, x]].to_rgb()[c])
    }

    /// Convert to flat interleaved RGB bytes, row by row.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgb()).collect()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// (height, width)
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    pub fn pixels(&self) -> ArrayView2<'_, Pixel> {
        self.pixels.view()
    }

    pub fn pixels_mut(&mut self) -> ArrayViewMut2<'_, Pixel> {
        self.pixels.view_mut()
    }
}

impl Index<(usize, usize)> for Image {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        &self.pixels[[row, col]]
    }
}

impl IndexMut<(usize, usize)> for Image {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        &mut self.pixels[[row, col]]
    }
}

/// Number of `channels`-sized elements in a `height` x `width` image.
///
/// Rejects zero dimensions and sizes that overflow `isize`, the limit ndarray
/// places on any array.
fn element_count(height: usize, width: usize, channels: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(Error::EmptyImage { height, width });
    }
    height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(Error::TooLarge { height, width })
}
