//! Filter modules for image processing effects.
//!
//! ## Supported Format
//!
//! | Format | Layout | Type | Description |
//! |--------|--------|------|-------------|
//! | RGB8 | [`Image`](crate::Image) (H x W [`Pixel`](crate::Pixel)s) | u8 | Red, green, blue, 0-255 |
//!
//! There is no alpha channel. Every filter mutates the image in place and
//! keeps its dimensions.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **In place** - Filters take `&mut Image` and return nothing
//! - **Exact rounding** - Means and weighted sums round half away from zero
//!   using integer arithmetic
//! - **Row independent** - Rows are processed with rayon when the `parallel`
//!   feature is enabled; results do not depend on processing order
//!
//! ## Filters
//!
//! - **Pixel-wise**: grayscale, sepia
//! - **Geometric**: reflect
//! - **Neighborhood**: box blur (3x3)

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::image::Image;

pub mod core;
pub mod grayscale;
pub mod sepia;
pub mod reflect;
pub mod blur;

pub use self::blur::box_blur;
pub use self::grayscale::grayscale;
pub use self::reflect::reflect;
pub use self::sepia::sepia;

/// One of the built-in filters, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    Grayscale,
    Sepia,
    Reflect,
    Blur,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::Grayscale, Filter::Sepia, Filter::Reflect, Filter::Blur];

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Sepia => "sepia",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
        }
    }

    /// Apply this filter to `image` in place.
    pub fn apply(self, image: &mut Image) {
        match self {
            Filter::Grayscale => grayscale(image),
            Filter::Sepia => sepia(image),
            Filter::Reflect => reflect(image),
            Filter::Blur => box_blur(image),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts full names (any case) and the single-letter command-line flags
/// `g`, `s`, `r` and `b`.
impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "g" => Ok(Filter::Grayscale),
            "sepia" | "s" => Ok(Filter::Sepia),
            "reflect" | "r" => Ok(Filter::Reflect),
            "blur" | "b" => Ok(Filter::Blur),
            _ => Err(Error::UnknownFilter(s.to_string())),
        }
    }
}
