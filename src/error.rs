//! Error type shared by image construction and filter selection.
//!
//! The filters themselves never fail: every precondition they rely on is
//! checked once, when an [`Image`](crate::Image) is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Height or width was zero.
    #[error("image dimensions must be positive, got {height}x{width}")]
    EmptyImage { height: usize, width: usize },

    /// Buffer length does not match the requested dimensions.
    #[error("expected {expected} elements for the given dimensions, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// Element count overflows the addressable size.
    #[error("image dimensions {height}x{width} are too large")]
    TooLarge { height: usize, width: usize },

    /// Only RGB arrays (3 channels) are accepted.
    #[error("expected 3 color channels (RGB), got {0}")]
    UnsupportedChannels(usize),

    #[error("unknown filter {0:?}, expected one of grayscale, sepia, reflect, blur")]
    UnknownFilter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
