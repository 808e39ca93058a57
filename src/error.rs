//! Error types for cover color extraction

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Buffer cannot be split into at least two rows of `width` samples
    #[error(
        "invalid buffer shape: {len} samples cannot form rows of width {width} \
         (at least two rows required)"
    )]
    InvalidBufferShape { len: usize, width: usize },

    /// Sample count does not match `width * height`, or a dimension is zero
    #[error("invalid dimensions: {width}x{height} does not hold {len} samples")]
    InvalidDimensions { width: usize, height: usize, len: usize },

    /// Color string is not `RRGGBB` / `#RRGGBB`
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Rasterization target must be at least one pixel
    #[error("target size must be greater than zero")]
    InvalidTargetSize,

    /// Source image could not be decoded
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
}
