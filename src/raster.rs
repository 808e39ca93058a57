//! Decoding and downsampling images into row-major RGB buffers.

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use palette::Srgb;
use tracing::debug;

use crate::border::{BorderSplit, extract_border};
use crate::error::{Error, Result};
use crate::yuv::Rgb;

/// A rectangular image as row-major RGB samples; `width * height == data.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<Rgb>,
}

impl PixelBuffer {
    /// Build a buffer, checking that `data` holds exactly `width * height` samples.
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(data.len()) {
            return Err(Error::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn split_border(&self) -> Result<BorderSplit<Rgb>> {
        extract_border(&self.data, self.width)
    }
}

/// Thumbnail dimensions whose longer edge is `size`.
///
/// The shorter edge is scaled proportionally and rounded up; square inputs
/// become `size × size`.
pub fn target_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    let (w, h, s) = (width.max(1) as u64, height.max(1) as u64, size as u64);
    let scaled = |num: u64, den: u64| ((s * num).div_ceil(den)).max(1) as u32;
    if w > h {
        (size, scaled(h, w))
    } else if h > w {
        (scaled(w, h), size)
    } else {
        (size, size)
    }
}

/// Downsample `img` so its longer edge equals `size`, dropping alpha.
pub fn rasterize_image(img: &DynamicImage, size: u32) -> Result<PixelBuffer> {
    if size == 0 {
        return Err(Error::InvalidTargetSize);
    }
    let (orig_w, orig_h) = img.dimensions();
    let (w, h) = target_dimensions(orig_w, orig_h, size);
    let resized = img.resize_exact(w, h, FilterType::Triangle).to_rgb8();
    debug!(orig_w, orig_h, w, h, "rasterized image");

    let data = resized
        .pixels()
        .map(|p| Srgb::new(p[0], p[1], p[2]))
        .collect();
    PixelBuffer::new(w as usize, h as usize, data)
}

/// Decode encoded image bytes and rasterize them (see [`rasterize_image`]).
pub fn rasterize(input: &[u8], size: u32) -> Result<PixelBuffer> {
    let img = image::load_from_memory(input)?;
    rasterize_image(&img, size)
}
