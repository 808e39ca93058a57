//! Cover-art coloring: a background taken from the image frame plus accent
//! colors from the inside that stand apart from it.

use tracing::debug;

use crate::dominant::DominantColorConfig;
use crate::error::Result;
use crate::raster::PixelBuffer;
use crate::yuv::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverConfig {
    /// Longer edge of the thumbnail the colors are computed from.
    pub size: u32,
    /// Maximum number of accent colors.
    pub accents: usize,
    /// Thresholds shared by the background and accent passes.
    pub dominant: DominantColorConfig,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            size: 64,
            accents: 2,
            dominant: DominantColorConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverPalette {
    pub background: Option<Rgb>,
    pub accents: Vec<Rgb>,
}

/// Compute a [`CoverPalette`] for `buffer`.
///
/// Buffers without an interior (two rows, or two columns) draw their accents
/// from every pixel instead.
pub fn cover_colors(buffer: &PixelBuffer, config: &CoverConfig) -> Result<CoverPalette> {
    let split = buffer.split_border()?;
    let background = DominantColorConfig {
        count: 1,
        ..config.dominant
    }
    .select(&split.border, None)
    .into_iter()
    .next();

    let accent_source = if split.interior.is_empty() {
        &buffer.data
    } else {
        &split.interior
    };
    let accents = DominantColorConfig {
        count: config.accents,
        ..config.dominant
    }
    .select(accent_source, background);

    debug!(?background, accents = accents.len(), "computed cover palette");
    Ok(CoverPalette { background, accents })
}
