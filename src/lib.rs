use wasm_bindgen::prelude::*;
use js_sys::{Array, Object, Reflect};

pub mod border;
pub mod cluster;
pub mod cover;
pub mod dominant;
pub mod error;
pub mod hex;
pub mod raster;
pub mod yuv;

pub use border::{BorderSplit, extract_border};
pub use cluster::{centroid, cluster_samples};
pub use cover::{CoverConfig, CoverPalette, cover_colors};
pub use dominant::{DominantColorConfig, exclude_near, select_dominant_colors};
pub use error::{Error, Result};
pub use hex::{parse_hex, to_hex};
pub use raster::{PixelBuffer, rasterize, rasterize_image, target_dimensions};
pub use yuv::{Rgb, Yuv, to_rgb, to_yuv};

/// Which part of a rasterized image colors are sampled from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    /// Every pixel.
    #[default]
    All,
    /// The outermost one-pixel ring.
    Border,
    /// Everything inside the ring.
    Interior,
}

#[cfg(not(target_arch = "wasm32"))]
fn region_samples(buffer: PixelBuffer, region: Region) -> Result<Vec<Rgb>> {
    Ok(match region {
        Region::All => buffer.data,
        Region::Border => buffer.split_border()?.border,
        Region::Interior => buffer.split_border()?.interior,
    })
}

fn js_err(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ------------------------------------------------------------
// WebAssembly entry points
// ------------------------------------------------------------

/// Extract dominant colors from an encoded image.
///
/// Steps performed:
/// 1. Decode and downsample so the longest side equals `size`.
/// 2. Cluster the pixels in YUV and rank the clusters by size.
/// 3. Drop clusters near `exclude` (a `#RRGGBB` string), if given.
/// 4. Greedily pick up to `count` mutually separated colors.
///
/// Returns an `Array` of `#RRGGBB` strings, most prevalent first.
#[wasm_bindgen(js_name = dominantColors)]
pub fn dominant_colors(
    input: Vec<u8>,
    size: u32,
    count: usize,
    cluster_threshold: f64,
    separation_threshold: f64,
    exclude: Option<String>,
    exclude_threshold: f64,
) -> std::result::Result<Array, JsValue> {
    let exclude = exclude.as_deref().map(parse_hex).transpose().map_err(js_err)?;
    let buffer = rasterize(&input, size).map_err(js_err)?;

    let colors = select_dominant_colors(
        &buffer.data,
        count,
        cluster_threshold,
        separation_threshold,
        exclude,
        exclude_threshold,
    );

    let out = Array::new();
    for c in colors {
        out.push(&JsValue::from_str(&to_hex(c)));
    }
    Ok(out)
}

/// Cover-art palette for an encoded image: `{ background, accents }`.
///
/// `background` is a `#RRGGBB` string or `null`; `accents` is an `Array`.
#[wasm_bindgen(js_name = coverColors)]
pub fn cover_colors_js(
    input: Vec<u8>,
    size: u32,
    accents: usize,
) -> std::result::Result<Object, JsValue> {
    let config = CoverConfig {
        size,
        accents,
        ..CoverConfig::default()
    };
    let buffer = rasterize(&input, config.size).map_err(js_err)?;
    let palette = cover_colors(&buffer, &config).map_err(js_err)?;

    let accents_js = Array::new();
    for c in &palette.accents {
        accents_js.push(&JsValue::from_str(&to_hex(*c)));
    }
    let background_js = palette
        .background
        .map_or(JsValue::NULL, |c| JsValue::from_str(&to_hex(c)));

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("background"), &background_js)?;
    Reflect::set(&result, &JsValue::from_str("accents"), &accents_js)?;
    Ok(result)
}

// ------------------------------------------------------------
// Native helpers
// ------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
pub fn dominant_colors_bytes(
    input: &[u8],
    size: u32,
    region: Region,
    config: &DominantColorConfig,
    exclude: Option<Rgb>,
) -> Result<Vec<Rgb>> {
    let buffer = rasterize(input, size)?;
    let samples = region_samples(buffer, region)?;
    Ok(config.select(&samples, exclude))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cover_colors_bytes(input: &[u8], config: &CoverConfig) -> Result<CoverPalette> {
    let buffer = rasterize(input, config.size)?;
    cover_colors(&buffer, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    #[test]
    fn region_selects_samples() {
        let data: Vec<Rgb> = (0..9).map(|i| Srgb::new(i, 0, 0)).collect();
        let buffer = PixelBuffer::new(3, 3, data.clone()).unwrap();

        assert_eq!(region_samples(buffer.clone(), Region::All).unwrap(), data);
        assert_eq!(region_samples(buffer.clone(), Region::Border).unwrap().len(), 8);
        assert_eq!(
            region_samples(buffer, Region::Interior).unwrap(),
            vec![Srgb::new(4, 0, 0)]
        );
    }
}
