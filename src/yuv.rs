//! RGB ↔ YUV conversion with fixed BT.601 studio-swing coefficients.
//!
//! YUV is only used as a distance space and for averaging; the forward
//! transform is left unclamped.

use palette::Srgb;

/// An 8-bit RGB sample.
pub type Rgb = Srgb<u8>;

/// A luma/chroma sample derived from one [`Rgb`] (or averaged from many).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

impl Yuv {
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    /// Euclidean distance in (y, u, v).
    #[inline(always)]
    pub fn distance(&self, other: &Yuv) -> f64 {
        let dy = self.y - other.y;
        let du = self.u - other.u;
        let dv = self.v - other.v;
        (dy * dy + du * du + dv * dv).sqrt()
    }
}

impl From<Rgb> for Yuv {
    fn from(rgb: Rgb) -> Self {
        to_yuv(rgb)
    }
}

impl From<Yuv> for Rgb {
    fn from(yuv: Yuv) -> Self {
        to_rgb(yuv)
    }
}

pub fn to_yuv(rgb: Rgb) -> Yuv {
    let r = rgb.red as f64;
    let g = rgb.green as f64;
    let b = rgb.blue as f64;
    Yuv {
        y: 0.257 * r + 0.504 * g + 0.098 * b + 16.0,
        u: -0.148 * r - 0.291 * g + 0.439 * b + 128.0,
        v: 0.439 * r - 0.368 * g - 0.071 * b + 128.0,
    }
}

pub fn to_rgb(yuv: Yuv) -> Rgb {
    let y = yuv.y - 16.0;
    let u = yuv.u - 128.0;
    let v = yuv.v - 128.0;
    Srgb::new(
        channel(1.164 * y + 1.596 * v),
        channel(1.164 * y - 0.391 * u - 0.813 * v),
        channel(1.164 * y + 2.018 * u),
    )
}

/// Round half-up, then clamp into [0, 255].
#[inline(always)]
fn channel(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_survive_round_trip() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (255, 0, 0), (0, 255, 0), (0, 0, 255)] {
            let rgb = Srgb::new(r, g, b);
            assert_eq!(to_rgb(to_yuv(rgb)), rgb);
        }
    }

    #[test]
    fn round_trip_within_one_per_channel() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let back = to_rgb(to_yuv(Srgb::new(r, g, b)));
                    assert!((back.red as i16 - r as i16).abs() <= 1, "{r} {g} {b} -> {back:?}");
                    assert!((back.green as i16 - g as i16).abs() <= 1, "{r} {g} {b} -> {back:?}");
                    assert!((back.blue as i16 - b as i16).abs() <= 1, "{r} {g} {b} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn forward_transform_is_not_clamped() {
        let red = to_yuv(Srgb::new(255, 0, 0));
        assert!((red.y - 81.535).abs() < 1e-9);
        assert!((red.v - 239.945).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_luma_clamps_both_ways() {
        assert_eq!(to_rgb(Yuv::new(300.0, 128.0, 128.0)), Srgb::new(255, 255, 255));
        assert_eq!(to_rgb(Yuv::new(0.0, 128.0, 128.0)), Srgb::new(0, 0, 0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Yuv::new(0.0, 0.0, 0.0);
        let b = Yuv::new(1.0, 2.0, 2.0);
        assert_eq!(a.distance(&b), 3.0);
        assert_eq!(b.distance(&a), 3.0);
    }
}
