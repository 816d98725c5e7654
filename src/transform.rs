//! Watermark edit transforms.
//!
//! Each transform is a pure function: it takes an RGBA buffer and returns a
//! new one, leaving the input untouched. The engine chains them in a fixed
//! order (grayscale, opacity, resize) when it prepares a stamp.

use image::{imageops, RgbaImage};

use crate::error::{Error, Result};
use crate::percent::Percent;

/// Brightness boost applied before desaturation in grayscale mode.
const BRIGHTNESS_BOOST: f32 = 1.7;

/// ITU-R 601-2 luma weights, per mille (summing to 1000 keeps the
/// conversion exact in integer arithmetic).
const LUMA_R: u32 = 299;
/// Green luma weight, per mille.
const LUMA_G: u32 = 587;
/// Blue luma weight, per mille.
const LUMA_B: u32 = 114;

/// Desaturate a watermark into a slightly brightened grayscale.
///
/// Each pixel's color channels are multiplied by 1.7 (clamped to 255) and
/// then replaced by their ITU-R 601-2 luma. The boost runs first so the
/// resulting gray tone comes out lighter than a plain desaturation would.
/// The alpha channel is preserved.
#[must_use]
pub fn grayscale(watermark: &RgbaImage) -> RgbaImage {
    let mut out = watermark.clone();
    for px in out.pixels_mut() {
        let r = brighten(px[0]);
        let g = brighten(px[1]);
        let b = brighten(px[2]);
        #[allow(clippy::cast_possible_truncation)]
        let luma = ((LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b))
            / 1000) as u8;
        px[0] = luma;
        px[1] = luma;
        px[2] = luma;
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn brighten(channel: u8) -> u8 {
    (f32::from(channel) * BRIGHTNESS_BOOST).min(255.0) as u8
}

/// Scale the watermark's overall visibility to `opacity`.
///
/// A duplicate carrying the uniform alpha level `floor(255 * opacity / 100)`
/// is merged back over the original, masked by the original's own alpha
/// channel: per pixel `a' = (a * (255 - a) + level * a) / 255`. Fully
/// transparent pixels stay fully transparent, so the transparency shape of
/// the watermark survives; fully opaque pixels take exactly the new level.
/// Color channels are unchanged.
#[must_use]
pub fn scale_opacity(watermark: &RgbaImage, opacity: Percent) -> RgbaImage {
    let level = u32::from(opacity.to_alpha());
    let mut out = watermark.clone();
    for px in out.pixels_mut() {
        let alpha = u32::from(px[3]);
        #[allow(clippy::cast_possible_truncation)]
        {
            px[3] = ((alpha * (255 - alpha) + level * alpha) / 255) as u8;
        }
    }
    out
}

/// Shrink the watermark to `scale` percent of its original size.
///
/// The ratio is the integer divisor `100 / scale`: percentages that do not
/// evenly divide 100 round to the nearest coarser ratio (30 gives divisor 3,
/// i.e. one third, and anything in 51..=99 gives divisor 1, i.e. full size).
/// Resampling is Catmull-Rom.
///
/// # Errors
///
/// Returns [`Error::WatermarkCollapsed`] when `scale` is 0 or the scaled
/// watermark would have no pixels on either axis.
pub fn resize_percent(watermark: &RgbaImage, scale: Percent) -> Result<RgbaImage> {
    let (width, height) = watermark.dimensions();
    let collapsed = Error::WatermarkCollapsed {
        width,
        height,
        percent: scale.value(),
    };

    if scale.value() == 0 {
        return Err(collapsed);
    }

    let divisor = 100 / u32::from(scale.value());
    let new_width = width / divisor;
    let new_height = height / divisor;
    if new_width == 0 || new_height == 0 {
        return Err(collapsed);
    }
    if divisor == 1 {
        return Ok(watermark.clone());
    }

    Ok(imageops::resize(
        watermark,
        new_width,
        new_height,
        imageops::FilterType::CatmullRom,
    ))
}
