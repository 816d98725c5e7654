//! Core stamping engine.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{imageops, DynamicImage, ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::percent::Percent;
use crate::transform;

/// Color model of the final stamped image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorModel {
    /// 8-bit RGB, no alpha.
    #[default]
    Rgb,
    /// 8-bit RGB with alpha.
    Rgba,
    /// 8-bit grayscale.
    Luma,
    /// 8-bit grayscale with alpha.
    LumaAlpha,
}

impl ColorModel {
    /// Convert an image into this color model.
    #[must_use]
    pub fn convert(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Rgb => DynamicImage::ImageRgb8(image.into_rgb8()),
            Self::Rgba => DynamicImage::ImageRgba8(image.into_rgba8()),
            Self::Luma => DynamicImage::ImageLuma8(image.into_luma8()),
            Self::LumaAlpha => DynamicImage::ImageLumaA8(image.into_luma_alpha8()),
        }
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    /// Parse a conventional mode name: `RGB`, `RGBA`, `L` or `LA`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RGB" => Ok(Self::Rgb),
            "RGBA" => Ok(Self::Rgba),
            "L" => Ok(Self::Luma),
            "LA" => Ok(Self::LumaAlpha),
            _ => Err(Error::UnknownColorModel(s.to_string())),
        }
    }
}

/// Options controlling how the watermark is edited and placed.
#[derive(Debug, Clone)]
pub struct StampOptions {
    /// Where the watermark's center lands, as percentages of the base
    /// image's width and height.
    pub position: (Percent, Percent),
    /// Uniform alpha scaling applied to the watermark.
    pub opacity: Percent,
    /// Watermark shrunk to this percentage of its original size
    /// (integer-divisor ratio, see [`transform::resize_percent`]).
    pub scale: Percent,
    /// Desaturate and brighten the watermark before the other edits.
    pub grayscale: bool,
    /// Color model of the final output image.
    pub color_model: ColorModel,
}

impl Default for StampOptions {
    fn default() -> Self {
        Self {
            position: (Percent::from_static(25), Percent::from_static(75)),
            opacity: Percent::from_static(40),
            scale: Percent::from_static(50),
            grayscale: false,
            color_model: ColorModel::Rgb,
        }
    }
}

/// Report of stamping a single image file.
///
/// The library never prints; callers decide how to surface these.
#[derive(Debug)]
pub struct StampResult {
    /// Path of the input file.
    pub path: PathBuf,
    /// Whether the file was stamped and saved.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// The stamping engine holding the fully edited watermark.
///
/// Create once with [`StampEngine::new`] or [`StampEngine::from_path`] and
/// reuse for any number of base images. The edition pipeline (grayscale,
/// opacity, resize) runs exactly once, at construction.
pub struct StampEngine {
    stamp: RgbaImage,
    options: StampOptions,
}

impl StampEngine {
    /// Create an engine from an already decoded watermark image.
    ///
    /// The watermark is converted to RGBA and edited in order: grayscale
    /// (when enabled), opacity, resize.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WatermarkCollapsed`] when the scale percentage
    /// leaves the watermark without pixels.
    pub fn new(watermark: &DynamicImage, options: StampOptions) -> Result<Self> {
        let mut stamp = watermark.to_rgba8();
        if options.grayscale {
            stamp = transform::grayscale(&stamp);
        }
        stamp = transform::scale_opacity(&stamp, options.opacity);
        let stamp = transform::resize_percent(&stamp, options.scale)?;
        Ok(Self { stamp, options })
    }

    /// Create an engine by loading the watermark from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] when the file cannot be decoded, or any
    /// error from [`StampEngine::new`].
    pub fn from_path(watermark: &Path, options: StampOptions) -> Result<Self> {
        let img = image::open(watermark)?;
        Self::new(&img, options)
    }

    /// The edited watermark that gets composited onto base images.
    #[must_use]
    pub fn watermark(&self) -> &RgbaImage {
        &self.stamp
    }

    /// The options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &StampOptions {
        &self.options
    }

    /// Top-left paste coordinates for a base of the given dimensions.
    ///
    /// Per axis: `floor(percent * dim / 100)` shifted back by half the
    /// stamp's size, so the percentage point is the stamp's center.
    /// Coordinates may be negative; the stamp then extends off-canvas.
    #[must_use]
    pub fn position(&self, base_width: u32, base_height: u32) -> (i64, i64) {
        let (pos_x, pos_y) = self.options.position;
        let x = i64::from(pos_x.scale(base_width)) - i64::from(self.stamp.width() / 2);
        let y = i64::from(pos_y.scale(base_height)) - i64::from(self.stamp.height() / 2);
        (x, y)
    }

    /// Composite the watermark onto a base image.
    ///
    /// The stamp's own alpha channel is the compositing mask: fully
    /// transparent stamp pixels leave the base untouched. The result is
    /// converted to the configured color model. The base is not modified.
    #[must_use]
    pub fn apply(&self, base: &DynamicImage) -> DynamicImage {
        let mut canvas = base.to_rgba8();
        let (x, y) = self.position(canvas.width(), canvas.height());
        imageops::overlay(&mut canvas, &self.stamp, x, y);
        self.options
            .color_model
            .convert(DynamicImage::ImageRgba8(canvas))
    }

    /// Stamp a single image file: load, composite, save.
    ///
    /// Every failure (unreadable input, unwritable destination, a format
    /// that rejects the configured color model) is folded into the returned
    /// [`StampResult`] rather than raised.
    #[must_use]
    pub fn process_file(&self, input: &Path, output: &Path) -> StampResult {
        let mut result = StampResult {
            path: input.to_path_buf(),
            success: false,
            message: String::new(),
        };

        let base = match image::open(input) {
            Ok(img) => img,
            Err(e) => {
                result.message = format!("Failed to load: {e}");
                return result;
            }
        };

        let stamped = self.apply(&base);

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    result.message = format!("Failed to create output directory: {e}");
                    return result;
                }
            }
        }

        match save_image(&stamped, output) {
            Ok(()) => {
                result.success = true;
                result.message = format!("Watermark stamped to {}", output.display());
            }
            Err(e) => {
                result.message = format!("Failed to save: {e}");
            }
        }

        result
    }
}

/// Save a stamped image with format-specific settings.
///
/// The format is inferred from the destination extension. JPEG is encoded at
/// quality 100; a color model the format cannot carry (e.g. RGBA into JPEG)
/// surfaces as [`Error::Image`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for extensions outside
/// jpg/jpeg/png/webp/bmp, or [`Error::Image`]/[`Error::Io`] when encoding or
/// writing fails.
pub fn save_image(img: &DynamicImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Jpeg => {
            let file = std::fs::File::create(path)?;
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, 100);
            img.write_with_encoder(encoder)?;
        }
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp => {
            img.save(path)?;
        }
        _ => {
            return Err(Error::UnsupportedFormat(format!("{format:?}")));
        }
    }

    Ok(())
}

/// Write the image to the system temp directory and open it with the
/// platform image viewer. Returns the path of the temporary PNG.
///
/// # Errors
///
/// Returns [`Error::Image`] when encoding fails or [`Error::Io`] when the
/// viewer cannot be spawned.
pub fn show_image(img: &DynamicImage) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!(
        "watermark-stamp-preview-{}.png",
        std::process::id()
    ));
    img.save_with_format(&path, ImageFormat::Png)?;
    spawn_viewer(&path)?;
    Ok(path)
}

#[cfg(target_os = "macos")]
fn spawn_viewer(path: &Path) -> Result<()> {
    std::process::Command::new("open").arg(path).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn spawn_viewer(path: &Path) -> Result<()> {
    std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_viewer(path: &Path) -> Result<()> {
    std::process::Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}

/// Check if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "webp" | "bmp"
        ),
        None => false,
    }
}

/// Generate a default output path from an input path.
///
/// Example: `"photo.jpg"` becomes `"photo_stamped.jpg"`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input.extension().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_stamped.{ext}"))
}
