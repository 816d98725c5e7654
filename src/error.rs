//! Error types for the watermark-stamp crate.

/// Errors that can occur while preparing or applying a watermark.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A percentage-typed value was outside the inclusive 0..=100 range.
    #[error("{0} is not a valid percentage, use an integer between 0 and 100")]
    InvalidPercent(i64),

    /// Scaling left the watermark with no pixels on at least one axis.
    #[error("scaling a {width}x{height} watermark to {percent}% leaves no pixels")]
    WatermarkCollapsed {
        /// Watermark width before scaling, in pixels.
        width: u32,
        /// Watermark height before scaling, in pixels.
        height: u32,
        /// The requested scale percentage.
        percent: u8,
    },

    /// A color model name could not be parsed.
    #[error("unknown color model: {0} (expected RGB, RGBA, L or LA)")]
    UnknownColorModel(String),

    /// The output format is not supported for saving.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during image processing (load, save, encode).
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
