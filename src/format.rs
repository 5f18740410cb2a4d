//! Destination format dispatch.
//!
//! The destination path's extension selects the output encoder. Supported
//! outputs are an explicit table, not a guess: an unknown extension fails
//! before any decode work happens. Each format also knows whether it can
//! store an alpha channel, which drives the flattening step in
//! [`pipeline`](crate::pipeline).

use crate::error::ResizeError;
use image::ImageFormat;
use std::path::Path;

/// Output formats with a compiled-in encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Tiff,
    WebP,
}

/// Extension → format table. Lookups lowercase the extension first.
const OUTPUT_CANDIDATES: &[(&str, OutputFormat)] = &[
    ("jpg", OutputFormat::Jpeg),
    ("jpeg", OutputFormat::Jpeg),
    ("png", OutputFormat::Png),
    ("tif", OutputFormat::Tiff),
    ("tiff", OutputFormat::Tiff),
    ("webp", OutputFormat::WebP),
];

impl OutputFormat {
    /// Resolve the output format from a destination path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ResizeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        OUTPUT_CANDIDATES
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, format)| *format)
            .ok_or(ResizeError::UnsupportedFormat { extension: ext })
    }

    /// The `image` crate format used for encoding.
    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Whether the encoded format can store an alpha channel.
    ///
    /// Alpha-bearing images headed to an alpha-less format are composited
    /// over white before encoding.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }

    /// Lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::Tiff => "tiff",
            OutputFormat::WebP => "webp",
        }
    }
}
