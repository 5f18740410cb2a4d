//! Decode → resample → normalize → encode.
//!
//! Produces the fully-encoded output bytes in memory; committing them to
//! disk is a separate concern (see [`persist`](crate::persist)). The
//! resample is a direct non-uniform `resize_exact` to the requested
//! dimensions with Lanczos3 — no aspect-ratio preservation, no cropping.
//!
//! Target dimensions have no enforced upper bound: any positive pair is
//! accepted, and allocation or encoder failure surfaces as an error from
//! the underlying crate. Resource limits are the caller's policy.

use crate::error::ResizeError;
use crate::format::OutputFormat;
use crate::size::SizeSpec;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Resize `source` to exactly `spec` and encode it for `format`.
pub fn render(source: &Path, spec: SizeSpec, format: OutputFormat) -> Result<Vec<u8>, ResizeError> {
    let img = decode(source)?;
    let resized = img.resize_exact(spec.width, spec.height, FilterType::Lanczos3);
    // The source raster is dead weight once the resized copy exists
    drop(img);
    let normalized = normalize(resized, format);
    encode(&normalized, format)
}

/// Load and decode the source image. The file handle is released when the
/// reader drops, on success and failure alike.
fn decode(path: &Path) -> Result<DynamicImage, ResizeError> {
    let decode_err = |e: String| ResizeError::Decode {
        path: path.to_path_buf(),
        message: e,
    };
    ImageReader::open(path)
        .map_err(|e| decode_err(e.to_string()))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))
}

/// Destination-specific colorspace normalization.
///
/// Alpha-less formats get an opaque RGB image: alpha-bearing inputs are
/// composited over white, other layouts (e.g. grayscale) are converted
/// losslessly. Alpha-capable formats pass through with their original
/// channel layout unchanged.
fn normalize(img: DynamicImage, format: OutputFormat) -> DynamicImage {
    if format.supports_alpha() {
        return img;
    }
    if img.color().has_alpha() {
        DynamicImage::ImageRgb8(flatten_over_white(&img))
    } else if !matches!(img, DynamicImage::ImageRgb8(_)) {
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        img
    }
}

/// Composite an alpha-bearing image over an opaque white background,
/// using the alpha channel as the blend mask.
fn flatten_over_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        // Rounded integer blend: c*a + 255*(1-a) over the 0..=255 range
        let blend =
            |c: u8| ((c as u16 * a as u16 + 255 * (255 - a as u16) + 127) / 255) as u8;
        out.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}

/// Encode into the destination format's byte representation.
fn encode(img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, ResizeError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format.image_format())
        .map_err(|e| ResizeError::Encode {
            format: format.name(),
            message: e.to_string(),
        })?;
    Ok(buf)
}
