//! Image saving utilities.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageBuffer, ImageError, ImageFormat};

use crate::error::{Error, Result};

use super::ImageArray;

/// Save an HWC array as an image file.
///
/// The format is inferred from the extension. JPEG output is written with
/// the given quality and has any alpha channel dropped.
///
/// # Arguments
///
/// * `array` - HWC array with 1 to 4 channels
/// * `path` - Output file path
/// * `quality` - JPEG quality (1-100), ignored for other formats
///
/// # Errors
///
/// Returns an error if the array layout is unsupported or the image cannot be saved.
pub fn save_image<P: AsRef<Path>>(array: &ImageArray, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();
    let save_error = |source: ImageError| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    let img = array_to_image(array)?;

    let format = match path.extension() {
        Some(_) => ImageFormat::from_path(path).map_err(save_error)?,
        None => ImageFormat::Png,
    };

    // The output file is only created once encoding has succeeded.
    let mut encoded = Vec::new();
    if format == ImageFormat::Jpeg {
        let img = if img.color().has_alpha() {
            drop_alpha(&img)
        } else {
            img
        };
        let encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
        img.write_with_encoder(encoder).map_err(save_error)?;
    } else {
        img.write_to(&mut Cursor::new(&mut encoded), format)
            .map_err(save_error)?;
    }

    fs::write(path, encoded)?;

    Ok(())
}

/// Convert an HWC array into a `DynamicImage` matching its channel count.
fn array_to_image(array: &ImageArray) -> Result<DynamicImage> {
    let (height, width, channels) = array.dim();
    let mismatch = || Error::ShapeMismatch {
        expected: "(height, width, 1..=4) fitting in u32".to_string(),
        actual: format!("{:?}", array.dim()),
    };

    let width = u32::try_from(width).map_err(|_| mismatch())?;
    let height = u32::try_from(height).map_err(|_| mismatch())?;
    // Logical iteration order is row-major regardless of memory layout.
    let raw: Vec<u8> = array.iter().copied().collect();

    let img = match channels {
        1 => ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgba8),
        _ => None,
    };

    img.ok_or_else(mismatch)
}

fn drop_alpha(img: &DynamicImage) -> DynamicImage {
    if img.color().has_color() {
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        DynamicImage::ImageLuma8(img.to_luma8())
    }
}
