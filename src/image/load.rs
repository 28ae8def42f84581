//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use ndarray::Array3;

use crate::error::{Error, Result};

use super::ImageArray;

/// Load an image from disk as an 8-bit HWC array.
///
/// The decoder is chosen from the file content, not its extension. Alpha is
/// discarded, so the channel count is:
/// 1. grey, with or without alpha → 1 channel
/// 2. colour, with or without alpha → 3 channels (RGB)
///
/// Deeper sample types (16-bit, float) are reduced to 8 bits.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageArray> {
    let path = path.as_ref();
    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| load_error(ImageError::IoError(err)))?
        .decode()
        .map_err(load_error)?;

    image_to_array(&img)
}

/// Convert a `DynamicImage` into an HWC array without alpha.
fn image_to_array(img: &DynamicImage) -> Result<ImageArray> {
    let (width, height) = img.dimensions();

    let (channels, raw) = if img.color().has_color() {
        (3, img.to_rgb8().into_raw())
    } else {
        (1, img.to_luma8().into_raw())
    };

    let shape = (height as usize, width as usize, channels);
    Array3::from_shape_vec(shape, raw).map_err(|_| Error::ShapeMismatch {
        expected: format!("{shape:?}"),
        actual: "decoded buffer of a different length".to_string(),
    })
}
