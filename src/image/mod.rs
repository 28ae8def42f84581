//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::save_image;

use ndarray::Array3;

/// Decoded image in HWC layout (height, width, channels), one byte per sample.
pub type ImageArray = Array3<u8>;

/// Default JPEG quality for written images.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
