//! Synthetic low-light transform.
//!
//! A ground-truth image is darkened with one of three [`Method`]s. Each call
//! draws fresh [`Params`] from the caller's random generator, so a seeded
//! generator makes a whole batch reproducible.

mod method;
mod remap;

pub use method::{
    Method, Params, EXPOSURE_FACTOR, GAMMA_EXPONENT, MIXED_FACTOR, MIXED_GAMMA,
};
pub use remap::{lookup_table, remap_sample};

use ndarray::ArrayView3;
use rand::Rng;

use crate::error::Result;
use crate::image::ImageArray;

/// Darken an image with freshly sampled parameters.
///
/// The output has the same `(height, width, channels)` shape as `image`.
/// Zero-size images are accepted and yield a zero-size output.
///
/// # Returns
///
/// The darkened image and the parameters that produced it.
pub fn darken<R: Rng + ?Sized>(
    image: ArrayView3<'_, u8>,
    method: Method,
    rng: &mut R,
) -> (ImageArray, Params) {
    let params = Params::sample(method, rng);
    (apply(image, params), params)
}

/// Darken an image with a method given by name.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `method`
/// is not one of `exposure`, `gamma` or `mixed`. Nothing is sampled in that case.
pub fn darken_by_name<R: Rng + ?Sized>(
    image: ArrayView3<'_, u8>,
    method: &str,
    rng: &mut R,
) -> Result<(ImageArray, Params)> {
    let method = method.parse::<Method>()?;
    Ok(darken(image, method, rng))
}

/// Darken an image with fixed parameters.
#[must_use]
pub fn apply(image: ArrayView3<'_, u8>, params: Params) -> ImageArray {
    let table = lookup_table(params);
    image.mapv(|x| table[usize::from(x)])
}
