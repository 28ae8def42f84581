//! Per-sample intensity remaps.

use super::method::Params;

/// Full-scale value of an 8-bit sample.
const MAX_SAMPLE: f64 = 255.0;

/// Map one raw sample through the darkening curve described by `params`.
#[must_use]
pub fn remap_sample(x: u8, params: Params) -> u8 {
    let x = f64::from(x);
    let value = match params {
        Params::Exposure { factor } => x * factor,
        Params::Gamma { gamma } => (x / MAX_SAMPLE).powf(gamma) * MAX_SAMPLE,
        Params::Mixed { factor, gamma } => ((x * factor) / MAX_SAMPLE).powf(gamma) * MAX_SAMPLE,
    };
    to_sample(value)
}

/// Lookup table holding [`remap_sample`] for every possible input value.
#[must_use]
pub fn lookup_table(params: Params) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (x, out) in (0..=u8::MAX).zip(table.iter_mut()) {
        *out = remap_sample(x, params);
    }
    table
}

/// Clamp to the 8-bit range, then truncate toward zero.
///
/// Truncation (not rounding) keeps output byte-identical to the reference
/// low-light datasets.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_sample(value: f64) -> u8 {
    value.clamp(0.0, MAX_SAMPLE) as u8
}
