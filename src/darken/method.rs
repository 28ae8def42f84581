//! Darkening methods and the parameters sampled for them.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use rand::Rng;

use crate::error::{Error, Result};

/// Exposure multiplier range for [`Method::Exposure`].
pub const EXPOSURE_FACTOR: Range<f64> = 0.1..0.4;

/// Gamma exponent range for [`Method::Gamma`].
pub const GAMMA_EXPONENT: Range<f64> = 1.8..3.0;

/// Exposure multiplier range for [`Method::Mixed`].
pub const MIXED_FACTOR: Range<f64> = 0.15..0.45;

/// Gamma exponent range for [`Method::Mixed`].
pub const MIXED_GAMMA: Range<f64> = 1.2..2.0;

/// How a ground-truth image is turned into its low-light counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Linear exposure reduction: `x * factor`.
    Exposure,
    /// Power-law remap of normalized intensity: `(x / 255)^gamma`.
    Gamma,
    /// Exposure reduction followed by a gamma remap.
    #[default]
    Mixed,
}

impl Method {
    /// Every supported method, in declaration order.
    pub const ALL: [Self; 3] = [Self::Exposure, Self::Gamma, Self::Mixed];

    /// Lowercase selector name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exposure => "exposure",
            Self::Gamma => "gamma",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidArgument {
                name: "method".to_string(),
                reason: format!("unknown darkening method '{s}', expected one of exposure, gamma, mixed"),
            })
    }
}

/// Parameters drawn for a single darkening call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Params {
    Exposure { factor: f64 },
    Gamma { gamma: f64 },
    Mixed { factor: f64, gamma: f64 },
}

impl Params {
    /// Draw fresh parameters for `method`.
    ///
    /// Each parameter is uniform over its half-open range and drawn
    /// independently. For [`Method::Mixed`] the factor is drawn before the
    /// gamma, so a seeded generator yields a stable pair.
    pub fn sample<R: Rng + ?Sized>(method: Method, rng: &mut R) -> Self {
        match method {
            Method::Exposure => Self::Exposure {
                factor: rng.random_range(EXPOSURE_FACTOR),
            },
            Method::Gamma => Self::Gamma {
                gamma: rng.random_range(GAMMA_EXPONENT),
            },
            Method::Mixed => {
                let factor = rng.random_range(MIXED_FACTOR);
                let gamma = rng.random_range(MIXED_GAMMA);
                Self::Mixed { factor, gamma }
            }
        }
    }

    /// The method these parameters belong to.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Exposure { .. } => Method::Exposure,
            Self::Gamma { .. } => Method::Gamma,
            Self::Mixed { .. } => Method::Mixed,
        }
    }

    /// Raw parameter values: one scalar for exposure and gamma, `[factor, gamma]` for mixed.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Self::Exposure { factor } => vec![factor],
            Self::Gamma { gamma } => vec![gamma],
            Self::Mixed { factor, gamma } => vec![factor, gamma],
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exposure { factor } => write!(f, "factor={factor:.2}"),
            Self::Gamma { gamma } => write!(f, "γ={gamma:.2}"),
            Self::Mixed { factor, gamma } => write!(f, "factor={factor:.2}, γ={gamma:.2}"),
        }
    }
}
