//! # lowlight-synth
//!
//! Synthesizes paired low-light / normal-light datasets by darkening a
//! directory of ground-truth images.
//!
//! Three darkening methods are available: a linear exposure cut, a gamma
//! remap, and a mix of both. Parameters are drawn at random per image from
//! fixed ranges, using a generator the caller owns.
//!
//! ## Example
//!
//! ```no_run
//! use lowlight_synth::{Batch, Config, Method};
//!
//! # fn main() -> lowlight_synth::Result<()> {
//! let config = Config {
//!     input_dir: "datasets/ground_truth".into(),
//!     output_dir: "datasets/low_light".into(),
//!     method: Method::Mixed,
//!     seed: Some(7),
//!     ..Config::default()
//! };
//! let mut batch = Batch::new(config)?;
//!
//! let summary = batch.run()?;
//! println!("wrote {} images", summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! Single images can be darkened directly:
//!
//! ```
//! use lowlight_synth::darken::{apply, Params};
//! use ndarray::Array3;
//!
//! let image = Array3::from_elem((2, 2, 3), 101u8);
//! let dark = apply(image.view(), Params::Exposure { factor: 0.3 });
//! assert!(dark.iter().all(|&v| v == 30));
//! ```

pub mod batch;
pub mod darken;
pub mod error;
pub mod image;

pub use batch::{Batch, Config, Summary};
pub use darken::{darken, Method, Params};
pub use error::{Error, Result};
