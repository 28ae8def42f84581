//! Custom error types for lowlight-synth.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the lowlight-synth library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The ground-truth directory is missing or is not a directory.
    #[error("input directory does not exist: {path}")]
    MissingInputDir { path: PathBuf },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument, e.g. an unknown darkening method.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pixel array does not have a layout the codecs understand.
    #[error("image shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}

/// Result type alias for lowlight-synth operations.
pub type Result<T> = std::result::Result<T, Error>;
