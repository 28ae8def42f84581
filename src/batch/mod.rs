//! Batch generation of a low-light dataset from a ground-truth directory.

mod scan;

pub use scan::{find_images, is_image_path, list_entries, IMAGE_EXTENSIONS};

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::darken::{self, Method, Params};
use crate::error::{Error, Result};
use crate::image::{self, DEFAULT_JPEG_QUALITY};

/// Number of directory entries echoed at debug level before processing.
const PREVIEW_ENTRIES: usize = 5;

/// Configuration for a dataset generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the ground-truth images.
    pub input_dir: PathBuf,

    /// Directory receiving the low-light images. Created if absent.
    pub output_dir: PathBuf,

    /// Darkening method applied to every image.
    pub method: Method,

    /// Random seed for reproducibility. None for random.
    pub seed: Option<u64>,

    /// Output JPEG quality (1-100).
    pub output_quality: u8,

    /// Whether to draw a progress bar.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("datasets/ground_truth"),
            output_dir: PathBuf::from("datasets/low_light"),
            method: Method::Exposure,
            seed: None,
            output_quality: DEFAULT_JPEG_QUALITY,
            show_progress: true,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::InvalidArgument {
                name: "output_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Image files found in the input directory.
    pub found: usize,
    /// Low-light images written.
    pub written: usize,
    /// Files that could not be decoded or written.
    pub skipped: usize,
}

/// Turns every ground-truth image in a directory into a low-light copy.
pub struct Batch {
    config: Config,
    rng: StdRng,
}

impl Batch {
    /// Create a new batch with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing batch with config: {config:?}");

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self { config, rng })
    }

    /// Process every image in the input directory.
    ///
    /// Files that fail to decode or write are logged and skipped; they never
    /// abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory is missing or unreadable, or
    /// the output directory cannot be created.
    pub fn run(&mut self) -> Result<Summary> {
        let input_dir = self.config.input_dir.clone();
        let output_dir = self.config.output_dir.clone();

        tracing::info!("Ground truth dir: {}", input_dir.display());
        if !input_dir.is_dir() {
            return Err(Error::MissingInputDir { path: input_dir });
        }

        let entries = list_entries(&input_dir)?;
        tracing::debug!("Total files in directory: {}", entries.len());
        if !entries.is_empty() {
            let preview = &entries[..entries.len().min(PREVIEW_ENTRIES)];
            tracing::debug!("First few files: {preview:?}");
        }

        fs::create_dir_all(&output_dir).map_err(|source| Error::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let images = find_images(&input_dir)?;
        tracing::info!(
            "Found {} image files, darkening with method {}",
            images.len(),
            self.config.method
        );

        let pb = self.progress_bar(images.len() as u64);
        let mut summary = Summary {
            found: images.len(),
            ..Summary::default()
        };

        for path in &images {
            let name = display_name(path);
            match self.process_one(path, &output_dir) {
                Ok(params) => {
                    summary.written += 1;
                    pb.suspend(|| tracing::info!("{name}: {params}"));
                }
                Err(err) => {
                    summary.skipped += 1;
                    pb.suspend(|| tracing::warn!("Skipping {name}: {err}"));
                }
            }
            pb.inc(1);
        }

        pb.finish_with_message("Low-light images created");
        tracing::info!(
            "Created {} low-light images in {} ({} skipped)",
            summary.written,
            output_dir.display(),
            summary.skipped
        );

        Ok(summary)
    }

    /// Darken a single image and write it under the same file name.
    fn process_one(&mut self, path: &Path, output_dir: &Path) -> Result<Params> {
        let ground_truth = image::load_image(path)?;
        let (low_light, params) = darken::darken(ground_truth.view(), self.config.method, &mut self.rng);

        let file_name = path.file_name().ok_or_else(|| Error::InvalidArgument {
            name: "path".to_string(),
            reason: format!("{} has no file name", path.display()),
        })?;
        image::save_image(&low_light, output_dir.join(file_name), self.config.output_quality)?;

        Ok(params)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Creating low-light images [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .expect("valid template")
                .progress_chars("#>-"),
        );
        pb
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_quality_out_of_range() {
        for quality in [0, 101] {
            let config = Config {
                output_quality: quality,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidArgument { ref name, .. }) if name == "output_quality"
            ));
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("a/b/photo.png")), "photo.png");
    }
}
