//! `lowlight-synth` CLI - Create synthetic low-light images from ground-truth images.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lowlight_synth::{Batch, Config, Method};

/// Create synthetic low-light images from a directory of ground-truth images.
#[derive(Parser, Debug)]
#[command(name = "lowlight-synth")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory with the ground-truth images (jpg, jpeg, png).
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory to write the low-light images to. Created if missing.
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Darkening method: exposure, gamma or mixed.
    #[arg(short, long, default_value = "exposure", value_name = "METHOD")]
    method: Method,

    /// Random seed for reproducibility.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Disable the progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("lowlight_synth={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        method: args.method,
        seed: args.seed,
        output_quality: args.quality,
        show_progress: !args.no_progress,
    };

    let mut batch = Batch::new(config).context("Failed to initialize batch")?;

    let summary = batch
        .run()
        .with_context(|| format!("Failed to process {}", args.input_dir.display()))?;

    println!(
        "Done! Created {} low-light images in {}",
        summary.written,
        args.output_dir.display()
    );

    Ok(())
}
