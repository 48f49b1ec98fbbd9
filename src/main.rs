use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glyphmark::io::{FileSource, JpegDirSink};
use glyphmark::{run, PipelineConfig, Polarity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input photograph (any format the image crate decodes)
    input: PathBuf,

    /// Directory for the grayscale/denoised/binary/annotated outputs
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Expected input width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Expected input height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Luma threshold for foreground classification
    #[arg(short, long, default_value_t = 12)]
    threshold: u8,

    /// Which side of the threshold counts as ink
    #[arg(long, value_enum, default_value_t = PolarityArg::Dark)]
    polarity: PolarityArg,

    /// Rounds of morphological opening
    #[arg(long, default_value_t = 5)]
    iterations: u32,

    /// JPEG quality for the saved stage images
    #[arg(long, default_value_t = 100)]
    quality: u8,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolarityArg {
    /// Ink is darker than the page
    Dark,
    /// Ink is brighter than the page
    Bright,
}

impl From<PolarityArg> for Polarity {
    fn from(arg: PolarityArg) -> Self {
        match arg {
            PolarityArg::Dark => Polarity::DarkForeground,
            PolarityArg::Bright => Polarity::BrightForeground,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("Glyphmark starting");
    tracing::info!("Expected input: {}x{}", args.width, args.height);
    tracing::info!(
        "Threshold: {} ({:?}), opening iterations: {}",
        args.threshold,
        args.polarity,
        args.iterations
    );

    let config = PipelineConfig {
        width: args.width,
        height: args.height,
        threshold: args.threshold,
        polarity: args.polarity.into(),
        opening_iterations: args.iterations,
    };

    let mut source = FileSource::new(&args.input);
    let mut sink = JpegDirSink::new(&args.output_dir, args.quality);

    let report = run(&mut source, &mut sink, &config).context("Pipeline failed")?;

    match report.centroid {
        Some(c) => println!("Centroid: ({:.2}, {:.2})", c.x, c.y),
        None => println!("Centroid: (-1.00, -1.00)"),
    }

    Ok(())
}
