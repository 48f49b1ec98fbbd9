//! Sequential pipeline orchestration.
//!
//! Each stage consumes the complete output of its predecessor; nothing is
//! streamed or overlapped. The driver is generic over the source and sink
//! so tests can substitute in-memory fakes for the codec boundary.

use crate::error::PipelineError;
use crate::io::{ImageSink, ImageSource, Stage};
use crate::ops::annotate::draw_crosshair;
use crate::ops::centroid::{centroid, Centroid};
use crate::ops::classify::{classify, mask_border, Polarity};
use crate::ops::gray::to_grayscale;
use crate::ops::median::median_filter;
use crate::ops::morphology::open;
use anyhow::{Context, Result};

/// Fixed parameters for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Expected input width; any other width is fatal.
    pub width: u32,
    /// Expected input height; any other height is fatal.
    pub height: u32,
    /// Luma threshold for foreground classification.
    pub threshold: u8,
    /// Which side of the threshold is "ink".
    pub polarity: Polarity,
    /// Rounds of morphological opening applied after border masking.
    pub opening_iterations: u32,
}

impl Default for PipelineConfig {
    /// The reference scenario: a 600×800 photograph of dark ink on a
    /// light page, T = 12, five opening rounds.
    fn default() -> Self {
        Self {
            width: 600,
            height: 800,
            threshold: 12,
            polarity: Polarity::DarkForeground,
            opening_iterations: 5,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Copy)]
pub struct PipelineReport {
    /// Center of mass of the cleaned-up glyph, if any foreground survived.
    pub centroid: Option<Centroid>,
}

/// Run the full pipeline: load, transform, annotate, persisting the four
/// intermediate single-channel images along the way.
///
/// Saves are independent; a failed save aborts the run but files written
/// before it stay on disk.
pub fn run<S, K>(source: &mut S, sink: &mut K, config: &PipelineConfig) -> Result<PipelineReport>
where
    S: ImageSource,
    K: ImageSink,
{
    let rgb = source.load().context("Failed to load input image")?;
    let (width, height) = rgb.dimensions();
    tracing::info!("Input decoded: {}x{}", width, height);
    if (width, height) != (config.width, config.height) {
        return Err(PipelineError::DimensionMismatch {
            got_width: width,
            got_height: height,
            want_width: config.width,
            want_height: config.height,
        }
        .into());
    }

    let grayscale = to_grayscale(&rgb);
    sink.save(Stage::Grayscale, &grayscale)
        .context("Failed to save grayscale image")?;

    let denoised = median_filter(&grayscale);
    sink.save(Stage::Denoised, &denoised)
        .context("Failed to save denoised image")?;

    tracing::debug!(
        "Classifying with threshold {} ({:?})",
        config.threshold,
        config.polarity
    );
    let mut binary = classify(&denoised, config.threshold, config.polarity);
    sink.save(Stage::Binary, &binary)
        .context("Failed to save binary image")?;

    mask_border(&mut binary);
    let mut opened = open(&binary, config.opening_iterations);

    let found = centroid(&opened);
    match found {
        Some(c) => {
            tracing::info!("Centroid: ({:.2}, {:.2})", c.x, c.y);
            draw_crosshair(&mut opened, c.to_pixel());
        }
        None => tracing::warn!("No foreground pixels survived cleanup; skipping crosshair"),
    }

    sink.save(Stage::Annotated, &opened)
        .context("Failed to save annotated image")?;

    Ok(PipelineReport { centroid: found })
}
