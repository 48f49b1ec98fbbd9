mod file;

pub use file::{FileSource, JpegDirSink};

use anyhow::Result;
use image::{GrayImage, RgbImage};

/// Pipeline stages whose single-channel output is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Grayscale,
    Denoised,
    Binary,
    Annotated,
}

impl Stage {
    /// File stem used by file-backed sinks.
    pub fn file_stem(self) -> &'static str {
        match self {
            Stage::Grayscale => "grayscale",
            Stage::Denoised => "denoised",
            Stage::Binary => "binary",
            Stage::Annotated => "annotated",
        }
    }
}

/// Trait for input photograph sources
pub trait ImageSource {
    /// Decode the input into an 8-bit RGB buffer.
    ///
    /// The channel count is normalized to 3 regardless of the source
    /// encoding; dimension checks are the pipeline's job.
    fn load(&mut self) -> Result<RgbImage>;
}

/// Trait for per-stage output destinations
pub trait ImageSink {
    /// Persist a single-channel stage output.
    ///
    /// Each call is independent; a failure does not undo earlier saves.
    fn save(&mut self, stage: Stage, image: &GrayImage) -> Result<()>;
}
