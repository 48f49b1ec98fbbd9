use super::{ImageSink, ImageSource, Stage};
use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, GrayImage, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Decodes the input photograph from a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSource for FileSource {
    fn load(&mut self) -> Result<RgbImage> {
        tracing::info!("Loading image from {}", self.path.display());

        let decoded = image::open(&self.path)
            .with_context(|| format!("Failed to decode {}", self.path.display()))?;

        // Grayscale, RGBA and palette sources all come out as 8-bit RGB.
        Ok(decoded.to_rgb8())
    }
}

/// Writes each stage output as a luma JPEG under one directory.
pub struct JpegDirSink {
    dir: PathBuf,
    quality: u8,
}

impl JpegDirSink {
    pub fn new<P: AsRef<Path>>(dir: P, quality: u8) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            quality,
        }
    }
}

impl ImageSink for JpegDirSink {
    fn save(&mut self, stage: Stage, image: &GrayImage) -> Result<()> {
        let path = self.dir.join(format!("{}.jpg", stage.file_stem()));

        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), self.quality);
        encoder
            .encode(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::L8,
            )
            .with_context(|| format!("Failed to encode {}", path.display()))?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
