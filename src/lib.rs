//! Glyph centroid pipeline.
//!
//! A fixed, sequential chain of image transforms that takes a photograph of
//! a single handwritten glyph and marks its center of mass:
//!
//! RGB → grayscale → median denoise → binary classification → border mask →
//! morphological opening → centroid → dashed crosshair annotation.
//!
//! Decoding and encoding live behind the [`io::ImageSource`] and
//! [`io::ImageSink`] traits; everything in between operates on in-memory
//! `image` buffers and cannot fail.

pub mod error;
pub mod io;
pub mod ops;
pub mod pipeline;

pub use error::PipelineError;
pub use ops::centroid::Centroid;
pub use ops::classify::Polarity;
pub use pipeline::{run, PipelineConfig, PipelineReport};
