use thiserror::Error;

/// Fatal pipeline conditions.
///
/// The transform stages themselves are pure and cannot fail; everything
/// here originates at the decode boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The decoded input does not match the dimensions the run was
    /// configured for. Nothing is processed in this case.
    #[error("decoded image is {got_width}x{got_height}, expected {want_width}x{want_height}")]
    DimensionMismatch {
        got_width: u32,
        got_height: u32,
        want_width: u32,
        want_height: u32,
    },
}
