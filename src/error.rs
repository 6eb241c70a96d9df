use thiserror::Error;

/// Unified error type for the compression pipeline.
///
/// All fatal conditions abort the single pipeline invocation; there is no
/// partial-result or retry semantics.
#[derive(Debug, Error)]
pub enum Error {
    /// The image produced no pixels; the loss metric would divide by zero.
    #[error("input image has no pixels")]
    EmptyInput,

    /// The image could not be read or written (missing file, bad format).
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Type alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;
