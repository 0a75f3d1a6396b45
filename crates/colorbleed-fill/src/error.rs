//! Error types for colorbleed-fill

use thiserror::Error;

/// Errors that can occur during a bleed pass
#[derive(Debug, Error)]
pub enum FillError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colorbleed_core::Error),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Buffer contains no pixel with nonzero alpha, so there is no color
    /// source to propagate from
    #[error("no solid pixels in {width}x{height} buffer")]
    NoSolidPixels { width: u32, height: u32 },

    /// The pass ceiling was reached before every hole was filled; the
    /// buffer is left in its last partially-filled state
    #[error("did not converge after {passes} passes: {unfilled} pixels unfilled")]
    NonConvergence { passes: u32, unfilled: usize },
}

/// Result type for fill operations
pub type FillResult<T> = Result<T, FillError>;
