//! Error types for colorbleed-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Colorbleed core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel access outside the buffer
    #[error("pixel access out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Backing data length does not match the stated dimensions
    #[error("buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Byte data length is not a whole number of pixels
    #[error("byte length {0} is not a multiple of the pixel size")]
    InvalidByteLength(usize),
}

/// Result type alias for colorbleed core operations
pub type Result<T> = std::result::Result<T, Error>;
