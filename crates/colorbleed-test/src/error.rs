//! Error types for the test framework

use thiserror::Error;

/// Failures recorded during a regression test
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Buffer comparison failed on dimensions
    #[error("buffer comparison failed at index {index}: dimension mismatch")]
    BufferDimensionMismatch { index: usize },

    /// Buffer comparison failed on pixel contents
    #[error("buffer comparison failed at index {index}: pixel mismatch at ({x}, {y})")]
    BufferPixelMismatch { index: usize, x: u32, y: u32 },
}
