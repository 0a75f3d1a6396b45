//! Colorbleed Core - Basic data structures for color bleeding
//!
//! This crate provides the fundamental data structures used by the
//! colorbleed library:
//!
//! - [`Pixel`] - A packed RGBA value, 8 bits per channel
//! - [`PixelBuffer`] - The main image container (row-major, no padding)
//! - [`VisitedMask`] - A per-pixel boolean grid used to track progress of
//!   a fill pass
//!
//! The buffer's contiguous byte view ([`PixelBuffer::as_bytes`]) is the
//! handoff surface toward decoders and renderers; nothing in this crate
//! reads or writes files.
//!
//! # Examples
//!
//! ```
//! use colorbleed_core::{Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new();
//! buffer.resize(320, 240);
//! buffer.fill(Pixel::TRANSPARENT);
//! assert_eq!(buffer.row_stride_bytes(), 320 * 4);
//! ```

pub mod buffer;
pub mod error;
pub mod mask;

pub use buffer::{Pixel, PixelBuffer};
pub use error::{Error, Result};
pub use mask::VisitedMask;
