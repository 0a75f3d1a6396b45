//! colorbleed-fill - Color bleed propagation
//!
//! This crate provides the bleed pass that fills the transparent region of
//! an RGBA buffer with color from its solid border:
//!
//! - **In place** - the caller's [`PixelBuffer`](colorbleed_core::PixelBuffer)
//!   is mutated directly; dimensions never change
//! - **Alpha preserving** - pixels that start transparent stay transparent,
//!   pixels that start solid are never touched
//! - **Bounded** - a buffer with no solid pixel is rejected up front, and a
//!   configurable pass ceiling turns any other non-terminating input into an
//!   error instead of a hang
//!
//! # Examples
//!
//! ```
//! use colorbleed_core::{Pixel, PixelBuffer};
//! use colorbleed_fill::{alpha_bleed, BleedOptions};
//!
//! // Opaque green next to two holes in a 3x1 strip
//! let mut buffer = PixelBuffer::new();
//! buffer.resize(3, 1);
//! buffer.fill(Pixel::TRANSPARENT);
//! buffer.set(0, 0, Pixel::opaque(0, 255, 0)).unwrap();
//!
//! let stats = alpha_bleed(&mut buffer, &BleedOptions::default()).unwrap();
//! // The far hole is two rings out, so the run takes two passes
//! assert_eq!(stats.passes, 2);
//! assert_eq!(buffer.get(2, 0), Some(Pixel::new(0, 255, 0, 0)));
//! ```

pub mod bleed;
pub mod error;

// Re-export core types
pub use colorbleed_core;

pub use bleed::{BleedOptions, BleedStats, alpha_bleed};
pub use error::{FillError, FillResult};
