//! Colorbleed - color bleeding for transparent raster images
//!
//! Colorbleed prepares RGBA images whose fully transparent pixels hold
//! black or undefined color, as commonly produced by image editors and
//! decoders. Its bleed pass copies RGB from solid pixels into the adjacent
//! transparent region while keeping alpha at zero, which removes the dark
//! fringes that otherwise appear when the image is scaled or composited
//! with interpolation (game sprites, texture atlases).
//!
//! # Overview
//!
//! - [`PixelBuffer`] / [`Pixel`] - packed RGBA image container with a
//!   contiguous byte view for renderer or encoder handoff
//! - [`VisitedMask`] - per-pixel progress tracking for fill passes
//! - [`fill::alpha_bleed`] - the in-place bleed pass with convergence
//!   guards
//!
//! # Example
//!
//! ```
//! use colorbleed::{Pixel, PixelBuffer};
//! use colorbleed::fill::{alpha_bleed, BleedOptions};
//!
//! let mut buffer = PixelBuffer::new();
//! buffer.resize(2, 2);
//! buffer.fill(Pixel::TRANSPARENT);
//! buffer.set(0, 0, Pixel::opaque(255, 0, 0)).unwrap();
//!
//! let stats = alpha_bleed(&mut buffer, &BleedOptions::default()).unwrap();
//! assert_eq!(stats.filled, 3);
//! // Holes took the red from (0, 0) but stayed transparent
//! assert_eq!(buffer.get(1, 1), Some(Pixel::new(255, 0, 0, 0)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use colorbleed_core::*;

// Re-export the fill pass as a module to keep its error type distinct
pub use colorbleed_fill as fill;
