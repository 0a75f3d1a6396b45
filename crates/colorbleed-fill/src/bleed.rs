//! Color bleeding for RGBA pixel buffers
//!
//! Fully transparent pixels (alpha == 0) in a decoded sprite usually hold
//! black or undefined color. When such an image is later scaled or sampled
//! with interpolation that mixes RGB across the transparency edge, the
//! stale color bleeds into the visible result as a dark fringe. This module
//! fixes the data instead of the sampler: it copies RGB from solid pixels
//! outward into the transparent region, ring by ring, while keeping every
//! hole's alpha at 0.
//!
//! The propagation runs in raster-scan passes over a pass-start snapshot.
//! Each pass advances the filled frontier by exactly one 8-neighbor ring,
//! so the total pass count equals the largest Chebyshev distance from any
//! hole to the nearest solid pixel.

use colorbleed_core::{Pixel, PixelBuffer, VisitedMask};
use tracing::{debug, trace};

use crate::error::{FillError, FillResult};

/// Neighbor offsets in sampling priority order.
///
/// First match wins, so the order is part of the contract: rows above the
/// pixel are probed before its own row, and left before right within a row.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Options for a bleed pass
#[derive(Debug, Clone, Default)]
pub struct BleedOptions {
    /// Ceiling on the number of passes; `None` selects
    /// `max(width, height)`, which bounds the largest possible propagation
    /// distance in the buffer.
    pub max_passes: Option<u32>,
}

impl BleedOptions {
    /// Set an explicit pass ceiling (clamped to at least 1).
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    fn pass_limit(&self, width: u32, height: u32) -> u32 {
        self.max_passes.unwrap_or(width.max(height)).max(1)
    }
}

/// Result of a completed bleed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BleedStats {
    /// Number of passes run, including the final pass that observed no
    /// misses
    pub passes: u32,
    /// Number of transparent pixels that received color
    pub filled: usize,
}

/// Bleed color from solid pixels into the transparent region, in place.
///
/// Every pixel that starts with alpha == 0 ends with alpha == 0 and the RGB
/// of its first qualifying neighbor; pixels with nonzero alpha are never
/// touched. Qualification is evaluated against the state at the start of
/// the pass, so the outcome does not depend on scan order within a pass.
///
/// # Arguments
///
/// * `buffer` - Image to process; mutated in place
/// * `options` - Pass ceiling configuration
///
/// # Returns
///
/// Statistics for the completed run: passes executed and pixels filled.
///
/// # Errors
///
/// Returns [`FillError::EmptyImage`] for a 0x0 buffer,
/// [`FillError::NoSolidPixels`] if no pixel has nonzero alpha (propagation
/// could never terminate), and [`FillError::NonConvergence`] if the pass
/// ceiling is reached first. After a non-convergence the buffer keeps its
/// last partially-filled state and the call may be retried with a higher
/// ceiling.
///
/// # Examples
///
/// ```
/// use colorbleed_core::{Pixel, PixelBuffer};
/// use colorbleed_fill::{alpha_bleed, BleedOptions};
///
/// let mut buffer = PixelBuffer::new();
/// buffer.resize(2, 2);
/// buffer.fill(Pixel::TRANSPARENT);
/// buffer.set(0, 0, Pixel::opaque(255, 0, 0)).unwrap();
///
/// let stats = alpha_bleed(&mut buffer, &BleedOptions::default()).unwrap();
/// assert_eq!(stats.passes, 1);
/// assert_eq!(stats.filled, 3);
/// assert_eq!(buffer.get(1, 1), Some(Pixel::new(255, 0, 0, 0)));
/// ```
pub fn alpha_bleed(buffer: &mut PixelBuffer, options: &BleedOptions) -> FillResult<BleedStats> {
    let width = buffer.width();
    let height = buffer.height();

    if buffer.is_empty() {
        return Err(FillError::EmptyImage);
    }
    if !buffer.pixels().iter().any(|pixel| pixel.is_solid()) {
        return Err(FillError::NoSolidPixels { width, height });
    }

    let max_passes = options.pass_limit(width, height);
    let mut visited = VisitedMask::new(width, height);
    let mut filled = 0usize;

    for pass in 1..=max_passes {
        // Neighbor qualification reads only these pass-start snapshots; a
        // hole filled earlier in the same pass becomes a valid source only
        // in the next pass.
        let snapshot = buffer.clone();
        let sampled = visited.clone();
        let mut misses = 0usize;

        for y in 0..height {
            for x in 0..width {
                if visited.get(x, y) {
                    continue;
                }
                if let Some(current) = buffer.get(x, y) {
                    if current.is_solid() {
                        visited.set(x, y);
                        continue;
                    }
                    match first_sample_neighbor(&snapshot, &sampled, x, y) {
                        Some(source) => {
                            // Copy RGB, keep the hole transparent
                            buffer.set(x, y, Pixel::new(source.r, source.g, source.b, 0))?;
                            visited.set(x, y);
                            filled += 1;
                        }
                        None => misses += 1,
                    }
                }
            }
        }

        debug!(pass, misses, filled, "bleed pass complete");

        if misses == 0 {
            trace!(passes = pass, filled, "bleed converged");
            return Ok(BleedStats {
                passes: pass,
                filled,
            });
        }
    }

    let unfilled = buffer.pixels().len() - visited.count();
    Err(FillError::NonConvergence {
        passes: max_passes,
        unfilled,
    })
}

/// Find the first neighbor of (x, y) eligible as a color source.
///
/// A neighbor qualifies if it was already visited when the pass started or
/// carries nonzero alpha in the snapshot. Offsets falling outside the
/// buffer are skipped, so the edge rows and columns need no special case.
fn first_sample_neighbor(
    snapshot: &PixelBuffer,
    sampled: &VisitedMask,
    x: u32,
    y: u32,
) -> Option<Pixel> {
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let Some(nx) = x.checked_add_signed(dx) else {
            continue;
        };
        let Some(ny) = y.checked_add_signed(dy) else {
            continue;
        };
        if let Some(pixel) = snapshot.get(nx, ny) {
            if sampled.get(nx, ny) || pixel.is_solid() {
                return Some(pixel);
            }
        }
    }
    None
}
