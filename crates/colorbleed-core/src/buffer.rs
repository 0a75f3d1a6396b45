//! PixelBuffer - the main image container
//!
//! `PixelBuffer` holds a width x height grid of packed 4-channel 8-bit
//! pixels in row-major order with no padding, so the backing storage can be
//! handed to a renderer or encoder as one contiguous byte run.
//!
//! # Pixel layout
//!
//! - One [`Pixel`] per grid cell, 4 bytes each
//! - Rows are stored top to bottom, pixels left to right within a row
//! - Row stride is always `width * 4` bytes
//! - The alpha channel is the coverage channel: `a == 0` marks a pixel as
//!   fully transparent
//!
//! # Lifecycle
//!
//! A buffer starts empty (0x0). [`PixelBuffer::resize`] establishes the
//! dimensions and allocates storage; contents after a resize are
//! unspecified, so callers must [`PixelBuffer::fill`] or load pixel data
//! before reading. [`PixelBuffer::clear`] releases the storage again.

use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};

/// A packed RGBA pixel, 8 bits per channel.
///
/// The struct is `repr(C)` and `Pod`, so a `&[Pixel]` can be reinterpreted
/// as a `&[u8]` for bulk upload or copy. Channel order within the 4 bytes
/// is R, G, B, A; only the `a` field carries semantic weight for the bleed
/// pass (0 = hole, nonzero = solid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha (coverage) channel
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the zero value.
    pub const TRANSPARENT: Pixel = Pixel {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Create a pixel from the four channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel { r, g, b, a }
    }

    /// Create a fully opaque pixel (`a = 255`).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b, a: 255 }
    }

    /// Whether this pixel is fully transparent (`a == 0`).
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Whether this pixel carries any coverage (`a > 0`).
    #[inline]
    pub const fn is_solid(self) -> bool {
        self.a > 0
    }
}

/// PixelBuffer - main image container
///
/// Owns a rectangular grid of [`Pixel`] values. Access is bounds-checked:
/// reads return `Option`, writes return `Result`. The raw contiguous byte
/// view is available through [`PixelBuffer::as_bytes`] for handoff to a
/// presentation layer.
///
/// # Examples
///
/// ```
/// use colorbleed_core::{Pixel, PixelBuffer};
///
/// let mut buffer = PixelBuffer::new();
/// buffer.resize(64, 48);
/// buffer.fill(Pixel::TRANSPARENT);
/// buffer.set(10, 20, Pixel::opaque(255, 0, 0)).unwrap();
/// assert_eq!(buffer.get(10, 20), Some(Pixel::opaque(255, 0, 0)));
/// assert_eq!(buffer.as_bytes().len(), 64 * 48 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create an empty 0x0 buffer with no allocation.
    pub fn new() -> Self {
        PixelBuffer::default()
    }

    /// Reallocate the backing storage for the given dimensions.
    ///
    /// After a resize the `pixels.len() == width * height` invariant holds,
    /// but pixel contents are unspecified; call [`PixelBuffer::fill`] or
    /// load image data before reading.
    pub fn resize(&mut self, width: u32, height: u32) {
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, Pixel::TRANSPARENT);
        self.width = width;
        self.height = height;
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Release the backing storage and reset the dimensions to 0x0.
    pub fn clear(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Build a buffer from pixel data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `pixels.len()` does not
    /// equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer from raw bytes, 4 bytes per pixel, row-major.
    ///
    /// This is the entry point for an external decoder that produces a
    /// packed byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidByteLength`] if `bytes.len()` is not a
    /// multiple of 4, or [`Error::BufferSizeMismatch`] if the pixel count
    /// does not match the dimensions.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % std::mem::size_of::<Pixel>() != 0 {
            return Err(Error::InvalidByteLength(bytes.len()));
        }
        let pixels: &[Pixel] = bytemuck::cast_slice(bytes);
        Self::from_pixels(width, height, pixels.to_vec())
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        let index = self.index(x, y)?;
        Some(self.pixels[index])
    }

    /// Get a mutable reference to the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Pixel> {
        let index = self.index(x, y)?;
        Some(&mut self.pixels[index])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        match self.index(x, y) {
            Some(index) => {
                self.pixels[index] = pixel;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get mutable raw access to the pixel data.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// View the backing storage as one contiguous byte run.
    ///
    /// The length is always `width * height * 4`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Mutable byte view of the backing storage.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }

    /// Byte distance between the starts of consecutive rows.
    #[inline]
    pub fn row_stride_bytes(&self) -> usize {
        (self.width as usize) * std::mem::size_of::<Pixel>()
    }

    /// Row-major flat index for (x, y), `None` when out of bounds.
    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}
