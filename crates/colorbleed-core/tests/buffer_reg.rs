//! Regression tests for PixelBuffer lifecycle and the raw byte handoff

use colorbleed_core::{Error, Pixel, PixelBuffer, VisitedMask};
use colorbleed_test::RegParams;

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_resize_fill_clear_cycle() {
    let mut buffer = PixelBuffer::new();
    assert!(buffer.is_empty());

    buffer.resize(16, 9);
    buffer.fill(Pixel::opaque(1, 2, 3));
    assert_eq!(buffer.pixels().len(), 144);
    assert_eq!(buffer.get(15, 8), Some(Pixel::opaque(1, 2, 3)));

    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.get(0, 0), None);

    // A cleared buffer can be brought back up
    buffer.resize(2, 2);
    buffer.fill(Pixel::TRANSPARENT);
    assert_eq!(buffer.get(1, 1), Some(Pixel::TRANSPARENT));
}

#[test]
fn test_loader_handoff_roundtrip() {
    // A decoder delivers packed bytes; the presentation side reads the raw
    // view back out unchanged in shape
    let decoded: Vec<u8> = (0..2 * 3 * 4).map(|b| b as u8).collect();
    let buffer = PixelBuffer::from_bytes(2, 3, &decoded).unwrap();

    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 3);
    assert_eq!(buffer.as_bytes(), decoded.as_slice());
    assert_eq!(buffer.row_stride_bytes(), 8);
    assert_eq!(buffer.get(1, 2), Some(Pixel::new(20, 21, 22, 23)));
}

#[test]
fn test_constructor_validation() {
    assert!(matches!(
        PixelBuffer::from_pixels(2, 2, vec![Pixel::TRANSPARENT; 3]),
        Err(Error::BufferSizeMismatch {
            expected: 4,
            actual: 3
        })
    ));
    assert!(matches!(
        PixelBuffer::from_bytes(2, 2, &[0u8; 7]),
        Err(Error::InvalidByteLength(7))
    ));
}

#[test]
fn test_mutable_byte_view_writes_pixels() {
    let mut buffer = PixelBuffer::new();
    buffer.resize(1, 1);
    buffer.fill(Pixel::TRANSPARENT);
    buffer.as_bytes_mut().copy_from_slice(&[9, 8, 7, 6]);
    assert_eq!(buffer.get(0, 0), Some(Pixel::new(9, 8, 7, 6)));
}

#[test]
fn test_mutable_pixel_view_writes_through() {
    let mut buffer = PixelBuffer::new();
    buffer.resize(2, 1);
    buffer.fill(Pixel::TRANSPARENT);
    for pixel in buffer.pixels_mut() {
        pixel.a = 255;
    }
    assert_eq!(buffer.get(1, 0), Some(Pixel::new(0, 0, 0, 255)));
}

// ============================================================================
// Mask interplay
// ============================================================================

#[test]
fn test_mask_matches_buffer_dimensions() {
    let mut buffer = PixelBuffer::new();
    buffer.resize(7, 4);
    let mut mask = VisitedMask::new(buffer.width(), buffer.height());

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            mask.set(x, y);
        }
    }
    assert_eq!(mask.count(), buffer.pixels().len());
}

// ============================================================================
// Counted comparisons
// ============================================================================

#[test]
fn test_buffer_regression_values() {
    let mut rp = RegParams::new("buffer");

    let mut buffer = PixelBuffer::new();
    buffer.resize(33, 21);
    rp.compare_values(33.0 * 21.0, buffer.pixels().len() as f64, 0.0);
    rp.compare_values(33.0 * 4.0, buffer.row_stride_bytes() as f64, 0.0);

    let copy = buffer.clone();
    rp.compare_buffers(&buffer, &copy);

    assert!(rp.cleanup());
}
