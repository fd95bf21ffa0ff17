//! Test utilities for logoops
//!
//! This module provides common functionality for testing image operations.
//! It is only compiled when running tests.

use std::path::PathBuf;

use image::Rgba;
use itertools::iproduct;

use crate::Image;

/// Creates a test RGBA image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values including alpha:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
///
/// # Returns
/// A 2x2 RGBA image with u8 subpixels
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates an RGBA image by evaluating `pattern` at every coordinate.
///
/// # Arguments
/// * `width` - Width of the image to create
/// * `height` - Height of the image to create
/// * `pattern` - Pixel value for each `(x, y)`
pub fn create_rgba_image_with_pattern(
    width: u32,
    height: u32,
    pattern: impl Fn(u32, u32) -> Rgba<u8>,
) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| image.put_pixel(x, y, pattern(x, y)));
    image
}

/// Returns a per-process path in the system temp directory.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("logoops-{}-{name}", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn create_rgba_image_with_pattern_fills_every_pixel() {
        let image = create_rgba_image_with_pattern(3, 2, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgba([2, 1, 0, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }
}
