//! Internal utility functions for logoops.
//!
//! This module contains pixel helpers shared by the sampling and segmentation operations.

use image::{Rgb, Rgba};

/// Converts an RGB triple to 8-bit luminance using ITU-R 601-2 weights.
///
/// The weights are applied in 16-bit fixed point with rounding, so the result
/// matches the usual "L" conversion of image editors bit for bit.
///
/// # Arguments
///
/// * `red`, `green`, `blue` - The color channels
///
/// # Returns
///
/// The luminance value in `0..=255`
#[inline]
pub fn luma_601(red: u8, green: u8, blue: u8) -> u8 {
    let weighted = u32::from(red) * 19595 + u32::from(green) * 38470 + u32::from(blue) * 7471;
    ((weighted + 0x8000) >> 16) as u8
}

/// Drops the alpha channel of a pixel.
#[inline]
pub fn rgb_of(pixel: Rgba<u8>) -> Rgb<u8> {
    let Rgba([red, green, blue, _]) = pixel;
    Rgb([red, green, blue])
}

/// Formats a color as a lower-case `#rrggbb` string.
pub fn to_hex(color: Rgb<u8>) -> String {
    let Rgb([red, green, blue]) = color;
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// Squared Euclidean distance between two RGB triples.
#[inline]
pub fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = i32::from(x) - i32::from(y);
            (diff * diff) as u32
        })
        .sum()
}

/// Validates that two images have matching dimensions.
///
/// # Returns
///
/// `Ok(())` if the dimensions match, otherwise the pair `(expected, actual)`
pub fn validate_matching_dimensions(
    expected: (u32, u32),
    actual: (u32, u32),
) -> Result<(), ((u32, u32), (u32, u32))> {
    if expected == actual {
        Ok(())
    } else {
        Err((expected, actual))
    }
}
