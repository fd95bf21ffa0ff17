use std::path::Path;

use crate::error::CodecError;
use crate::Image;
use image::{ImageFormat, Rgba};

/// Opens and decodes an image file, converting it to 8-bit RGBA.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<Image<Rgba<u8>>, CodecError> {
    let path = path.as_ref();
    image::open(path)
        .map(|decoded| decoded.to_rgba8())
        .map_err(|source| CodecError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encodes an image as PNG, keeping the alpha channel.
pub fn save_png(image: &Image<Rgba<u8>>, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CodecError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
