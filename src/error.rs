use std::path::PathBuf;

use thiserror::Error;

/// Error type for logo operations
///
/// This error type covers the failures of the palette lookup and the
/// stray-text removal pipeline. Outcomes that are expected for some inputs
/// (no accent color, an empty foreground mask) are not errors and are
/// reported through `Option` or [`crate::StrayTextRemoval::Empty`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The reference palette has no entries
    ///
    /// A nearest-color lookup needs at least one candidate, so an empty
    /// palette is rejected when the [`crate::Palette`] is constructed.
    #[error("Palette must contain at least one entry")]
    EmptyPalette,

    /// Image and label grid dimensions do not match
    ///
    /// This error occurs when compositing an image against a label grid
    /// produced from a different image.
    #[error("Image and label grid dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },

    /// Failed to create ImageBuffer from processed pixels
    ///
    /// This error indicates that the creation of a new image buffer
    /// failed after processing the pixel data.
    #[error("Failed to create ImageBuffer from processed pixels")]
    ImageBufferCreationFailed,

    /// Every pixel became transparent after the stray components were removed
    ///
    /// The foreground mask was not empty, yet nothing survived compositing,
    /// so there is no bounding box to crop to.
    #[error("Result image is empty")]
    EmptyResult,
}

/// Error type for reading and writing image files
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input could not be opened or decoded
    #[error("Failed to read image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output could not be encoded or written
    #[error("Failed to write image {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
