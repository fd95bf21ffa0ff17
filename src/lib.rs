mod error;
mod logoops;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use error::{CodecError, Error};
pub use logoops::classify::{classify_components, Classification, KeepSet};
pub use logoops::codec::{load_rgba, save_png};
pub use logoops::components::{segment, Component, Segmentation, CONNECTIVITY};
pub use logoops::dominant_color::{is_accent_candidate, DominantColor};
pub use logoops::foreground_mask::{detect_mask_source, ForegroundMask, MaskSource};
pub use logoops::palette::{Match, Palette, PaletteEntry};
pub use logoops::remove_stray_text::{
    composite, RemoveStrayText, StrayTextRemoval, StrayTextResult,
};
pub use logoops::trim_transparent::TrimTransparent;
pub use utils::to_hex;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
