pub mod classify;
pub mod codec;
pub mod components;
mod css_colors;
pub mod dominant_color;
pub mod foreground_mask;
pub mod palette;
pub mod remove_stray_text;
pub mod trim_transparent;
