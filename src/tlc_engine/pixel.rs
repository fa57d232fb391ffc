//! Pixel pipeline module
//!
//! Pure transforms over an RGBA image: grayscale, brightness/contrast and binarisation,
//! plus the resolver that picks which of them currently feeds display and profiling.

pub mod ops;
pub mod params;

#[cfg(test)]
mod tests;

pub use ops::{
    apply_brightness_contrast,
    apply_threshold,
    contrast_factor,
    current_display,
    current_gray,
    gray_value,
    to_gray_image,
    to_grayscale,
};
pub use params::AdjustmentParams;
