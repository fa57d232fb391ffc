use std::borrow::Cow;

use image::{GrayImage, Luma, Rgba, RgbaImage};
use tracing::trace;
use crate::tlc_engine::pixel::params::{AdjustmentParams, CONTRAST_RANGE};
use crate::tlc_engine::raster::RasterBuffer;

/// Luma weights (ITU-R BT.601)
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

pub fn gray_value(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// One byte per pixel, row-major.
pub fn to_grayscale(image: &RgbaImage) -> Vec<u8> {
    image
        .pixels()
        .map(|&Rgba([r, g, b, _])| gray_value(r, g, b))
        .collect()
}

pub fn to_gray_image(image: &RgbaImage) -> GrayImage {
    let (width, height) = image.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let &Rgba([r, g, b, _]) = image.get_pixel(x, y);
        Luma([gray_value(r, g, b)])
    })
}

/// `259 * (c + 255) / (255 * (259 - c))`; exactly 1.0 at `c = 0`.
pub fn contrast_factor(contrast: i32) -> f64 {
    let c = contrast.clamp(CONTRAST_RANGE.0, CONTRAST_RANGE.1) as f64;
    (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
}

/// Per-channel contrast around mid-grey followed by a brightness offset.
/// Alpha is passed through.
pub fn apply_brightness_contrast(image: &RgbaImage, brightness: i32, contrast: i32) -> RgbaImage {
    let factor = contrast_factor(contrast);
    let offset = brightness as f64;
    trace!(brightness, contrast, factor, "Applying brightness/contrast");

    let adjust = |v: u8| -> u8 {
        (factor * (v as f64 - 128.0) + 128.0 + offset)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    let mut out = image.clone();
    for Rgba([r, g, b, _]) in out.pixels_mut() {
        *r = adjust(*r);
        *g = adjust(*g);
        *b = adjust(*b);
    }
    out
}

/// Binarises on grayscale: `>= threshold` becomes white, everything else black, alpha opaque.
pub fn apply_threshold(image: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        let Rgba([r, g, b, _]) = *px;
        let v = if gray_value(r, g, b) >= threshold { 255 } else { 0 };
        *px = Rgba([v, v, v, 255]);
    }
    out
}

/// The buffer presented and profiled right now: threshold if enabled, else
/// brightness/contrast if either is non-zero, else the untouched raster.
pub fn current_display<'a>(raster: &'a RasterBuffer, params: &AdjustmentParams) -> Cow<'a, RgbaImage> {
    if params.threshold_enabled {
        Cow::Owned(apply_threshold(raster.pixels(), params.threshold_value))
    } else if params.has_brightness_contrast() {
        Cow::Owned(apply_brightness_contrast(
            raster.pixels(),
            params.brightness(),
            params.contrast(),
        ))
    } else {
        Cow::Borrowed(raster.pixels())
    }
}

/// Grayscale of [`current_display`]. Reuses the raster's cache when no adjustment is active.
pub fn current_gray<'a>(raster: &'a RasterBuffer, params: &AdjustmentParams) -> Cow<'a, GrayImage> {
    match current_display(raster, params) {
        Cow::Borrowed(_) => Cow::Borrowed(raster.grayscale()),
        Cow::Owned(display) => Cow::Owned(to_gray_image(&display)),
    }
}
