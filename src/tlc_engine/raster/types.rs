//! Raster buffer types

use image::{GrayImage, RgbaImage};
use image::imageops::{self, FilterType};
use tracing::{debug, info_span};
use crate::tlc_engine::common::error::{EngineError, Result};
use crate::tlc_engine::pixel;

/// Orientation relative to the as-loaded image, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Maps any multiple of 90 (negative allowed) onto a rotation; other angles yield `None`.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            _ => Some(Rotation::Deg270),
        }
    }

    pub fn degrees(&self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Total rotation after turning a further `other`, mod 360.
    pub fn then(&self, other: Rotation) -> Rotation {
        Rotation::from_degrees(self.degrees() + other.degrees()).unwrap_or_default()
    }
}

/// Loaded pixels plus their grayscale cache.
///
/// The buffer is never written after construction. Adjustments produce new images
/// and rotation produces a new `RasterBuffer` derived from `source`.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    /// As-loaded pixels after the size cap, before any rotation
    source: RgbaImage,
    rotation: Rotation,
    /// `source` turned by `rotation`; everything else samples this
    pixels: RgbaImage,
    gray: GrayImage,
}

impl RasterBuffer {
    /// Installs a decoded image, downscaling it once if its longer edge exceeds `max_edge`.
    pub fn from_rgba(image: RgbaImage, max_edge: u32) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions(width, height));
        }

        let source = cap_longer_edge(image, max_edge);
        Ok(Self::with_rotation(source, Rotation::Deg0))
    }

    fn with_rotation(source: RgbaImage, rotation: Rotation) -> Self {
        let pixels = match rotation {
            Rotation::Deg0 => source.clone(),
            Rotation::Deg90 => imageops::rotate90(&source),
            Rotation::Deg180 => imageops::rotate180(&source),
            Rotation::Deg270 => imageops::rotate270(&source),
        };
        let gray = pixel::to_gray_image(&pixels);
        Self { source, rotation, pixels, gray }
    }

    /// A new buffer turned a further `by` from this one, re-derived from the stored source.
    pub fn rotated(&self, by: Rotation) -> Self {
        let _span = info_span!("rotate", degrees = by.degrees()).entered();
        Self::with_rotation(self.source.clone(), self.rotation.then(by))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Interleaved RGBA samples, `width * height * 4` long.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Cached grayscale of the untouched pixels.
    pub fn grayscale(&self) -> &GrayImage {
        &self.gray
    }
}

/// Aspect-preserving single-pass downscale so the longer edge is at most `max_edge`.
/// Never upscales.
fn cap_longer_edge(image: RgbaImage, max_edge: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let longest = w.max(h);

    if longest <= max_edge {
        return image;
    }

    let scale = max_edge as f64 / longest as f64;
    let (new_w, new_h) = if w >= h {
        (max_edge, ((h as f64 * scale).round() as u32).max(1))
    } else {
        (((w as f64 * scale).round() as u32).max(1), max_edge)
    };

    let _span = info_span!("downscale", from_w = w, from_h = h, to_w = new_w, to_h = new_h).entered();
    debug!("Downscaling {}x{} to {}x{}", w, h, new_w, new_h);

    imageops::resize(&image, new_w, new_h, FilterType::Triangle)
}
