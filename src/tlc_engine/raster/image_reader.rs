//! Source reader backed by the `image` crate.

use tracing::debug;
use image::{ImageError, RgbaImage};
use crate::tlc_engine::common::error::{EngineError, Result};
use crate::tlc_engine::raster::reader::SourceReader;

/// Decodes any still-image format the `image` crate was built with
/// (PNG, JPEG, BMP, TIFF) and converts it to 8-bit RGBA.
pub struct ImageCrateReader;

impl SourceReader for ImageCrateReader {
    fn read_source(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding source image, {} bytes", data.len());

        let decoded = image::load_from_memory(data).map_err(|e| match e {
            ImageError::Unsupported(u) => EngineError::UnsupportedFormat(u.to_string()),
            other => EngineError::DecodeError(other.to_string()),
        })?;

        debug!("Decoded image: {}x{} ({:?})", decoded.width(), decoded.height(), decoded.color());
        Ok(decoded.into_rgba8())
    }
}
