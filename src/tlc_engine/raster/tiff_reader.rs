//! Source reader for scientific TIFF exports using the tiff library.
//!
//! Plate scanners and gel/TLC imagers commonly write 16-bit grayscale TIFFs, which are
//! reduced here to the 8-bit RGBA layout the rest of the engine works on.

use std::io::Cursor;

use image::RgbaImage;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;
use crate::tlc_engine::common::error::{EngineError, Result};
use crate::tlc_engine::raster::reader::SourceReader;

pub struct TiffSourceReader;

/// Bits dropped when reducing a 16-bit sample to 8 bits.
const U16_TO_U8_SHIFT: u32 = 8;

impl SourceReader for TiffSourceReader {
    /// Decodes an 8- or 16-bit gray, gray+alpha, RGB or RGBA TIFF.
    ///
    /// 16-bit samples keep their high byte. Any other sample layout is reported as
    /// [`EngineError::UnsupportedFormat`].
    fn read_source(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding TIFF source, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| EngineError::DecodeError(e.to_string()))?;
        let (width, height) = decoder
            .dimensions()
            .map_err(|e| EngineError::DecodeError(e.to_string()))?;
        let color = decoder
            .colortype()
            .map_err(|e| EngineError::DecodeError(e.to_string()))?;

        let channels = match color {
            ColorType::Gray(8 | 16) => 1,
            ColorType::GrayA(8 | 16) => 2,
            ColorType::RGB(8 | 16) => 3,
            ColorType::RGBA(8 | 16) => 4,
            other => return Err(EngineError::UnsupportedFormat(format!("{:?}", other))),
        };

        let samples: Vec<u8> = match decoder
            .read_image()
            .map_err(|e| EngineError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(values) => values,
            DecodingResult::U16(values) => values.iter().map(|&v| (v >> U16_TO_U8_SHIFT) as u8).collect(),
            _ => return Err(EngineError::UnsupportedFormat(format!("{:?} sample type", color))),
        };

        debug!("Decoded TIFF: {}x{}, {} channel(s)", width, height, channels);

        let expected = width as usize * height as usize * channels;
        if samples.len() < expected {
            return Err(EngineError::DecodeError(format!(
                "expected {} samples, got {}",
                expected,
                samples.len()
            )));
        }

        let rgba: Vec<u8> = samples[..expected]
            .chunks_exact(channels)
            .flat_map(|px| match *px {
                [g] => [g, g, g, 255],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => [0, 0, 0, 255],
            })
            .collect();

        RgbaImage::from_raw(width, height, rgba)
            .ok_or(EngineError::InvalidDimensions(width, height))
    }
}
