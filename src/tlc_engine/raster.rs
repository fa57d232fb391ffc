//! Raster storage module
//!
//! Decoding sources into RGBA, capping their size, and keeping the as-loaded pixels
//! around so rotation always starts from the original rather than a derived buffer.

mod reader;
mod image_reader;
mod tiff_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::SourceReader;
pub use image_reader::ImageCrateReader;
pub use tiff_reader::TiffSourceReader;
pub use types::{RasterBuffer, Rotation};
