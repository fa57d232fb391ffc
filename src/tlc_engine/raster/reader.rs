use image::RgbaImage;
use crate::tlc_engine::common::error::Result;

pub trait SourceReader {
    fn read_source(&self, data: &[u8]) -> Result<RgbaImage>;
}
