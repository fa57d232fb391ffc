#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};
    use crate::tlc_engine::common::error::EngineError;
    use crate::tlc_engine::raster::{ImageCrateReader, RasterBuffer, Rotation, SourceReader, TiffSourceReader};

    fn marked(width: u32, height: u32) -> RgbaImage {
        let mut image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Deg270));
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::Deg270.then(Rotation::Deg180), Rotation::Deg90);
    }

    #[test]
    fn test_small_image_is_not_resized() {
        let raster = RasterBuffer::from_rgba(marked(40, 30), 1920).unwrap();
        assert_eq!(raster.dimensions(), (40, 30));
        assert_eq!(raster.as_raw().len(), 40 * 30 * 4);
        assert_eq!(raster.grayscale().len(), 40 * 30);
    }

    #[test]
    fn test_large_image_is_capped_preserving_aspect() {
        let raster = RasterBuffer::from_rgba(RgbaImage::new(400, 100), 200).unwrap();
        assert_eq!(raster.dimensions(), (200, 50));

        let raster = RasterBuffer::from_rgba(RgbaImage::new(99, 300), 200).unwrap();
        assert_eq!(raster.dimensions(), (66, 200));
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        let result = RasterBuffer::from_rgba(RgbaImage::new(0, 10), 1920);
        assert!(matches!(result, Err(EngineError::InvalidDimensions(0, 10))));
    }

    #[test]
    fn test_rotation_swaps_dimensions_and_moves_pixels() {
        let raster = RasterBuffer::from_rgba(marked(4, 2), 1920).unwrap();

        let quarter = raster.rotated(Rotation::Deg90);
        assert_eq!(quarter.dimensions(), (2, 4));
        assert_eq!(quarter.rotation(), Rotation::Deg90);
        // top-left goes to top-right under a clockwise quarter turn
        assert_eq!(quarter.pixels().get_pixel(1, 0), &Rgba([255, 0, 0, 255]));

        let half = quarter.rotated(Rotation::Deg90);
        assert_eq!(half.dimensions(), (4, 2));
        assert_eq!(half.pixels().get_pixel(3, 1), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_four_quarter_turns_restore_original() {
        let original = RasterBuffer::from_rgba(marked(5, 3), 1920).unwrap();
        let mut raster = original.clone();
        for _ in 0..4 {
            raster = raster.rotated(Rotation::Deg90);
        }
        assert_eq!(raster.rotation(), Rotation::Deg0);
        assert_eq!(raster.pixels(), original.pixels());
    }

    #[test]
    fn test_image_reader_decodes_png() {
        let mut bytes = Vec::new();
        marked(3, 2)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = ImageCrateReader.read_source(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_image_reader_rejects_garbage() {
        let result = ImageCrateReader.read_source(b"definitely not an image");
        assert!(result.is_err());
    }

    #[test]
    fn test_tiff_reader_reduces_16_bit_gray() {
        let mut bytes = Vec::new();
        {
            let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut bytes)).unwrap();
            encoder
                .write_image::<tiff::encoder::colortype::Gray16>(2, 1, &[0x1234, 0xFF00])
                .unwrap();
        }

        let decoded = TiffSourceReader.read_source(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([0x12, 0x12, 0x12, 255]));
        assert_eq!(decoded.get_pixel(1, 0), &Rgba([0xFF, 0xFF, 0xFF, 255]));
    }

    #[test]
    fn test_tiff_reader_rejects_garbage() {
        let result = TiffSourceReader.read_source(b"II*\0broken");
        assert!(matches!(result, Err(EngineError::DecodeError(_))));
    }
}
