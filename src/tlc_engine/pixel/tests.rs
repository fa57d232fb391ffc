#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use crate::tlc_engine::pixel::{
        apply_brightness_contrast,
        apply_threshold,
        contrast_factor,
        current_display,
        current_gray,
        gray_value,
        to_gray_image,
        to_grayscale,
        AdjustmentParams,
    };
    use crate::tlc_engine::raster::RasterBuffer;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 13 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8, (x * 3 % 256) as u8])
        })
    }

    #[test]
    fn test_gray_value_weights() {
        assert_eq!(gray_value(0, 0, 0), 0);
        assert_eq!(gray_value(255, 255, 255), 255);
        assert_eq!(gray_value(255, 0, 0), 76); // 76.245
        assert_eq!(gray_value(0, 255, 0), 150); // 149.685
        assert_eq!(gray_value(0, 0, 255), 29); // 29.07
    }

    #[test]
    fn test_grayscale_length_matches_pixel_count() {
        let image = gradient(7, 5);
        assert_eq!(to_grayscale(&image).len(), 35);
    }

    #[test]
    fn test_zero_brightness_contrast_is_identity() {
        let image = gradient(16, 16);
        assert_eq!(contrast_factor(0), 1.0);
        assert_eq!(apply_brightness_contrast(&image, 0, 0), image);
    }

    #[test]
    fn test_brightness_offsets_and_clamps() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([10, 128, 250, 42]));
        let out = apply_brightness_contrast(&image, 20, 0);
        assert_eq!(out.get_pixel(0, 0), &Rgba([30, 148, 255, 42]));

        let out = apply_brightness_contrast(&image, -255, 0);
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 42]));
    }

    #[test]
    fn test_contrast_stretches_around_midpoint() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([100, 128, 156, 255]));
        // factor(128) = 259 * 383 / (255 * 131) = 2.9696...
        let out = apply_brightness_contrast(&image, 0, 128);
        let factor = contrast_factor(128);
        let expected_low = (factor * -28.0 + 128.0).round() as u8;
        let expected_high = (factor * 28.0 + 128.0).round() as u8;
        assert_eq!(out.get_pixel(0, 0), &Rgba([expected_low, 128, expected_high, 255]));
    }

    #[test]
    fn test_contrast_factor_stays_finite_at_extremes() {
        assert!(contrast_factor(255).is_finite());
        assert!(contrast_factor(1000).is_finite());
        assert_eq!(contrast_factor(-255), 0.0);
    }

    #[test]
    fn test_threshold_binarises_with_opaque_alpha() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([127, 127, 127, 10]));
        image.put_pixel(1, 0, Rgba([128, 128, 128, 10]));

        let out = apply_threshold(&image, 128);
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_transforms_leave_input_untouched() {
        let image = gradient(8, 8);
        let copy = image.clone();
        let _ = apply_brightness_contrast(&image, 50, 50);
        let _ = apply_threshold(&image, 100);
        assert_eq!(image, copy);
    }

    #[test]
    fn test_current_display_priority() {
        let image = gradient(8, 4);
        let raster = RasterBuffer::from_rgba(image.clone(), 1920).unwrap();
        let mut params = AdjustmentParams::default();

        assert!(matches!(current_display(&raster, &params), std::borrow::Cow::Borrowed(_)));

        params.set_brightness(40);
        assert_eq!(*current_display(&raster, &params), apply_brightness_contrast(&image, 40, 0));

        params.set_threshold(true, 90);
        assert_eq!(*current_display(&raster, &params), apply_threshold(&image, 90));

        assert_eq!(raster.pixels(), &image);
    }

    #[test]
    fn test_params_clamp_ranges() {
        let mut params = AdjustmentParams::default();
        params.set_brightness(400);
        params.set_contrast(-999);
        assert_eq!(params.brightness(), 255);
        assert_eq!(params.contrast(), -255);
        assert!(params.has_brightness_contrast());
    }

    #[test]
    fn test_gray_image_matches_grayscale_bytes() {
        let image = gradient(9, 6);
        let gray = to_gray_image(&image);
        assert_eq!(gray.dimensions(), (9, 6));
        assert_eq!(gray.into_raw(), to_grayscale(&image));
    }

    #[test]
    fn test_current_gray_follows_display() {
        let raster = RasterBuffer::from_rgba(gradient(12, 9), 1920).unwrap();
        let mut params = AdjustmentParams::default();

        let untouched = current_gray(&raster, &params);
        assert!(matches!(untouched, std::borrow::Cow::Borrowed(_)));
        assert_eq!(untouched.as_raw(), &to_grayscale(raster.pixels()));

        params.set_contrast(60);
        let adjusted = current_gray(&raster, &params);
        assert!(matches!(adjusted, std::borrow::Cow::Owned(_)));
        assert_eq!(adjusted.as_raw(), &to_grayscale(&current_display(&raster, &params)));

        params.set_threshold(true, 100);
        let binary = current_gray(&raster, &params);
        assert!(binary.as_raw().iter().all(|&v| v == 0 || v == 255));
    }
}
