#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use crate::tlc_engine::quant::{intensity_profile, lane_columns, rf};

    /// Each row is a flat gray level equal to `row * 10`.
    fn row_ramp(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |_, y| Luma([(y * 10).min(255) as u8]))
    }

    #[test]
    fn test_rf_half_way() {
        assert_eq!(rf(100, 20, 60), Some(0.5));
    }

    #[test]
    fn test_rf_undefined_for_equal_lines() {
        assert_eq!(rf(50, 50, 10), None);
        assert_eq!(rf(0, 0, 0), None);
    }

    #[test]
    fn test_rf_rounds_to_three_decimals() {
        // 1/3 and 2/3 of the travel
        assert_eq!(rf(300, 0, 200), Some(0.333));
        assert_eq!(rf(300, 0, 100), Some(0.667));
        for (origin, front, spot) in [(100, 20, 33), (500, 7, 123), (10, 400, 77)] {
            let exact = (origin - spot) as f64 / (origin - front) as f64;
            assert_eq!(rf(origin, front, spot), Some((exact * 1000.0).round() / 1000.0));
        }
    }

    #[test]
    fn test_rf_outside_lines_is_not_clamped() {
        assert_eq!(rf(100, 20, 120), Some(-0.25));
        assert_eq!(rf(100, 20, 0), Some(1.25));
    }

    #[test]
    fn test_profile_length_and_distance_bounds() {
        let image = row_ramp(10, 20);
        let profile = intensity_profile(&image, 5, 4, 15, 3);

        assert_eq!(profile.len(), 13);
        assert_eq!(profile.first().map(|p| p.row), Some(3));
        assert_eq!(profile.first().map(|p| p.distance), Some(1.0));
        assert_eq!(profile.last().map(|p| p.distance), Some(0.0));
        assert!(profile.iter().all(|p| (0.0..=1.0).contains(&p.distance)));
    }

    #[test]
    fn test_profile_direction_does_not_matter() {
        let image = row_ramp(10, 20);
        assert_eq!(
            intensity_profile(&image, 5, 4, 2, 12),
            intensity_profile(&image, 5, 4, 12, 2)
        );
    }

    #[test]
    fn test_profile_single_row_has_zero_distance() {
        let image = row_ramp(10, 20);
        let profile = intensity_profile(&image, 5, 4, 7, 7);
        assert_eq!(profile.len(), 1);
        assert_eq!(profile[0].distance, 0.0);
        assert_eq!(profile[0].intensity, 70.0);
    }

    #[test]
    fn test_profile_averages_band_columns() {
        let mut image = GrayImage::from_pixel(6, 1, Luma([0]));
        image.put_pixel(1, 0, Luma([90]));
        image.put_pixel(2, 0, Luma([30]));

        // lane at x=2, width 2 -> columns 1..=3
        let profile = intensity_profile(&image, 2, 2, 0, 0);
        assert_eq!(profile[0].intensity, 40.0);
    }

    #[test]
    fn test_lane_columns_clip_to_image() {
        assert_eq!(lane_columns(0, 20, 100), Some((0, 10)));
        assert_eq!(lane_columns(95, 20, 100), Some((85, 99)));
        assert_eq!(lane_columns(-50, 20, 100), None);
        assert_eq!(lane_columns(5, 1, 100), Some((5, 5)));
    }

    #[test]
    fn test_profile_rows_outside_image_read_zero() {
        let image = row_ramp(4, 4);
        let profile = intensity_profile(&image, 1, 2, -2, 1);
        assert_eq!(profile.len(), 4);
        assert_eq!(profile[0].intensity, 0.0);
        assert_eq!(profile[1].intensity, 0.0);
        assert_eq!(profile[3].intensity, 10.0);
    }

    #[test]
    fn test_rf_extreme_rows_stay_finite() {
        let far = rf(100, -5, i32::MIN).unwrap();
        assert!(far.is_finite());
        assert!(far > 1.0);
        assert_eq!(rf(i32::MAX, i32::MIN, 0), Some(0.5));
        assert_eq!(rf(i32::MIN, i32::MAX, i32::MIN), Some(0.0));
    }

    #[test]
    fn test_lane_columns_extreme_lane() {
        assert_eq!(lane_columns(i32::MAX, u32::MAX, 100), Some((0, 99)));
        assert_eq!(lane_columns(i32::MAX, 20, 100), None);
        assert_eq!(lane_columns(i32::MIN, u32::MAX, 100), None);
    }

    #[test]
    fn test_profile_at_extreme_rows() {
        let image = row_ramp(4, 4);

        let top = intensity_profile(&image, i32::MAX, u32::MAX, i32::MAX - 2, i32::MAX);
        assert_eq!(top.iter().map(|p| p.distance).collect::<Vec<_>>(), vec![1.0, 0.5, 0.0]);
        assert!(top.iter().all(|p| p.intensity == 0.0));

        let bottom = intensity_profile(&image, i32::MIN, 2, i32::MIN, i32::MIN);
        assert_eq!(bottom.len(), 1);
        assert_eq!(bottom[0].row, i32::MIN);
        assert_eq!(bottom[0].distance, 0.0);
    }
}
