use image::GrayImage;
use tracing::debug;

/// One scanned row of a lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub row: i32,
    /// 0 at the lower bound of the scan, 1 at the upper bound
    pub distance: f64,
    /// Mean grayscale across the lane band, 0..=255
    pub intensity: f64,
}

/// Inclusive column range of a lane band clipped to the image, `None` when it lies entirely outside.
pub fn lane_columns(lane_x: i32, lane_width: u32, image_width: u32) -> Option<(i32, i32)> {
    let half = (lane_width / 2) as i64;
    let x0 = (lane_x as i64 - half).max(0);
    let x1 = (lane_x as i64 + half).min(image_width as i64 - 1);
    // Both ends lie in 0..image_width here, which fits i32.
    (x0 <= x1).then_some((x0 as i32, x1 as i32))
}

/// Averages grayscale across the lane band for every row between `start_y` and `end_y`
/// inclusive, top row first.
///
/// Always yields `|end_y - start_y| + 1` points. Rows outside the image, or a band that
/// misses the image entirely, read as zero intensity.
pub fn intensity_profile(
    gray: &GrayImage,
    lane_x: i32,
    lane_width: u32,
    start_y: i32,
    end_y: i32,
) -> Vec<ProfilePoint> {
    let (width, height) = gray.dimensions();
    let y_min = start_y.min(end_y);
    let y_max = start_y.max(end_y);
    let span = (y_max as i64 - y_min as i64) as f64;
    let columns = lane_columns(lane_x, lane_width, width);

    debug!(lane_x, lane_width, y_min, y_max, ?columns, "Computing lane profile");

    (y_min..=y_max)
        .map(|row| {
            let intensity = match columns {
                Some((x0, x1)) if row >= 0 && (row as u32) < height => {
                    let sum: u64 = (x0..=x1)
                        .map(|x| gray.get_pixel(x as u32, row as u32).0[0] as u64)
                        .sum();
                    sum as f64 / (x1 - x0 + 1) as f64
                }
                _ => 0.0,
            };
            let distance = if span > 0.0 {
                (y_max as i64 - row as i64) as f64 / span
            } else {
                0.0
            };
            ProfilePoint {
                row,
                distance,
                intensity,
            }
        })
        .collect()
}
