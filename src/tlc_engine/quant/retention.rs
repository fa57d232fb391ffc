/// Stored Rf values are rounded to this many parts (three decimals).
pub const RF_SCALE: f64 = 1000.0;

/// Retention factor of a spot at row `spot_y`, rounded to three decimals.
///
/// `None` when the origin and front coincide. Spots below the origin or above the front
/// give values outside `[0, 1]` and are returned as-is.
pub fn rf(origin_y: i32, front_y: i32, spot_y: i32) -> Option<f64> {
    if origin_y == front_y {
        return None;
    }
    let travelled = (origin_y as i64 - spot_y as i64) as f64;
    let reference = (origin_y as i64 - front_y as i64) as f64;
    Some((travelled / reference * RF_SCALE).round() / RF_SCALE)
}
