use crate::tlc_engine::common::shapes::Point;

/// Maps a point on the presented surface to buffer pixels using independent X and Y scale
/// factors. `None` when the presented size is degenerate.
pub fn canvas_coords(display_point: (f64, f64), display_size: (f64, f64), buffer_size: (u32, u32)) -> Option<Point> {
    let (dw, dh) = display_size;
    if dw <= 0.0 || dh <= 0.0 {
        return None;
    }
    let scale_x = buffer_size.0 as f64 / dw;
    let scale_y = buffer_size.1 as f64 / dh;
    Some(Point::new(
        (display_point.0 * scale_x).round() as i32,
        (display_point.1 * scale_y).round() as i32,
    ))
}
