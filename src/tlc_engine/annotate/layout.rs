use crate::tlc_engine::common::shapes::{Point, Rect, RectF};
use crate::tlc_engine::config::{EngineConfig, LabelOrientation};
use crate::tlc_engine::geometry::{Geometry, Spot, SpotRef};
use crate::tlc_engine::annotate::metrics::TextMetrics;

/// Spot marker circle radius
pub const MARKER_RADIUS: f64 = 10.0;
/// Distance between a label anchor and the near edge of its text
pub const LABEL_GAP: f64 = 14.0;
/// Padding added around a text box to form its hit rectangle
pub const HIT_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at `text_origin`
    Left,
    /// Text ends at `text_origin`
    Right,
}

/// Where and how one spot label is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub spot: SpotRef,
    pub text: String,
    pub marker: Point,
    /// Marker position shifted by the manual label offset
    pub anchor: (f64, f64),
    /// Draw a leader line from `marker` to `anchor`
    pub leader: bool,
    /// Baseline start (or end for [`TextAlign::Right`]); for rotated text the point the
    /// upward-reading text starts from
    pub text_origin: (f64, f64),
    pub align: TextAlign,
    /// Text reads bottom-to-top, rotated 90°
    pub rotated: bool,
    /// Measured text box
    pub bounds: RectF,
    /// `bounds` grown by [`HIT_MARGIN`]
    pub hit_rect: RectF,
}

/// `#<n> Rf=<rf>` with `n` 1-based, or just `#<n>` while Rf is undefined.
pub fn label_text(number: usize, rf: Option<f64>, decimals: usize) -> String {
    match rf {
        Some(rf) => format!("#{} Rf={:.*}", number, decimals, rf),
        None => format!("#{}", number),
    }
}

/// Places every spot label inside its plate (or the image in flat mode), in draw order.
pub fn layout_labels(
    geometry: &Geometry,
    image: Rect,
    config: &EngineConfig,
    metrics: &dyn TextMetrics,
) -> Vec<LabelPlacement> {
    let mut placements = Vec::with_capacity(geometry.spot_count());
    for view in geometry.views() {
        let bounds = view.rect.unwrap_or(image).to_f64();
        for (index, spot) in view.state.spots.iter().enumerate() {
            let spot_ref = SpotRef {
                plate: view.index,
                index,
            };
            placements.push(place_label(spot_ref, spot, bounds, config, metrics));
        }
    }
    placements
}

fn place_label(
    spot_ref: SpotRef,
    spot: &Spot,
    bounds: RectF,
    config: &EngineConfig,
    metrics: &dyn TextMetrics,
) -> LabelPlacement {
    let text = label_text(spot_ref.index + 1, spot.rf, config.label_decimals);
    let font = config.label_font_size;
    let text_w = metrics.text_width(&text, font);
    let text_h = metrics.text_height(font);

    let (dx, dy) = spot.label_offset;
    let ax = spot.x as f64 + dx as f64;
    let ay = spot.y as f64 + dy as f64;

    // Single pass: at most one flip, no clamping afterwards.
    let (text_origin, align, rotated, text_box) = match config.label_orientation {
        LabelOrientation::Horizontal => {
            let start = ax + LABEL_GAP;
            let end = ax - LABEL_GAP;
            let top = ay - text_h / 2.0;
            if start + text_w > bounds.right() && end - text_w >= bounds.x {
                ((end, ay), TextAlign::Right, false, RectF::new(end - text_w, top, text_w, text_h))
            } else {
                ((start, ay), TextAlign::Left, false, RectF::new(start, top, text_w, text_h))
            }
        }
        LabelOrientation::Vertical => {
            let left = ax - text_h / 2.0;
            let above_top = ay - LABEL_GAP - text_w;
            let top = if above_top < bounds.y {
                ay + LABEL_GAP
            } else {
                above_top
            };
            ((ax, top + text_w), TextAlign::Left, true, RectF::new(left, top, text_h, text_w))
        }
    };

    LabelPlacement {
        spot: spot_ref,
        text,
        marker: Point::new(spot.x, spot.y),
        anchor: (ax, ay),
        leader: dx != 0 || dy != 0,
        text_origin,
        align,
        rotated,
        bounds: text_box,
        hit_rect: text_box.expand(HIT_MARGIN),
    }
}
