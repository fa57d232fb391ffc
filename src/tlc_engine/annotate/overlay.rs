use crate::tlc_engine::common::shapes::{Point, Rect, RectF};
use crate::tlc_engine::config::EngineConfig;
use crate::tlc_engine::geometry::{CropDraft, Geometry};
use crate::tlc_engine::annotate::layout::{LabelPlacement, MARKER_RADIUS, layout_labels};
use crate::tlc_engine::annotate::metrics::TextMetrics;
use crate::tlc_engine::quant::lane_columns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Origin,
    Front,
}

/// One abstract drawing step, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCommand {
    PlateOutline { index: usize, rect: Rect, active: bool },
    Line { kind: LineKind, y: i32, x0: i32, x1: i32 },
    LaneBand { x0: i32, x1: i32, y0: i32, y1: i32 },
    Marker { center: Point, radius: f64 },
    Leader { from: Point, to: (f64, f64) },
    Label(LabelPlacement),
    /// Shade everything outside `rect` while a plate is being dragged out
    DimOutside { rect: RectF },
    CropOutline { rect: RectF },
}

/// Everything a presentation surface needs to draw over the display buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub commands: Vec<OverlayCommand>,
}

impl Overlay {
    pub fn labels(&self) -> impl Iterator<Item = &LabelPlacement> {
        self.commands.iter().filter_map(|c| match c {
            OverlayCommand::Label(label) => Some(label),
            _ => None,
        })
    }
}

pub fn build_overlay(
    geometry: &Geometry,
    crop: Option<&CropDraft>,
    image: Rect,
    config: &EngineConfig,
    metrics: &dyn TextMetrics,
) -> Overlay {
    let mut commands = Vec::new();
    let active = geometry.active_plate_index();

    for view in geometry.views() {
        let area = view.rect.unwrap_or(image);
        if let (Some(index), Some(rect)) = (view.index, view.rect) {
            commands.push(OverlayCommand::PlateOutline {
                index,
                rect,
                active: active == Some(index),
            });
        }

        let state = view.state;
        let lines = [(LineKind::Origin, state.origin_y), (LineKind::Front, state.front_y)];
        for (kind, y) in lines {
            if let Some(y) = y {
                commands.push(OverlayCommand::Line {
                    kind,
                    y,
                    x0: area.x,
                    x1: area.right(),
                });
            }
        }

        if let Some(lane_x) = state.lane_x {
            if let Some((x0, x1)) = lane_columns(lane_x, state.lane_width, image.w.max(1) as u32) {
                commands.push(OverlayCommand::LaneBand {
                    x0,
                    x1,
                    y0: area.y,
                    y1: area.bottom(),
                });
            }
        }
    }

    for label in layout_labels(geometry, image, config, metrics) {
        commands.push(OverlayCommand::Marker {
            center: label.marker,
            radius: MARKER_RADIUS,
        });
        if label.leader {
            commands.push(OverlayCommand::Leader {
                from: label.marker,
                to: label.anchor,
            });
        }
        commands.push(OverlayCommand::Label(label));
    }

    if let Some(rect) = crop.and_then(|draft| draft.rect) {
        commands.push(OverlayCommand::DimOutside { rect });
        commands.push(OverlayCommand::CropOutline { rect });
    }

    Overlay { commands }
}
