//! Geometry model types

use crate::tlc_engine::common::shapes::{Rect, RectF};

/// A spot marked by the operator, in buffer pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub x: i32,
    pub y: i32,
    /// Retention factor at three-decimal precision; `None` while the lines are missing or equal
    pub rf: Option<f64>,
    /// Manual label displacement from the marker
    pub label_offset: (i32, i32),
}

impl Spot {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            rf: None,
            label_offset: (0, 0),
        }
    }
}

/// Measurement lines, lane and spots of one plate
#[derive(Debug, Clone, PartialEq)]
pub struct PlateState {
    pub origin_y: Option<i32>,
    pub front_y: Option<i32>,
    pub spots: Vec<Spot>,
    pub lane_x: Option<i32>,
    pub lane_width: u32,
}

/// A rectangular sub-area of the image measured on its own
#[derive(Debug, Clone, PartialEq)]
pub struct PlateRegion {
    pub rect: Rect,
    pub state: PlateState,
}

/// Non-empty list of plates with one of them active.
///
/// Only the geometry module builds or edits it, so `active` always indexes a plate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateSet {
    pub(super) plates: Vec<PlateRegion>,
    pub(super) active: usize,
}

/// Whole-image annotation state.
///
/// Removing the last plate of a `Partitioned` geometry turns it back into an empty `Flat`.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Flat(PlateState),
    Partitioned(PlateSet),
}

/// Addresses a spot: `plate` is `None` in flat mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotRef {
    pub plate: Option<usize>,
    pub index: usize,
}

/// Borrowed view of one plate for layout and rendering.
#[derive(Debug, Clone, Copy)]
pub struct PlateView<'a> {
    pub index: Option<usize>,
    /// Plate rectangle, `None` for the flat plate
    pub rect: Option<Rect>,
    pub state: &'a PlateState,
}

/// A plate rectangle being dragged out. Not part of the undo history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropDraft {
    pub start: (f64, f64),
    pub rect: Option<RectF>,
}
