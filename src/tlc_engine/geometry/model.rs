use tracing::debug;
use crate::tlc_engine::common::shapes::{Rect, RectF};
use crate::tlc_engine::geometry::types::{CropDraft, Geometry, PlateRegion, PlateSet, PlateState, PlateView, Spot};
use crate::tlc_engine::quant;

/// Smallest accepted plate edge, in pixels
pub const MIN_PLATE_SIZE: i32 = 10;

impl PlateState {
    pub fn new(lane_width: u32) -> Self {
        Self {
            origin_y: None,
            front_y: None,
            spots: Vec::new(),
            lane_x: None,
            lane_width: lane_width.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.origin_y.is_none() && self.front_y.is_none() && self.lane_x.is_none() && self.spots.is_empty()
    }

    /// Rf for a row given this plate's lines.
    pub fn rf_at(&self, y: i32) -> Option<f64> {
        match (self.origin_y, self.front_y) {
            (Some(origin), Some(front)) => quant::rf(origin, front, y),
            _ => None,
        }
    }

    /// Refreshes every stored Rf from the current lines.
    pub fn recompute_rf(&mut self) {
        let (origin, front) = (self.origin_y, self.front_y);
        for spot in &mut self.spots {
            spot.rf = match (origin, front) {
                (Some(origin), Some(front)) => quant::rf(origin, front, spot.y),
                _ => None,
            };
        }
    }

    pub fn set_origin_y(&mut self, y: i32) {
        self.origin_y = Some(y);
        self.recompute_rf();
    }

    pub fn set_front_y(&mut self, y: i32) {
        self.front_y = Some(y);
        self.recompute_rf();
    }

    pub fn set_lane_x(&mut self, x: i32) {
        self.lane_x = Some(x);
    }

    pub fn set_lane_width(&mut self, width: u32) -> bool {
        if width == 0 || width == self.lane_width {
            return false;
        }
        self.lane_width = width;
        true
    }

    pub fn add_spot(&mut self, x: i32, y: i32) {
        let mut spot = Spot::new(x, y);
        spot.rf = self.rf_at(y);
        self.spots.push(spot);
    }

    pub fn move_spot(&mut self, index: usize, x: i32, y: i32) -> bool {
        let rf = self.rf_at(y);
        match self.spots.get_mut(index) {
            Some(spot) => {
                spot.x = x;
                spot.y = y;
                spot.rf = rf;
                true
            }
            None => false,
        }
    }

    pub fn delete_spot(&mut self, index: usize) -> bool {
        if index >= self.spots.len() {
            return false;
        }
        self.spots.remove(index);
        true
    }

    pub fn set_label_offset(&mut self, index: usize, dx: i32, dy: i32) -> bool {
        match self.spots.get_mut(index) {
            Some(spot) => {
                spot.label_offset = (dx, dy);
                true
            }
            None => false,
        }
    }
}

impl PlateSet {
    fn new(first: PlateRegion) -> Self {
        Self {
            plates: vec![first],
            active: 0,
        }
    }

    pub fn plates(&self) -> &[PlateRegion] {
        &self.plates
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &PlateRegion {
        &self.plates[self.active]
    }

    fn active_mut(&mut self) -> &mut PlateRegion {
        &mut self.plates[self.active]
    }

    fn push(&mut self, region: PlateRegion) {
        self.plates.push(region);
        self.active = self.plates.len() - 1;
    }

    fn select(&mut self, index: usize) -> bool {
        if index >= self.plates.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Removes a plate unless it is the last one. `active` shifts down when an earlier
    /// plate goes and clamps to the last plate on overflow.
    fn remove(&mut self, index: usize) -> bool {
        if index >= self.plates.len() || self.plates.len() == 1 {
            return false;
        }
        self.plates.remove(index);
        if index < self.active {
            self.active -= 1;
        }
        if self.active >= self.plates.len() {
            self.active = self.plates.len() - 1;
        }
        true
    }
}

impl Geometry {
    pub fn new(lane_width: u32) -> Self {
        Geometry::Flat(PlateState::new(lane_width))
    }

    pub fn is_partitioned(&self) -> bool {
        matches!(self, Geometry::Partitioned(_))
    }

    pub fn plates(&self) -> &[PlateRegion] {
        match self {
            Geometry::Flat(_) => &[],
            Geometry::Partitioned(set) => set.plates(),
        }
    }

    pub fn active_plate_index(&self) -> Option<usize> {
        match self {
            Geometry::Flat(_) => None,
            Geometry::Partitioned(set) => Some(set.active_index()),
        }
    }

    /// The plate edits currently target.
    pub fn active(&self) -> &PlateState {
        match self {
            Geometry::Flat(state) => state,
            Geometry::Partitioned(set) => &set.active().state,
        }
    }

    pub fn active_mut(&mut self) -> &mut PlateState {
        match self {
            Geometry::Flat(state) => state,
            Geometry::Partitioned(set) => &mut set.active_mut().state,
        }
    }

    /// Rectangle of the active plate, or `image` in flat mode.
    pub fn active_bounds(&self, image: Rect) -> Rect {
        match self {
            Geometry::Flat(_) => image,
            Geometry::Partitioned(set) => set.active().rect,
        }
    }

    /// Every plate in draw order.
    pub fn views(&self) -> Vec<PlateView<'_>> {
        match self {
            Geometry::Flat(state) => vec![PlateView {
                index: None,
                rect: None,
                state,
            }],
            Geometry::Partitioned(set) => set
                .plates()
                .iter()
                .enumerate()
                .map(|(i, plate)| PlateView {
                    index: Some(i),
                    rect: Some(plate.rect),
                    state: &plate.state,
                })
                .collect(),
        }
    }

    pub fn spot_count(&self) -> usize {
        self.views().iter().map(|v| v.state.spots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Flat(state) => state.is_empty(),
            Geometry::Partitioned(_) => false,
        }
    }

    pub fn recompute_rf(&mut self) {
        match self {
            Geometry::Flat(state) => state.recompute_rf(),
            Geometry::Partitioned(set) => {
                for plate in &mut set.plates {
                    plate.state.recompute_rf();
                }
            }
        }
    }

    /// Appends a plate and makes it active. Leaving flat mode discards the flat annotations.
    pub fn add_plate(&mut self, rect: Rect, lane_width: u32) {
        let region = PlateRegion {
            rect,
            state: PlateState::new(lane_width),
        };
        match self {
            Geometry::Flat(_) => *self = Geometry::Partitioned(PlateSet::new(region)),
            Geometry::Partitioned(set) => set.push(region),
        }
        debug!(x = rect.x, y = rect.y, w = rect.w, h = rect.h, "Plate added");
    }

    pub fn select_plate(&mut self, index: usize) -> bool {
        match self {
            Geometry::Partitioned(set) => set.select(index),
            Geometry::Flat(_) => false,
        }
    }

    /// Removes a plate and keeps the active index pointing at a valid plate. Removing the
    /// final plate yields an empty flat geometry using `lane_width`.
    pub fn delete_plate(&mut self, index: usize, lane_width: u32) -> bool {
        let Geometry::Partitioned(set) = self else {
            return false;
        };
        if index >= set.plates.len() {
            return false;
        }
        if set.plates.len() == 1 {
            *self = Geometry::new(lane_width);
            return true;
        }
        set.remove(index)
    }

    /// Resets to an empty flat geometry, keeping the active lane width.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let lane_width = self.active().lane_width;
        *self = Geometry::new(lane_width);
        true
    }
}

impl CropDraft {
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            start: (x, y),
            rect: None,
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.rect = Some(RectF::from_corners(self.start.0, self.start.1, x, y));
    }

    /// The rounded rectangle when both edges reach [`MIN_PLATE_SIZE`].
    pub fn accepted_rect(&self) -> Option<Rect> {
        let rect = self.rect?.round();
        if rect.w < MIN_PLATE_SIZE || rect.h < MIN_PLATE_SIZE {
            return None;
        }
        Some(rect)
    }
}
