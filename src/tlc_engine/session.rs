use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info, instrument};

use crate::tlc_engine::{
    annotate::{self, LabelPlacement, MonospaceMetrics, Overlay, TextMetrics},
    common::error::{EngineError, Result},
    common::shapes::{Point, Rect},
    config::EngineConfig,
    export,
    geometry::{CropDraft, Geometry, SpotRef},
    history::{UndoFrame, UndoHistory},
    pixel::{self, AdjustmentParams},
    quant::{self, ProfilePoint},
    raster::{ImageCrateReader, RasterBuffer, Rotation, SourceReader},
};

/// One document being measured: the loaded raster, its annotations, undo history and
/// display adjustments.
///
/// Everything runs synchronously on the caller's thread; a session is not meant to be
/// shared between callers without external serialisation.
pub struct AnalysisSession<R: SourceReader = ImageCrateReader> {
    reader: R,
    config: EngineConfig,
    metrics: Box<dyn TextMetrics>,
    raster: Option<RasterBuffer>,
    geometry: Geometry,
    history: UndoHistory,
    adjustments: AdjustmentParams,
    crop: Option<CropDraft>,
}

impl AnalysisSession<ImageCrateReader> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_reader(ImageCrateReader, config)
    }
}

impl<R: SourceReader> AnalysisSession<R> {
    pub fn with_reader(reader: R, config: EngineConfig) -> Self {
        let geometry = Geometry::new(config.lane_width);
        Self {
            reader,
            config,
            metrics: Box::new(MonospaceMetrics::default()),
            raster: None,
            geometry,
            history: UndoHistory::new(),
            adjustments: AdjustmentParams::default(),
            crop: None,
        }
    }

    // ---- loading ----

    /// Decodes `data` with the session's reader and installs it, discarding all annotations.
    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<(u32, u32)> {
        let image = {
            let _span = tracing::info_span!("decode_source").entered();
            self.reader.read_source(data)?
        };
        self.load_image(image)
    }

    /// Installs an already-decoded image, discarding all annotations.
    pub fn load_image(&mut self, image: RgbaImage) -> Result<(u32, u32)> {
        let raster = RasterBuffer::from_rgba(image, self.config.max_edge)?;
        let dimensions = raster.dimensions();
        self.install(raster);
        info!(width = dimensions.0, height = dimensions.1, "Image loaded");
        Ok(dimensions)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(u32, u32)> {
        let path = path.as_ref();
        info!(input = %path.display(), "Loading image file");
        let data = std::fs::read(path).map_err(|e| {
            EngineError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.load_bytes(&data)
    }

    /// Turns the image by a multiple of 90° (clockwise), re-deriving pixels from the
    /// as-loaded source. Annotations never survive a rotation. Returns `false` when no image
    /// is loaded or the angle is not a multiple of 90.
    pub fn rotate(&mut self, degrees: i32) -> bool {
        let (Some(by), Some(raster)) = (Rotation::from_degrees(degrees), self.raster.as_ref()) else {
            debug!(degrees, "Rotation ignored");
            return false;
        };
        let rotated = raster.rotated(by);
        info!(
            total = rotated.rotation().degrees(),
            width = rotated.width(),
            height = rotated.height(),
            "Image rotated"
        );
        self.install(rotated);
        true
    }

    fn install(&mut self, raster: RasterBuffer) {
        self.raster = Some(raster);
        self.geometry = Geometry::new(self.config.lane_width);
        self.history.clear();
        self.adjustments = AdjustmentParams::default();
        self.crop = None;
    }

    // ---- accessors and settings ----

    pub fn raster(&self) -> Option<&RasterBuffer> {
        self.raster.as_ref()
    }

    pub fn rotation(&self) -> Rotation {
        self.raster.as_ref().map(|r| r.rotation()).unwrap_or_default()
    }

    pub fn image_rect(&self) -> Option<Rect> {
        self.raster
            .as_ref()
            .map(|r| Rect::new(0, 0, r.width() as i32, r.height() as i32))
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Takes effect on the next render, profile or export. Stored Rf values are untouched.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn set_text_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
    }

    pub fn adjustments(&self) -> &AdjustmentParams {
        &self.adjustments
    }

    pub fn set_brightness(&mut self, brightness: i32) {
        self.adjustments.set_brightness(brightness);
    }

    pub fn set_contrast(&mut self, contrast: i32) {
        self.adjustments.set_contrast(contrast);
    }

    pub fn set_threshold(&mut self, enabled: bool, value: u8) {
        self.adjustments.set_threshold(enabled, value);
    }

    /// The buffer to present: thresholded, adjusted or untouched.
    pub fn display(&self) -> Option<Cow<'_, RgbaImage>> {
        self.raster
            .as_ref()
            .map(|raster| pixel::current_display(raster, &self.adjustments))
    }

    // ---- geometry edits ----

    /// Runs `op` on the geometry and records the prior state only if `op` reports a change.
    fn edit(&mut self, name: &'static str, op: impl FnOnce(&mut Geometry) -> bool) -> bool {
        let before = self.geometry.clone();
        if op(&mut self.geometry) {
            self.history.push(UndoFrame { geometry: before });
            debug!(op = name, "Geometry edited");
            true
        } else {
            debug!(op = name, "Edit ignored");
            false
        }
    }

    pub fn set_origin_y(&mut self, y: i32) {
        self.edit("set_origin_y", |g| {
            g.active_mut().set_origin_y(y);
            true
        });
    }

    pub fn set_front_y(&mut self, y: i32) {
        self.edit("set_front_y", |g| {
            g.active_mut().set_front_y(y);
            true
        });
    }

    pub fn set_lane_x(&mut self, x: i32) {
        self.edit("set_lane_x", |g| {
            g.active_mut().set_lane_x(x);
            true
        });
    }

    pub fn set_lane_width(&mut self, width: u32) -> bool {
        self.edit("set_lane_width", |g| g.active_mut().set_lane_width(width))
    }

    pub fn add_spot(&mut self, x: i32, y: i32) {
        self.edit("add_spot", |g| {
            g.active_mut().add_spot(x, y);
            true
        });
    }

    pub fn move_spot(&mut self, index: usize, x: i32, y: i32) -> bool {
        self.edit("move_spot", |g| g.active_mut().move_spot(index, x, y))
    }

    pub fn delete_spot(&mut self, index: usize) -> bool {
        self.edit("delete_spot", |g| g.active_mut().delete_spot(index))
    }

    pub fn set_label_offset(&mut self, index: usize, dx: i32, dy: i32) -> bool {
        self.edit("set_label_offset", |g| g.active_mut().set_label_offset(index, dx, dy))
    }

    /// Drops every line, lane, spot and plate.
    pub fn clear_annotations(&mut self) -> bool {
        self.edit("clear_annotations", Geometry::clear)
    }

    pub fn select_plate(&mut self, index: usize) -> bool {
        self.edit("select_plate", |g| g.select_plate(index))
    }

    pub fn delete_plate(&mut self, index: usize) -> bool {
        let lane_width = self.config.lane_width;
        self.edit("delete_plate", |g| g.delete_plate(index, lane_width))
    }

    /// Recomputes every stored Rf from the current lines.
    pub fn recalculate(&mut self) {
        self.geometry.recompute_rf();
    }

    // ---- plate cropping ----

    pub fn start_crop(&mut self, x: f64, y: f64) {
        self.crop = Some(CropDraft::start(x, y));
    }

    pub fn update_crop(&mut self, x: f64, y: f64) {
        if let Some(draft) = self.crop.as_mut() {
            draft.update(x, y);
        }
    }

    pub fn cancel_crop(&mut self) {
        self.crop = None;
    }

    pub fn crop(&self) -> Option<&CropDraft> {
        self.crop.as_ref()
    }

    /// Turns the dragged rectangle into a new active plate. Fails without touching anything
    /// when no rectangle is being dragged or either edge is under 10 pixels.
    pub fn add_plate_from_crop(&mut self) -> bool {
        let Some(rect) = self.crop.as_ref().and_then(CropDraft::accepted_rect) else {
            debug!("Crop rejected");
            return false;
        };
        let lane_width = self.config.lane_width;
        self.edit("add_plate", |g| {
            g.add_plate(rect, lane_width);
            true
        });
        self.crop = None;
        true
    }

    // ---- undo ----

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.geometry)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }

    // ---- quantification ----

    /// Lane profile over the displayed buffer. `None` without an image.
    pub fn intensity_profile(&self, lane_x: i32, lane_width: u32, start_y: i32, end_y: i32) -> Option<Vec<ProfilePoint>> {
        let raster = self.raster.as_ref()?;
        let gray = pixel::current_gray(raster, &self.adjustments);
        Some(quant::intensity_profile(&gray, lane_x, lane_width, start_y, end_y))
    }

    /// Profile of the active lane from the origin line (or the bottom of the active plate)
    /// to the front line (or its top), clamped to the image. `None` without an image or lane.
    pub fn profile(&self) -> Option<Vec<ProfilePoint>> {
        let image = self.image_rect()?;
        let state = self.geometry.active();
        let lane_x = state.lane_x?;
        let bounds = self.geometry.active_bounds(image);
        let last_row = image.h - 1;

        let start_y = state.origin_y.unwrap_or(bounds.bottom().saturating_sub(1)).clamp(0, last_row);
        let end_y = state.front_y.unwrap_or(bounds.y).clamp(0, last_row);
        self.intensity_profile(lane_x, state.lane_width, start_y, end_y)
    }

    // ---- annotation ----

    /// Label placements for the current geometry; empty without an image.
    pub fn layout(&self) -> Vec<LabelPlacement> {
        match self.image_rect() {
            Some(image) => annotate::layout_labels(&self.geometry, image, &self.config, self.metrics.as_ref()),
            None => Vec::new(),
        }
    }

    pub fn render(&self) -> Overlay {
        match self.image_rect() {
            Some(image) => annotate::build_overlay(
                &self.geometry,
                self.crop.as_ref(),
                image,
                &self.config,
                self.metrics.as_ref(),
            ),
            None => Overlay::default(),
        }
    }

    pub fn hit_test_spot(&self, x: f64, y: f64) -> Option<SpotRef> {
        annotate::hit_test_spot(&self.geometry, x, y)
    }

    pub fn hit_test_label(&self, x: f64, y: f64) -> Option<SpotRef> {
        annotate::hit_test_label(&self.layout(), x, y)
    }

    /// Maps a point on a surface presented at `display_size` to buffer pixels.
    pub fn canvas_coords(&self, display_point: (f64, f64), display_size: (f64, f64)) -> Option<Point> {
        let raster = self.raster.as_ref()?;
        annotate::canvas_coords(display_point, display_size, raster.dimensions())
    }

    // ---- export ----

    pub fn export_csv<W: Write>(&self, output: W) -> Result<()> {
        export::write_csv(&self.geometry, self.config.label_decimals, output)
    }

    pub fn export_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| {
            EngineError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.export_csv(file)?;
        info!(output = %path.display(), spots = self.geometry.spot_count(), "CSV exported");
        Ok(())
    }
}
