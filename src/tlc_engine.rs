//! TLC plate annotation and quantification engine
//!
//! This module holds everything needed to measure a chromatography plate photo:
//! the loaded raster and its display adjustments, the plate/spot geometry with its
//! undo history, Rf and lane-profile computation, and label layout plus hit-testing
//! for whatever surface presents the overlay.

pub mod common;
pub mod config;
pub mod raster;
pub mod pixel;
pub mod geometry;
pub mod history;
pub mod quant;
pub mod annotate;
pub mod export;
pub mod session;

pub use common::{
    EngineError,
    Result,
    Point,
    Rect,
    RectF,
};

pub use config::{
    EngineConfig,
    EngineConfigBuilder,
    LabelOrientation,
};

pub use raster::{
    RasterBuffer,
    Rotation,
    SourceReader,
    ImageCrateReader,
    TiffSourceReader,
};

pub use pixel::AdjustmentParams;

pub use geometry::{
    CropDraft,
    Geometry,
    PlateRegion,
    PlateSet,
    PlateState,
    Spot,
    SpotRef,
};

pub use history::{UndoFrame, UndoHistory};

pub use quant::{ProfilePoint, intensity_profile, rf};

pub use annotate::{
    LabelPlacement,
    MonospaceMetrics,
    Overlay,
    OverlayCommand,
    TextAlign,
    TextMetrics,
    canvas_coords,
    layout_labels,
};

pub use session::AnalysisSession;
