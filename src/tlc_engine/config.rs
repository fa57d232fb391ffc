//! Engine configuration types

/// Default cap on the longer edge of a loaded image, in pixels
pub const DEFAULT_MAX_EDGE: u32 = 1920;

/// Default lane band width in pixels
pub const DEFAULT_LANE_WIDTH: u32 = 20;

/// How spot labels are drawn next to their markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelOrientation {
    /// Text runs left to right beside the marker
    #[default]
    Horizontal,
    /// Text is rotated 90° and stacked above (or below) the marker
    Vertical,
}

/// Settings consumed on the next render, export or load
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Decimals used when formatting Rf in labels and CSV output
    pub label_decimals: usize,
    /// Label placement mode
    pub label_orientation: LabelOrientation,
    /// Lane band width given to new plates and to a fresh flat geometry
    pub lane_width: u32,
    /// Label font size in pixels; drives the measured label boxes
    pub label_font_size: f64,
    /// Longer-edge cap applied when an image is loaded
    pub max_edge: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            label_decimals: 2,
            label_orientation: LabelOrientation::Horizontal,
            lane_width: DEFAULT_LANE_WIDTH,
            label_font_size: 14.0,
            max_edge: DEFAULT_MAX_EDGE,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for EngineConfig
#[derive(Default)]
pub struct EngineConfigBuilder {
    label_decimals: Option<usize>,
    label_orientation: Option<LabelOrientation>,
    lane_width: Option<u32>,
    label_font_size: Option<f64>,
    max_edge: Option<u32>,
}

impl EngineConfigBuilder {
    pub fn label_decimals(mut self, decimals: usize) -> Self {
        self.label_decimals = Some(decimals);
        self
    }

    pub fn label_orientation(mut self, orientation: LabelOrientation) -> Self {
        self.label_orientation = Some(orientation);
        self
    }

    /// Zero is ignored; lanes are always at least one pixel wide.
    pub fn lane_width(mut self, width: u32) -> Self {
        if width > 0 {
            self.lane_width = Some(width);
        }
        self
    }

    pub fn label_font_size(mut self, size: f64) -> Self {
        if size > 0.0 {
            self.label_font_size = Some(size);
        }
        self
    }

    pub fn max_edge(mut self, max_edge: u32) -> Self {
        if max_edge > 0 {
            self.max_edge = Some(max_edge);
        }
        self
    }

    pub fn build(self) -> EngineConfig {
        let default = EngineConfig::default();
        EngineConfig {
            label_decimals: self.label_decimals.unwrap_or(default.label_decimals),
            label_orientation: self.label_orientation.unwrap_or(default.label_orientation),
            lane_width: self.lane_width.unwrap_or(default.lane_width),
            label_font_size: self.label_font_size.unwrap_or(default.label_font_size),
            max_edge: self.max_edge.unwrap_or(default.max_edge),
        }
    }
}
