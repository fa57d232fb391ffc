//! Display adjustment parameters

pub const BRIGHTNESS_RANGE: (i32, i32) = (-255, 255);
pub const CONTRAST_RANGE: (i32, i32) = (-255, 255);
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Brightness, contrast and threshold settings.
///
/// These only ever shape the derived display buffer; the stored raster is not touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustmentParams {
    brightness: i32,
    contrast: i32,
    pub threshold_enabled: bool,
    pub threshold_value: u8,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            threshold_enabled: false,
            threshold_value: DEFAULT_THRESHOLD,
        }
    }
}

impl AdjustmentParams {
    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    pub fn contrast(&self) -> i32 {
        self.contrast
    }

    pub fn set_brightness(&mut self, brightness: i32) {
        self.brightness = brightness.clamp(BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1);
    }

    pub fn set_contrast(&mut self, contrast: i32) {
        self.contrast = contrast.clamp(CONTRAST_RANGE.0, CONTRAST_RANGE.1);
    }

    pub fn set_threshold(&mut self, enabled: bool, value: u8) {
        self.threshold_enabled = enabled;
        self.threshold_value = value;
    }

    pub fn has_brightness_contrast(&self) -> bool {
        self.brightness != 0 || self.contrast != 0
    }
}
