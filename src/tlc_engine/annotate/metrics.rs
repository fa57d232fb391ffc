/// Measures label text for layout. Presentation surfaces with real fonts can supply their own.
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
    fn text_height(&self, font_size: f64) -> f64;
}

/// Fixed advance per character, a fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    pub advance_ratio: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * self.advance_ratio
    }

    fn text_height(&self, font_size: f64) -> f64 {
        font_size
    }
}
