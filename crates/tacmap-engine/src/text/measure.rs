use crate::coords::Vec2;

use super::FontId;

/// Anything that can report the rendered extent of a string.
///
/// Returns `(width, height)` in pixels as a [`Vec2`]. Implementations must be
/// deterministic: the map view measures every label on every frame and relies
/// on identical input producing an identical callout.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    #[inline]
    fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        (**self).measure_text(text, font, size)
    }
}

/// Monospace metrics with no font file behind them.
///
/// Every character advances by `advance` pixels and every line is
/// `line_height` tall, regardless of the requested font or size. An empty
/// string still has a line height, matching how outline fonts measure.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedMetrics {
    #[inline]
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(7.0, 14.0)
    }
}

impl TextMeasure for FixedMetrics {
    fn measure_text(&self, text: &str, _font: FontId, _size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.advance, self.line_height)
    }
}
