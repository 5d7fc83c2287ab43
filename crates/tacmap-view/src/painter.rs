use tacmap_engine::coords::{PixelPoint, Rect, Vec2};
use tacmap_engine::paint::{Color, Stroke};
use tacmap_engine::scene::{DrawList, ZIndex};
use tacmap_engine::text::{FontId, TextMeasure};

/// Drawing context passed to [`MapView::paint`](crate::MapView::paint).
///
/// Wraps the engine's `DrawList` with the handful of primitives the map
/// needs, plus the text metrics used to lay out labels. Every command is
/// recorded on the painter's current layer.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    metrics: &'a dyn TextMeasure,
    layer: ZIndex,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, metrics: &'a dyn TextMeasure) -> Self {
        Self { draw_list, metrics, layer: ZIndex::OVERLAY }
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Layer for subsequently recorded commands.
    #[inline]
    pub fn set_layer(&mut self, layer: ZIndex) {
        self.layer = layer;
    }

    #[inline]
    pub fn layer(&self) -> ZIndex {
        self.layer
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Extent of `text` as it will be drawn: `x` = width, `y` = height.
    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.metrics.measure_text(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(self.layer, rect, color);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.draw_list.push_line(self.layer, from, to, stroke);
    }

    /// Closed polygon through integer vertices; filled first, then outlined.
    pub fn polygon(&mut self, points: &[PixelPoint], fill: Option<Color>, stroke: Option<Stroke>) {
        let points: Vec<Vec2> = points.iter().map(|p| p.to_vec2()).collect();
        self.draw_list.push_polygon(self.layer, points, fill, stroke);
    }

    /// Unscaled bitmap with its top-left at `origin`.
    pub fn image(&mut self, image: &str, origin: PixelPoint, width: u32, height: u32) {
        self.draw_list.push_image(
            self.layer,
            image,
            origin.to_vec2(),
            Vec2::new(width as f32, height as f32),
        );
    }

    /// Single-line text with its top-left at `origin`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.draw_list.push_text(self.layer, text, font, size, color, origin);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }
}
