use tacmap_engine::paint::{Color, Stroke};
use tacmap_engine::text::FontId;

/// Brushes, pens and font shared by every render pass.
///
/// Built once when the host sets up its view and handed to each
/// [`MapView::paint`](crate::MapView::paint) call by reference. The value is
/// immutable and `Send + Sync`; hosts rendering from several threads can
/// share one instance behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResources {
    /// Translucent fill laid over the background image.
    pub darken: Color,
    pub grid_pen: Stroke,
    pub grid_text: Color,
    pub marker_fill: Color,
    pub marker_outline: Stroke,
    pub marker_text: Color,
    pub font: FontId,
    /// Font size in pixels, used for grid labels and marker labels alike.
    pub font_size: f32,
}

impl DrawResources {
    /// Standard palette: black at alpha 100 for dimming, white at alpha 125
    /// for the grid, white callouts with a black outline and black text.
    pub fn new(font: FontId, font_size: f32) -> Self {
        let grid = Color::from_srgb_u8(255, 255, 255, 125);
        let resources = Self {
            darken: Color::from_srgb_u8(0, 0, 0, 100),
            grid_pen: Stroke::hairline(grid),
            grid_text: grid,
            marker_fill: Color::WHITE,
            marker_outline: Stroke::hairline(Color::BLACK),
            marker_text: Color::BLACK,
            font,
            font_size,
        };
        log::debug!("draw resources created (font #{font:?}, {font_size}px)");
        resources
    }

    pub fn with_darken(mut self, color: Color) -> Self {
        self.darken = color;
        self
    }

    /// Sets both the grid pen color and the grid label color.
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_pen.color = color;
        self.grid_text = color;
        self
    }

    pub fn with_marker_colors(mut self, fill: Color, outline: Color, text: Color) -> Self {
        self.marker_fill = fill;
        self.marker_outline.color = outline;
        self.marker_text = text;
        self
    }
}
