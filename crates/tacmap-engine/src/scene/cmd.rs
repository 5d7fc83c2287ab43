use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Line(LineCmd),
    Polygon(PolygonCmd),
    Image(ImageCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short name of the variant, used in logs and stream summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Line(_) => "line",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Image(_) => "image",
            DrawCmd::Text(_) => "text",
        }
    }
}
