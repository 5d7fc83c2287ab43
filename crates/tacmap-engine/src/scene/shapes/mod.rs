pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod text;

pub use image::ImageCmd;
pub use line::LineCmd;
pub use polygon::PolygonCmd;
pub use rect::RectCmd;
pub use text::TextCmd;
