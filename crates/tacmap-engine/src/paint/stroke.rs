use super::Color;

/// Line/outline style: the engine's equivalent of a pen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Width in pixels.
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// One-pixel hairline.
    #[inline]
    pub const fn hairline(color: Color) -> Self {
        Self::new(1.0, color)
    }
}
