use super::Rect;

/// Pixel dimensions of a drawing surface.
///
/// Hosts read this from the live surface on every redraw; the surface may have
/// been resized since the previous frame, so nothing downstream caches it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Full-surface rectangle anchored at the origin.
    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}
