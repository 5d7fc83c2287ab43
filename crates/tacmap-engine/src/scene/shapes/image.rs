use crate::coords::{Rect, Vec2};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Bitmap blit payload.
///
/// The scene does not decode images. `image` is a host-side handle (a name
/// the backend resolves to pixels) and `size` is the bitmap's native size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: String,
    /// Top-left of the destination in surface pixels.
    pub origin: Vec2,
    pub size: Vec2,
}

impl ImageCmd {
    #[inline]
    pub fn dest_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

impl DrawList {
    /// Records an unscaled image draw at `origin`.
    pub fn push_image(&mut self, z: ZIndex, image: impl Into<String>, origin: Vec2, size: Vec2) {
        self.push(z, DrawCmd::Image(ImageCmd { image: image.into(), origin, size }));
    }
}
