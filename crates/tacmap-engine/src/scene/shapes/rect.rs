use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a solid rectangle fill.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color)));
    }
}
