use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, stroke)));
    }
}
