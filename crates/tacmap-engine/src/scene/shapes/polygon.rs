use crate::coords::Vec2;
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Closed polygon payload.
///
/// The outline is implicitly closed: the last point connects back to the
/// first. Backends fill first, then stroke, so the outline sits on top.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { points, fill, stroke }
    }
}

impl DrawList {
    /// Records a closed polygon with optional fill and outline.
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: impl Into<Vec<Vec2>>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points.into(), fill, stroke)));
    }
}
