//! Arrow-shaped marker: a label box sitting above a short stem whose tip
//! touches the entity's projected position.
//!
//! ```text
//!   3 ───────────────── 4
//!   │ [icon] label      │
//!   2 ──────1     6──── 5
//!            \   /
//!             \ /
//!              0   ← anchor
//! ```

use tacmap_engine::coords::{PixelPoint, Rect, Vec2};

use crate::model::Personnel;
use crate::painter::Painter;
use crate::resources::DrawResources;

/// Vertical gap between the anchor and the bottom edge of the box.
pub const STEM_HEIGHT: i32 = 5;
/// Half the width of the stem where it meets the box.
pub const STEM_HALF_WIDTH: i32 = 5;
/// Horizontal padding added to `label + icon` (left inset, gap, right inset).
pub const HORIZONTAL_PADDING: f32 = 6.0;
/// Vertical padding added to the taller of label and icon.
pub const VERTICAL_PADDING: f32 = 4.0;

const ICON_INSET: i32 = 2;
const LABEL_INSET: i32 = 4;

/// Resolved geometry of one marker. All integer math, like the projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub anchor: PixelPoint,
    /// Box width: `trunc(label_w + 6 + icon_w)`.
    pub width: i32,
    /// Box height: `trunc(max(label_h, icon_h) + 4)`.
    pub height: i32,
    /// Closed outline, starting at the anchor and running clockwise on screen.
    pub outline: [PixelPoint; 7],
    /// Top-left of the icon, left-aligned and vertically centred in the box.
    pub icon_origin: PixelPoint,
    /// Top-left of the label, right of the icon and vertically centred.
    pub label_origin: Vec2,
}

impl Callout {
    /// Lays out a callout for a label of `label_extent` and an icon of
    /// `icon_width × icon_height`, anchored at `anchor`.
    ///
    /// An empty label collapses to an icon-only box. Returns `None` when any
    /// corner falls outside the `i32` pixel range, which only happens for
    /// anchors far off the surface.
    pub fn layout(
        anchor: PixelPoint,
        label_extent: Vec2,
        icon_width: u32,
        icon_height: u32,
    ) -> Option<Self> {
        let icon_w = i32::try_from(icon_width).ok()?;
        let icon_h = i32::try_from(icon_height).ok()?;

        let width = (label_extent.x + HORIZONTAL_PADDING + icon_width as f32) as i32;
        let height = (label_extent.y.max(icon_height as f32) + VERTICAL_PADDING) as i32;

        let PixelPoint { x, y } = anchor;
        let half = width / 2;
        let left = x.checked_sub(half)?;
        let right = x.checked_add(half)?;
        let base = y.checked_sub(STEM_HEIGHT)?;
        let top = base.checked_sub(height)?;

        let outline = [
            PixelPoint::new(x, y),
            PixelPoint::new(x.checked_sub(STEM_HALF_WIDTH)?, base),
            PixelPoint::new(left, base),
            PixelPoint::new(left, top),
            PixelPoint::new(right, top),
            PixelPoint::new(right, base),
            PixelPoint::new(x.checked_add(STEM_HALF_WIDTH)?, base),
        ];

        let middle = base - height / 2;
        let icon_origin =
            PixelPoint::new(left.checked_add(ICON_INSET)?, middle.checked_sub(icon_h / 2)?);
        let label_origin = Vec2::new(
            left.checked_add(LABEL_INSET)?.checked_add(icon_w)? as f32,
            middle as f32 - label_extent.y / 2.0,
        );

        Some(Self { anchor, width, height, outline, icon_origin, label_origin })
    }

    /// The stem's tip. Always equal to the anchor.
    #[inline]
    pub fn apex(&self) -> PixelPoint {
        self.outline[0]
    }

    /// The label box, excluding the stem.
    pub fn body(&self) -> Rect {
        let top_left = self.outline[3];
        let bottom_right = self.outline[5];
        Rect::from_origin_size(top_left.to_vec2(), (bottom_right - top_left).to_vec2())
    }
}

/// Measures, lays out and records one personnel marker at `anchor`.
pub(crate) fn paint_marker(
    painter: &mut Painter<'_>,
    person: &Personnel,
    anchor: PixelPoint,
    res: &DrawResources,
) {
    let label = person.label();
    let extent = painter.measure_text(&label, res.font, res.font_size);
    let icon = &person.icon;
    let Some(callout) = Callout::layout(anchor, extent, icon.width, icon.height) else {
        log::debug!("personnel '{}' at {anchor:?} is too far off the surface; skipped", person.id);
        return;
    };

    painter.polygon(&callout.outline, Some(res.marker_fill), Some(res.marker_outline));
    painter.image(&icon.name, callout.icon_origin, icon.width, icon.height);
    painter.text(label, res.font, res.font_size, res.marker_text, callout.label_origin);
}
