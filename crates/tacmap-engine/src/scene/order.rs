use core::cmp::Ordering;

/// Z-layer of a draw item. Higher values appear on top of lower values.
///
/// The map view records each stage of a frame on its own layer so that a
/// backend sorting the stream can never interleave grid lines with markers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Dimming overlay drawn over the background image.
    pub const OVERLAY: ZIndex = ZIndex(0);
    /// Grid lines and grid labels.
    pub const GRID: ZIndex = ZIndex(10);
    /// Entity callouts.
    pub const MARKERS: ZIndex = ZIndex(20);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Insertion index, unique within one recorded frame.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
