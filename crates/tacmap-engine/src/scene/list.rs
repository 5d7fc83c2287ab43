use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in surface pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// The list is the drawing context handed to the map view: recording is
/// infallible and cheap, and a backend replays it in paint order.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a scissor rect. Clips are intersected with the current
/// parent.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Iterates recorded commands in insertion order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> + '_ {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Pushes a draw command on layer `z`.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region. Commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` intersected with any parent clip.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap with the parent: zero-area clip, backends skip the items.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Depth of the clip stack. Zero once every `push_clip` has been popped.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey carries insertion order, so ties are already broken.
        self.sorted_indices.sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
