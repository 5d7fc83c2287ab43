//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (layer + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
