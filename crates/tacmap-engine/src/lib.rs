//! Tacmap engine crate.
//!
//! Renderer-agnostic drawing primitives used by the map view: geometry,
//! colors and strokes, a recorded draw stream, and text metrics. Nothing here
//! talks to a window or a GPU; a backend replays the [`scene::DrawList`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
