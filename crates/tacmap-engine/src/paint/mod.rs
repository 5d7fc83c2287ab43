//! Paint model shared between the map view and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - strokes (outline width + color)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::Color;
pub use stroke::Stroke;
