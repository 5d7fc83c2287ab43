//! Coordinate and geometry types shared by the scene and the map view.
//!
//! Canonical space:
//! - Surface pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Integer points ([`PixelPoint`]) are what layout produces; float vectors
//! ([`Vec2`]) are what draw commands carry.

mod point;
mod rect;
mod surface;
mod vec2;

pub use point::PixelPoint;
pub use rect::Rect;
pub use surface::SurfaceSize;
pub use vec2::Vec2;
