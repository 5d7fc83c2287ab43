//! Tacmap view: tactical overlay on top of `tacmap-engine`.
//!
//! Projects geographic positions onto a fixed-size surface and records a
//! frame of dimming overlay, reference grid and personnel callouts into a
//! [`DrawList`](tacmap_engine::scene::DrawList).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tacmap_view::prelude::*;
//!
//! // Once, when the view is set up:
//! let resources = DrawResources::new(font, 12.0);
//! let view = MapView::new(provider);
//!
//! // On every redraw:
//! draw_list.clear();
//! let mut painter = Painter::new(&mut draw_list, &font_system);
//! view.paint(&mut painter, SurfaceSize::new(width, height), &resources)?;
//! // Hand draw_list to the backend.
//! ```
//!
//! # Supplying data
//!
//! Implement [`MapProvider`](provider::MapProvider) for whatever tracks the
//! field. Only the `all_*` listings and the four bounds are required.

pub mod callout;
pub mod config;
pub mod error;
pub mod geo;
pub mod grid;
pub mod model;
pub mod painter;
pub mod provider;
pub mod resources;
pub mod view;

pub use view::MapView;

/// Everything a host needs to drive a map view.
pub mod prelude {
    pub use crate::callout::Callout;
    pub use crate::config::{MapLayers, MapViewConfig};
    pub use crate::error::RenderError;
    pub use crate::geo::{Axis, GeoBox, Position, ProjectionError, project};
    pub use crate::grid::{GRID_CELLS, GridLayout};
    pub use crate::model::{Designation, Icon, Incident, Personnel, unescape_label};
    pub use crate::painter::Painter;
    pub use crate::provider::{InMemoryProvider, MapProvider, ProviderError, ProviderResult};
    pub use crate::resources::DrawResources;
    pub use crate::view::MapView;

    // Re-export the engine primitives hosts need.
    pub use rust_decimal::Decimal;
    pub use tacmap_engine::coords::{PixelPoint, Rect, SurfaceSize, Vec2};
    pub use tacmap_engine::paint::{Color, Stroke};
    pub use tacmap_engine::scene::{DrawCmd, DrawList, ZIndex};
    pub use tacmap_engine::text::{FixedMetrics, FontId, FontSystem, TextMeasure};
}
