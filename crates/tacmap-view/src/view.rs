use tacmap_engine::coords::{PixelPoint, SurfaceSize};
use tacmap_engine::scene::ZIndex;

use crate::callout::paint_marker;
use crate::config::MapViewConfig;
use crate::error::RenderError;
use crate::geo::{self, Position};
use crate::grid::{GridLayout, paint_grid};
use crate::painter::Painter;
use crate::provider::MapProvider;
use crate::resources::DrawResources;

/// Tactical overlay for a map surface.
///
/// Holds an optional provider and per-view settings; nothing about the
/// previous frame is remembered. A view without a provider is a valid,
/// "disconnected" view: it draws nothing and maps every position to the origin.
pub struct MapView<P> {
    provider: Option<P>,
    config: MapViewConfig,
}

impl<P: MapProvider> MapView<P> {
    pub fn new(provider: P) -> Self {
        Self { provider: Some(provider), config: MapViewConfig::default() }
    }

    /// A view with no data source.
    pub fn disconnected() -> Self {
        Self { provider: None, config: MapViewConfig::default() }
    }

    pub fn with_config(mut self, config: MapViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Swaps the data source, returning the previous one.
    pub fn set_provider(&mut self, provider: Option<P>) -> Option<P> {
        std::mem::replace(&mut self.provider, provider)
    }

    /// Pixel position of `pos` on a `surface`-sized target.
    ///
    /// Reads the bounds from the provider on every call. Without a provider
    /// the answer is always `(0, 0)`.
    pub fn map_coords(
        &self,
        pos: Position,
        surface: SurfaceSize,
    ) -> Result<PixelPoint, RenderError> {
        let Some(provider) = &self.provider else {
            return Ok(PixelPoint::ORIGIN);
        };
        let bounds = provider.bounds()?;
        Ok(geo::project(pos, &bounds, surface)?)
    }

    /// Records one full frame into `painter`, back to front: dimming overlay,
    /// grid, then one callout per personnel entry in provider order.
    ///
    /// Provider and projection failures abort the pass and are returned as is.
    pub fn paint(
        &self,
        painter: &mut Painter<'_>,
        surface: SurfaceSize,
        res: &DrawResources,
    ) -> Result<(), RenderError> {
        let Some(provider) = &self.provider else {
            log::debug!("no map provider configured; nothing drawn");
            return Ok(());
        };
        let layers = self.config.layers;

        if layers.overlay {
            painter.set_layer(ZIndex::OVERLAY);
            painter.fill_rect(surface.rect(), res.darken);
        }

        if layers.grid {
            painter.set_layer(ZIndex::GRID);
            paint_grid(painter, &GridLayout::new(surface), res);
        }

        if layers.personnel {
            let bounds = provider.bounds()?;
            let personnel = provider.all_personnel()?;

            painter.set_layer(ZIndex::MARKERS);
            painter.push_clip(surface.rect());
            let drawn = personnel.iter().try_for_each(|person| {
                let anchor = geo::project(person.position, &bounds, surface).inspect_err(|e| {
                    log::debug!("personnel '{}' not projected: {e}", person.id);
                })?;
                paint_marker(painter, person, anchor, res);
                Ok::<_, RenderError>(())
            });
            painter.pop_clip();
            drawn?;

            log::trace!(
                "frame {}x{}: {} personnel markers",
                surface.width,
                surface.height,
                personnel.len()
            );
        }

        Ok(())
    }
}
