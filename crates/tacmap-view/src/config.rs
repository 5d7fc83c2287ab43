use serde::{Deserialize, Serialize};

/// Which stages of the frame are drawn.
///
/// Every stage is on by default. Turning one off skips only that stage; the
/// remaining ones keep their order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayers {
    /// Dimming rectangle over the background image.
    pub overlay: bool,
    pub grid: bool,
    pub personnel: bool,
}

impl MapLayers {
    pub const fn all() -> Self {
        Self { overlay: true, grid: true, personnel: true }
    }

    pub const fn none() -> Self {
        Self { overlay: false, grid: false, personnel: false }
    }
}

impl Default for MapLayers {
    fn default() -> Self {
        Self::all()
    }
}

/// Per-view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapViewConfig {
    #[serde(default)]
    pub layers: MapLayers,
}

impl MapViewConfig {
    pub fn layers(mut self, layers: MapLayers) -> Self {
        self.layers = layers;
        self
    }
}
