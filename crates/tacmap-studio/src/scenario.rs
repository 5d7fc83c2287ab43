use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tacmap_view::prelude::*;

/// A field snapshot loaded from TOML: bounds, who is where, open incidents,
/// and which overlay layers to draw.
///
/// Decimal values are written as strings so no precision is lost on the way in.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub bounds: GeoBox,
    #[serde(default)]
    pub layers: MapLayers,
    #[serde(default)]
    pub personnel: Vec<Personnel>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("loading scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(text).context("malformed scenario")?;
        scenario.bounds.validate().context("unusable map bounds")?;
        Ok(scenario)
    }

    /// Splits the scenario into the view's data source and settings.
    pub fn into_parts(self) -> (InMemoryProvider, MapViewConfig) {
        let provider = InMemoryProvider {
            bounds: self.bounds,
            personnel: self.personnel,
            incidents: self.incidents,
        };
        (provider, MapViewConfig::default().layers(self.layers))
    }
}
