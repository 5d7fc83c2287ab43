//! Text metrics.
//!
//! Layout code only needs extents, so it talks to the [`TextMeasure`] trait.
//! [`FontSystem`] measures with real font outlines (fontdue); [`FixedMetrics`]
//! is a font-free stand-in for headless hosts and tests.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{FixedMetrics, TextMeasure};
