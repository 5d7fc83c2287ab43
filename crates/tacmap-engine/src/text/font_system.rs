use std::fmt;

use crate::coords::Vec2;

use super::TextMeasure;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle refers to the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading, so a `FontSystem` can be shared by
/// reference across every render pass.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font #{} ({} glyphs)", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

impl TextMeasure for FontSystem {
    /// Single-line extent of `text`.
    ///
    /// Width is the pen position after the last glyph (advance-based, not the
    /// bitmap edge), so trailing spaces count. Height is the font's line
    /// height at `size` whatever the glyphs, so an empty string still measures
    /// one line. An unknown font yields zero width and a nominal `1.2 × size`.
    fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let h = font
            .horizontal_line_metrics(size)
            .map_or(size * 1.2, |m| m.new_line_size);

        let w = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("anything", FontId(3), 10.0);
        assert_eq!(size.x, 0.0);
        assert!((size.y - 12.0).abs() < 1e-4);
    }

    fn system_font() -> Option<Vec<u8>> {
        [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
        .iter()
        .find_map(|p| std::fs::read(p).ok())
    }

    #[test]
    fn line_height_does_not_depend_on_content() {
        let Some(bytes) = system_font() else {
            return;
        };
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(&bytes).unwrap();

        let heights: Vec<f32> =
            ["", "A", "ABC", "gjpq"].iter().map(|t| fonts.measure_text(t, id, 12.0).y).collect();
        assert!(heights.iter().all(|h| *h == heights[0]));
        assert!(heights[0] >= 12.0);
        assert_eq!(fonts.measure_text("", id, 12.0).x, 0.0);
        assert!(fonts.measure_text("AB", id, 12.0).x > fonts.measure_text("A", id, 12.0).x);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fonts.is_empty());
    }
}
