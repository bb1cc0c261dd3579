use cover_core::{FontId, TextMetrics, TextShaper};

/// Deterministic monospace metrics, no real font files involved.
///
/// Every glyph advances by 55% of the font size; ascent/descent split
/// 80%/25%.  Named font loading can be made to fail to exercise the
/// engine's fallback path.
pub struct MonoShaper {
    sizes: Vec<f32>,
    named_fonts_available: bool,
}

impl MonoShaper {
    pub fn new() -> Self {
        Self {
            sizes: Vec::new(),
            named_fonts_available: true,
        }
    }

    /// A shaper that rejects every named font, forcing the default-font
    /// fallback.
    pub fn without_named_fonts() -> Self {
        Self {
            sizes: Vec::new(),
            named_fonts_available: false,
        }
    }

    fn register(&mut self, size: f32) -> FontId {
        self.sizes.push(size);
        FontId(self.sizes.len() as u32 - 1)
    }

    fn size_of(&self, font: FontId) -> f32 {
        self.sizes.get(font.0 as usize).copied().unwrap_or(10.0)
    }
}

impl Default for MonoShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper for MonoShaper {
    fn load_font(&mut self, name: &str, size: f32) -> Option<FontId> {
        if !self.named_fonts_available || name.is_empty() {
            return None;
        }
        Some(self.register(size))
    }

    fn default_font(&mut self, size: f32) -> FontId {
        self.register(size)
    }

    fn measure(&self, font: FontId, text: &str) -> TextMetrics {
        let size = self.size_of(font);
        let advance = ((size * 0.55) + 0.5).floor().max(1.0) as i32;
        TextMetrics {
            width: advance * text.chars().count() as i32,
            ascent: ((size * 0.8) + 0.5).floor() as i32,
            descent: ((size * 0.25) + 0.5).floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_scale_with_size() {
        let mut s = MonoShaper::new();
        let small = s.default_font(10.0);
        let big = s.default_font(20.0);
        assert_eq!(s.measure(small, "abc").width, 3 * 6);
        assert_eq!(s.measure(big, "abc").width, 3 * 11);
        assert!(s.measure(big, "x").ascent > s.measure(small, "x").ascent);
    }

    #[test]
    fn named_font_failure_mode() {
        let mut s = MonoShaper::without_named_fonts();
        assert!(s.load_font("Noto Sans", 12.0).is_none());
        // The default font always loads.
        let f = s.default_font(12.0);
        assert!(s.measure(f, "a").width > 0);
    }
}
