use super::DisplayPanel;

/// Pixel width of one glyph column at scale 1 in the mock's fixed font.
pub const MOCK_GLYPH_WIDTH_PX: u32 = 6;

/// No-hardware display used during bring-up and in tests.
///
/// Measures text at a fixed width per character and records draw calls for
/// inspection. Drawn state resets on `clear`.
#[derive(Clone, Debug, Default)]
pub struct MockDisplay {
    width: u32,
    height: u32,
    /// `(text, x, y, scale)` for every `draw_text` since the last clear.
    pub texts: Vec<(String, u32, u32, u32)>,
    pub pixels: usize,
    pub clears: u32,
    pub flushes: u32,
}

impl MockDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// All recorded text joined into one haystack, for containment asserts.
    pub fn drawn_text(&self) -> String {
        let mut out = String::new();
        for (text, _, _, _) in &self.texts {
            out.push_str(text);
            out.push('\n');
        }
        out
    }
}

impl DisplayPanel for MockDisplay {
    fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn measure_text(&self, text: &str, scale: u32, _spacing_px: u32) -> u32 {
        text.chars().count() as u32 * MOCK_GLYPH_WIDTH_PX * scale
    }

    fn clear(&mut self) {
        self.texts.clear();
        self.pixels = 0;
        self.clears += 1;
    }

    fn draw_text(&mut self, text: &str, x: u32, y: u32, _max_width: u32, scale: u32) {
        self.texts.push((text.to_string(), x, y, scale));
    }

    fn draw_pixel(&mut self, _x: u32, _y: u32) {
        self.pixels += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
