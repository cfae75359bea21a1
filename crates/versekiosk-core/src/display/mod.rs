//! Display capability.

pub mod mock;

/// Height in pixels of one glyph row at scale 1.
pub const GLYPH_HEIGHT_PX: u32 = 8;

/// Pixel height of one text line at `scale`, spacing included.
pub fn line_height(scale: u32, spacing_px: u32) -> u32 {
    GLYPH_HEIGHT_PX * scale + spacing_px
}

/// Pixel-addressed text display.
///
/// The kiosk draws whole upper-cased strings and single pixels; fonts, pens,
/// and the frame buffer itself belong to the implementation.
pub trait DisplayPanel {
    /// Panel size as `(width, height)` in pixels.
    fn bounds(&self) -> (u32, u32);

    /// Measured pixel width of `text` at `scale`. Must agree with what
    /// `draw_text` produces for the same arguments.
    fn measure_text(&self, text: &str, scale: u32, spacing_px: u32) -> u32;

    /// Reset the frame to the background color.
    fn clear(&mut self);

    fn draw_text(&mut self, text: &str, x: u32, y: u32, max_width: u32, scale: u32);

    fn draw_pixel(&mut self, x: u32, y: u32);

    /// Present everything drawn since the last flush. Synchronous; the
    /// kiosk loop has nothing else to do while a frame goes out.
    fn flush(&mut self);
}
