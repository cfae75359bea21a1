//! Kiosk configuration.

/// Immutable kiosk tuning, fixed at construction.
///
/// `KioskApp::new` normalizes inverted backlight bounds and floors the fade
/// duration to one millisecond; everything else is taken as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KioskConfig {
    /// How long a fully faded-in page stays up without touch input.
    pub dwell_ms: u64,
    /// Duration of one backlight fade, in or out.
    pub fade_ms: u64,
    pub margin_px: u32,
    pub line_spacing_px: u32,
    pub title_scale: u32,
    pub body_scale: u32,
    /// Backlight brightness bounds, 0..=100.
    pub backlight_min: u8,
    pub backlight_max: u8,
    /// Fixes the playlist shuffle when set.
    pub seed: Option<u64>,
    /// Poem id to always play first, if present in the library.
    pub start_poem_id: Option<String>,
    /// Extra pixels between the title block and the body.
    pub title_gap_px: u32,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 30_000,
            fade_ms: 2_000,
            margin_px: 10,
            line_spacing_px: 2,
            title_scale: 4,
            body_scale: 2,
            backlight_min: 0,
            backlight_max: 100,
            seed: None,
            start_poem_id: None,
            title_gap_px: 8,
        }
    }
}
