//! Console front end: character-cell stand-ins for the kiosk hardware.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use log::debug;
use versekiosk_core::backlight::Backlight;
use versekiosk_core::display::DisplayPanel;
use versekiosk_core::input::TouchPanel;
use versekiosk_core::photo::PhotoDecoder;

/// Pixel width of one glyph column at scale 1, matching the bitmap font
/// the simulated panel pretends to carry.
const GLYPH_WIDTH_PX: u32 = 6;

/// Simulated panel that prints each flushed frame to stdout as a framed
/// block of text. A frame is everything drawn since the previous flush.
pub struct ConsolePanel {
    width_px: u32,
    height_px: u32,
    lines: Vec<String>,
    dim_pixels: usize,
}

impl ConsolePanel {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
            lines: Vec::new(),
            dim_pixels: 0,
        }
    }

    fn columns(&self) -> usize {
        (self.width_px / GLYPH_WIDTH_PX) as usize
    }
}

impl DisplayPanel for ConsolePanel {
    fn bounds(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    fn measure_text(&self, text: &str, scale: u32, _spacing_px: u32) -> u32 {
        text.chars().count() as u32 * GLYPH_WIDTH_PX * scale
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.dim_pixels = 0;
    }

    fn draw_text(&mut self, text: &str, _x: u32, _y: u32, _max_width: u32, _scale: u32) {
        self.lines.push(text.to_string());
    }

    fn draw_pixel(&mut self, _x: u32, _y: u32) {
        self.dim_pixels += 1;
    }

    fn flush(&mut self) {
        let columns = self.columns();
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "+{}+", "-".repeat(columns + 2));
        for line in self.lines.drain(..) {
            let trimmed: String = line.chars().take(columns).collect();
            let _ = writeln!(out, "| {trimmed:<columns$} |");
        }
        let _ = writeln!(out, "+{}+", "-".repeat(columns + 2));

        if self.dim_pixels > 0 {
            debug!("dim overlay: {} pixels", self.dim_pixels);
            self.dim_pixels = 0;
        }
    }
}

/// Backlight that logs level changes instead of driving a PWM pin.
#[derive(Default)]
pub struct ConsoleBacklight {
    last: Option<u8>,
}

impl ConsoleBacklight {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backlight for ConsoleBacklight {
    fn set_level(&mut self, level: u8) {
        if self.last != Some(level) {
            debug!("backlight {level}%");
            self.last = Some(level);
        }
    }
}

/// Touch panel fed by stdin: each input line becomes one tap.
///
/// The reader thread latches a press; `poll` consumes it, so the panel
/// reads as pressed for exactly one poll and the kiosk's edge detection
/// sees one rising edge per line.
pub struct StdinTouch {
    pressed: Arc<AtomicBool>,
    down: bool,
}

impl StdinTouch {
    pub fn spawn() -> io::Result<Self> {
        let pressed = Arc::new(AtomicBool::new(false));
        let latch = Arc::clone(&pressed);
        thread::Builder::new()
            .name("touch-reader".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    if line.is_err() {
                        break;
                    }
                    latch.store(true, Ordering::SeqCst);
                }
            })?;
        Ok(Self {
            pressed,
            down: false,
        })
    }
}

impl TouchPanel for StdinTouch {
    fn poll(&mut self) {
        self.down = self.pressed.swap(false, Ordering::SeqCst);
    }

    fn is_down(&self) -> bool {
        self.down
    }

    fn position(&self) -> (i32, i32) {
        (0, 0)
    }
}

/// Photo decode stand-in: verifies the content-addressed jpg exists.
pub struct FilePhotoDecoder {
    photos_dir: PathBuf,
}

impl FilePhotoDecoder {
    pub fn new(photos_dir: PathBuf) -> Self {
        Self { photos_dir }
    }
}

impl PhotoDecoder for FilePhotoDecoder {
    type Error = String;

    fn decode(&mut self, poem_id: &str) -> Result<(), Self::Error> {
        let path = self.photos_dir.join(format!("{poem_id}.jpg"));
        if path.is_file() {
            debug!("photo {}", path.display());
            Ok(())
        } else {
            Err(format!("missing photo {}", path.display()))
        }
    }
}
