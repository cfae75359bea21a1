//! Host kiosk binary: filesystem poem library plus a console front end.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use versekiosk_core::app::{KioskApp, TickResult};
use versekiosk_core::config::KioskConfig;

#[path = "main/console.rs"]
mod console;
#[path = "main/fs_library.rs"]
mod fs_library;

use console::{ConsoleBacklight, ConsolePanel, FilePhotoDecoder, StdinTouch};
use fs_library::FsLibrary;

const POLL_INTERVAL: Duration = Duration::from_millis(10);
const PARK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Parser)]
#[command(name = "versekiosk", about = "Poem + photo kiosk with fades and paging")]
struct Args {
    /// Directory holding one <id>.json per poem.
    #[arg(long, default_value = "data/poems")]
    poems_dir: PathBuf,

    /// Directory holding the matching <id>.jpg photos.
    #[arg(long, default_value = "data/photos")]
    photos_dir: PathBuf,

    /// How long a page stays up before fading out, in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    dwell_ms: u64,

    /// Backlight fade duration, in milliseconds.
    #[arg(long, default_value_t = 2_000)]
    fade_ms: u64,

    #[arg(long, default_value_t = 10)]
    margin_px: u32,

    #[arg(long, default_value_t = 2)]
    line_spacing_px: u32,

    #[arg(long, default_value_t = 4)]
    title_scale: u32,

    #[arg(long, default_value_t = 2)]
    body_scale: u32,

    #[arg(long, default_value_t = 0)]
    backlight_min: u8,

    #[arg(long, default_value_t = 100)]
    backlight_max: u8,

    /// Fix the playlist shuffle for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Poem id to always show first.
    #[arg(long)]
    start_poem_id: Option<String>,

    #[arg(long, default_value_t = 8)]
    title_gap_px: u32,

    /// Simulated square panel size in pixels.
    #[arg(long, default_value_t = 480)]
    panel_px: u32,
}

impl Args {
    fn kiosk_config(&self) -> KioskConfig {
        KioskConfig {
            dwell_ms: self.dwell_ms,
            fade_ms: self.fade_ms,
            margin_px: self.margin_px,
            line_spacing_px: self.line_spacing_px,
            title_scale: self.title_scale,
            body_scale: self.body_scale,
            backlight_min: self.backlight_min,
            backlight_max: self.backlight_max,
            seed: self.seed,
            start_poem_id: self.start_poem_id.clone(),
            title_gap_px: self.title_gap_px,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let library = FsLibrary::new(args.poems_dir.clone(), args.photos_dir.clone());
    let panel = ConsolePanel::new(args.panel_px, args.panel_px);
    let backlight = ConsoleBacklight::new();
    let touch = StdinTouch::spawn().context("failed to start the touch reader")?;
    let photos = FilePhotoDecoder::new(args.photos_dir.clone());

    let mut app = KioskApp::new(panel, backlight, touch, photos, library, args.kiosk_config());
    info!("press Enter to page through a poem; Ctrl-C exits");

    let epoch = Instant::now();
    loop {
        let now_ms = epoch.elapsed().as_millis() as u64;
        match app.tick(now_ms) {
            TickResult::Running => thread::sleep(POLL_INTERVAL),
            TickResult::Parked => thread::sleep(PARK_INTERVAL),
        }
    }
}
