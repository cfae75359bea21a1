//! Kiosk state machine: load, fade, display, advance.

use log::{debug, info, warn};

use crate::backlight::Backlight;
use crate::config::KioskConfig;
use crate::content::PoemLibrary;
use crate::display::{DisplayPanel, line_height};
use crate::input::TouchPanel;
use crate::layout::{self, Layout};
use crate::photo::PhotoDecoder;
use crate::playlist::PlaylistBuilder;
use crate::transition::{FadeDirection, FadeTransition};

/// Dither grid step for the dim overlay drawn over photos.
const DIM_STEP_PX: u32 = 3;
/// Text scale for the terminal status cards.
const STATUS_SCALE: u32 = 1;

const EMPTY_LIBRARY_MESSAGE: &str = "No poems found.\nAdd poems/<id>.json\nand photos/<id>.jpg";
const EXHAUSTED_MESSAGE: &str = "No loadable poems.\nEvery record failed validation.";

/// What the host loop should do after a tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    /// Keep polling at the normal cadence.
    Running,
    /// Terminal state; the loop may sleep for as long as it likes.
    Parked,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum KioskState {
    /// Fetch and lay out the current poem while the panel is dark.
    Load,
    FadeIn,
    Display { deadline_ms: u64 },
    FadeOut,
    /// The library listed no poems at all. Never exited.
    EmptyLibrary,
    /// Every playlist entry failed to load in one full pass. Never exited.
    Exhausted,
}

/// The kiosk controller.
///
/// Single-threaded and poll-driven: the host calls [`KioskApp::tick`] with a
/// monotonic millisecond clock and owns all sleeping. Every capability is
/// injected at construction; nothing here reaches for ambient hardware.
pub struct KioskApp<D, B, T, P, L>
where
    D: DisplayPanel,
    B: Backlight,
    T: TouchPanel,
    P: PhotoDecoder,
    L: PoemLibrary,
{
    display: D,
    backlight: B,
    touch: T,
    photos: P,
    library: L,
    cfg: KioskConfig,

    playlist: Vec<String>,
    play_index: usize,
    layout: Option<Layout>,
    page_index: usize,
    transition: FadeTransition,
    state: KioskState,
    status_pending: bool,
    load_failures: usize,
    touch_was_down: bool,
    touch_count: u32,
}

include!("runtime.rs");
include!("input.rs");
include!("view.rs");
