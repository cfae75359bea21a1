//! Backlight fade transitions.

use crate::backlight::Backlight;

/// Which way a fade is headed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Smoothstep easing `3t^2 - 2t^3`: zero velocity at both endpoints.
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Time-based eased backlight fade between two brightness bounds.
///
/// Progress is a pure function of `now_ms`; calling [`FadeTransition::update`]
/// after completion keeps reporting completion with the terminal brightness.
#[derive(Clone, Copy, Debug)]
pub struct FadeTransition {
    duration_ms: u64,
    min_level: u8,
    max_level: u8,
    direction: FadeDirection,
    started_ms: u64,
}

impl FadeTransition {
    pub fn new(duration_ms: u64, min_level: u8, max_level: u8) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            min_level,
            max_level,
            direction: FadeDirection::In,
            started_ms: 0,
        }
    }

    /// Restart the fade in `direction` at `now_ms`.
    pub fn start(&mut self, direction: FadeDirection, now_ms: u64) {
        self.direction = direction;
        self.started_ms = now_ms;
    }

    /// Linear progress in `[0, 1]`.
    ///
    /// The wrapping subtraction is read as a signed delta, so a wrapped
    /// tick counter cannot produce a phantom completion and a poll slightly
    /// before `started_ms` reads as zero progress.
    fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.wrapping_sub(self.started_ms) as i64;
        if elapsed <= 0 {
            return 0.0;
        }
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    /// Brightness the fade wants at `now_ms`.
    pub fn level_at(&self, now_ms: u64) -> u8 {
        let eased = smoothstep(self.progress(now_ms));
        let (from, to) = match self.direction {
            FadeDirection::In => (self.min_level, self.max_level),
            FadeDirection::Out => (self.max_level, self.min_level),
        };
        lerp(f32::from(from), f32::from(to), eased).round() as u8
    }

    /// Apply the current brightness and report whether the fade finished.
    pub fn update<B: Backlight>(&self, now_ms: u64, backlight: &mut B) -> bool {
        backlight.set_level(self.level_at(now_ms));
        self.progress(now_ms) >= 1.0
    }
}
