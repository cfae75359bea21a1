//! Backlight capability.

/// Brightness sink.
pub trait Backlight {
    /// Apply a brightness level in 0..=100.
    fn set_level(&mut self, level: u8);
}

/// No-hardware backlight used during bring-up and in tests. Remembers
/// every level it was asked to apply.
#[derive(Clone, Debug, Default)]
pub struct MockBacklight {
    pub levels: Vec<u8>,
}

impl MockBacklight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<u8> {
        self.levels.last().copied()
    }
}

impl Backlight for MockBacklight {
    fn set_level(&mut self, level: u8) {
        self.levels.push(level);
    }
}
