use super::TouchPanel;

/// Scripted touch panel used during bring-up and in tests.
///
/// Each `poll` consumes the next down-state from the script; past the end
/// the panel reads as released.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTouch {
    states: Vec<bool>,
    cursor: usize,
    down: bool,
}

impl ScriptedTouch {
    pub fn new(states: &[bool]) -> Self {
        Self {
            states: states.to_vec(),
            cursor: 0,
            down: false,
        }
    }

    /// A panel nobody ever touches.
    pub fn idle() -> Self {
        Self::default()
    }
}

impl TouchPanel for ScriptedTouch {
    fn poll(&mut self) {
        self.down = self.states.get(self.cursor).copied().unwrap_or(false);
        self.cursor = self.cursor.saturating_add(1);
    }

    fn is_down(&self) -> bool {
        self.down
    }

    fn position(&self) -> (i32, i32) {
        (0, 0)
    }
}
