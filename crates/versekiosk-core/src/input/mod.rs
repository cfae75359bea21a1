//! Touch input capability.

pub mod mock;

/// Polled touch panel.
///
/// The kiosk calls `poll` once per loop iteration and derives tap events
/// from rising edges of `is_down` between consecutive polls.
pub trait TouchPanel {
    /// Refresh the panel state.
    fn poll(&mut self);

    /// Whether the panel reads as pressed after the last poll.
    fn is_down(&self) -> bool;

    /// Last known touch position.
    fn position(&self) -> (i32, i32);
}
