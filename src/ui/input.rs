//! Touch input boundary

use crate::error::Result;
use std::time::Duration;

/// An input event delivered to the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Touch-down at a screen position
    Touch {
        /// Horizontal position
        x: u16,
        /// Vertical position
        y: u16,
    },
    /// The user asked to leave the application
    Quit,
}

/// Source of touch events
pub trait InputSource {
    /// Waits up to `timeout` for the next event
    ///
    /// Returns `Ok(None)` when nothing happened in time, which is the tick on
    /// which screens reconcile against the player.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}
