//! Shared context handed to every screen operation

use super::{input::InputSource, surface::Surface};
use crate::{
    config::Config,
    player::{PlayerStateFacade, PlayerStatus},
};
use log::warn;

/// Everything a screen needs to reconcile, draw and dispatch
///
/// The player, surface and input source are owned by the caller and borrowed
/// for the lifetime of the context; nested modal screens reuse the same
/// context, so there is exactly one player connection.
pub struct UiContext<'a> {
    /// The player backend
    pub player: &'a mut dyn PlayerStateFacade,
    /// The drawing surface
    pub surface: &'a mut dyn Surface,
    /// The touch input source
    pub input: &'a mut dyn InputSource,
    /// Application configuration
    pub config: &'a Config,
    quit_requested: bool,
}

impl<'a> UiContext<'a> {
    /// Creates a context
    pub fn new(
        player: &'a mut dyn PlayerStateFacade,
        surface: &'a mut dyn Surface,
        input: &'a mut dyn InputSource,
        config: &'a Config,
    ) -> Self {
        Self {
            player,
            surface,
            input,
            config,
            quit_requested: false,
        }
    }

    /// Fetches this tick's status snapshot
    ///
    /// A failing player is logged and reported as `None`; callers treat that
    /// as "no change" and try again on the next tick.
    pub fn poll_status(&mut self) -> Option<PlayerStatus> {
        match self.player.status() {
            Ok(status) => Some(status),
            Err(e) => {
                warn!("Failed to get player status: {e}");
                None
            }
        }
    }

    /// Asks every running loop to unwind
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Whether quitting was requested
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
