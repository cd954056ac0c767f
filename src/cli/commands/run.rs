//! Run command implementation for crab-jukebox
//!
//! This module implements the run command which connects to the player and
//! drives the touch interface on the terminal until the user quits.

use crate::{
    app::App,
    config::{Config, LOG_MSG_RUN},
    error::Result,
    player::MpdPlayer,
    ui::{TerminalInput, TerminalSurface, UiContext},
};
use log::info;

/// Run command implementation
pub struct RunCommand<'a> {
    _args: &'a super::super::Run,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command
    pub fn new(args: &'a super::super::Run) -> Self {
        Self { _args: args }
    }

    /// Execute the run command
    pub fn run(&self, config: &Config) -> Result<()> {
        info!("{LOG_MSG_RUN}");
        let mut player = MpdPlayer::connect(config)?;
        let mut input = TerminalInput::new();
        let mut surface = TerminalSurface::new()?;

        let result = {
            let mut ctx = UiContext::new(&mut player, &mut surface, &mut input, config);
            App::new().and_then(|mut app| app.run(&mut ctx))
        };

        surface.restore()?;
        result
    }
}
