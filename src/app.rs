//! Application controller
//!
//! Owns the top-level screens, runs the poll-and-input loop of the active one
//! and acts on the navigation its touches request.

use crate::{
    error::Result,
    screens::{ScreenPlayer, open_modal},
    ui::{
        context::UiContext,
        input::InputEvent,
        screen::{Navigation, Screen, ScreenId},
    },
};
use log::{debug, info, warn};

/// The jukebox application
pub struct App {
    screens: Vec<Box<dyn Screen>>,
    active: usize,
}

impl App {
    /// Creates the application with the player screen active
    pub fn new() -> Result<Self> {
        Ok(Self {
            screens: vec![Box::new(ScreenPlayer::new()?)],
            active: 0,
        })
    }

    /// The screen currently shown
    pub fn active_screen(&self) -> ScreenId {
        self.screens[self.active].id()
    }

    /// Runs until the input source asks to quit
    pub fn run(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        info!("Starting on the {:?} screen", self.active_screen());
        self.screens[self.active].show(ctx)?;

        while !ctx.quit_requested() {
            self.tick(ctx)?;
        }

        info!("Quit requested, leaving");
        Ok(())
    }

    /// One reconciliation pass followed by one wait for input
    fn tick(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        self.screens[self.active].update(ctx)?;

        match ctx.input.next_event(ctx.config.poll_interval())? {
            Some(InputEvent::Touch { x, y }) => {
                let navigation = self.screens[self.active].on_click(x, y, ctx)?;
                self.navigate(navigation, ctx)
            }
            Some(InputEvent::Quit) => {
                ctx.request_quit();
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn navigate(&mut self, navigation: Navigation, ctx: &mut UiContext<'_>) -> Result<()> {
        match navigation {
            Navigation::Stay => {}
            Navigation::SwitchTo(id) => {
                match self.screens.iter().position(|screen| screen.id() == id) {
                    Some(index) if index == self.active => {
                        debug!("Already on the {id:?} screen");
                    }
                    Some(index) => {
                        info!("Switching to the {id:?} screen");
                        self.active = index;
                        self.screens[index].show(ctx)?;
                    }
                    None => warn!("The {id:?} screen is not available"),
                }
            }
            Navigation::OpenModal(id) => {
                open_modal(id, ctx)?;
                // The player may have moved on while the modal was up
                if !ctx.quit_requested() {
                    self.screens[self.active].show(ctx)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FIFTIES_CHARCOAL, SCREEN_HEIGHT, SCREEN_WIDTH},
        testing::{DrawKind, FakePlayer, Harness, Issued, ScriptedInput},
    };
    use ratatui::layout::Rect;

    const FULL_SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
    };

    fn windows(harness: &Harness) -> Vec<String> {
        harness
            .surface
            .calls
            .iter()
            .filter_map(|call| match &call.kind {
                DrawKind::Window(title) => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    fn last_window_call(harness: &Harness) -> usize {
        harness
            .surface
            .calls
            .iter()
            .rposition(|call| matches!(call.kind, DrawKind::Window(_)))
            .unwrap()
    }

    #[test]
    fn test_volume_round_trip_fully_redraws_player() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.input = ScriptedInput::default()
            // Volume button, then volume up and back in the window
            .touch(77, 13)
            .touch(65, 9)
            .touch(40, 17);

        let mut app = App::new().unwrap();
        app.run(&mut harness.ctx()).unwrap();

        assert_eq!(harness.player.issued, vec![Issued::AdjustVolume(10)]);
        assert_eq!(windows(&harness), vec!["Volume".to_string()]);
        assert!(
            harness
                .surface
                .calls
                .iter()
                .any(|call| call.kind == DrawKind::Slider(50))
        );

        let after_close = &harness.surface.calls[last_window_call(&harness)..];
        assert!(after_close.iter().any(|call| {
            call.area == FULL_SCREEN && call.kind == DrawKind::Fill(FIFTIES_CHARCOAL)
        }));
        assert!(
            after_close
                .iter()
                .any(|call| call.kind == DrawKind::Text("Vol: 50%".to_string()))
        );
    }

    #[test]
    fn test_nested_modals_restore_their_openers() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.input = ScriptedInput::default()
            // Track title opens the cover art window
            .touch(8, 0)
            // Its volume button opens the volume window
            .touch(26, 21)
            .idle()
            // Back out of both
            .touch(40, 17)
            .touch(73, 21);

        let mut app = App::new().unwrap();
        app.run(&mut harness.ctx()).unwrap();

        assert_eq!(
            windows(&harness),
            vec![
                "Now playing".to_string(),
                "Volume".to_string(),
                "Now playing".to_string()
            ]
        );
        let after_close = &harness.surface.calls[last_window_call(&harness)..];
        assert!(after_close.iter().any(|call| {
            call.area == FULL_SCREEN && call.kind == DrawKind::Fill(FIFTIES_CHARCOAL)
        }));
        assert_eq!(app.active_screen(), ScreenId::Player);
    }

    #[test]
    fn test_quit_inside_modal_skips_redraw() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.input = ScriptedInput::default().touch(77, 13);

        let mut app = App::new().unwrap();
        app.run(&mut harness.ctx()).unwrap();

        let after_open = &harness.surface.calls[last_window_call(&harness)..];
        assert!(!after_open.iter().any(|call| call.area == FULL_SCREEN));
    }

    #[test]
    fn test_unavailable_screen_is_ignored() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.input = ScriptedInput::default()
            // Library, then home
            .touch(2, 4)
            .touch(2, 1);

        let mut app = App::new().unwrap();
        app.run(&mut harness.ctx()).unwrap();

        assert_eq!(app.active_screen(), ScreenId::Player);
        let full_renders = harness
            .surface
            .calls
            .iter()
            .filter(|call| call.area == FULL_SCREEN)
            .count();
        assert_eq!(full_renders, 1);
    }

    #[test]
    fn test_idle_ticks_follow_the_player() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.input = ScriptedInput::default().idle().idle();

        let mut app = App::new().unwrap();
        app.run(&mut harness.ctx()).unwrap();

        // Show plus one status per tick: two idle ticks and the quit tick
        assert_eq!(harness.player.status_calls, 4);
    }
}
