//! Settings overview window

use crate::{
    config::{Config, FIFTIES_CHARCOAL, FIFTIES_TEAL, FIFTIES_YELLOW, TITLE_SETTINGS},
    error::Result,
    ui::{
        context::UiContext,
        modal::{Modal, ModalScreen, ModalState},
        screen::{Navigation, Tag},
        surface::WindowStyle,
        widgets::{ButtonText, LabelText},
    },
};
use log::debug;
use ratatui::layout::Rect;

/// Widgets of the settings window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTag {
    Server,
    PollInterval,
    Backend,
    Back,
}

impl Tag for SettingsTag {
    fn name(&self) -> &'static str {
        match self {
            SettingsTag::Server => "lbl_server",
            SettingsTag::PollInterval => "lbl_poll_interval",
            SettingsTag::Backend => "lbl_backend",
            SettingsTag::Back => "btn_back",
        }
    }
}

const WINDOW: Rect = Rect {
    x: 10,
    y: 4,
    width: 60,
    height: 16,
};

/// Modal window showing the connection settings and whether the player answers
pub struct ScreenSettings {
    modal: ModalScreen<SettingsTag>,
}

impl ScreenSettings {
    /// Builds the window for the running configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut modal = ModalScreen::new(
            "settings",
            TITLE_SETTINGS,
            WINDOW,
            WindowStyle {
                background: FIFTIES_CHARCOAL,
                title: FIFTIES_YELLOW,
                outline: Some(FIFTIES_TEAL),
            },
        );
        let composite = modal.composite_mut();

        let row = |line: u16| Rect::new(WINDOW.x + 2, WINDOW.y + 2 + line * 2, WINDOW.width - 4, 1);
        composite.add_component(
            SettingsTag::Server,
            LabelText::new(row(0)).with_text(format!("Server: {}", config.mpd_address())),
        )?;
        composite.add_component(
            SettingsTag::PollInterval,
            LabelText::new(row(1))
                .with_text(format!("Poll interval: {} ms", config.poll_interval_ms)),
        )?;
        composite.add_component(
            SettingsTag::Backend,
            LabelText::new(row(2)).with_color(FIFTIES_TEAL),
        )?;

        let back = Rect::new(WINDOW.x + (WINDOW.width - 10) / 2, WINDOW.bottom() - 4, 10, 3);
        composite.add_component(SettingsTag::Back, ButtonText::new("Back", back))?;

        Ok(Self { modal })
    }

    /// The window frame and widgets
    pub fn modal(&self) -> &ModalScreen<SettingsTag> {
        &self.modal
    }

    /// Refreshes the reachability line, returning whether it changed
    fn reconcile(&mut self, ctx: &mut UiContext<'_>) -> Result<bool> {
        let text = match ctx.poll_status() {
            Some(status) => format!("Player: connected, {}", status.state),
            None => "Player: unreachable".to_string(),
        };
        Ok(self
            .modal
            .composite_mut()
            .get_mut::<LabelText>(SettingsTag::Backend)?
            .set_text(&text))
    }
}

impl Modal for ScreenSettings {
    fn state(&self) -> ModalState {
        self.modal.state()
    }

    fn show(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        self.reconcile(ctx)?;
        self.modal.show(ctx.surface)
    }

    fn event_loop_hook(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        if self.reconcile(ctx)? {
            self.modal
                .composite()
                .draw(SettingsTag::Backend, ctx.surface)?;
        }
        Ok(())
    }

    fn on_click(&mut self, x: u16, y: u16, _ctx: &mut UiContext<'_>) -> Result<Navigation> {
        if let Some(tag) = self.modal.composite_mut().on_click(x, y) {
            debug!("Settings window: {} tapped", tag.name());
            if tag == SettingsTag::Back {
                self.close();
            }
        }
        Ok(Navigation::Stay)
    }

    fn close(&mut self) {
        self.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawKind, FakePlayer, Harness};

    fn text(screen: &ScreenSettings, tag: SettingsTag) -> String {
        screen
            .modal()
            .composite()
            .get::<LabelText>(tag)
            .unwrap()
            .text()
            .to_string()
    }

    #[test]
    fn test_shows_configuration() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.config = Config::new().with_mpd_host("jukebox.local").with_poll_interval(500);
        let mut screen = ScreenSettings::new(&harness.config).unwrap();
        screen.show(&mut harness.ctx()).unwrap();

        assert_eq!(text(&screen, SettingsTag::Server), "Server: jukebox.local:6600");
        assert_eq!(text(&screen, SettingsTag::PollInterval), "Poll interval: 500 ms");
        assert_eq!(text(&screen, SettingsTag::Backend), "Player: connected, pause");
        assert_eq!(
            harness.surface.calls[0].kind,
            DrawKind::Window("Settings".to_string())
        );
    }

    #[test]
    fn test_hook_tracks_reachability() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        let mut screen = ScreenSettings::new(&harness.config).unwrap();
        screen.show(&mut harness.ctx()).unwrap();
        harness.surface.calls.clear();

        screen.event_loop_hook(&mut harness.ctx()).unwrap();
        assert!(harness.surface.calls.is_empty());

        harness.player.fail_queries = true;
        screen.event_loop_hook(&mut harness.ctx()).unwrap();
        assert_eq!(
            harness.surface.calls[0].kind,
            DrawKind::Text("Player: unreachable".to_string())
        );
    }

    #[test]
    fn test_back_closes() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        let mut screen = ScreenSettings::new(&harness.config).unwrap();
        screen.show(&mut harness.ctx()).unwrap();

        let back = screen.modal().composite().area_of(SettingsTag::Back).unwrap();
        screen.on_click(back.x + 1, back.y + 1, &mut harness.ctx()).unwrap();
        assert_eq!(screen.state(), ModalState::Closed);
    }
}
