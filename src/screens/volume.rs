//! Volume window

use crate::{
    config::{
        Config, FIFTIES_CHARCOAL, FIFTIES_GREEN, ICON_HEIGHT, ICON_WIDTH, TITLE_VOLUME,
    },
    error::Result,
    ui::{
        context::UiContext,
        modal::{Modal, ModalScreen, ModalState},
        screen::{Navigation, Tag},
        surface::{Icon, WindowStyle},
        widgets::{ButtonIcon, ButtonText, Slider},
    },
};
use log::{debug, warn};
use ratatui::layout::Rect;

/// Widgets of the volume window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTag {
    Mute,
    VolumeDown,
    VolumeUp,
    Slider,
    Back,
}

impl Tag for VolumeTag {
    fn name(&self) -> &'static str {
        match self {
            VolumeTag::Mute => "btn_mute",
            VolumeTag::VolumeDown => "btn_volume_down",
            VolumeTag::VolumeUp => "btn_volume_up",
            VolumeTag::Slider => "slide_volume",
            VolumeTag::Back => "btn_back",
        }
    }
}

const WINDOW: Rect = Rect {
    x: 10,
    y: 5,
    width: 60,
    height: 14,
};

/// Modal window for setting the volume
///
/// Every button issues one command; the slider and the mute switch then
/// follow whatever volume the player reports back.
pub struct ScreenVolume {
    modal: ModalScreen<VolumeTag>,
    step: i8,
}

impl ScreenVolume {
    /// Builds the window, stepping the volume by the configured step
    pub fn new(config: &Config) -> Result<Self> {
        let mut modal = ModalScreen::new(
            "volume",
            TITLE_VOLUME,
            WINDOW,
            WindowStyle {
                background: FIFTIES_CHARCOAL,
                title: FIFTIES_GREEN,
                outline: Some(FIFTIES_GREEN),
            },
        );

        let left = WINDOW.x + 2;
        let right = WINDOW.right() - ICON_WIDTH - 2;
        let centre = WINDOW.x + (WINDOW.width - ICON_WIDTH) / 2;
        let buttons_y = WINDOW.y + 3;

        let composite = modal.composite_mut();
        composite.add_component(
            VolumeTag::VolumeDown,
            ButtonIcon::new(Icon::VolumeDown, Rect::new(left, buttons_y, ICON_WIDTH, ICON_HEIGHT)),
        )?;
        composite.add_component(
            VolumeTag::Mute,
            ButtonIcon::new(Icon::VolumeMute, Rect::new(centre, buttons_y, ICON_WIDTH, ICON_HEIGHT)),
        )?;
        composite.add_component(
            VolumeTag::VolumeUp,
            ButtonIcon::new(Icon::VolumeUp, Rect::new(right, buttons_y, ICON_WIDTH, ICON_HEIGHT)),
        )?;
        composite.add_component(
            VolumeTag::Slider,
            Slider::new(Rect::new(left, buttons_y + 4, WINDOW.width - 4, 3)),
        )?;
        let back = Rect::new(WINDOW.x + (WINDOW.width - 10) / 2, WINDOW.bottom() - 3, 10, 3);
        composite.add_component(VolumeTag::Back, ButtonText::new("Back", back))?;

        Ok(Self {
            modal,
            step: config.volume_step,
        })
    }

    /// The window frame and widgets
    pub fn modal(&self) -> &ModalScreen<VolumeTag> {
        &self.modal
    }

    /// Moves the slider and the mute switch to the player's volume
    fn reconcile(&mut self, ctx: &mut UiContext<'_>) -> Result<Vec<VolumeTag>> {
        let Some(status) = ctx.poll_status() else {
            return Ok(Vec::new());
        };
        let composite = self.modal.composite_mut();

        let mut dirty = Vec::new();
        if composite
            .get_mut::<Slider>(VolumeTag::Slider)?
            .set_percentage(status.volume)
        {
            dirty.push(VolumeTag::Slider);
        }
        let mute_icon = if status.is_silent() {
            Icon::VolumeMuteActive
        } else {
            Icon::VolumeMute
        };
        if composite.get_mut::<ButtonIcon>(VolumeTag::Mute)?.set_icon(mute_icon) {
            dirty.push(VolumeTag::Mute);
        }
        Ok(dirty)
    }

    fn redraw_changed(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        let dirty = self.reconcile(ctx)?;
        self.modal.composite().draw_tags(&dirty, ctx.surface)
    }
}

impl Modal for ScreenVolume {
    fn state(&self) -> ModalState {
        self.modal.state()
    }

    fn show(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        self.reconcile(ctx)?;
        self.modal.show(ctx.surface)
    }

    fn event_loop_hook(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        self.redraw_changed(ctx)
    }

    fn on_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> Result<Navigation> {
        let Some(tag) = self.modal.composite_mut().on_click(x, y) else {
            return Ok(Navigation::Stay);
        };
        debug!("Volume window: {} tapped", tag.name());

        let result = match tag {
            VolumeTag::Mute => ctx.player.toggle_mute(),
            VolumeTag::VolumeDown => ctx.player.adjust_volume(-self.step),
            VolumeTag::VolumeUp => ctx.player.adjust_volume(self.step),
            VolumeTag::Slider => {
                match self
                    .modal
                    .composite_mut()
                    .get_mut::<Slider>(VolumeTag::Slider)?
                    .take_requested()
                {
                    Some(percent) => ctx.player.set_volume(percent),
                    None => Ok(()),
                }
            }
            VolumeTag::Back => {
                self.close();
                return Ok(Navigation::Stay);
            }
        };

        match result {
            Ok(()) => self.redraw_changed(ctx)?,
            Err(e) => warn!("Failed to change volume: {e}"),
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
    use crate::testing::{DrawKind, FakePlayer, Harness, Issued};

    fn shown() -> (ScreenVolume, Harness) {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        let mut screen = ScreenVolume::new(&harness.config).unwrap();
        screen.show(&mut harness.ctx()).unwrap();
        harness.surface.calls.clear();
        (screen, harness)
    }

    fn area(screen: &ScreenVolume, tag: VolumeTag) -> Rect {
        screen.modal().composite().area_of(tag).unwrap()
    }

    fn tap(screen: &mut ScreenVolume, harness: &mut Harness, tag: VolumeTag) -> Navigation {
        let area = area(screen, tag);
        screen
            .on_click(area.x + 1, area.y + 1, &mut harness.ctx())
            .unwrap()
    }

    fn slider(screen: &ScreenVolume) -> u8 {
        screen
            .modal()
            .composite()
            .get::<Slider>(VolumeTag::Slider)
            .unwrap()
            .percentage()
    }

    fn mute_icon(screen: &ScreenVolume) -> Icon {
        screen
            .modal()
            .composite()
            .get::<ButtonIcon>(VolumeTag::Mute)
            .unwrap()
            .icon()
    }

    #[test]
    fn test_layout_fits_window() {
        let screen = ScreenVolume::new(&Config::default()).unwrap();
        let composite = screen.modal().composite();
        for tag in composite.tags() {
            let area = composite.area_of(tag).unwrap();
            assert_eq!(WINDOW.intersection(area), area, "{} outside window", tag.name());
        }
    }

    #[test]
    fn test_show_reflects_player_volume() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        let mut screen = ScreenVolume::new(&harness.config).unwrap();
        screen.show(&mut harness.ctx()).unwrap();
        assert_eq!(screen.state(), ModalState::Visible);
        assert_eq!(harness.surface.calls[0].kind, DrawKind::Window("Volume".to_string()));
        assert_eq!(slider(&screen), 40);
        assert_eq!(mute_icon(&screen), Icon::VolumeMute);
    }

    #[test]
    fn test_volume_up_moves_slider() {
        let (mut screen, mut harness) = shown();
        assert_eq!(tap(&mut screen, &mut harness, VolumeTag::VolumeUp), Navigation::Stay);
        assert_eq!(harness.player.issued, vec![Issued::AdjustVolume(10)]);
        assert_eq!(slider(&screen), 50);
        assert_eq!(harness.surface.calls.len(), 1);
        assert_eq!(harness.surface.calls[0].kind, DrawKind::Slider(50));
    }

    #[test]
    fn test_volume_down_uses_configured_step() {
        let mut harness = Harness::new(FakePlayer::with_playlist());
        harness.config = Config::new().with_volume_step(5);
        let mut screen = ScreenVolume::new(&harness.config).unwrap();
        screen.show(&mut harness.ctx()).unwrap();
        tap(&mut screen, &mut harness, VolumeTag::VolumeDown);
        assert_eq!(harness.player.issued, vec![Issued::AdjustVolume(-5)]);
        assert_eq!(slider(&screen), 35);
    }

    #[test]
    fn test_muted_player_activates_mute_icon() {
        let (mut screen, mut harness) = shown();
        harness.player.status.muted = true;
        screen.event_loop_hook(&mut harness.ctx()).unwrap();
        assert_eq!(mute_icon(&screen), Icon::VolumeMuteActive);
        assert_eq!(harness.surface.calls.len(), 1);
        assert_eq!(
            harness.surface.calls[0].kind,
            DrawKind::Icon(Icon::VolumeMuteActive)
        );

        harness.surface.calls.clear();
        screen.event_loop_hook(&mut harness.ctx()).unwrap();
        assert!(harness.surface.calls.is_empty());
    }

    #[test]
    fn test_mute_button_toggles() {
        let (mut screen, mut harness) = shown();
        tap(&mut screen, &mut harness, VolumeTag::Mute);
        assert_eq!(harness.player.issued, vec![Issued::ToggleMute]);
        assert_eq!(mute_icon(&screen), Icon::VolumeMuteActive);
        tap(&mut screen, &mut harness, VolumeTag::Mute);
        assert_eq!(mute_icon(&screen), Icon::VolumeMute);
    }

    #[test]
    fn test_zero_volume_counts_as_muted() {
        let (mut screen, mut harness) = shown();
        harness.player.status.volume = 0;
        screen.event_loop_hook(&mut harness.ctx()).unwrap();
        assert_eq!(mute_icon(&screen), Icon::VolumeMuteActive);
        assert_eq!(slider(&screen), 0);
    }

    #[test]
    fn test_slider_touch_sets_absolute_volume() {
        let (mut screen, mut harness) = shown();
        let area = area(&screen, VolumeTag::Slider);
        screen
            .on_click(area.right() - 1, area.y + 1, &mut harness.ctx())
            .unwrap();
        assert_eq!(harness.player.issued, vec![Issued::SetVolume(100)]);
        assert_eq!(slider(&screen), 100);
    }

    #[test]
    fn test_rejected_command_changes_nothing() {
        let (mut screen, mut harness) = shown();
        harness.player.reject_commands = true;
        tap(&mut screen, &mut harness, VolumeTag::VolumeUp);
        assert_eq!(slider(&screen), 40);
        assert!(harness.surface.calls.is_empty());
    }

    #[test]
    fn test_back_closes() {
        let (mut screen, mut harness) = shown();
        tap(&mut screen, &mut harness, VolumeTag::Back);
        assert_eq!(screen.state(), ModalState::Closed);
        assert!(harness.player.issued.is_empty());
    }
}
