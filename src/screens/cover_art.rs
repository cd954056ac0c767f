//! Full-screen now-playing window with the album art

use super::{NowPlayingTags, reconcile_now_playing, toggle_playback, transport};
use crate::{
    config::{
        FIFTIES_CHARCOAL, FIFTIES_ORANGE, ICON_HEIGHT, ICON_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
        TITLE_NOW_PLAYING,
    },
    error::Result,
    player::PlaybackCommand,
    ui::{
        context::UiContext,
        modal::{Modal, ModalScreen, ModalState},
        screen::{ModalId, Navigation, Tag},
        surface::{Icon, WindowStyle},
        widgets::{ButtonIcon, ButtonText, LabelText},
    },
};
use log::debug;
use ratatui::layout::Rect;

/// Widgets of the cover art window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverArtTag {
    TrackTitle,
    TrackArtist,
    Time,
    VolumeLabel,
    Art,
    Play,
    Prev,
    Next,
    Volume,
    Back,
}

impl Tag for CoverArtTag {
    fn name(&self) -> &'static str {
        match self {
            CoverArtTag::TrackTitle => "lbl_track_title",
            CoverArtTag::TrackArtist => "lbl_track_artist",
            CoverArtTag::Time => "lbl_time",
            CoverArtTag::VolumeLabel => "lbl_volume",
            CoverArtTag::Art => "pic_cover_art",
            CoverArtTag::Play => "btn_play",
            CoverArtTag::Prev => "btn_prev",
            CoverArtTag::Next => "btn_next",
            CoverArtTag::Volume => "btn_volume",
            CoverArtTag::Back => "btn_back",
        }
    }
}

const NOW_PLAYING: NowPlayingTags<CoverArtTag> = NowPlayingTags {
    title: CoverArtTag::TrackTitle,
    artist: CoverArtTag::TrackArtist,
    time: CoverArtTag::Time,
    volume: CoverArtTag::VolumeLabel,
    play: CoverArtTag::Play,
};

/// Modal window showing the album art of the playing track
pub struct ScreenCoverArt {
    modal: ModalScreen<CoverArtTag>,
}

impl ScreenCoverArt {
    /// Builds the window
    pub fn new() -> Result<Self> {
        let mut modal = ModalScreen::new(
            "cover_art",
            TITLE_NOW_PLAYING,
            Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
            WindowStyle {
                background: FIFTIES_CHARCOAL,
                title: FIFTIES_ORANGE,
                outline: Some(FIFTIES_ORANGE),
            },
        );
        let composite = modal.composite_mut();

        let status_x = SCREEN_WIDTH - 20;
        let label_width = status_x - 3;
        let labels = [
            (CoverArtTag::TrackTitle, Rect::new(2, 1, label_width, 1)),
            (CoverArtTag::TrackArtist, Rect::new(2, 2, label_width, 1)),
            (CoverArtTag::Time, Rect::new(status_x, 1, 18, 1)),
            (CoverArtTag::VolumeLabel, Rect::new(status_x, 2, 18, 1)),
        ];
        for (tag, area) in labels {
            composite.add_component(tag, LabelText::new(area))?;
        }

        let buttons_y = SCREEN_HEIGHT - ICON_HEIGHT - 1;
        composite.add_component(
            CoverArtTag::Art,
            ButtonIcon::new(Icon::CoverArt, Rect::new(2, 4, SCREEN_WIDTH - 4, buttons_y - 5)),
        )?;

        let button_at = |slot: u16| {
            Rect::new(2 + slot * (ICON_WIDTH + 1), buttons_y, ICON_WIDTH, ICON_HEIGHT)
        };
        composite.add_component(CoverArtTag::Play, ButtonIcon::new(Icon::Play, button_at(0)))?;
        composite.add_component(CoverArtTag::Prev, ButtonIcon::new(Icon::Previous, button_at(1)))?;
        composite.add_component(CoverArtTag::Next, ButtonIcon::new(Icon::Next, button_at(2)))?;
        composite.add_component(CoverArtTag::Volume, ButtonIcon::new(Icon::Volume, button_at(3)))?;
        composite.add_component(
            CoverArtTag::Back,
            ButtonText::new("Back", Rect::new(SCREEN_WIDTH - 12, buttons_y, 10, ICON_HEIGHT)),
        )?;

        Ok(Self { modal })
    }

    /// The window frame and widgets
    pub fn modal(&self) -> &ModalScreen<CoverArtTag> {
        &self.modal
    }

    fn reconcile(&mut self, ctx: &mut UiContext<'_>) -> Result<Vec<CoverArtTag>> {
        let Some(status) = ctx.poll_status() else {
            return Ok(Vec::new());
        };
        let song_changed = ctx.player.current_song_changed();
        reconcile_now_playing(
            self.modal.composite_mut(),
            NOW_PLAYING,
            &status,
            song_changed,
        )
    }
}

impl Modal for ScreenCoverArt {
    fn state(&self) -> ModalState {
        self.modal.state()
    }

    fn show(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        self.reconcile(ctx)?;
        self.modal.show(ctx.surface)
    }

    fn event_loop_hook(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        let dirty = self.reconcile(ctx)?;
        self.modal.composite().draw_tags(&dirty, ctx.surface)
    }

    fn on_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> Result<Navigation> {
        let Some(tag) = self.modal.composite_mut().on_click(x, y) else {
            return Ok(Navigation::Stay);
        };
        debug!("Cover art window: {} tapped", tag.name());

        match tag {
            CoverArtTag::Play => {
                toggle_playback(self.modal.composite_mut(), CoverArtTag::Play, ctx)?;
            }
            CoverArtTag::Prev => transport(ctx, PlaybackCommand::Previous),
            CoverArtTag::Next => transport(ctx, PlaybackCommand::Next),
            CoverArtTag::Volume => return Ok(Navigation::OpenModal(ModalId::Volume)),
            CoverArtTag::Back => self.close(),
            CoverArtTag::TrackTitle
            | CoverArtTag::TrackArtist
            | CoverArtTag::Time
            | CoverArtTag::VolumeLabel
            | CoverArtTag::Art => {}
        }
        Ok(Navigation::Stay)
    }

    fn close(&mut self) {
        self.modal.close();
    }
}
