//! Playback screen
//!
//! The main, always-available screen: current track, elapsed time, volume,
//! transport buttons and the playlist.

use super::{NowPlayingTags, reconcile_now_playing, toggle_playback, transport};
use crate::{
    config::{
        FIFTIES_CHARCOAL, FIFTIES_TEAL, ICON_HEIGHT, ICON_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
    },
    error::Result,
    player::PlaybackCommand,
    ui::{
        context::UiContext,
        screen::{CompositeScreen, ModalId, Navigation, Screen, ScreenId, Tag},
        surface::Icon,
        widgets::{ButtonIcon, LabelText, PlaylistWidget, Rectangle},
    },
};
use log::{debug, warn};
use ratatui::layout::Rect;

/// Widgets of the player screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTag {
    Home,
    Library,
    Settings,
    Play,
    Prev,
    Next,
    Volume,
    TrackTitle,
    TrackArtist,
    Time,
    VolumeLabel,
    Split,
    ListPlaying,
}

impl Tag for PlayerTag {
    fn name(&self) -> &'static str {
        match self {
            PlayerTag::Home => "btn_home",
            PlayerTag::Library => "btn_library",
            PlayerTag::Settings => "btn_settings",
            PlayerTag::Play => "btn_play",
            PlayerTag::Prev => "btn_prev",
            PlayerTag::Next => "btn_next",
            PlayerTag::Volume => "btn_volume",
            PlayerTag::TrackTitle => "lbl_track_title",
            PlayerTag::TrackArtist => "lbl_track_artist",
            PlayerTag::Time => "lbl_time",
            PlayerTag::VolumeLabel => "lbl_volume",
            PlayerTag::Split => "rct_split",
            PlayerTag::ListPlaying => "list_playing",
        }
    }
}

const NOW_PLAYING: NowPlayingTags<PlayerTag> = NowPlayingTags {
    title: PlayerTag::TrackTitle,
    artist: PlayerTag::TrackArtist,
    time: PlayerTag::Time,
    volume: PlayerTag::VolumeLabel,
    play: PlayerTag::Play,
};

const CONTENT_X: u16 = ICON_WIDTH + 1;
const TRANSPORT_X: u16 = SCREEN_WIDTH - ICON_WIDTH;
const STATUS_X: u16 = SCREEN_WIDTH - 20;

/// The screen containing everything to control playback
pub struct ScreenPlayer {
    composite: CompositeScreen<PlayerTag>,
}

impl ScreenPlayer {
    /// Builds the screen
    pub fn new() -> Result<Self> {
        let mut composite = CompositeScreen::new(
            "player",
            Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
            FIFTIES_CHARCOAL,
        );
        let icon_at = |x, y| Rect::new(x, y, ICON_WIDTH, ICON_HEIGHT);

        let buttons = [
            // Screen navigation
            (PlayerTag::Home, Icon::PlayerActive, icon_at(0, 0)),
            (PlayerTag::Library, Icon::Library, icon_at(0, 3)),
            (PlayerTag::Settings, Icon::Settings, icon_at(0, SCREEN_HEIGHT - ICON_HEIGHT)),
            // Transport
            (PlayerTag::Play, Icon::Play, icon_at(TRANSPORT_X, 3)),
            (PlayerTag::Prev, Icon::Previous, icon_at(TRANSPORT_X, 6)),
            (PlayerTag::Next, Icon::Next, icon_at(TRANSPORT_X, 9)),
            (PlayerTag::Volume, Icon::Volume, icon_at(TRANSPORT_X, 12)),
        ];
        for (tag, icon, area) in buttons {
            composite.add_component(tag, ButtonIcon::new(icon, area))?;
        }

        let title_width = STATUS_X - CONTENT_X - 1;
        let labels = [
            (PlayerTag::TrackTitle, Rect::new(CONTENT_X, 0, title_width, 1)),
            (PlayerTag::TrackArtist, Rect::new(CONTENT_X, 1, title_width, 1)),
            (PlayerTag::Time, Rect::new(STATUS_X, 0, 20, 1)),
            (PlayerTag::VolumeLabel, Rect::new(STATUS_X, 1, 20, 1)),
        ];
        for (tag, area) in labels {
            composite.add_component(tag, LabelText::new(area))?;
        }

        let list_width = TRANSPORT_X - CONTENT_X - 1;
        composite.add_component(
            PlayerTag::Split,
            Rectangle::new(Rect::new(CONTENT_X, 2, list_width, 1), FIFTIES_TEAL),
        )?;
        composite.add_component(
            PlayerTag::ListPlaying,
            PlaylistWidget::new(Rect::new(CONTENT_X, 3, list_width, SCREEN_HEIGHT - 3)),
        )?;

        Ok(Self { composite })
    }

    /// The screen's widgets
    pub fn composite(&self) -> &CompositeScreen<PlayerTag> {
        &self.composite
    }

    /// Reconciles every player-sourced widget against one status snapshot
    ///
    /// Returns the tags to redraw. A failed status fetch changes nothing.
    fn reconcile(&mut self, ctx: &mut UiContext<'_>) -> Result<Vec<PlayerTag>> {
        let Some(status) = ctx.poll_status() else {
            return Ok(Vec::new());
        };
        let playlist = match ctx.player.playlist() {
            Ok(playlist) => Some(playlist),
            Err(e) => {
                warn!("Failed to get playlist: {e}");
                None
            }
        };

        let mut dirty = Vec::new();
        if self
            .composite
            .get_mut::<PlaylistWidget>(PlayerTag::ListPlaying)?
            .reconcile(playlist.as_deref(), status.active_index())
        {
            dirty.push(PlayerTag::ListPlaying);
        }

        let song_changed = ctx.player.current_song_changed();
        dirty.extend(reconcile_now_playing(
            &mut self.composite,
            NOW_PLAYING,
            &status,
            song_changed,
        )?);
        Ok(dirty)
    }

    /// Plays the touched playlist entry and marks it playing ahead of the player
    fn play_selected(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        let playlist = self
            .composite
            .get_mut::<PlaylistWidget>(PlayerTag::ListPlaying)?;
        let Some(index) = playlist.selection_for_playback() else {
            debug!("No valid playlist selection, nothing to play");
            return Ok(());
        };

        if let Err(e) = ctx.player.play_playlist_item(index + 1) {
            warn!("Failed to play playlist entry {}: {e}", index + 1);
            return Ok(());
        }
        playlist.mark_playing(index);
        self.composite.draw(PlayerTag::ListPlaying, ctx.surface)
    }
}

impl Screen for ScreenPlayer {
    fn id(&self) -> ScreenId {
        ScreenId::Player
    }

    fn show(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        self.reconcile(ctx)?;
        self.composite.show(ctx.surface)
    }

    fn update(&mut self, ctx: &mut UiContext<'_>) -> Result<()> {
        let dirty = self.reconcile(ctx)?;
        self.composite.draw_tags(&dirty, ctx.surface)
    }

    fn on_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> Result<Navigation> {
        let Some(tag) = self.composite.on_click(x, y) else {
            return Ok(Navigation::Stay);
        };
        debug!("Player screen: {} tapped", tag.name());

        let navigation = match tag {
            PlayerTag::Home => Navigation::SwitchTo(ScreenId::Player),
            PlayerTag::Library => Navigation::SwitchTo(ScreenId::Library),
            PlayerTag::Settings => Navigation::OpenModal(ModalId::Settings),
            PlayerTag::Volume => Navigation::OpenModal(ModalId::Volume),
            PlayerTag::TrackTitle | PlayerTag::TrackArtist => {
                Navigation::OpenModal(ModalId::CoverArt)
            }
            PlayerTag::Play => {
                toggle_playback(&mut self.composite, PlayerTag::Play, ctx)?;
                Navigation::Stay
            }
            PlayerTag::Prev => {
                transport(ctx, PlaybackCommand::Previous);
                Navigation::Stay
            }
            PlayerTag::Next => {
                transport(ctx, PlaybackCommand::Next);
                Navigation::Stay
            }
            PlayerTag::ListPlaying => {
                self.play_selected(ctx)?;
                Navigation::Stay
            }
            PlayerTag::Time | PlayerTag::VolumeLabel | PlayerTag::Split => Navigation::Stay,
        };
        Ok(navigation)
    }
}
