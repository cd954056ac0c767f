//! Test doubles for the player, the drawing surface and touch input

use crate::{
    config::{Config, VOLUME_MAX},
    error::{Error, Result},
    player::{PlaybackCommand, PlaybackState, PlayerStateFacade, PlayerStatus, Track},
    ui::{
        context::UiContext,
        input::{InputEvent, InputSource},
        surface::{Icon, ListRow, ListStyle, RowHighlight, Surface, WindowStyle},
    },
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
};
use std::{collections::VecDeque, time::Duration};

/// A command the fake player received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issued {
    Playback(PlaybackCommand),
    SetVolume(u8),
    AdjustVolume(i8),
    ToggleMute,
    PlayItem(usize),
}

/// In-memory player whose state tests set directly
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub status: PlayerStatus,
    pub playlist: Vec<Track>,
    pub song_changed: bool,
    pub fail_queries: bool,
    pub reject_commands: bool,
    /// Whether `play_playlist_item` moves `playing_index` right away
    pub confirm_play_item: bool,
    pub issued: Vec<Issued>,
    pub status_calls: usize,
}

impl FakePlayer {
    /// A player on entry 1 of a three-track playlist, paused at 40% volume
    pub fn with_playlist() -> Self {
        let playlist = vec![
            Track::new("Blue Moon", "Elvis Presley", "elvis/blue_moon.flac"),
            Track::new("Rock Around the Clock", "Bill Haley", "haley/rock.flac"),
            Track::new("Great Balls of Fire", "Jerry Lee Lewis", "lewis/fire.flac"),
        ];
        Self {
            status: PlayerStatus {
                state: PlaybackState::Pause,
                volume: 40,
                muted: false,
                time_current: "0:12".to_string(),
                time_total: "2:31".to_string(),
                track_title: "Blue Moon".to_string(),
                track_artist: "Elvis Presley".to_string(),
                playing_index: Some(1),
            },
            playlist,
            song_changed: true,
            confirm_play_item: true,
            ..Default::default()
        }
    }

    /// Moves to another track, flagging an identity change
    pub fn change_track(&mut self, title: &str, artist: &str, playing_index: usize) {
        self.status.track_title = title.to_string();
        self.status.track_artist = artist.to_string();
        self.status.playing_index = Some(playing_index);
        self.song_changed = true;
    }

    fn command(&mut self, issued: Issued) -> Result<()> {
        if self.reject_commands {
            return Err(Error::PlayerCommandRejected {
                command: format!("{issued:?}"),
                reason: "fake player rejects commands".to_string(),
            });
        }
        self.issued.push(issued);
        Ok(())
    }

    fn query_failure(&self, query: &str) -> Error {
        Error::PlayerCommandRejected {
            command: query.to_string(),
            reason: "fake player is offline".to_string(),
        }
    }
}

impl PlayerStateFacade for FakePlayer {
    fn status(&mut self) -> Result<PlayerStatus> {
        self.status_calls += 1;
        if self.fail_queries {
            return Err(self.query_failure("status"));
        }
        Ok(self.status.clone())
    }

    fn playlist(&mut self) -> Result<Vec<Track>> {
        if self.fail_queries {
            return Err(self.query_failure("playlist"));
        }
        Ok(self.playlist.clone())
    }

    fn current_song_changed(&mut self) -> bool {
        std::mem::take(&mut self.song_changed)
    }

    fn set_playback(&mut self, command: PlaybackCommand) -> Result<()> {
        self.command(Issued::Playback(command))?;
        match command {
            PlaybackCommand::Play => self.status.state = PlaybackState::Play,
            PlaybackCommand::Pause => self.status.state = PlaybackState::Pause,
            PlaybackCommand::Previous | PlaybackCommand::Next => {
                let current = self.status.playing_index.unwrap_or(1);
                let next = if command == PlaybackCommand::Next {
                    (current + 1).min(self.playlist.len().max(1))
                } else {
                    current.saturating_sub(1).max(1)
                };
                self.status.playing_index = Some(next);
                self.song_changed = true;
            }
        }
        Ok(())
    }

    fn set_volume(&mut self, percent: u8) -> Result<()> {
        self.command(Issued::SetVolume(percent))?;
        self.status.volume = percent.min(VOLUME_MAX);
        self.status.muted = false;
        Ok(())
    }

    fn adjust_volume(&mut self, delta: i8) -> Result<()> {
        self.command(Issued::AdjustVolume(delta))?;
        let target = i16::from(self.status.volume) + i16::from(delta);
        self.status.volume = target.clamp(0, i16::from(VOLUME_MAX)) as u8;
        self.status.muted = false;
        Ok(())
    }

    fn toggle_mute(&mut self) -> Result<()> {
        self.command(Issued::ToggleMute)?;
        self.status.muted = !self.status.muted;
        Ok(())
    }

    fn play_playlist_item(&mut self, position: usize) -> Result<()> {
        self.command(Issued::PlayItem(position))?;
        if self.confirm_play_item {
            self.status.playing_index = Some(position);
            self.song_changed = true;
        }
        Ok(())
    }
}

/// What a recorded draw call painted
#[derive(Debug, Clone, PartialEq)]
pub enum DrawKind {
    Fill(Color),
    Text(String),
    Icon(Icon),
    List {
        rows: Vec<String>,
        active: Option<usize>,
    },
    Slider(u8),
    Window(String),
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub area: Rect,
    pub kind: DrawKind,
}

/// Surface that records draw calls instead of painting
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Draw calls that painted exactly `area`
    pub fn calls_at(&self, area: Rect) -> Vec<&DrawCall> {
        self.calls.iter().filter(|call| call.area == area).collect()
    }

    fn record(&mut self, area: Rect, kind: DrawKind) -> Result<()> {
        self.calls.push(DrawCall { area, kind });
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn fill(&mut self, area: Rect, color: Color) -> Result<()> {
        self.record(area, DrawKind::Fill(color))
    }

    fn draw_text(
        &mut self,
        area: Rect,
        text: &str,
        _style: Style,
        _outline: Option<Color>,
    ) -> Result<()> {
        self.record(area, DrawKind::Text(text.to_string()))
    }

    fn blit_icon(&mut self, area: Rect, icon: Icon, _style: Style) -> Result<()> {
        self.record(area, DrawKind::Icon(icon))
    }

    fn draw_list(&mut self, area: Rect, rows: &[ListRow<'_>], _style: &ListStyle) -> Result<()> {
        let active = rows
            .iter()
            .position(|row| row.highlight == RowHighlight::Active);
        let rows = rows.iter().map(|row| row.text.to_string()).collect();
        self.record(area, DrawKind::List { rows, active })
    }

    fn draw_slider(&mut self, area: Rect, percentage: u8, _style: Style) -> Result<()> {
        self.record(area, DrawKind::Slider(percentage))
    }

    fn draw_window(&mut self, area: Rect, title: &str, _style: &WindowStyle) -> Result<()> {
        self.record(area, DrawKind::Window(title.to_string()))
    }
}

/// Input source replaying a fixed script; reports quit once the script runs out
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    /// Queues a touch
    pub fn touch(mut self, x: u16, y: u16) -> Self {
        self.events.push_back(Some(InputEvent::Touch { x, y }));
        self
    }

    /// Queues a tick without input
    pub fn idle(mut self) -> Self {
        self.events.push_back(None);
        self
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front().unwrap_or(Some(InputEvent::Quit)))
    }
}

/// Owns a full set of test doubles and hands out contexts over them
#[derive(Default)]
pub struct Harness {
    pub player: FakePlayer,
    pub surface: RecordingSurface,
    pub input: ScriptedInput,
    pub config: Config,
}

impl Harness {
    pub fn new(player: FakePlayer) -> Self {
        Self {
            player,
            ..Default::default()
        }
    }

    pub fn ctx(&mut self) -> UiContext<'_> {
        UiContext::new(
            &mut self.player,
            &mut self.surface,
            &mut self.input,
            &self.config,
        )
    }
}
