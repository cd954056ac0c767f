//! Player-related types for crab-jukebox
//!
//! This module contains the value types exchanged with the player backend:
//! playback state, transport commands, track descriptors and status snapshots.

use crate::utils::{format_time_label, format_track_entry, format_volume_label};

/// Playback state reported by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// A track is playing
    Play,
    /// Playback is paused on the current track
    Pause,
    /// Nothing is playing
    #[default]
    Stop,
}

impl PlaybackState {
    /// Whether the player is actively playing
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Play)
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlaybackState::Play => write!(f, "play"),
            PlaybackState::Pause => write!(f, "pause"),
            PlaybackState::Stop => write!(f, "stop"),
        }
    }
}

/// Transport command accepted by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Skip to the previous playlist entry
    Previous,
    /// Skip to the next playlist entry
    Next,
}

impl std::fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlaybackCommand::Play => write!(f, "play"),
            PlaybackCommand::Pause => write!(f, "pause"),
            PlaybackCommand::Previous => write!(f, "previous"),
            PlaybackCommand::Next => write!(f, "next"),
        }
    }
}

/// A playlist entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    /// Track title, empty when the file carries no tag
    pub title: String,
    /// Track artist, empty when the file carries no tag
    pub artist: String,
    /// Path of the file relative to the music library
    pub file: String,
}

impl Track {
    /// Creates a track descriptor
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            file: file.into(),
        }
    }

    /// The line shown for this track in a playlist
    pub fn display_name(&self) -> String {
        format_track_entry(&self.title, &self.artist, &self.file)
    }
}

/// One status snapshot of the player
///
/// Every comparison made during a reconciliation tick uses the same snapshot,
/// so fields never mix values from before and after a backend change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerStatus {
    /// Playback state
    pub state: PlaybackState,
    /// Mixer volume in percent
    pub volume: u8,
    /// Whether the volume is muted
    pub muted: bool,
    /// Elapsed time of the current track, pre-formatted
    pub time_current: String,
    /// Total time of the current track, pre-formatted
    pub time_total: String,
    /// Title of the current track
    pub track_title: String,
    /// Artist of the current track
    pub track_artist: String,
    /// 1-based playlist position of the current track
    pub playing_index: Option<usize>,
}

impl PlayerStatus {
    /// Label text for the elapsed/total time display
    pub fn time_display(&self) -> String {
        format_time_label(&self.time_current, &self.time_total)
    }

    /// Label text for the volume display
    pub fn volume_display(&self) -> String {
        format_volume_label(self.volume)
    }

    /// 0-based playlist position of the current track
    pub fn active_index(&self) -> Option<usize> {
        self.playing_index.and_then(|index| index.checked_sub(1))
    }

    /// Whether the mute control should show its active variant
    pub fn is_silent(&self) -> bool {
        self.muted || self.volume == 0
    }
}
