//! Player backend access for crab-jukebox
//!
//! Screens never talk to the music daemon directly. They read state and issue
//! commands through [`PlayerStateFacade`], which keeps the screen code testable
//! against a fake backend.

pub mod mpd_client;
pub mod types;

pub use mpd_client::MpdPlayer;
pub use types::{PlaybackCommand, PlaybackState, PlayerStatus, Track};

use crate::error::Result;

/// The narrow interface through which screens observe and drive the player
pub trait PlayerStateFacade {
    /// Fetches one consistent status snapshot
    fn status(&mut self) -> Result<PlayerStatus>;

    /// The playlist in play order, as of the most recent status snapshot
    fn playlist(&mut self) -> Result<Vec<Track>>;

    /// Whether the identity of the current track changed since the last call
    ///
    /// The answer is based on the most recent [`status`](Self::status) snapshot
    /// and is consumed by the call: asking twice without a new track yields
    /// `true` at most once. Identity is the player's song id, so two
    /// consecutive tracks with identical tags still count as a change.
    fn current_song_changed(&mut self) -> bool;

    /// Sets the playback state
    fn set_playback(&mut self, command: PlaybackCommand) -> Result<()>;

    /// Sets the absolute volume in percent
    fn set_volume(&mut self, percent: u8) -> Result<()>;

    /// Changes the volume by a relative amount, clamped to the mixer range
    fn adjust_volume(&mut self, delta: i8) -> Result<()>;

    /// Mutes, or restores the volume from before muting
    fn toggle_mute(&mut self) -> Result<()>;

    /// Plays the playlist entry at the 1-based `position`
    fn play_playlist_item(&mut self, position: usize) -> Result<()>;
}
