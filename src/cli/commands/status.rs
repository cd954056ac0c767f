//! Status command implementation for crab-jukebox
//!
//! This module implements the status command which prints one status
//! snapshot of the player, and optionally its playlist.

use crate::{
    config::{Config, LOG_MSG_STATUS},
    error::Result,
    player::{MpdPlayer, PlayerStateFacade, PlayerStatus, Track},
};
use log::info;

/// Status command implementation
pub struct StatusCommand<'a> {
    args: &'a super::super::Status,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command
    pub fn new(args: &'a super::super::Status) -> Self {
        Self { args }
    }

    /// Execute the status command
    pub fn run(&self, config: &Config) -> Result<()> {
        info!("{LOG_MSG_STATUS}");
        let mut player = MpdPlayer::connect(config)?;
        let status = player.status()?;
        println!("{}", describe_status(player.address(), &status));

        if self.args.playlist {
            let playlist = player.playlist()?;
            print!("{}", describe_playlist(&playlist, status.active_index()));
        }
        Ok(())
    }
}

/// Renders a status snapshot as lines of text
fn describe_status(address: &str, status: &PlayerStatus) -> String {
    let mute = if status.muted { " (muted)" } else { "" };
    format!(
        "Player: {address}\nState: {}\nTrack: {} - {}\nTime: {}\n{}{mute}",
        status.state,
        status.track_artist,
        status.track_title,
        status.time_display(),
        status.volume_display(),
    )
}

/// Renders the playlist, marking the playing entry
fn describe_playlist(playlist: &[Track], playing: Option<usize>) -> String {
    playlist
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let marker = if Some(index) == playing { '>' } else { ' ' };
            format!("{marker} {:>3}. {}\n", index + 1, track.display_name())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlaybackState;

    #[test]
    fn test_describe_status() {
        let status = PlayerStatus {
            state: PlaybackState::Play,
            volume: 35,
            muted: true,
            time_current: "1:02".to_string(),
            time_total: "3:10".to_string(),
            track_title: "Tutti Frutti".to_string(),
            track_artist: "Little Richard".to_string(),
            playing_index: Some(2),
        };
        assert_eq!(
            describe_status("localhost:6600", &status),
            "Player: localhost:6600\nState: play\nTrack: Little Richard - Tutti Frutti\nTime: 1:02/3:10\nVol: 35% (muted)"
        );
    }

    #[test]
    fn test_describe_playlist_marks_playing() {
        let playlist = vec![
            Track::new("Tutti Frutti", "Little Richard", "richard/tutti.flac"),
            Track::new("Johnny B. Goode", "Chuck Berry", "berry/johnny.flac"),
        ];
        assert_eq!(
            describe_playlist(&playlist, Some(1)),
            "    1. Little Richard - Tutti Frutti\n>   2. Chuck Berry - Johnny B. Goode\n"
        );
    }
}
