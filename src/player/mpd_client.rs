//! MPD implementation of the player facade
//!
//! This module contains [`MpdPlayer`], which adapts a blocking `mpd::Client`
//! connection to [`PlayerStateFacade`].

use crate::{
    config::{Config, RECONNECT_ATTEMPTS, VOLUME_MAX},
    error::{Error, Result},
    utils::{format_duration, retry_with_backoff},
};
use log::{debug, info, warn};
use mpd::{Client, Song, State, Status, error::Error as MpdError, song::Id};

use super::{
    PlayerStateFacade,
    types::{PlaybackCommand, PlaybackState, PlayerStatus, Track},
};

/// What the player remembers between round trips to the daemon
#[derive(Debug, Default)]
struct Session {
    /// Song id of the most recent status snapshot
    snapshot_song: Option<Id>,
    /// Song id last reported by `current_song_changed`
    reported_song: Option<Id>,
    /// Tags of the current song
    current_song: Option<Track>,
    /// Song id and playlist version `current_song` was fetched at
    current_song_key: Option<(Id, u32)>,
    /// Playlist as of `queue_version`
    queue: Vec<Track>,
    /// Playlist version the cached queue belongs to
    queue_version: Option<u32>,
    /// Volume to restore when unmuting
    muted_volume: Option<u8>,
}

impl Session {
    /// Records the song of a complete status snapshot
    fn record_snapshot(&mut self, song: Option<Id>) {
        self.snapshot_song = song;
    }

    /// Whether the snapshot's song differs from the one last reported
    ///
    /// Consumes the change: a second call without a new snapshot says `false`.
    fn song_changed(&mut self) -> bool {
        let changed = self.snapshot_song != self.reported_song;
        self.reported_song = self.snapshot_song;
        changed
    }

    /// Whether the tags of song `id` must be fetched at playlist `version`
    ///
    /// Stream metadata updates bump the playlist version without moving the
    /// song id, so both are part of the key.
    fn current_song_is_stale(&self, id: Id, version: u32) -> bool {
        self.current_song_key != Some((id, version))
    }

    fn store_current_song(&mut self, id: Id, version: u32, track: Option<Track>) {
        self.current_song = track;
        self.current_song_key = Some((id, version));
    }

    fn clear_current_song(&mut self) {
        self.current_song = None;
        self.current_song_key = None;
    }

    fn title_and_artist(&self) -> (String, String) {
        self.current_song
            .as_ref()
            .map(|track| (track.title.clone(), track.artist.clone()))
            .unwrap_or_default()
    }

    fn queue_is_current(&self, version: u32) -> bool {
        self.queue_version == Some(version)
    }

    fn store_queue(&mut self, version: u32, queue: Vec<Track>) {
        self.queue = queue;
        self.queue_version = Some(version);
    }

    /// Forgets what a restarted daemon may no longer agree with
    fn invalidate_caches(&mut self) {
        self.queue_version = None;
        self.current_song_key = None;
    }

    /// Drops the mute when the volume was raised by another client
    fn observe_volume(&mut self, volume: u8) {
        if volume > 0 && self.muted_volume.is_some() {
            debug!("Volume raised to {volume}% elsewhere, dropping mute");
            self.muted_volume = None;
        }
    }

    fn muted(&self) -> bool {
        self.muted_volume.is_some()
    }

    fn mute(&mut self, previous: u8) {
        self.muted_volume = Some(previous);
    }

    /// Volume to restore on unmute; kept until `clear_mute` confirms the write
    fn unmute_target(&self) -> Option<u8> {
        self.muted_volume
    }

    fn clear_mute(&mut self) {
        self.muted_volume = None;
    }
}

/// A music daemon reachable over the MPD protocol
pub struct MpdPlayer {
    /// The blocking protocol client, `None` after the daemon dropped it
    client: Option<Client>,
    /// Address the client is connected to
    address: String,
    session: Session,
}

impl MpdPlayer {
    /// Connects to the music daemon named in the configuration
    pub fn connect(config: &Config) -> Result<Self> {
        let address = config.mpd_address();
        info!("Connecting to player at {address}");
        let client = open(&address, config.connect_retries)?;

        Ok(Self {
            client: Some(client),
            address,
            session: Session::default(),
        })
    }

    /// Address of the connected daemon
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The live client, reconnecting first if the last one was dropped
    fn client(&mut self) -> Result<&mut Client> {
        let client = match self.client.take() {
            Some(client) => client,
            None => {
                info!("Reconnecting to player at {}", self.address);
                let client = open(&self.address, RECONNECT_ATTEMPTS)?;
                self.session.invalidate_caches();
                client
            }
        };
        Ok(self.client.insert(client))
    }

    /// Drops the client when `result` shows the connection is no longer usable
    fn settle<T>(&mut self, result: mpd::error::Result<T>) -> mpd::error::Result<T> {
        if let Err(error) = &result
            && connection_lost(error)
        {
            warn!("Lost connection to player at {}: {error}", self.address);
            self.client = None;
        }
        result
    }

    fn query<T>(
        &mut self,
        query: &str,
        run: impl FnOnce(&mut Client) -> mpd::error::Result<T>,
    ) -> Result<T> {
        let result = run(self.client()?);
        self.settle(result)
            .map_err(|source| Error::PlayerQueryFailed {
                query: query.to_string(),
                source,
            })
    }

    fn command(
        &mut self,
        command: String,
        run: impl FnOnce(&mut Client) -> mpd::error::Result<()>,
    ) -> Result<()> {
        let result = run(self.client()?);
        self.settle(result)
            .map_err(|source| Error::PlayerCommandFailed { command, source })
    }

    fn raw_status(&mut self) -> Result<Status> {
        self.query("status", Client::status)
    }

    fn raw_volume(&mut self) -> Result<u8> {
        Ok(clamp_volume(self.raw_status()?.volume.into()))
    }

    fn write_volume(&mut self, percent: u8) -> Result<()> {
        let percent = percent.min(VOLUME_MAX);
        debug!("Setting volume to {percent}%");
        self.command(format!("setvol {percent}"), |client| {
            client.volume(percent as i8)
        })
    }
}

impl PlayerStateFacade for MpdPlayer {
    /// One `status` round trip, plus the playlist and current song when
    /// their versions moved, so the playlist pairs with this snapshot's index
    fn status(&mut self) -> Result<PlayerStatus> {
        let status = self.raw_status()?;
        let version = status.queue_version;
        let song = status.song.map(|place| place.id);

        if !self.session.queue_is_current(version) {
            debug!("Playlist version moved to {version}, refetching");
            let queue = self
                .query("playlistinfo", Client::queue)?
                .into_iter()
                .map(track_from_song)
                .collect();
            self.session.store_queue(version, queue);
        }

        match song {
            Some(id) if self.session.current_song_is_stale(id, version) => {
                let track = self
                    .query("currentsong", Client::currentsong)?
                    .map(track_from_song);
                self.session.store_current_song(id, version, track);
            }
            Some(_) => {}
            None => self.session.clear_current_song(),
        }
        self.session.record_snapshot(song);

        let volume = clamp_volume(status.volume.into());
        self.session.observe_volume(volume);
        let (track_title, track_artist) = self.session.title_and_artist();

        Ok(PlayerStatus {
            state: match status.state {
                State::Play => PlaybackState::Play,
                State::Pause => PlaybackState::Pause,
                State::Stop => PlaybackState::Stop,
            },
            volume,
            muted: self.session.muted(),
            time_current: format_duration(status.elapsed),
            time_total: format_duration(status.duration),
            track_title,
            track_artist,
            playing_index: status.song.map(|place| place.pos as usize + 1),
        })
    }

    /// The playlist fetched with the most recent status snapshot
    fn playlist(&mut self) -> Result<Vec<Track>> {
        if self.session.queue_version.is_none() {
            self.status()?;
        }
        Ok(self.session.queue.clone())
    }

    fn current_song_changed(&mut self) -> bool {
        self.session.song_changed()
    }

    fn set_playback(&mut self, command: PlaybackCommand) -> Result<()> {
        info!("Playback command: {command}");
        self.command(command.to_string(), |client| match command {
            PlaybackCommand::Play => client.play(),
            PlaybackCommand::Pause => client.pause(true),
            PlaybackCommand::Previous => client.prev(),
            PlaybackCommand::Next => client.next(),
        })
    }

    fn set_volume(&mut self, percent: u8) -> Result<()> {
        self.write_volume(percent)?;
        self.session.clear_mute();
        Ok(())
    }

    fn adjust_volume(&mut self, delta: i8) -> Result<()> {
        let current = self.raw_volume()?;
        let target = clamp_volume(i16::from(current) + i16::from(delta));
        self.set_volume(target)
    }

    fn toggle_mute(&mut self) -> Result<()> {
        match self.session.unmute_target() {
            Some(previous) => {
                info!("Unmuting, restoring volume {previous}%");
                self.write_volume(previous)?;
                self.session.clear_mute();
            }
            None => {
                let previous = self.raw_volume()?;
                info!("Muting, remembering volume {previous}%");
                self.write_volume(0)?;
                self.session.mute(previous);
            }
        }
        Ok(())
    }

    fn play_playlist_item(&mut self, position: usize) -> Result<()> {
        let Some(place) = position.checked_sub(1) else {
            return Err(Error::PlayerCommandRejected {
                command: format!("play {position}"),
                reason: "playlist positions start at 1".to_string(),
            });
        };
        info!("Playing playlist entry {position}");
        self.command(format!("play {position}"), |client| {
            client.switch(place as u32)
        })
    }
}

/// Dials the daemon, retrying with backoff
fn open(address: &str, attempts: u32) -> Result<Client> {
    retry_with_backoff(
        attempts,
        || Client::connect(address),
        &format!("Connection to {address}"),
    )
    .map_err(|source| Error::PlayerConnectionFailed {
        address: address.to_string(),
        source,
    })
}

/// Whether the connection is unusable after `error`
///
/// Only an `ACK` from the daemon leaves the stream in a known state.
fn connection_lost(error: &MpdError) -> bool {
    !matches!(error, MpdError::Server(_))
}

fn track_from_song(song: Song) -> Track {
    Track {
        title: song.title.unwrap_or_default(),
        artist: song.artist.unwrap_or_default(),
        file: song.file,
    }
}

/// Clamps a raw mixer value into `0..=VOLUME_MAX`; MPD reports -1 without a mixer
fn clamp_volume(raw: i16) -> u8 {
    raw.clamp(0, i16::from(VOLUME_MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpd::error::{ErrorCode, ProtoError, ServerError};
    use std::io;

    fn track(title: &str) -> Track {
        Track {
            title: title.to_string(),
            artist: "The Platters".to_string(),
            file: format!("fifties/{title}.flac"),
        }
    }

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(-1), 0);
        assert_eq!(clamp_volume(55), 55);
        assert_eq!(clamp_volume(130), 100);
    }

    #[test]
    fn test_track_from_song() {
        let song = Song {
            file: "fifties/blue_moon.flac".to_string(),
            title: Some("Blue Moon".to_string()),
            artist: None,
            ..Default::default()
        };
        let track = track_from_song(song);
        assert_eq!(track.title, "Blue Moon");
        assert_eq!(track.artist, "");
        assert_eq!(track.file, "fifties/blue_moon.flac");
    }

    #[test]
    fn test_song_change_is_reported_once() {
        let mut session = Session::default();
        assert!(!session.song_changed());

        session.record_snapshot(Some(Id(3)));
        assert!(session.song_changed());
        assert!(!session.song_changed());

        session.record_snapshot(Some(Id(3)));
        assert!(!session.song_changed());

        session.record_snapshot(Some(Id(4)));
        session.record_snapshot(Some(Id(4)));
        assert!(session.song_changed());

        session.record_snapshot(None);
        assert!(session.song_changed());
    }

    #[test]
    fn test_current_song_refetched_on_id_or_version() {
        let mut session = Session::default();
        assert!(session.current_song_is_stale(Id(3), 7));

        session.store_current_song(Id(3), 7, Some(track("Only You")));
        assert!(!session.current_song_is_stale(Id(3), 7));
        assert_eq!(
            session.title_and_artist(),
            ("Only You".to_string(), "The Platters".to_string())
        );

        // Same song, retagged by the stream
        assert!(session.current_song_is_stale(Id(3), 8));
        assert!(session.current_song_is_stale(Id(4), 7));

        session.clear_current_song();
        assert!(session.current_song_is_stale(Id(3), 7));
        assert_eq!(session.title_and_artist(), (String::new(), String::new()));
    }

    #[test]
    fn test_queue_cached_per_version() {
        let mut session = Session::default();
        assert!(!session.queue_is_current(7));

        session.store_queue(7, vec![track("Only You"), track("The Great Pretender")]);
        assert!(session.queue_is_current(7));
        assert!(!session.queue_is_current(8));

        session.invalidate_caches();
        assert!(!session.queue_is_current(7));
        assert_eq!(session.queue.len(), 2);
    }

    #[test]
    fn test_unmute_target_survives_until_cleared() {
        let mut session = Session::default();
        session.mute(40);
        assert!(session.muted());

        // A failed restore leaves the saved volume in place
        assert_eq!(session.unmute_target(), Some(40));
        assert_eq!(session.unmute_target(), Some(40));

        session.clear_mute();
        assert!(!session.muted());
        assert_eq!(session.unmute_target(), None);
    }

    #[test]
    fn test_volume_raised_elsewhere_drops_mute() {
        let mut session = Session::default();
        session.mute(40);
        session.observe_volume(0);
        assert!(session.muted());

        session.observe_volume(25);
        assert!(!session.muted());
    }

    #[test]
    fn test_connection_lost_on_transport_errors_only() {
        let io_error = MpdError::Io(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(connection_lost(&io_error));
        assert!(connection_lost(&MpdError::Proto(ProtoError::NotOk)));

        let ack = MpdError::Server(ServerError {
            code: ErrorCode::NoExist,
            pos: 0,
            command: "play".to_string(),
            detail: "No such song".to_string(),
        });
        assert!(!connection_lost(&ack));
    }

    #[test]
    fn test_open_unreachable_daemon_fails() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        match open(&address, 1) {
            Err(Error::PlayerConnectionFailed { address: failed, .. }) => {
                assert_eq!(failed, address)
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("connected to a closed port"),
        }
    }
}
