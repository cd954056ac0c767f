//! The screens of the jukebox
//!
//! This module contains the player screen, the modal screens stacked on top
//! of it, and the loop that runs a modal until it closes.

pub mod cover_art;
pub mod player;
pub mod settings;
pub mod volume;

pub use cover_art::{CoverArtTag, ScreenCoverArt};
pub use player::{PlayerTag, ScreenPlayer};
pub use settings::{ScreenSettings, SettingsTag};
pub use volume::{ScreenVolume, VolumeTag};

use crate::{
    error::Result,
    player::{PlaybackCommand, PlaybackState, PlayerStatus},
    ui::{
        context::UiContext,
        input::InputEvent,
        modal::{Modal, ModalState},
        screen::{CompositeScreen, ModalId, Navigation, Tag},
        surface::Icon,
        widgets::{ButtonIcon, LabelText},
    },
};
use log::{debug, warn};

/// Builds and runs the modal `id` until it closes
pub fn open_modal(id: ModalId, ctx: &mut UiContext<'_>) -> Result<()> {
    match id {
        ModalId::Volume => run_modal(&mut ScreenVolume::new(ctx.config)?, ctx),
        ModalId::CoverArt => run_modal(&mut ScreenCoverArt::new()?, ctx),
        ModalId::Settings => run_modal(&mut ScreenSettings::new(ctx.config)?, ctx),
    }
}

/// Shows a modal and runs its poll-and-input loop until it closes
///
/// Modals opened from inside the modal run nested; when one closes, this
/// modal is shown again in full. A quit request closes every modal on the way
/// out.
pub fn run_modal(modal: &mut dyn Modal, ctx: &mut UiContext<'_>) -> Result<()> {
    modal.show(ctx)?;

    while modal.state() == ModalState::Visible {
        if ctx.quit_requested() {
            modal.close();
            break;
        }

        modal.event_loop_hook(ctx)?;

        match ctx.input.next_event(ctx.config.poll_interval())? {
            Some(InputEvent::Touch { x, y }) => match modal.on_click(x, y, ctx)? {
                Navigation::Stay => {}
                Navigation::OpenModal(id) => {
                    open_modal(id, ctx)?;
                    if !ctx.quit_requested() {
                        modal.show(ctx)?;
                    }
                }
                Navigation::SwitchTo(target) => {
                    debug!("Modal screens do not switch screens, ignoring {target:?}");
                }
            },
            Some(InputEvent::Quit) => ctx.request_quit(),
            None => {}
        }
    }

    Ok(())
}

/// Icon of the play/pause button for a playback state
///
/// While playing the button offers to pause; in any other state it offers to play.
pub fn play_button_icon(state: PlaybackState) -> Icon {
    if state.is_playing() {
        Icon::Pause
    } else {
        Icon::Play
    }
}

/// Tags of the now-playing widgets a screen carries
#[derive(Debug, Clone, Copy)]
pub struct NowPlayingTags<T> {
    pub title: T,
    pub artist: T,
    pub time: T,
    pub volume: T,
    pub play: T,
}

/// Reconciles the now-playing widgets against one status snapshot
///
/// Returns the tags whose value changed. A track label is redrawn when its
/// text changed, and both are redrawn when the player reports a new song
/// identity, even if the tags read the same.
pub fn reconcile_now_playing<T: Tag>(
    composite: &mut CompositeScreen<T>,
    tags: NowPlayingTags<T>,
    status: &PlayerStatus,
    song_changed: bool,
) -> Result<Vec<T>> {
    let mut dirty = Vec::new();

    if composite
        .get_mut::<LabelText>(tags.time)?
        .set_text(&status.time_display())
    {
        dirty.push(tags.time);
    }
    if composite
        .get_mut::<LabelText>(tags.volume)?
        .set_text(&status.volume_display())
    {
        dirty.push(tags.volume);
    }
    if composite
        .get_mut::<ButtonIcon>(tags.play)?
        .set_icon(play_button_icon(status.state))
    {
        dirty.push(tags.play);
    }

    if song_changed {
        debug!(
            "Track changed to '{}' by '{}'",
            status.track_title, status.track_artist
        );
    }
    let title_changed = composite
        .get_mut::<LabelText>(tags.title)?
        .set_text(&status.track_title);
    if title_changed || song_changed {
        dirty.push(tags.title);
    }
    let artist_changed = composite
        .get_mut::<LabelText>(tags.artist)?
        .set_text(&status.track_artist);
    if artist_changed || song_changed {
        dirty.push(tags.artist);
    }

    Ok(dirty)
}

/// Toggles between play and pause and redraws the button optimistically
pub fn toggle_playback<T: Tag>(
    composite: &mut CompositeScreen<T>,
    play_tag: T,
    ctx: &mut UiContext<'_>,
) -> Result<()> {
    let playing = match ctx.poll_status() {
        Some(status) => status.state.is_playing(),
        None => composite.get::<ButtonIcon>(play_tag)?.icon() == Icon::Pause,
    };
    let (command, icon) = if playing {
        (PlaybackCommand::Pause, Icon::Play)
    } else {
        (PlaybackCommand::Play, Icon::Pause)
    };

    if let Err(e) = ctx.player.set_playback(command) {
        warn!("Failed to {command}: {e}");
        return Ok(());
    }
    if composite.get_mut::<ButtonIcon>(play_tag)?.set_icon(icon) {
        composite.draw(play_tag, ctx.surface)?;
    }
    Ok(())
}

/// Issues a single transport command, logging a refusal
pub fn transport(ctx: &mut UiContext<'_>, command: PlaybackCommand) {
    if let Err(e) = ctx.player.set_playback(command) {
        warn!("Failed to skip to {command} track: {e}");
    }
}
