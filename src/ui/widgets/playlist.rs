use super::{ItemList, Widget};
use crate::{
    config::PENDING_CONFIRMATION_TICKS,
    error::Result,
    player::Track,
    ui::surface::Surface,
};
use log::debug;
use ratatui::layout::Rect;

/// An optimistic playback selection waiting for the player to confirm it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSelection {
    /// Entry the play command was issued for
    index: usize,
    /// Entry that was active before the command
    previous: Option<usize>,
    /// Ticks left before the player's report wins regardless
    ticks_left: u8,
}

/// Mirror of the player's playlist, highlighting the playing entry
///
/// Two pieces of state are kept apart: the touch selection, which never
/// affects playback on its own, and the active entry, which mirrors the
/// player. After a play command the active entry is set optimistically; the
/// next reconciliation passes hold it while the player still reports the
/// pre-command entry, and drop the hold as soon as the player confirms it or
/// reports anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistWidget {
    list: ItemList,
    tracks: Vec<Track>,
    pending: Option<PendingSelection>,
}

impl PlaylistWidget {
    /// Creates an empty playlist mirror
    pub fn new(area: Rect) -> Self {
        Self {
            list: ItemList::new(area),
            tracks: Vec::new(),
            pending: None,
        }
    }

    /// The cached copy of the player's playlist
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// 0-based entry drawn as playing
    pub fn active_item_index(&self) -> Option<usize> {
        self.list.active_item_index()
    }

    /// 0-based entry last selected by touch
    pub fn item_selected_index(&self) -> Option<usize> {
        self.list.item_selected_index()
    }

    /// Whether an optimistic selection is still unconfirmed
    pub fn has_pending_selection(&self) -> bool {
        self.pending.is_some()
    }

    /// The touch selection, if it names an existing entry
    pub fn selection_for_playback(&self) -> Option<usize> {
        self.list
            .item_selected_index()
            .filter(|&index| index < self.tracks.len())
    }

    /// Marks `index` as playing ahead of the player's confirmation
    pub fn mark_playing(&mut self, index: usize) {
        self.pending = Some(PendingSelection {
            index,
            previous: self.list.active_item_index,
            ticks_left: PENDING_CONFIRMATION_TICKS,
        });
        self.list.active_item_index = Some(index);
        self.list.show_item_active();
    }

    /// Reconciles against the player's playlist and 0-based playing entry
    ///
    /// `playlist` is `None` when the playlist could not be fetched this tick;
    /// the cached copy is then left alone. Returns whether anything visible
    /// changed, so the caller issues a single redraw for both fields.
    pub fn reconcile(&mut self, playlist: Option<&[Track]>, playing: Option<usize>) -> bool {
        let mut changed = false;

        if let Some(playlist) = playlist {
            if self.tracks != playlist {
                debug!("Playlist changed, {} entries", playlist.len());
                self.tracks = playlist.to_vec();
                self.list
                    .set_items(self.tracks.iter().map(Track::display_name).collect());
                changed = true;
            }
        }

        let target = match self.pending.take() {
            Some(pending) if playing == Some(pending.index) => {
                debug!("Player confirmed playlist entry {}", pending.index);
                playing
            }
            Some(mut pending) if playing == pending.previous && pending.ticks_left > 0 => {
                pending.ticks_left -= 1;
                self.pending = Some(pending);
                return changed;
            }
            _ => playing,
        };

        if self.list.active_item_index != target {
            self.list.active_item_index = target;
            self.list.show_item_active();
            changed = true;
        }

        changed
    }
}

impl Widget for PlaylistWidget {
    fn area(&self) -> Rect {
        self.list.area()
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        self.list.draw(surface)
    }

    fn on_click(&mut self, x: u16, y: u16) {
        self.list.on_click(x, y);
    }
}
