//! Drawing surface boundary
//!
//! Widgets never touch the display directly. Each widget draw turns into one
//! call on a [`Surface`], which is what makes redraw work countable: one
//! surface call per redrawn widget.

use crate::error::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
};

/// Images a button or picture can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Navigation: player screen, shown as the active screen
    PlayerActive,
    /// Navigation: library browser
    Library,
    /// Navigation: settings
    Settings,
    /// Transport: start playback
    Play,
    /// Transport: pause playback
    Pause,
    /// Transport: previous track
    Previous,
    /// Transport: next track
    Next,
    /// Opens the volume window
    Volume,
    /// Mute switch, sound on
    VolumeMute,
    /// Mute switch, sound off
    VolumeMuteActive,
    /// Volume step up
    VolumeUp,
    /// Volume step down
    VolumeDown,
    /// Leave the current window
    Back,
    /// Album art placeholder
    CoverArt,
}

impl Icon {
    /// Text rendition used by character-cell surfaces
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::PlayerActive => "♪",
            Icon::Library => "Lib",
            Icon::Settings => "Set",
            Icon::Play => "▶",
            Icon::Pause => "❚❚",
            Icon::Previous => "|◀",
            Icon::Next => "▶|",
            Icon::Volume => "Vol",
            Icon::VolumeMute => "Mute",
            Icon::VolumeMuteActive => "MUTED",
            Icon::VolumeUp => "+",
            Icon::VolumeDown => "-",
            Icon::Back => "Back",
            Icon::CoverArt => "♫",
        }
    }
}

/// Highlight of one list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    /// Plain row
    None,
    /// The entry that is currently playing
    Active,
    /// The entry last touched
    Selected,
}

/// One visible list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a> {
    /// Row text
    pub text: &'a str,
    /// Row highlight
    pub highlight: RowHighlight,
}

/// Colours of a list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStyle {
    /// Plain rows
    pub text: Style,
    /// The playing row
    pub active: Style,
    /// The touched row
    pub selected: Style,
    /// Outline colour, `None` hides the outline
    pub outline: Option<Color>,
}

/// Frame of a modal window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStyle {
    /// Window background
    pub background: Color,
    /// Title colour
    pub title: Color,
    /// Outline colour, `None` hides the outline
    pub outline: Option<Color>,
}

/// The rendering substrate screens draw on
pub trait Surface {
    /// Fills an area with a solid colour
    fn fill(&mut self, area: Rect, color: Color) -> Result<()>;

    /// Draws a line of text, optionally outlined
    fn draw_text(&mut self, area: Rect, text: &str, style: Style, outline: Option<Color>)
    -> Result<()>;

    /// Draws an icon image
    fn blit_icon(&mut self, area: Rect, icon: Icon, style: Style) -> Result<()>;

    /// Draws the visible rows of a list
    fn draw_list(&mut self, area: Rect, rows: &[ListRow<'_>], style: &ListStyle) -> Result<()>;

    /// Draws a horizontal progress slider
    fn draw_slider(&mut self, area: Rect, percentage: u8, style: Style) -> Result<()>;

    /// Draws the frame and title of a modal window
    fn draw_window(&mut self, area: Rect, title: &str, style: &WindowStyle) -> Result<()>;
}
