use super::Widget;
use crate::{
    config::{FIFTIES_GREEN, VOLUME_MAX},
    error::Result,
    ui::surface::Surface,
};
use ratatui::{layout::Rect, style::Style};

/// A horizontal progress slider
///
/// Touching the slider does not move the bar. It records the requested
/// percentage, which the owning screen sends to the player; the bar follows
/// once the player reports the new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    area: Rect,
    percentage: u8,
    requested: Option<u8>,
    style: Style,
}

impl Slider {
    /// Creates an empty slider
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            percentage: 0,
            requested: None,
            style: Style::default().fg(FIFTIES_GREEN),
        }
    }

    /// The percentage currently shown
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Sets the shown percentage, returning whether it changed
    pub fn set_percentage(&mut self, percentage: u8) -> bool {
        let percentage = percentage.min(VOLUME_MAX);
        let changed = self.percentage != percentage;
        self.percentage = percentage;
        changed
    }

    /// Takes the percentage requested by the last touch
    pub fn take_requested(&mut self) -> Option<u8> {
        self.requested.take()
    }
}

impl Widget for Slider {
    fn area(&self) -> Rect {
        self.area
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.draw_slider(self.area, self.percentage, self.style)
    }

    fn on_click(&mut self, x: u16, _y: u16) {
        let span = u32::from(self.area.width.saturating_sub(1).max(1));
        let offset = u32::from(x.saturating_sub(self.area.x)).min(span);
        self.requested = Some((offset * u32::from(VOLUME_MAX) / span) as u8);
    }
}
