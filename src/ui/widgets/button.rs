use super::Widget;
use crate::{
    config::{FIFTIES_CHARCOAL, FIFTIES_TEAL, FIFTIES_YELLOW},
    error::Result,
    ui::surface::{Icon, Surface},
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
};

/// A button showing an icon
///
/// The icon doubles as the button's rendered state: screens compare the icon
/// they want against [`icon`](Self::icon) and only redraw on a difference.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonIcon {
    area: Rect,
    icon: Icon,
    style: Style,
}

impl ButtonIcon {
    /// Creates an icon button
    pub fn new(icon: Icon, area: Rect) -> Self {
        Self {
            area,
            icon,
            style: Style::default().fg(FIFTIES_YELLOW).bg(FIFTIES_CHARCOAL),
        }
    }

    /// The icon currently shown
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Swaps the icon, returning whether it changed
    pub fn set_icon(&mut self, icon: Icon) -> bool {
        let changed = self.icon != icon;
        self.icon = icon;
        changed
    }
}

impl Widget for ButtonIcon {
    fn area(&self) -> Rect {
        self.area
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.blit_icon(self.area, self.icon, self.style)
    }
}

/// A button showing a caption
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonText {
    area: Rect,
    caption: String,
    style: Style,
    outline: Option<Color>,
}

impl ButtonText {
    /// Creates a captioned button
    pub fn new(caption: impl Into<String>, area: Rect) -> Self {
        Self {
            area,
            caption: caption.into(),
            style: Style::default().fg(FIFTIES_YELLOW).bg(FIFTIES_CHARCOAL),
            outline: Some(FIFTIES_TEAL),
        }
    }
}

impl Widget for ButtonText {
    fn area(&self) -> Rect {
        self.area
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.draw_text(self.area, &self.caption, self.style, self.outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_icon_reports_change() {
        let mut button = ButtonIcon::new(Icon::Play, Rect::new(0, 0, 6, 3));
        assert!(!button.set_icon(Icon::Play));
        assert!(button.set_icon(Icon::Pause));
        assert_eq!(button.icon(), Icon::Pause);
    }

    #[test]
    fn test_contains_uses_area() {
        let button = ButtonIcon::new(Icon::Play, Rect::new(10, 5, 6, 3));
        assert!(button.contains(10, 5));
        assert!(button.contains(15, 7));
        assert!(!button.contains(16, 7));
        assert!(!button.contains(12, 8));
    }
}
