use super::Widget;
use crate::{
    config::{FIFTIES_CHARCOAL, FIFTIES_YELLOW},
    error::Result,
    ui::surface::Surface,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
};

/// A single line of text
///
/// The label keeps the text it last rendered so callers can skip redraws of
/// unchanged values.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelText {
    area: Rect,
    text: String,
    style: Style,
}

impl LabelText {
    /// Creates an empty label
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            text: String::new(),
            style: Style::default().fg(FIFTIES_YELLOW).bg(FIFTIES_CHARCOAL),
        }
    }

    /// Creates a label with fixed text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Overrides the text colour
    pub fn with_color(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    /// The text last set
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text, returning whether it changed
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        true
    }
}

impl Widget for LabelText {
    fn area(&self) -> Rect {
        self.area
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.draw_text(self.area, &self.text, self.style, None)
    }
}

/// A solid rectangle, used as a separator
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    area: Rect,
    color: Color,
}

impl Rectangle {
    /// Creates a rectangle
    pub fn new(area: Rect, color: Color) -> Self {
        Self { area, color }
    }
}

impl Widget for Rectangle {
    fn area(&self) -> Rect {
        self.area
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.fill(self.area, self.color)
    }
}
