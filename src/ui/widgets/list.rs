use super::Widget;
use crate::{
    config::{FIFTIES_CHARCOAL, FIFTIES_ORANGE, FIFTIES_TEAL, FIFTIES_YELLOW},
    error::Result,
    ui::surface::{ListRow, ListStyle, RowHighlight, Surface},
};
use ratatui::{layout::Rect, style::Style};

/// A scrollable list of text rows, one row per item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    area: Rect,
    items: Vec<String>,
    /// Entry drawn as active, e.g. the playing track
    pub(super) active_item_index: Option<usize>,
    /// Entry last selected by touch
    item_selected_index: Option<usize>,
    /// First item in the visible window
    first_visible: usize,
    style: ListStyle,
}

impl ItemList {
    /// Creates an empty list
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            items: Vec::new(),
            active_item_index: None,
            item_selected_index: None,
            first_visible: 0,
            style: ListStyle {
                text: Style::default().fg(FIFTIES_YELLOW).bg(FIFTIES_CHARCOAL),
                active: Style::default().fg(FIFTIES_ORANGE).bg(FIFTIES_CHARCOAL),
                selected: Style::default().fg(FIFTIES_CHARCOAL).bg(FIFTIES_TEAL),
                outline: None,
            },
        }
    }

    /// Replaces the items
    ///
    /// A selection or active entry that no longer exists is dropped.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if self.item_selected_index.is_some_and(|index| index >= self.items.len()) {
            self.item_selected_index = None;
        }
        if self.active_item_index.is_some_and(|index| index >= self.items.len()) {
            self.active_item_index = None;
        }
        self.first_visible = self.first_visible.min(self.items.len().saturating_sub(1));
    }

    /// Entry drawn as active
    pub fn active_item_index(&self) -> Option<usize> {
        self.active_item_index
    }

    /// Entry last selected by touch
    pub fn item_selected_index(&self) -> Option<usize> {
        self.item_selected_index
    }

    /// Number of rows that fit on screen
    pub fn visible_rows(&self) -> usize {
        let border = if self.style.outline.is_some() { 2 } else { 0 };
        usize::from(self.area.height.saturating_sub(border))
    }

    /// First item in the visible window
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Scrolls so the active entry is on screen, returning whether it scrolled
    pub fn show_item_active(&mut self) -> bool {
        let Some(active) = self.active_item_index else {
            return false;
        };
        let rows = self.visible_rows().max(1);
        let first = if active < self.first_visible {
            active
        } else if active >= self.first_visible + rows {
            active + 1 - rows
        } else {
            self.first_visible
        };
        let scrolled = first != self.first_visible;
        self.first_visible = first;
        scrolled
    }

    fn highlight(&self, index: usize) -> RowHighlight {
        if Some(index) == self.active_item_index {
            RowHighlight::Active
        } else if Some(index) == self.item_selected_index {
            RowHighlight::Selected
        } else {
            RowHighlight::None
        }
    }
}

impl Widget for ItemList {
    fn area(&self) -> Rect {
        self.area
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let rows: Vec<ListRow<'_>> = self
            .items
            .iter()
            .enumerate()
            .skip(self.first_visible)
            .take(self.visible_rows())
            .map(|(index, text)| ListRow {
                text,
                highlight: self.highlight(index),
            })
            .collect();
        surface.draw_list(self.area, &rows, &self.style)
    }

    /// Selects the row under the touch; a touch below the last item clears the selection
    fn on_click(&mut self, _x: u16, y: u16) {
        let border = u16::from(self.style.outline.is_some());
        let row = usize::from(y.saturating_sub(self.area.y + border));
        let index = self.first_visible + row;
        self.item_selected_index = (index < self.items.len()).then_some(index);
    }
}
