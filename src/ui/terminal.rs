//! Terminal rendition of the touchscreen
//!
//! Every surface call renders one ratatui widget into a scratch buffer the
//! size of the widget's area and writes only those cells to the terminal, so
//! a redraw of one widget leaves the rest of the screen untouched. Mouse
//! left-presses stand in for touches.

use super::{
    input::{InputEvent, InputSource},
    surface::{Icon, ListRow, ListStyle, RowHighlight, Surface, WindowStyle},
};
use crate::{
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    error::{Error, Result},
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, trace};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Gauge, List, ListItem, Paragraph, Widget},
};
use std::{
    io::{self, Stdout},
    time::Duration,
};

/// Maps an I/O failure of the terminal to a surface error
fn surface_error(operation: &str) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::SurfaceError {
        operation: operation.to_string(),
        source,
    }
}

/// Runs `undo` when a setup step failed, then hands the result back
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Drawing surface on the controlling terminal
pub struct TerminalSurface {
    backend: CrosstermBackend<Stdout>,
    bounds: Rect,
}

impl TerminalSurface {
    /// Switches the terminal to raw mode on the alternate screen with mouse capture
    pub fn new() -> Result<Self> {
        enable_raw_mode().map_err(surface_error("enable raw mode"))?;

        let mut stdout = io::stdout();
        undo_on_error(
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture),
            // The setup error is the one worth reporting
            || {
                let _ = disable_raw_mode();
            },
        )
        .map_err(surface_error("enter alternate screen"))?;

        let mut backend = CrosstermBackend::new(stdout);
        backend.hide_cursor().map_err(surface_error("hide cursor"))?;
        backend.clear().map_err(surface_error("clear terminal"))?;
        let size = backend.size().map_err(surface_error("query terminal size"))?;
        let bounds = Rect::new(
            0,
            0,
            size.width.min(SCREEN_WIDTH),
            size.height.min(SCREEN_HEIGHT),
        );
        debug!("Terminal surface ready, {}x{} cells", bounds.width, bounds.height);

        Ok(Self { backend, bounds })
    }

    /// Restores the terminal to its normal state
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode().map_err(surface_error("disable raw mode"))?;
        execute!(self.backend, LeaveAlternateScreen, DisableMouseCapture)
            .map_err(surface_error("leave alternate screen"))?;
        self.backend
            .show_cursor()
            .map_err(surface_error("show cursor"))?;
        debug!("Terminal restored");
        Ok(())
    }

    /// Renders into a scratch buffer covering `area` and writes its cells
    ///
    /// The area is clipped to the terminal first; `render` gets the clipped area.
    fn paint(
        &mut self,
        area: Rect,
        operation: &str,
        render: impl FnOnce(Rect, &mut Buffer),
    ) -> Result<()> {
        let area = area.intersection(self.bounds);
        if area.is_empty() {
            trace!("Skipping {operation} outside the terminal");
            return Ok(());
        }

        let mut buffer = Buffer::empty(area);
        render(area, &mut buffer);
        let cells = buffer.content.iter().enumerate().map(|(i, cell)| {
            let (x, y) = buffer.pos_of(i);
            (x, y, cell)
        });
        self.backend.draw(cells).map_err(surface_error(operation))?;
        Backend::flush(&mut self.backend).map_err(surface_error(operation))
    }
}

/// Block drawn around outlined widgets
fn outline_block<'a>(outline: Option<Color>) -> Option<Block<'a>> {
    outline.map(|color| Block::bordered().border_style(Style::default().fg(color)))
}

impl Surface for TerminalSurface {
    fn fill(&mut self, area: Rect, color: Color) -> Result<()> {
        self.paint(area, "fill", |area, buffer| {
            Block::default()
                .style(Style::default().bg(color))
                .render(area, buffer);
        })
    }

    fn draw_text(
        &mut self,
        area: Rect,
        text: &str,
        style: Style,
        outline: Option<Color>,
    ) -> Result<()> {
        self.paint(area, "draw text", |area, buffer| {
            let mut paragraph = Paragraph::new(text).style(style);
            if let Some(block) = outline_block(outline) {
                paragraph = paragraph.block(block).alignment(Alignment::Center);
            }
            paragraph.render(area, buffer);
        })
    }

    fn blit_icon(&mut self, area: Rect, icon: Icon, style: Style) -> Result<()> {
        self.paint(area, "blit icon", |area, buffer| {
            let paragraph = Paragraph::new(icon.glyph())
                .style(style)
                .alignment(Alignment::Center);
            if area.height >= 3 {
                paragraph
                    .block(Block::bordered().border_style(style))
                    .render(area, buffer);
            } else {
                paragraph.render(area, buffer);
            }
        })
    }

    fn draw_list(&mut self, area: Rect, rows: &[ListRow<'_>], style: &ListStyle) -> Result<()> {
        self.paint(area, "draw list", |area, buffer| {
            let items: Vec<ListItem> = rows
                .iter()
                .map(|row| {
                    let row_style = match row.highlight {
                        RowHighlight::None => style.text,
                        RowHighlight::Active => style.active,
                        RowHighlight::Selected => style.selected,
                    };
                    ListItem::new(row.text).style(row_style)
                })
                .collect();
            let mut list = List::new(items).style(style.text);
            if let Some(block) = outline_block(style.outline) {
                list = list.block(block);
            }
            Widget::render(list, area, buffer);
        })
    }

    fn draw_slider(&mut self, area: Rect, percentage: u8, style: Style) -> Result<()> {
        self.paint(area, "draw slider", |area, buffer| {
            Gauge::default()
                .block(Block::bordered())
                .gauge_style(style)
                .percent(u16::from(percentage))
                .label(format!("{percentage}%"))
                .render(area, buffer);
        })
    }

    fn draw_window(&mut self, area: Rect, title: &str, style: &WindowStyle) -> Result<()> {
        self.paint(area, "draw window", |area, buffer| {
            outline_block(style.outline)
                .unwrap_or_default()
                .title(title)
                .title_style(Style::default().fg(style.title))
                .style(Style::default().bg(style.background))
                .render(area, buffer);
        })
    }
}

/// Input from the controlling terminal
///
/// A left mouse press is a touch; `q`, `Esc` and `Ctrl-C` ask to quit.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

/// Translates a terminal event into an input event, if it is one
fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(InputEvent::Touch {
                x: mouse.column,
                y: mouse.row,
            })
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            _ => None,
        },
        _ => None,
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        let ready = event::poll(timeout).map_err(|e| Error::InputError {
            message: format!("Failed to poll for events: {e}"),
        })?;
        if !ready {
            return Ok(None);
        }

        let event = event::read().map_err(|e| Error::InputError {
            message: format!("Failed to read event: {e}"),
        })?;
        Ok(translate(event))
    }
}
