//! Modal screens
//!
//! A modal is a composite screen drawn as a window on top of its opener. It
//! runs its own poll-and-input loop (see `screens::run_modal`) until it is
//! closed, after which the opener redraws itself in full.

use super::{
    context::UiContext,
    screen::{CompositeScreen, Navigation, Tag},
    surface::{Surface, WindowStyle},
};
use crate::error::Result;
use log::{debug, info};
use ratatui::layout::Rect;

/// Lifecycle of a modal screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Built but not shown yet
    Constructing,
    /// On screen, running its loop
    Visible,
    /// Closed; control returns to the opener
    Closed,
}

/// A modal screen driven by `screens::run_modal`
pub trait Modal {
    /// Current lifecycle state
    fn state(&self) -> ModalState;

    /// Full render pass; moves the modal to [`ModalState::Visible`]
    fn show(&mut self, ctx: &mut UiContext<'_>) -> Result<()>;

    /// Called once per loop iteration to reconcile against the player
    fn event_loop_hook(&mut self, ctx: &mut UiContext<'_>) -> Result<()>;

    /// Handles a touch and reports the navigation it requests
    fn on_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> Result<Navigation>;

    /// Closes the modal
    fn close(&mut self);
}

/// Window frame, lifecycle and widgets shared by all modal screens
#[derive(Debug, Clone)]
pub struct ModalScreen<T> {
    title: &'static str,
    composite: CompositeScreen<T>,
    style: WindowStyle,
    state: ModalState,
}

impl<T: Tag> ModalScreen<T> {
    /// Creates a modal window covering `window`
    pub fn new(name: &'static str, title: &'static str, window: Rect, style: WindowStyle) -> Self {
        Self {
            title,
            composite: CompositeScreen::new(name, window, style.background),
            style,
            state: ModalState::Constructing,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Area of the window
    pub fn window(&self) -> Rect {
        self.composite.area()
    }

    /// The window's widgets
    pub fn composite(&self) -> &CompositeScreen<T> {
        &self.composite
    }

    /// The window's widgets, mutably
    pub fn composite_mut(&mut self) -> &mut CompositeScreen<T> {
        &mut self.composite
    }

    /// Draws the window frame and every widget, and marks the modal visible
    ///
    /// A closed modal stays closed and draws nothing.
    pub fn show(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.state == ModalState::Closed {
            debug!("Ignoring show of closed modal {}", self.composite.name());
            return Ok(());
        }
        if self.state == ModalState::Constructing {
            info!("Opening modal {}", self.composite.name());
        }
        self.state = ModalState::Visible;
        surface.draw_window(self.composite.area(), self.title, &self.style)?;
        self.composite.draw_components(surface)
    }

    /// Closes a visible modal
    pub fn close(&mut self) {
        match self.state {
            ModalState::Visible => {
                info!("Closing modal {}", self.composite.name());
                self.state = ModalState::Closed;
            }
            state => debug!(
                "Ignoring close of modal {} in state {state:?}",
                self.composite.name()
            ),
        }
    }
}
