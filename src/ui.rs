//! Screen and widget composition for crab-jukebox
//!
//! This module contains the widget set, the composite and modal screen
//! models, and the rendering and input boundaries they draw on.

pub mod context;
pub mod input;
pub mod modal;
pub mod screen;
pub mod surface;
pub mod terminal;
pub mod widgets;

pub use context::UiContext;
pub use input::{InputEvent, InputSource};
pub use modal::{Modal, ModalScreen, ModalState};
pub use screen::{CompositeScreen, ModalId, Navigation, Screen, ScreenId, Tag};
pub use surface::{Icon, Surface};
pub use terminal::{TerminalInput, TerminalSurface};
