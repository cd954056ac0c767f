//! Reusable widgets for crab-jukebox screens
//!
//! Every visual element is a [`Widget`]: a rectangle that can draw itself on a
//! [`Surface`] and react to a touch inside its bounds. Screens store widgets as
//! [`Component`] values and look them up by tag with a typed accessor.

mod button;
mod label;
mod list;
mod playlist;
mod slider;

pub use button::{ButtonIcon, ButtonText};
pub use label::{LabelText, Rectangle};
pub use list::ItemList;
pub use playlist::PlaylistWidget;
pub use slider::Slider;

use super::surface::Surface;
use crate::error::Result;
use ratatui::layout::{Position, Rect};

/// A drawable, clickable rectangle
pub trait Widget {
    /// Screen-relative bounds
    fn area(&self) -> Rect;

    /// Renders the widget's current value
    fn draw(&self, surface: &mut dyn Surface) -> Result<()>;

    /// Reacts to a touch inside [`area`](Self::area)
    fn on_click(&mut self, _x: u16, _y: u16) {}

    /// Whether a point lies inside the widget
    fn contains(&self, x: u16, y: u16) -> bool {
        self.area().contains(Position::new(x, y))
    }
}

/// A widget registered on a screen
#[derive(Debug, Clone)]
pub enum Component {
    /// Button showing an icon
    Icon(ButtonIcon),
    /// Button showing a caption
    Text(ButtonText),
    /// Single-line text label
    Label(LabelText),
    /// Solid rectangle
    Rectangle(Rectangle),
    /// Progress slider
    Slider(Slider),
    /// Playlist mirror
    Playlist(PlaylistWidget),
}

impl Component {
    /// The component as a widget
    pub fn widget(&self) -> &dyn Widget {
        match self {
            Component::Icon(widget) => widget,
            Component::Text(widget) => widget,
            Component::Label(widget) => widget,
            Component::Rectangle(widget) => widget,
            Component::Slider(widget) => widget,
            Component::Playlist(widget) => widget,
        }
    }

    /// The component as a mutable widget
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            Component::Icon(widget) => widget,
            Component::Text(widget) => widget,
            Component::Label(widget) => widget,
            Component::Rectangle(widget) => widget,
            Component::Slider(widget) => widget,
            Component::Playlist(widget) => widget,
        }
    }
}

/// Concrete widget types that can be looked up out of a [`Component`]
pub trait ComponentKind: Sized {
    /// Human readable kind, used in lookup errors
    const KIND: &'static str;

    /// Borrows the concrete widget if the component holds one
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutably borrows the concrete widget if the component holds one
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_kind {
    ($variant:ident, $widget:ty, $kind:literal) => {
        impl From<$widget> for Component {
            fn from(widget: $widget) -> Self {
                Component::$variant(widget)
            }
        }

        impl ComponentKind for $widget {
            const KIND: &'static str = $kind;

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$variant(widget) => Some(widget),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$variant(widget) => Some(widget),
                    _ => None,
                }
            }
        }
    };
}

component_kind!(Icon, ButtonIcon, "icon button");
component_kind!(Text, ButtonText, "text button");
component_kind!(Label, LabelText, "label");
component_kind!(Rectangle, Rectangle, "rectangle");
component_kind!(Slider, Slider, "slider");
component_kind!(Playlist, PlaylistWidget, "playlist");
