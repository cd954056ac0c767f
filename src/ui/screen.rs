//! Screen composition
//!
//! A [`CompositeScreen`] owns the widgets of one full-screen view, keyed by a
//! per-screen tag enum. Registration order is z-order: widgets are drawn in
//! the order they were added, and when bounds overlap a touch resolves to the
//! widget registered last, i.e. the one drawn on top.

use super::{
    context::UiContext,
    surface::Surface,
    widgets::{Component, ComponentKind},
};
use crate::error::{Error, Result};
use log::trace;
use ratatui::{layout::Rect, style::Color};
use std::fmt;

/// Identity of a widget within one screen
pub trait Tag: Copy + Eq + fmt::Debug {
    /// Stable name used in logs and errors
    fn name(&self) -> &'static str;
}

/// Top-level screens the application can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Playlist and transport controls
    Player,
    /// Music library browser
    Library,
}

/// Modal screens that can be stacked on top of another screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Volume adjustment
    Volume,
    /// Full-art now-playing view
    CoverArt,
    /// Settings overview
    Settings,
}

/// What a screen asks its controller to do after a touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Keep the current screen
    Stay,
    /// Replace the current top-level screen
    SwitchTo(ScreenId),
    /// Run a modal screen, then fully re-render the current one
    OpenModal(ModalId),
}

/// A top-level screen driven by the application controller
pub trait Screen {
    /// Which screen this is
    fn id(&self) -> ScreenId;

    /// Full render pass
    fn show(&mut self, ctx: &mut UiContext<'_>) -> Result<()>;

    /// Reconciliation pass, redrawing only widgets whose value changed
    fn update(&mut self, ctx: &mut UiContext<'_>) -> Result<()>;

    /// Handles a touch and reports the navigation it requests
    fn on_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> Result<Navigation>;
}

/// An ordered collection of tagged widgets sharing one drawing surface
#[derive(Debug, Clone)]
pub struct CompositeScreen<T> {
    name: &'static str,
    area: Rect,
    background: Color,
    components: Vec<(T, Component)>,
}

impl<T: Tag> CompositeScreen<T> {
    /// Creates an empty screen
    pub fn new(name: &'static str, area: Rect, background: Color) -> Self {
        Self {
            name,
            area,
            background,
            components: Vec::new(),
        }
    }

    /// Screen name, used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Area the screen covers
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Registers a widget under `tag`
    ///
    /// A tag that is already registered is rejected; it means the screen was
    /// built wrong.
    pub fn add_component(&mut self, tag: T, widget: impl Into<Component>) -> Result<()> {
        if self.components.iter().any(|(existing, _)| *existing == tag) {
            return Err(Error::DuplicateWidgetTag {
                screen: self.name.to_string(),
                tag: tag.name().to_string(),
            });
        }
        self.components.push((tag, widget.into()));
        Ok(())
    }

    /// Tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = T> + '_ {
        self.components.iter().map(|(tag, _)| *tag)
    }

    /// Bounds of the widget registered under `tag`
    pub fn area_of(&self, tag: T) -> Option<Rect> {
        self.component(tag).map(|component| component.widget().area())
    }

    /// Borrows the widget under `tag` as a concrete type
    pub fn get<W: ComponentKind>(&self, tag: T) -> Result<&W> {
        self.component(tag)
            .and_then(W::from_component)
            .ok_or_else(|| missing::<T, W>(tag))
    }

    /// Mutably borrows the widget under `tag` as a concrete type
    pub fn get_mut<W: ComponentKind>(&mut self, tag: T) -> Result<&mut W> {
        self.components
            .iter_mut()
            .find(|(existing, _)| *existing == tag)
            .and_then(|(_, component)| W::from_component_mut(component))
            .ok_or_else(|| missing::<T, W>(tag))
    }

    /// Draws the background and every widget in z-order
    pub fn show(&self, surface: &mut dyn Surface) -> Result<()> {
        trace!("Full render of screen {}", self.name);
        surface.fill(self.area, self.background)?;
        self.draw_components(surface)
    }

    /// Draws every widget in z-order, without the background
    pub fn draw_components(&self, surface: &mut dyn Surface) -> Result<()> {
        for (_, component) in &self.components {
            component.widget().draw(surface)?;
        }
        Ok(())
    }

    /// Redraws the widget under `tag` only
    pub fn draw(&self, tag: T, surface: &mut dyn Surface) -> Result<()> {
        let component = self.component(tag).ok_or_else(|| Error::MissingWidget {
            tag: tag.name().to_string(),
            expected: "any",
        })?;
        trace!("Redraw {} on {}", tag.name(), self.name);
        component.widget().draw(surface)
    }

    /// Redraws the given widgets only
    pub fn draw_tags(&self, tags: &[T], surface: &mut dyn Surface) -> Result<()> {
        for tag in tags {
            self.draw(*tag, surface)?;
        }
        Ok(())
    }

    /// Resolves a touch to the topmost widget under it and lets it react
    pub fn on_click(&mut self, x: u16, y: u16) -> Option<T> {
        let (tag, component) = self
            .components
            .iter_mut()
            .rev()
            .find(|(_, component)| component.widget().contains(x, y))?;
        component.widget_mut().on_click(x, y);
        trace!("Touch at ({x}, {y}) resolved to {}", tag.name());
        Some(*tag)
    }

    fn component(&self, tag: T) -> Option<&Component> {
        self.components
            .iter()
            .find(|(existing, _)| *existing == tag)
            .map(|(_, component)| component)
    }
}

fn missing<T: Tag, W: ComponentKind>(tag: T) -> Error {
    Error::MissingWidget {
        tag: tag.name().to_string(),
        expected: W::KIND,
    }
}
