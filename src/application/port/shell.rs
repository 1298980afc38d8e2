// SPDX-License-Identifier: MPL-2.0
//! Outbound port from the carousel core to the UI shell.

use crate::domain::gallery::{GalleryItem, ZoomTransform};

/// Rendering and navigation side of the UI shell.
///
/// Handles are cloned out of the item list only by [`RecordingShell`]; real
/// shells usually just read `item.handle()` and update their view.
pub trait GalleryShell<H> {
    /// Shows `item` as the current page.
    ///
    /// `transform` is `None` while the viewport size is unknown or when the
    /// item has a degenerate natural size.
    fn render_item(&mut self, item: &GalleryItem<H>, transform: Option<ZoomTransform>);

    /// Replaces the page counter text (`"2 / 5"`).
    fn update_counter(&mut self, text: &str);

    /// Shows or hides the chevrons and the counter.
    fn set_controls_visible(&mut self, visible: bool);

    /// Asks the shell to dismiss the gallery screen.
    fn dismiss_requested(&mut self);
}

/// A single outbound signal, as captured by [`RecordingShell`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent<H> {
    Render {
        handle: H,
        transform: Option<ZoomTransform>,
    },
    Counter(String),
    ControlsVisible(bool),
    Dismiss,
}

/// Shell that records every signal in order.
#[derive(Debug, Clone)]
pub struct RecordingShell<H> {
    events: Vec<ShellEvent<H>>,
}

impl<H> RecordingShell<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    #[must_use]
    pub fn events(&self) -> &[ShellEvent<H>] {
        &self.events
    }

    /// Returns and clears the recorded events.
    pub fn drain(&mut self) -> Vec<ShellEvent<H>> {
        std::mem::take(&mut self.events)
    }

    /// Returns the most recent render signal, if any.
    #[must_use]
    pub fn last_render(&self) -> Option<(&H, Option<ZoomTransform>)> {
        self.events.iter().rev().find_map(|event| match event {
            ShellEvent::Render { handle, transform } => Some((handle, *transform)),
            _ => None,
        })
    }

    /// Returns the most recent counter text, if any.
    #[must_use]
    pub fn last_counter(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            ShellEvent::Counter(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<H> Default for RecordingShell<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> GalleryShell<H> for RecordingShell<H> {
    fn render_item(&mut self, item: &GalleryItem<H>, transform: Option<ZoomTransform>) {
        self.events.push(ShellEvent::Render {
            handle: item.handle().clone(),
            transform,
        });
    }

    fn update_counter(&mut self, text: &str) {
        self.events.push(ShellEvent::Counter(text.to_string()));
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.events.push(ShellEvent::ControlsVisible(visible));
    }

    fn dismiss_requested(&mut self) {
        self.events.push(ShellEvent::Dismiss);
    }
}
