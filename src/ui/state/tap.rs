// SPDX-License-Identifier: MPL-2.0
//! Tap disambiguation for the image area.
//!
//! A single tap is only reported once the double-tap window has elapsed
//! without a second tap. A second tap inside the window is reported as a
//! double tap and the pending single tap is dropped.
//!
//! Time is passed in with every message, so the shell drives the clock
//! (`CheckTimeout` from its frame or timer tick).

use crate::domain::ui::TapWindow;
use std::time::Instant;

/// Tap recognition state.
#[derive(Debug, Clone, Default)]
pub struct State {
    window: TapWindow,
    /// First tap of a possible double tap.
    pending: Option<Instant>,
}

/// Messages for the tap sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A raw tap landed on the image area.
    Tap(Instant),
    /// Check whether a pending tap has outlived the window.
    CheckTimeout(Instant),
}

/// Recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing recognized yet.
    None,
    /// A tap that was not followed by a second one.
    SingleTap,
    /// Two taps inside the window.
    DoubleTap,
}

impl State {
    #[must_use]
    pub fn new(window: TapWindow) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Handle a tap message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Tap(now) => match self.pending.take() {
                Some(first) if self.within_window(first, now) => Effect::DoubleTap,
                Some(_) => {
                    // The previous tap expired without a timeout check: it was a
                    // single tap, and this one starts a new recognition.
                    self.pending = Some(now);
                    Effect::SingleTap
                }
                None => {
                    self.pending = Some(now);
                    Effect::None
                }
            },
            Message::CheckTimeout(now) => match self.pending {
                Some(first) if !self.within_window(first, now) => {
                    self.pending = None;
                    Effect::SingleTap
                }
                _ => Effect::None,
            },
        }
    }

    /// True while a first tap waits for a possible second one.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forgets any pending tap (page change, gallery closed).
    pub fn reset(&mut self) {
        self.pending = None;
    }

    fn within_window(&self, first: Instant, now: Instant) -> bool {
        now.saturating_duration_since(first) <= self.window.as_duration()
    }
}
