// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the display area size reported by the shell on layout changes.

use crate::domain::gallery::Size;

/// Manages the viewport size
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportState {
    /// Current viewport size, `None` until the first valid layout
    pub size: Option<Size>,
}

impl ViewportState {
    /// Records a new viewport size.
    ///
    /// Returns true if the size changed. Degenerate sizes (a collapsed view
    /// during a transition) are ignored so the last valid size is kept.
    pub fn update(&mut self, size: Size) -> bool {
        if size.is_degenerate() {
            return false;
        }
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        true
    }

    /// True once a valid size has been reported.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.size.is_some()
    }
}
