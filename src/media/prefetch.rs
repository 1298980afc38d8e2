// SPDX-License-Identifier: MPL-2.0
//! Prefetch window of materialized pages.
//!
//! Only pages close to the current one keep a [`ZoomState`], so memory stays
//! bounded no matter how many items the gallery holds.
//!
//! # Design
//!
//! - **Index-keyed**: states are stored by item index
//! - **Window-bounded**: at most `2 * radius + 1` resident states
//! - **Lazy**: a state is built the first time its page enters the window
//!   and dropped as soon as it leaves
//!
//! # Usage
//!
//! ```ignore
//! let mut window = PrefetchWindow::new(PrefetchRadius::default());
//! window.refresh(&pager, viewport.size, &zoom);
//! if let Some(state) = window.get(current) {
//!     shell.render_item(item, Some(state.transform()));
//! }
//! ```

use crate::application::query::Pager;
use crate::domain::gallery::Size;
use crate::domain::ui::PrefetchRadius;
use crate::ui::state::zoom::{self, ZoomController, ZoomState};
use std::collections::BTreeMap;

/// Statistics about prefetch window activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchStats {
    /// Number of states currently resident.
    pub resident: usize,

    /// Number of states built.
    pub materialized: u64,

    /// Number of states dropped because their page left the window.
    pub evictions: u64,

    /// Number of pages that could not be materialized (degenerate size).
    pub skipped: u64,
}

/// Zoom states for the pages around the current one.
#[derive(Debug, Clone)]
pub struct PrefetchWindow {
    radius: PrefetchRadius,
    states: BTreeMap<usize, ZoomState>,
    stats: PrefetchStats,
}

impl PrefetchWindow {
    #[must_use]
    pub fn new(radius: PrefetchRadius) -> Self {
        Self {
            radius,
            states: BTreeMap::new(),
            stats: PrefetchStats::default(),
        }
    }

    #[must_use]
    pub fn radius(&self) -> PrefetchRadius {
        self.radius
    }

    /// Brings the window in line with the pager's current index.
    ///
    /// Evicts states outside `current ± radius` and, when the viewport is
    /// known, materializes the missing ones inside it.
    pub fn refresh<H>(&mut self, pager: &Pager<H>, viewport: Option<Size>, zoom: &ZoomController) {
        let Some(window) = pager.window(self.radius.value()) else {
            self.clear();
            return;
        };

        let before = self.states.len();
        self.states.retain(|index, _| window.contains(index));
        self.stats.evictions += (before - self.states.len()) as u64;

        if let Some(viewport) = viewport {
            for index in window {
                if self.states.contains_key(&index) {
                    continue;
                }
                let Some(item) = pager.get(index) else {
                    continue;
                };
                match zoom.materialize(viewport, item.natural_size()) {
                    Some(state) => {
                        self.states.insert(index, state);
                        self.stats.materialized += 1;
                    }
                    None => {
                        tracing::debug!(index, "skipping page with degenerate natural size");
                        self.stats.skipped += 1;
                    }
                }
            }
        }

        self.stats.resident = self.states.len();
    }

    /// Applies a new viewport to every resident state.
    ///
    /// Returns the effect for `focus` (usually the current page).
    pub fn resize_all(
        &mut self,
        viewport: Size,
        zoom: &ZoomController,
        focus: Option<usize>,
    ) -> zoom::Effect {
        let mut focused = zoom::Effect::None;
        for (index, state) in &mut self.states {
            let effect = zoom.on_viewport_resized(state, viewport);
            if Some(*index) == focus {
                focused = effect;
            }
        }
        focused
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ZoomState> {
        self.states.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ZoomState> {
        self.states.get_mut(&index)
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.states.contains_key(&index)
    }

    /// Resident indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.states.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Drops every state (gallery closed or reopened).
    pub fn clear(&mut self) {
        self.stats.evictions += self.states.len() as u64;
        self.states.clear();
        self.stats.resident = 0;
    }

    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }
}

impl Default for PrefetchWindow {
    fn default() -> Self {
        Self::new(PrefetchRadius::default())
    }
}
