// SPDX-License-Identifier: MPL-2.0
//! Paging over an ordered list of gallery items.
//!
//! The `Pager` is the single source of truth for which page is current.
//! Unlike a directory browser it never wraps: moving past either end is a
//! no-op, and every out-of-range index is clamped instead of rejected.

use crate::domain::gallery::GalleryItem;
use std::ops::RangeInclusive;

/// Navigation state information for UI rendering.
///
/// A snapshot of the pager so chevrons can be drawn without access to the
/// item list.
// Allow excessive bools: read-only UI snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerInfo {
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
    /// Whether the current page is the first one.
    pub at_first: bool,
    /// Whether the current page is the last one.
    pub at_last: bool,
    /// Current position (0-indexed), `None` when empty.
    pub current_index: Option<usize>,
    /// Total number of items.
    pub total_count: usize,
}

/// Ordered gallery items plus the current index.
///
/// `current_index` is `Some` exactly when the list is non-empty, and then
/// always a valid index.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager<H> {
    items: Vec<GalleryItem<H>>,
    current_index: Option<usize>,
}

impl<H> Pager<H> {
    /// Creates a pager positioned at `start_index`, clamped into range.
    #[must_use]
    pub fn new(items: Vec<GalleryItem<H>>, start_index: usize) -> Self {
        let current_index = items.len().checked_sub(1).map(|last| start_index.min(last));
        Self {
            items,
            current_index,
        }
    }

    /// Returns the item at the current index.
    #[must_use]
    pub fn current_item(&self) -> Option<&GalleryItem<H>> {
        self.current_index.and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Advances one page. Returns `false` at the last page.
    pub fn next(&mut self) -> bool {
        match self.current_index {
            Some(index) if index + 1 < self.items.len() => {
                self.current_index = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Goes back one page. Returns `false` at the first page.
    pub fn previous(&mut self) -> bool {
        match self.current_index {
            Some(index) if index > 0 => {
                self.current_index = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Jumps to `index`, clamped into range. Returns whether the page changed.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(last) = self.items.len().checked_sub(1) else {
            return false;
        };
        let target = index.min(last);
        if self.current_index == Some(target) {
            return false;
        }
        self.current_index = Some(target);
        true
    }

    /// Returns the item before `index` without moving.
    #[must_use]
    pub fn item_before(&self, index: usize) -> Option<&GalleryItem<H>> {
        if index >= self.items.len() {
            return None;
        }
        index.checked_sub(1).and_then(|prev| self.items.get(prev))
    }

    /// Returns the item after `index` without moving.
    #[must_use]
    pub fn item_after(&self, index: usize) -> Option<&GalleryItem<H>> {
        index.checked_add(1).and_then(|next| self.items.get(next))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem<H>> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indices within `radius` pages of the current one, bounded by the list.
    #[must_use]
    pub fn window(&self, radius: usize) -> Option<RangeInclusive<usize>> {
        let index = self.current_index?;
        let last = self.items.len().checked_sub(1)?;
        Some(index.saturating_sub(radius)..=index.saturating_add(radius).min(last))
    }

    #[must_use]
    pub fn info(&self) -> PagerInfo {
        let total_count = self.items.len();
        match self.current_index {
            Some(index) => PagerInfo {
                has_next: index + 1 < total_count,
                has_previous: index > 0,
                at_first: index == 0,
                at_last: index + 1 == total_count,
                current_index: Some(index),
                total_count,
            },
            None => PagerInfo::default(),
        }
    }
}
