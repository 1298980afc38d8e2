// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for carousel tuning values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_MAX_ZOOM_MULTIPLIER, DEFAULT_PREFETCH_RADIUS,
    MAX_DOUBLE_TAP_WINDOW_MS, MAX_MAX_ZOOM_MULTIPLIER, MAX_PREFETCH_RADIUS,
    MIN_DOUBLE_TAP_WINDOW_MS, MIN_MAX_ZOOM_MULTIPLIER, MIN_PREFETCH_RADIUS,
};
use std::time::Duration;

// =============================================================================
// ZoomMultiplier
// =============================================================================

/// Ratio between the maximum zoom scale and the fit scale (1.0–10.0).
///
/// This type ensures the multiplier is always valid, so `max_scale` can
/// never fall below `min_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomMultiplier(f32);

impl ZoomMultiplier {
    /// Creates a new multiplier, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_MAX_ZOOM_MULTIPLIER, MAX_MAX_ZOOM_MULTIPLIER))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the multiplier to a fit scale.
    #[must_use]
    pub fn apply(self, min_scale: f32) -> f32 {
        min_scale * self.0
    }
}

impl Default for ZoomMultiplier {
    fn default() -> Self {
        Self(DEFAULT_MAX_ZOOM_MULTIPLIER)
    }
}

// =============================================================================
// PrefetchRadius
// =============================================================================

/// Number of pages materialized on each side of the current page (0–4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchRadius(usize);

impl PrefetchRadius {
    /// Creates a new radius, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_PREFETCH_RADIUS, MAX_PREFETCH_RADIUS))
    }

    /// Returns the radius.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Upper bound on resident pages for this radius.
    #[must_use]
    pub fn capacity(self) -> usize {
        self.0 * 2 + 1
    }
}

impl Default for PrefetchRadius {
    fn default() -> Self {
        Self(DEFAULT_PREFETCH_RADIUS)
    }
}

// =============================================================================
// TapWindow
// =============================================================================

/// Maximum delay between two taps for them to count as a double tap (100–1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapWindow(u64);

impl TapWindow {
    /// Creates a new window from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the window in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
