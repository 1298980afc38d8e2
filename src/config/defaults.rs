// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Max-scale multiplier bounds
//! - **Prefetch**: Number of materialized neighbors on each side
//! - **Gestures**: Double-tap recognition window

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default ratio between the maximum and the fit (minimum) zoom scale.
pub const DEFAULT_MAX_ZOOM_MULTIPLIER: f32 = 2.5;

/// Smallest allowed multiplier. At 1.0 the item can never be zoomed in.
pub const MIN_MAX_ZOOM_MULTIPLIER: f32 = 1.0;

/// Largest allowed multiplier.
pub const MAX_MAX_ZOOM_MULTIPLIER: f32 = 10.0;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default number of pages kept materialized on each side of the current one.
pub const DEFAULT_PREFETCH_RADIUS: usize = 1;

/// Minimum prefetch radius (current page only).
pub const MIN_PREFETCH_RADIUS: usize = 0;

/// Maximum prefetch radius.
pub const MAX_PREFETCH_RADIUS: usize = 4;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default time window (in milliseconds) in which a second tap counts as a double tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window (in milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum double-tap window (in milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_MAX_ZOOM_MULTIPLIER >= 1.0);
    assert!(MAX_MAX_ZOOM_MULTIPLIER > MIN_MAX_ZOOM_MULTIPLIER);
    assert!(DEFAULT_MAX_ZOOM_MULTIPLIER >= MIN_MAX_ZOOM_MULTIPLIER);
    assert!(DEFAULT_MAX_ZOOM_MULTIPLIER <= MAX_MAX_ZOOM_MULTIPLIER);

    // Prefetch validation
    assert!(MAX_PREFETCH_RADIUS >= MIN_PREFETCH_RADIUS);
    assert!(DEFAULT_PREFETCH_RADIUS >= MIN_PREFETCH_RADIUS);
    assert!(DEFAULT_PREFETCH_RADIUS <= MAX_PREFETCH_RADIUS);

    // Gesture validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(MAX_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
};
