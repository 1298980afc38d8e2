// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the per-page and per-screen state logic the
//! coordinator composes, following the principle of separation of concerns.

pub mod tap;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use viewport::ViewportState;
pub use zoom::{FitScale, ZoomController, ZoomState};
