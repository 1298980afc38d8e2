// SPDX-License-Identifier: MPL-2.0
//! `lens_carousel` is the paging and zoom core of a full-screen image carousel.
//!
//! It tracks the current page, keeps zoom state for the pages around it,
//! computes fit scale and centering insets from image and viewport geometry,
//! and turns taps, pinches and chevron presses into render signals for a UI
//! shell. Any toolkit can bind its widgets to the
//! [`GalleryShell`](application::port::GalleryShell) port.
//!
//! ```
//! use lens_carousel::app::GalleryCoordinator;
//! use lens_carousel::application::port::RecordingShell;
//! use lens_carousel::domain::gallery::{GalleryItem, Size};
//!
//! let mut coordinator = GalleryCoordinator::default();
//! let mut shell = RecordingShell::new();
//!
//! coordinator.viewport_resized(Size::new(300.0, 300.0), &mut shell);
//! coordinator.open(
//!     vec![
//!         GalleryItem::new("one.png", Size::new(600.0, 300.0)),
//!         GalleryItem::new("two.png", Size::new(300.0, 600.0)),
//!     ],
//!     0,
//!     &mut shell,
//! );
//! assert!(coordinator.go_next(&mut shell));
//! assert_eq!(shell.last_counter(), Some("2 / 2"));
//! ```

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
