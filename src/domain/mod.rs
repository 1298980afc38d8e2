// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core carousel types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery content and geometry ([`GalleryItem`](gallery::GalleryItem),
//!   [`Size`](gallery::Size), [`ContentInset`](gallery::ContentInset),
//!   [`ZoomTransform`](gallery::ZoomTransform))
//! - [`ui`]: UI value objects ([`ZoomMultiplier`](ui::newtypes::ZoomMultiplier),
//!   [`PrefetchRadius`](ui::newtypes::PrefetchRadius), [`TapWindow`](ui::newtypes::TapWindow))

pub mod gallery;
pub mod ui;
