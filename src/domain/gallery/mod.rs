// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

mod types;

pub use types::{ContentInset, GalleryItem, Size, ZoomTransform};
