// SPDX-License-Identifier: MPL-2.0
//! Media-side helpers: the page prefetch window and image header probing.
//!
//! The carousel core itself never reads image data. [`probe`] is used by the
//! demo shell to build [`GalleryItem`](crate::domain::gallery::GalleryItem)s
//! from files.

pub mod prefetch;
pub mod probe;

pub use prefetch::{PrefetchStats, PrefetchWindow};
pub use probe::{probe_item, probe_items};
