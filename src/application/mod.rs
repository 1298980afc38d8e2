// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and queries around the carousel core.
//!
//! - [`port`]: Trait definitions the surrounding UI shell implements
//! - [`query`]: Query services over the gallery item list
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - UI shells implement application layer ports
//! - The coordinator in [`crate::app`] drives both
//!
//! # Example
//!
//! ```
//! use lens_carousel::application::query::Pager;
//! use lens_carousel::domain::gallery::{GalleryItem, Size};
//!
//! let items = vec![
//!     GalleryItem::new("a.png", Size::new(10.0, 10.0)),
//!     GalleryItem::new("b.png", Size::new(10.0, 10.0)),
//! ];
//! let mut pager = Pager::new(items, 0);
//! assert!(pager.next());
//! assert_eq!(pager.current_index(), Some(1));
//! ```

pub mod port;
pub mod query;
