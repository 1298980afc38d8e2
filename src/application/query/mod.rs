// SPDX-License-Identifier: MPL-2.0
//! Query services over the gallery item list.

pub mod pager;

pub use pager::{Pager, PagerInfo};
