// SPDX-License-Identifier: MPL-2.0
//! Inbound events and launch flags.

use crate::domain::gallery::{GalleryItem, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Runtime flags parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Initial viewport size (`--viewport WxH`).
    pub viewport: Option<Size>,
    /// Page to open first (`--start N`, clamped).
    pub start_index: usize,
    /// Alternate settings file (`--config PATH`).
    pub config_path: Option<PathBuf>,
    /// Enables debug logging (`--verbose`).
    pub verbose: bool,
    /// Image files, in display order.
    pub files: Vec<PathBuf>,
}

/// Events delivered by the UI shell, processed strictly in arrival order.
#[derive(Debug, Clone)]
pub enum Message<H> {
    Open {
        items: Vec<GalleryItem<H>>,
        start_index: usize,
    },
    /// Right chevron.
    Next,
    /// Left chevron.
    Previous,
    /// A swipe finished on the given page.
    PageSettled(usize),
    /// Already-disambiguated single tap.
    SingleTap,
    /// Already-disambiguated double tap.
    DoubleTap,
    /// Raw tap, disambiguated by the coordinator.
    Tap(Instant),
    /// Clock tick used to flush a pending single tap.
    Tick(Instant),
    /// Incremental pinch factor.
    Pinch(f32),
    ViewportResized(Size),
    /// Close button.
    Close,
}
