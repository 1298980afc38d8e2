// SPDX-License-Identifier: MPL-2.0
//! Message dispatch for the gallery coordinator.

use super::{GalleryCoordinator, Message};
use crate::application::port::GalleryShell;

impl<H> GalleryCoordinator<H> {
    /// Handles one inbound message.
    pub fn update(&mut self, message: Message<H>, shell: &mut impl GalleryShell<H>) {
        match message {
            Message::Open { items, start_index } => self.open(items, start_index, shell),
            Message::Next => {
                self.go_next(shell);
            }
            Message::Previous => {
                self.go_previous(shell);
            }
            Message::PageSettled(index) => {
                self.page_settled(index, shell);
            }
            Message::SingleTap => self.single_tap(shell),
            Message::DoubleTap => {
                self.double_tap(shell);
            }
            Message::Tap(now) => self.tap(now, shell),
            Message::Tick(now) => self.tick(now, shell),
            Message::Pinch(factor) => self.pinch(factor, shell),
            Message::ViewportResized(size) => self.viewport_resized(size, shell),
            Message::Close => self.close(shell),
        }
    }
}
