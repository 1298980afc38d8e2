// SPDX-License-Identifier: MPL-2.0
//! Text commands for driving the coordinator from a terminal or a file.
//!
//! One command per line:
//!
//! | Command          | Message                   |
//! |------------------|---------------------------|
//! | `next`, `n`      | [`Message::Next`]         |
//! | `prev`, `p`      | [`Message::Previous`]     |
//! | `goto N`         | [`Message::PageSettled`] (1-based `N`) |
//! | `tap`            | [`Message::Tap`]          |
//! | `tick`           | [`Message::Tick`]         |
//! | `single`         | [`Message::SingleTap`]    |
//! | `double`         | [`Message::DoubleTap`]    |
//! | `pinch F`        | [`Message::Pinch`]        |
//! | `resize WxH`     | [`Message::ViewportResized`] |
//! | `close`, `q`     | [`Message::Close`]        |
//!
//! Blank lines and lines starting with `#` are ignored.

use super::Message;
use crate::domain::gallery::Size;
use crate::error::{Error, Result};
use std::time::Instant;

/// Parses a `WxH` size such as `390x844`.
///
/// # Errors
///
/// Returns [`Error::Args`] for malformed input or non-positive sides.
pub fn parse_size(text: &str) -> Result<Size> {
    let (width, height) = text
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| Error::Args(format!("expected WxH, got `{text}`")))?;
    let width: f32 = width
        .trim()
        .parse()
        .map_err(|_| Error::Args(format!("invalid width in `{text}`")))?;
    let height: f32 = height
        .trim()
        .parse()
        .map_err(|_| Error::Args(format!("invalid height in `{text}`")))?;

    let size = Size::new(width, height);
    if size.is_degenerate() {
        return Err(Error::Args(format!("size must be positive, got `{text}`")));
    }
    Ok(size)
}

/// Parses one command line. `now` timestamps tap and tick commands.
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns [`Error::Args`] for unknown commands or bad arguments.
pub fn parse_command<H>(line: &str, now: Instant) -> Result<Option<Message<H>>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next();

    let message = match (command.as_str(), argument) {
        ("next" | "n", None) => Message::Next,
        ("prev" | "p", None) => Message::Previous,
        ("tap", None) => Message::Tap(now),
        ("tick", None) => Message::Tick(now),
        ("single", None) => Message::SingleTap,
        ("double", None) => Message::DoubleTap,
        ("close" | "q", None) => Message::Close,
        ("goto", Some(page)) => {
            let page: usize = page
                .parse()
                .map_err(|_| Error::Args(format!("invalid page `{page}`")))?;
            Message::PageSettled(page.saturating_sub(1))
        }
        ("pinch", Some(factor)) => {
            let factor: f32 = factor
                .parse()
                .map_err(|_| Error::Args(format!("invalid pinch factor `{factor}`")))?;
            Message::Pinch(factor)
        }
        ("resize", Some(size)) => Message::ViewportResized(parse_size(size)?),
        _ => return Err(Error::Args(format!("unknown command `{line}`"))),
    };
    Ok(Some(message))
}
