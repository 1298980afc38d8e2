// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The carousel core never talks to a widget toolkit directly. Everything it
//! wants shown goes through [`GalleryShell`], which any UI framework binds to
//! its native views.
//!
//! # Design Notes
//!
//! - All methods use domain types only (no toolkit handles)
//! - Calls are made synchronously from the event handler that caused them
//! - No method returns a value: the core does not wait on the shell

pub mod shell;

pub use shell::{GalleryShell, RecordingShell, ShellEvent};
