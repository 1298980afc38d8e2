// SPDX-License-Identifier: MPL-2.0
//! Presentation state that stays independent of any widget toolkit.

pub mod state;
