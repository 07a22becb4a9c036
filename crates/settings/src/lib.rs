// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Formatter settings: configured strings in, validated formatter out

mod error;
mod settings;
mod unescape;

pub use error::SettingsError;
pub use settings::{install, CalendarChoice, FormatterSettings};
pub use unescape::unescape;
