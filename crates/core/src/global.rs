// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide active formatter.
//!
//! A single slot holds the formatter the rest of the host renders through.
//! It starts out as [`DefaultFormatter`] on the real calendar and is
//! replaced wholesale by [`install`]. Readers clone the `Arc` out of the
//! slot, so they always hold a complete formatter even while another thread
//! swaps in a new one.

use crate::formatter::{DateTimeFormatter, DefaultFormatter};
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

/// Shared handle to a formatter.
pub type FormatterHandle = Arc<dyn DateTimeFormatter>;

static ACTIVE: LazyLock<RwLock<FormatterHandle>> =
    LazyLock::new(|| RwLock::new(default_formatter()));

fn default_formatter() -> FormatterHandle {
    Arc::new(DefaultFormatter::default())
}

/// The active formatter.
pub fn formatter() -> FormatterHandle {
    Arc::clone(&ACTIVE.read())
}

/// Replace the active formatter, returning the previous one.
pub fn install(formatter: FormatterHandle) -> FormatterHandle {
    tracing::info!(formatter = formatter.name(), "installing date/time formatter");
    std::mem::replace(&mut *ACTIVE.write(), formatter)
}

/// Restore the built-in default formatter.
pub fn reset() -> FormatterHandle {
    install(default_formatter())
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod tests;
