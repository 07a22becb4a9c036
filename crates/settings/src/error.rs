// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for formatter settings

use thiserror::Error;

/// Errors that can occur while reading formatter settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid escape {escape:?}: not a Unicode scalar value")]
    InvalidEscape { escape: String },
    #[error("unknown calendar {0:?}, expected real, default, or alternate")]
    UnknownCalendar(String),
}
