//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use regex::Regex;
use rssdt_core::{CalendarSystem, DefaultFormatter, FormatterHandle};
use rssdt_settings::FormatterSettings;
use std::sync::{Arc, LazyLock};

pub use rssdt_core::{formatter, DateTimeFormatter, Granularity};

/// `YYYY-DDD`, optionally ` HH:MM`, optionally `:SS`.
static COMPACT_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{3}( \d{2}:\d{2}(:\d{2})?)?$").unwrap());

pub fn is_compact_stamp(s: &str) -> bool {
    COMPACT_STAMP.is_match(s)
}

/// Install a built-in formatter on `calendar` as the active one.
pub fn use_calendar(calendar: CalendarSystem) -> FormatterHandle {
    let handle: FormatterHandle = Arc::new(DefaultFormatter::new(calendar));
    rssdt_core::install(Arc::clone(&handle));
    handle
}

/// Install the formatter described by a TOML settings document.
pub fn use_settings(toml: &str) -> FormatterHandle {
    let settings = FormatterSettings::from_toml(toml).unwrap();
    rssdt_settings::install(&settings)
}

pub const ALL_GRANULARITIES: [Granularity; 3] =
    [Granularity::Days, Granularity::Minutes, Granularity::Seconds];
