// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The date/time formatter capability and its built-in variants.
//!
//! Host code renders every duration and date string through a
//! [`DateTimeFormatter`]. Two variants exist:
//!
//! - [`DefaultFormatter`]: everything derives from a fixed
//!   [`CalendarSystem`] breakdown; dates read `"Year 3, Day 12"`.
//! - [`RealFormatter`]: durations use the real calendar; dates resolve
//!   against an epoch and render through configured patterns.

use crate::calendar::{CalendarSystem, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::date::{self, EpochConfig};
use crate::duration::{self, Granularity};

/// Rendering operations shared by every formatter variant.
///
/// All operations are pure functions of their arguments and the formatter's
/// immutable configuration. NaN and infinite input render as `"NaN"`,
/// `"+Inf"` and `"-Inf"`.
pub trait DateTimeFormatter: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// The calendar used for duration breakdowns and unit lengths.
    fn calendar(&self) -> CalendarSystem;

    /// All five units in long form: `"0 years, 0 days, 1 hour, ..."`.
    fn render_long(&self, elapsed: f64) -> String {
        duration::render_long(elapsed, &self.calendar())
    }

    /// `HH:MM:SS` with optional `"Year <y>, "` / `"Day <d> - "` prefixes.
    fn render_timestamp(&self, elapsed: f64, days: bool, years: bool) -> String {
        duration::render_timestamp(elapsed, &self.calendar(), days, years)
    }

    /// `HH:MM:SS` with optional `"<y>y, "` / `"<d>d, "` prefixes.
    fn render_timestamp_compact(&self, elapsed: f64, days: bool, years: bool) -> String {
        duration::render_timestamp_compact(elapsed, &self.calendar(), days, years)
    }

    /// `depth` units from the most significant non-zero one.
    fn render_countdown(&self, elapsed: f64, depth: usize, explicit_positive: bool) -> String {
        duration::render_countdown(elapsed, &self.calendar(), depth, explicit_positive)
    }

    /// `"<sign>[<days>:]HH:MM:SS"`.
    fn render_countdown_compact(&self, elapsed: f64, explicit_positive: bool) -> String {
        duration::render_countdown_compact(elapsed, &self.calendar(), explicit_positive)
    }

    /// Non-zero units down to `granularity`, long form.
    fn render_delta(&self, elapsed: f64, granularity: Granularity, use_absolute: bool) -> String {
        duration::render_delta(elapsed, &self.calendar(), granularity, use_absolute)
    }

    /// Non-zero units down to `granularity`, single-letter suffixes.
    fn render_delta_compact(
        &self,
        elapsed: f64,
        granularity: Granularity,
        use_absolute: bool,
    ) -> String {
        duration::render_delta_compact(elapsed, &self.calendar(), granularity, use_absolute)
    }

    /// Absolute date, with a clock time down to `granularity`.
    fn render_date(&self, elapsed: f64, granularity: Granularity) -> String;

    /// Absolute date, with a full clock time if `include_time`.
    fn render_date_time(&self, elapsed: f64, include_time: bool) -> String;

    /// Pattern-independent `YYYY-DDD[ HH:MM[:SS]]` stamp.
    fn render_compact_stamp(&self, elapsed: f64, granularity: Granularity) -> String;

    fn minute(&self) -> i64 {
        SECONDS_PER_MINUTE
    }

    fn hour(&self) -> i64 {
        SECONDS_PER_HOUR
    }

    fn day(&self) -> i64 {
        self.calendar().day_length()
    }

    fn year(&self) -> i64 {
        self.calendar().year_length()
    }
}

/// Built-in formatter driven entirely by a fixed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultFormatter {
    calendar: CalendarSystem,
}

impl DefaultFormatter {
    pub fn new(calendar: CalendarSystem) -> Self {
        Self { calendar }
    }
}

impl DateTimeFormatter for DefaultFormatter {
    fn name(&self) -> &'static str {
        "default"
    }

    fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    fn render_date(&self, elapsed: f64, granularity: Granularity) -> String {
        date::calendar_date(elapsed, &self.calendar, granularity)
    }

    fn render_date_time(&self, elapsed: f64, include_time: bool) -> String {
        date::calendar_date_time(elapsed, &self.calendar, include_time)
    }

    fn render_compact_stamp(&self, elapsed: f64, granularity: Granularity) -> String {
        date::calendar_compact_stamp(elapsed, &self.calendar, granularity)
    }
}

/// Real-calendar formatter with an epoch and custom patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RealFormatter {
    config: EpochConfig,
}

impl RealFormatter {
    pub fn new(config: EpochConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EpochConfig {
        &self.config
    }
}

impl DateTimeFormatter for RealFormatter {
    fn name(&self) -> &'static str {
        "real"
    }

    fn calendar(&self) -> CalendarSystem {
        CalendarSystem::REAL
    }

    fn render_date(&self, elapsed: f64, granularity: Granularity) -> String {
        self.config.render_date(elapsed, granularity)
    }

    fn render_date_time(&self, elapsed: f64, include_time: bool) -> String {
        self.config.render_date_time(elapsed, include_time)
    }

    fn render_compact_stamp(&self, elapsed: f64, granularity: Granularity) -> String {
        self.config.render_compact_stamp(elapsed, granularity)
    }
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
