// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Absolute date rendering.
//!
//! Two flavors exist. [`EpochConfig`] resolves elapsed time against a real
//! calendar epoch and formats it through configured patterns. The
//! `calendar_*` functions decompose elapsed time under a fixed
//! [`CalendarSystem`] and show 1-based years and days.

use crate::calendar::{CalendarSystem, TimeBreakdown};
use crate::duration::Granularity;
use crate::epoch::Epoch;
use crate::locale::PatternLocale;
use crate::non_finite;
use crate::pattern::{CombinerPattern, DatePattern};
use chrono::{Datelike, NaiveDateTime, Timelike};

fn clock(hours: i64, minutes: i64, seconds: i64, granularity: Granularity) -> String {
    if granularity.includes_seconds() {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", hours, minutes)
    }
}

fn instant_clock(instant: &NaiveDateTime, granularity: Granularity) -> String {
    clock(
        i64::from(instant.hour()),
        i64::from(instant.minute()),
        i64::from(instant.second()),
        granularity,
    )
}

/// Sentinel for an instant the date library cannot represent.
fn out_of_range(elapsed: f64) -> String {
    let sentinel = if elapsed < 0.0 { "-Inf" } else { "+Inf" };
    sentinel.to_string()
}

/// Sentinel for a year that does not fit the four-digit stamp field.
fn stamp_year_overflow(year: i64) -> Option<&'static str> {
    if year < 0 {
        Some("-Inf")
    } else if year > 9999 {
        Some("+Inf")
    } else {
        None
    }
}

/// Epoch and patterns for real-calendar date rendering.
///
/// Built once and never modified afterwards; reconfiguration replaces the
/// whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochConfig {
    epoch: Epoch,
    date_pattern: DatePattern,
    time_pattern: DatePattern,
    combiner: CombinerPattern,
    locale: PatternLocale,
}

impl EpochConfig {
    /// Default epoch with the locale's built-in patterns.
    pub fn for_locale(locale: PatternLocale) -> Self {
        Self {
            epoch: Epoch::default(),
            date_pattern: locale.date_pattern(),
            time_pattern: locale.time_pattern(),
            combiner: locale.combiner_pattern(),
            locale,
        }
    }

    pub fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn with_date_pattern(mut self, pattern: DatePattern) -> Self {
        self.date_pattern = pattern;
        self
    }

    pub fn with_time_pattern(mut self, pattern: DatePattern) -> Self {
        self.time_pattern = pattern;
        self
    }

    pub fn with_combiner(mut self, combiner: CombinerPattern) -> Self {
        self.combiner = combiner;
        self
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn date_pattern(&self) -> &DatePattern {
        &self.date_pattern
    }

    pub fn time_pattern(&self) -> &DatePattern {
        &self.time_pattern
    }

    pub fn combiner(&self) -> &CombinerPattern {
        &self.combiner
    }

    pub fn locale(&self) -> PatternLocale {
        self.locale
    }

    /// Date via the date pattern, then `" HH:MM[:SS]"` if time is wanted.
    pub fn render_date(&self, elapsed: f64, granularity: Granularity) -> String {
        if let Some(s) = non_finite::sentinel(elapsed) {
            return s.to_string();
        }
        let Some(instant) = self.epoch.resolve(elapsed) else {
            return out_of_range(elapsed);
        };
        let date = self.date_pattern.format(&instant);
        if granularity.includes_time() {
            format!("{} {}", date, instant_clock(&instant, granularity))
        } else {
            date
        }
    }

    /// Date and time each formatted by their own pattern, then joined by the
    /// combiner so locale word order holds.
    pub fn render_date_time(&self, elapsed: f64, include_time: bool) -> String {
        if let Some(s) = non_finite::sentinel(elapsed) {
            return s.to_string();
        }
        let Some(instant) = self.epoch.resolve(elapsed) else {
            return out_of_range(elapsed);
        };
        let date = self.date_pattern.format(&instant);
        if !include_time {
            return date;
        }
        let time = self.time_pattern.format(&instant);
        self.combiner.combine(&time, &date)
    }

    /// `"<year:04>-<ordinal day:03> [HH:MM[:SS]]"`, ignoring configured
    /// patterns. Years outside 0..=9999 render as `"+Inf"` / `"-Inf"`.
    pub fn render_compact_stamp(&self, elapsed: f64, granularity: Granularity) -> String {
        if let Some(s) = non_finite::sentinel(elapsed) {
            return s.to_string();
        }
        let Some(instant) = self.epoch.resolve(elapsed) else {
            return out_of_range(elapsed);
        };
        if let Some(s) = stamp_year_overflow(i64::from(instant.year())) {
            return s.to_string();
        }
        let stamp = format!("{:04}-{:03}", instant.year(), instant.ordinal());
        if granularity.includes_time() {
            format!("{} {}", stamp, instant_clock(&instant, granularity))
        } else {
            stamp
        }
    }
}

impl Default for EpochConfig {
    fn default() -> Self {
        Self::for_locale(PatternLocale::default())
    }
}

fn calendar_day(b: &TimeBreakdown) -> String {
    format!(
        "Year {}, Day {}",
        b.years.saturating_add(1),
        b.days.saturating_add(1)
    )
}

/// `"Year <y+1>, Day <d+1>"`, then `" - HH:MM[:SS]"` if time is wanted.
///
/// Instants before the epoch fall in year 0 and below, so one second
/// before it is `"Year 0, Day 365 - 23:59:59"` on the real calendar.
pub fn calendar_date(elapsed: f64, calendar: &CalendarSystem, granularity: Granularity) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let b = calendar.decompose_instant(elapsed);
    if granularity.includes_time() {
        format!(
            "{} - {}",
            calendar_day(&b),
            clock(b.hours, b.minutes, b.seconds, granularity)
        )
    } else {
        calendar_day(&b)
    }
}

/// [`calendar_date`] with a full `HH:MM:SS` clock when time is wanted.
pub fn calendar_date_time(elapsed: f64, calendar: &CalendarSystem, include_time: bool) -> String {
    let granularity = if include_time {
        Granularity::Seconds
    } else {
        Granularity::Days
    };
    calendar_date(elapsed, calendar, granularity)
}

/// `"<y+1:04>-<d+1:03> [HH:MM[:SS]]"` under a fixed calendar.
///
/// Years outside 0..=9999 render as `"+Inf"` / `"-Inf"`.
pub fn calendar_compact_stamp(
    elapsed: f64,
    calendar: &CalendarSystem,
    granularity: Granularity,
) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let b = calendar.decompose_instant(elapsed);
    let year = b.years.saturating_add(1);
    if let Some(s) = stamp_year_overflow(year) {
        return s.to_string();
    }
    let stamp = format!("{:04}-{:03}", year, b.days.saturating_add(1));
    if granularity.includes_time() {
        format!(
            "{} {}",
            stamp,
            clock(b.hours, b.minutes, b.seconds, granularity)
        )
    } else {
        stamp
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
