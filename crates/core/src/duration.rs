// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration rendering: elapsed time shown as a span rather than a date.
//!
//! All renderers screen non-finite input first and return its sentinel.

use crate::calendar::{CalendarSystem, TimeBreakdown};
use crate::non_finite;

/// How fine-grained a delta or date rendering should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Years and days only.
    Days,
    /// Adds hours and minutes.
    Minutes,
    /// Adds seconds.
    #[default]
    Seconds,
}

impl Granularity {
    /// Map an `(include_time, include_seconds)` flag pair.
    ///
    /// Seconds are only reachable through time, so `include_seconds` is
    /// ignored when `include_time` is false.
    pub fn from_flags(include_time: bool, include_seconds: bool) -> Self {
        match (include_time, include_seconds) {
            (false, _) => Self::Days,
            (true, false) => Self::Minutes,
            (true, true) => Self::Seconds,
        }
    }

    pub fn includes_time(self) -> bool {
        self != Self::Days
    }

    pub fn includes_seconds(self) -> bool {
        self == Self::Seconds
    }

    /// Number of leading units (years first) eligible at this granularity.
    fn unit_count(self) -> usize {
        match self {
            Self::Days => 2,
            Self::Minutes => 4,
            Self::Seconds => 5,
        }
    }

    fn zero_unit(self) -> Unit {
        UNITS[self.unit_count() - 1]
    }
}

#[derive(Debug, Clone, Copy)]
struct Unit {
    singular: &'static str,
    plural: &'static str,
    suffix: &'static str,
}

impl Unit {
    const fn new(singular: &'static str, plural: &'static str, suffix: &'static str) -> Self {
        Self {
            singular,
            plural,
            suffix,
        }
    }

    fn phrase(self, value: i64) -> String {
        let name = if value == 1 {
            self.singular
        } else {
            self.plural
        };
        format!("{} {}", value, name)
    }

    fn compact(self, value: i64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

/// Units in the same order as [`TimeBreakdown::components`].
const UNITS: [Unit; 5] = [
    Unit::new("year", "years", "y"),
    Unit::new("day", "days", "d"),
    Unit::new("hour", "hours", "h"),
    Unit::new("minute", "minutes", "m"),
    Unit::new("second", "seconds", "s"),
];

fn sign_prefix(negative: bool, explicit_positive: bool) -> &'static str {
    if negative {
        "- "
    } else if explicit_positive {
        "+ "
    } else {
        ""
    }
}

/// `"<n> years, <n> days, <n> hours, <n> minutes, <n> seconds"`, always all
/// five units, each singular exactly when its value is 1.
pub fn render_long(elapsed: f64, calendar: &CalendarSystem) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let breakdown = calendar.decompose(elapsed);
    UNITS
        .iter()
        .zip(breakdown.components())
        .map(|(unit, value)| unit.phrase(value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Positive components eligible at `granularity`, most significant first.
fn delta_parts(
    elapsed: f64,
    calendar: &CalendarSystem,
    granularity: Granularity,
    use_absolute: bool,
) -> impl Iterator<Item = (Unit, i64)> {
    let elapsed = if use_absolute { elapsed.abs() } else { elapsed };
    let components = calendar.decompose(elapsed).components();
    UNITS
        .into_iter()
        .zip(components)
        .take(granularity.unit_count())
        .filter(|&(_, value)| value > 0)
}

/// Long-form delta: only non-zero units down to `granularity`.
///
/// Falls back to `"0 seconds"`, `"0 minutes"` or `"0 days"` when nothing
/// would be emitted.
pub fn render_delta(
    elapsed: f64,
    calendar: &CalendarSystem,
    granularity: Granularity,
    use_absolute: bool,
) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let parts: Vec<String> = delta_parts(elapsed, calendar, granularity, use_absolute)
        .map(|(unit, value)| unit.phrase(value))
        .collect();
    if parts.is_empty() {
        return granularity.zero_unit().phrase(0);
    }
    parts.join(", ")
}

/// Like [`render_delta`] with single-letter suffixes: `"1y, 2d, 3h"`.
pub fn render_delta_compact(
    elapsed: f64,
    calendar: &CalendarSystem,
    granularity: Granularity,
    use_absolute: bool,
) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let parts: Vec<String> = delta_parts(elapsed, calendar, granularity, use_absolute)
        .map(|(unit, value)| unit.compact(value))
        .collect();
    if parts.is_empty() {
        return granularity.zero_unit().compact(0);
    }
    parts.join(", ")
}

/// Index of the most significant non-zero component.
fn countdown_anchor(breakdown: &TimeBreakdown) -> Option<usize> {
    breakdown.components().iter().position(|&c| c != 0)
}

/// Component indices to emit: `depth` units starting at `anchor`, clipped
/// to the units that exist. A depth of zero is treated as one.
fn countdown_window(anchor: usize, depth: usize) -> std::ops::Range<usize> {
    anchor..(anchor.saturating_add(depth.max(1))).min(UNITS.len())
}

/// Countdown showing `depth` consecutive units from the first non-zero one.
///
/// `- 1h, 23m` for negative input, `+ 1h, 23m` with `explicit_positive`.
/// Units inside the window are shown even when zero. All-zero input
/// renders as `"0s"`.
pub fn render_countdown(
    elapsed: f64,
    calendar: &CalendarSystem,
    depth: usize,
    explicit_positive: bool,
) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let breakdown = calendar.decompose(elapsed.abs());
    let Some(anchor) = countdown_anchor(&breakdown) else {
        return "0s".to_string();
    };
    let components = breakdown.components();
    let units: Vec<String> = countdown_window(anchor, depth)
        .map(|i| UNITS[i].compact(components[i]))
        .collect();
    format!(
        "{}{}",
        sign_prefix(elapsed < 0.0, explicit_positive),
        units.join(", ")
    )
}

/// Clock-style countdown: `"<sign>[<days>:]HH:MM:SS"`.
///
/// Whole years fold into the day count, which is shown only when non-zero.
pub fn render_countdown_compact(
    elapsed: f64,
    calendar: &CalendarSystem,
    explicit_positive: bool,
) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let b = calendar.decompose(elapsed.abs());
    let days = b.total_days(calendar);
    let days = if days != 0 {
        format!("{}:", days)
    } else {
        String::new()
    };
    format!(
        "{}{}{:02}:{:02}:{:02}",
        sign_prefix(elapsed < 0.0, explicit_positive),
        days,
        b.hours,
        b.minutes,
        b.seconds
    )
}

#[derive(Debug, Clone, Copy)]
enum StampStyle {
    Long,
    Compact,
}

impl StampStyle {
    fn year_prefix(self, years: i64) -> String {
        match self {
            Self::Long => format!("Year {}, ", years),
            Self::Compact => format!("{}y, ", years),
        }
    }

    fn day_prefix(self, days: i64) -> String {
        match self {
            Self::Long => format!("Day {} - ", days),
            Self::Compact => format!("{}d, ", days),
        }
    }
}

fn render_stamp(
    elapsed: f64,
    calendar: &CalendarSystem,
    days: bool,
    years: bool,
    style: StampStyle,
) -> String {
    if let Some(s) = non_finite::sentinel(elapsed) {
        return s.to_string();
    }
    let b = calendar.decompose(elapsed.abs());
    let mut out = sign_prefix(elapsed < 0.0, false).to_string();
    if years {
        out.push_str(&style.year_prefix(b.years));
    }
    if days {
        let day_count = if years { b.days } else { b.total_days(calendar) };
        out.push_str(&style.day_prefix(day_count));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", b.hours, b.minutes, b.seconds));
    out
}

/// Fixed-width `HH:MM:SS`, optionally prefixed by `"Year <y>, "` and
/// `"Day <d> - "`. Without the year prefix, years fold into the day count.
/// Negative input shows its magnitude after a `"- "` prefix.
pub fn render_timestamp(elapsed: f64, calendar: &CalendarSystem, days: bool, years: bool) -> String {
    render_stamp(elapsed, calendar, days, years, StampStyle::Long)
}

/// [`render_timestamp`] with `"<y>y, "` and `"<d>d, "` prefixes.
pub fn render_timestamp_compact(
    elapsed: f64,
    calendar: &CalendarSystem,
    days: bool,
    years: bool,
) -> String {
    render_stamp(elapsed, calendar, days, years, StampStyle::Compact)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
