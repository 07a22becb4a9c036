// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar systems and the breakdown of elapsed time into calendar units.
//!
//! A [`CalendarSystem`] fixes the length of a day and of a year in seconds.
//! [`CalendarSystem::decompose`] splits an elapsed-time value into
//! `(years, days, hours, minutes, seconds)` under that calendar. The same
//! arithmetic serves both absolute dates (time since an epoch, displayed
//! 1-based) and durations (displayed as raw magnitudes).

use thiserror::Error;

/// Seconds in one minute, independent of calendar.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Seconds in one hour, independent of calendar.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Errors from constructing a custom calendar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("day length must be at least one hour, got {0}s")]
    DayTooShort(i64),
    #[error("year length must be positive, got {0}s")]
    YearNotPositive(i64),
}

/// Fixed day and year lengths used to decompose elapsed time.
///
/// The year length need not be a multiple of the day length. The day length
/// is authoritative for hour boundaries: `hours_per_day = day_length / 3600`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSystem {
    day_length: i64,
    year_length: i64,
}

impl CalendarSystem {
    /// 365-day year of 24-hour days.
    pub const REAL: Self = Self {
        day_length: 86_400,
        year_length: 31_536_000,
    };

    /// Alternate fixed calendar: 6-hour days, 426-day years.
    pub const ALTERNATE: Self = Self {
        day_length: 21_600,
        year_length: 9_201_600,
    };

    /// Build a custom calendar from day and year lengths in seconds.
    pub fn new(day_length: i64, year_length: i64) -> Result<Self, CalendarError> {
        if day_length < SECONDS_PER_HOUR {
            return Err(CalendarError::DayTooShort(day_length));
        }
        if year_length <= 0 {
            return Err(CalendarError::YearNotPositive(year_length));
        }
        Ok(Self {
            day_length,
            year_length,
        })
    }

    pub fn day_length(&self) -> i64 {
        self.day_length
    }

    pub fn year_length(&self) -> i64 {
        self.year_length
    }

    pub fn hours_per_day(&self) -> i64 {
        self.day_length / SECONDS_PER_HOUR
    }

    /// Whole days in a year; any leftover seconds are ignored.
    pub fn days_per_year(&self) -> i64 {
        self.year_length / self.day_length
    }

    /// Split `elapsed` seconds into calendar units.
    ///
    /// Years and the remaining whole seconds are truncated toward zero, so a
    /// negative input yields non-positive components. Days are not reduced
    /// modulo the year length. Callers must screen out non-finite input
    /// first (see [`crate::non_finite`]); the casts here saturate rather
    /// than fail, so a stray NaN decomposes to all zeros.
    pub fn decompose(&self, elapsed: f64) -> TimeBreakdown {
        let year_length = self.year_length as f64;
        let years = (elapsed / year_length).trunc();
        let remainder = elapsed - years * year_length;
        let total_seconds = remainder.trunc() as i64;

        TimeBreakdown {
            years: years as i64,
            days: total_seconds / self.day_length,
            hours: (total_seconds / SECONDS_PER_HOUR) % self.hours_per_day(),
            minutes: (total_seconds / SECONDS_PER_MINUTE) % 60,
            seconds: total_seconds % 60,
        }
    }

    /// Split a point in time `elapsed` seconds after the epoch into calendar
    /// units.
    ///
    /// Years are floored instead of truncated, so an instant before the epoch
    /// lands late in an earlier year and every component below years stays
    /// non-negative: one second before the epoch is year -1, last day,
    /// 23:59:59 on the real calendar.
    pub fn decompose_instant(&self, elapsed: f64) -> TimeBreakdown {
        let year_length = self.year_length as f64;
        let years = (elapsed / year_length).floor();
        // Rounding can leave a remainder of exactly one year; decompose
        // carries it into its own year count.
        let within = self.decompose((elapsed - years * year_length).max(0.0));
        TimeBreakdown {
            years: (years as i64).saturating_add(within.years),
            ..within
        }
    }
}

impl Default for CalendarSystem {
    fn default() -> Self {
        Self::REAL
    }
}

/// Elapsed time split into calendar units.
///
/// Derived fresh from an elapsed-time value on each call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBreakdown {
    pub years: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeBreakdown {
    /// Components ordered from most to least significant.
    pub fn components(&self) -> [i64; 5] {
        [self.years, self.days, self.hours, self.minutes, self.seconds]
    }

    pub fn is_zero(&self) -> bool {
        self.components().iter().all(|&c| c == 0)
    }

    /// Day count with whole years folded in.
    pub fn total_days(&self, calendar: &CalendarSystem) -> i64 {
        self.years
            .saturating_mul(calendar.days_per_year())
            .saturating_add(self.days)
    }

    /// Seconds represented by this breakdown under `calendar`.
    pub fn to_seconds(&self, calendar: &CalendarSystem) -> i64 {
        self.years
            .saturating_mul(calendar.year_length())
            .saturating_add(self.days.saturating_mul(calendar.day_length()))
            .saturating_add(self.hours.saturating_mul(SECONDS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(SECONDS_PER_MINUTE))
            .saturating_add(self.seconds)
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
