// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Epoch from which absolute dates are counted.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid epoch {0:?}, expected YYYY-MM-DD with optional HH:MM:SS")]
pub struct EpochError(pub String);

const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// The calendar instant that elapsed time zero refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch(NaiveDateTime);

impl Epoch {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }

    /// `epoch + elapsed`, at millisecond precision.
    ///
    /// `None` when the result falls outside the representable date range.
    /// Non-finite input must be screened out beforehand.
    pub fn resolve(&self, elapsed: f64) -> Option<NaiveDateTime> {
        let millis = (elapsed * 1000.0).round();
        if !(millis.abs() < i64::MAX as f64) {
            return None;
        }
        let delta = TimeDelta::try_milliseconds(millis as i64)?;
        self.0.checked_add_signed(delta)
    }
}

/// 1951-01-01T00:00:00
impl Default for Epoch {
    fn default() -> Self {
        Self(
            NaiveDate::from_ymd_opt(1951, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
        )
    }
}

impl FromStr for Epoch {
    type Err = EpochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for format in ACCEPTED_FORMATS {
            if let Ok(instant) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self(instant));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| EpochError(s.to_string()))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

#[cfg(test)]
#[path = "epoch_tests.rs"]
mod tests;
