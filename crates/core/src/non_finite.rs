// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screening of non-finite elapsed-time values.
//!
//! Every renderer checks its input here before any arithmetic. NaN and the
//! infinities are not errors: they render as fixed sentinel strings.

/// Classification of an elapsed-time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finiteness {
    NaN,
    PositiveInfinity,
    NegativeInfinity,
    Finite,
}

impl Finiteness {
    pub fn of(value: f64) -> Self {
        if value.is_nan() {
            Self::NaN
        } else if value == f64::INFINITY {
            Self::PositiveInfinity
        } else if value == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else {
            Self::Finite
        }
    }

    /// The canonical rendering for non-finite classes, `None` when finite.
    pub fn sentinel(self) -> Option<&'static str> {
        match self {
            Self::NaN => Some("NaN"),
            Self::PositiveInfinity => Some("+Inf"),
            Self::NegativeInfinity => Some("-Inf"),
            Self::Finite => None,
        }
    }
}

/// Sentinel string for `value`, or `None` if it is finite.
pub fn sentinel(value: f64) -> Option<&'static str> {
    Finiteness::of(value).sentinel()
}

#[cfg(test)]
#[path = "non_finite_tests.rs"]
mod tests;
