// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rssdt-core: elapsed time rendered as calendar dates and durations

pub mod calendar;
pub mod date;
pub mod duration;
pub mod epoch;
pub mod formatter;
pub mod global;
pub mod locale;
pub mod non_finite;
pub mod pattern;

pub use calendar::{
    CalendarError, CalendarSystem, TimeBreakdown, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
pub use date::EpochConfig;
pub use duration::Granularity;
pub use epoch::{Epoch, EpochError};
pub use formatter::{DateTimeFormatter, DefaultFormatter, RealFormatter};
pub use global::{formatter, install, reset, FormatterHandle};
pub use locale::{LocaleError, PatternLocale};
pub use non_finite::Finiteness;
pub use pattern::{
    validate, CombinerFault, CombinerPattern, DatePattern, PatternError, PatternKind,
};
