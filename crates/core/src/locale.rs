// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale-specific default patterns.
//!
//! A locale only chooses the built-in medium date, medium time, and combiner
//! patterns. Month and weekday names are not translated.

use crate::pattern::{CombinerPattern, DatePattern};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale {0:?}")]
pub struct LocaleError(pub String);

/// Locales with built-in default patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternLocale {
    #[default]
    English,
    BritishEnglish,
    French,
    German,
    Japanese,
    Russian,
    Chinese,
}

impl PatternLocale {
    pub const ALL: [Self; 7] = [
        Self::English,
        Self::BritishEnglish,
        Self::French,
        Self::German,
        Self::Japanese,
        Self::Russian,
        Self::Chinese,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::BritishEnglish => "en-GB",
            Self::French => "fr",
            Self::German => "de",
            Self::Japanese => "ja",
            Self::Russian => "ru",
            Self::Chinese => "zh",
        }
    }

    pub(crate) fn date_source(self) -> &'static str {
        match self {
            Self::English => "%b %-d, %Y",
            Self::BritishEnglish | Self::French => "%-d %b %Y",
            Self::German | Self::Russian => "%d.%m.%Y",
            Self::Japanese => "%Y/%m/%d",
            Self::Chinese => "%Y年%-m月%-d日",
        }
    }

    pub(crate) fn time_source(self) -> &'static str {
        match self {
            Self::English => "%-I:%M:%S %p",
            Self::Japanese => "%-H:%M:%S",
            _ => "%H:%M:%S",
        }
    }

    pub(crate) fn combiner_source(self) -> &'static str {
        match self {
            Self::English | Self::BritishEnglish | Self::German | Self::Russian => "{1}, {0}",
            Self::French | Self::Japanese | Self::Chinese => "{1} {0}",
        }
    }

    pub fn date_pattern(self) -> DatePattern {
        DatePattern::builtin(self.date_source())
    }

    pub fn time_pattern(self) -> DatePattern {
        DatePattern::builtin(self.time_source())
    }

    pub fn combiner_pattern(self) -> CombinerPattern {
        // Built-in combiners always parse.
        CombinerPattern::parse(self.combiner_source())
            .unwrap_or_else(|_| CombinerPattern::date_then_time())
    }
}

impl fmt::Display for PatternLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PatternLocale {
    type Err = LocaleError;

    /// Accepts `en`, `en_US`, `EN-gb`, ...: the language decides, except
    /// that `en` with a `GB` region selects British English.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();
        let locale = match (language.as_str(), region.as_str()) {
            ("en", "GB") => Self::BritishEnglish,
            ("en", _) => Self::English,
            ("fr", _) => Self::French,
            ("de", _) => Self::German,
            ("ja", _) => Self::Japanese,
            ("ru", _) => Self::Russian,
            ("zh", _) => Self::Chinese,
            _ => return Err(LocaleError(s.to_string())),
        };
        Ok(locale)
    }
}

#[cfg(test)]
#[path = "locale_tests.rs"]
mod tests;
