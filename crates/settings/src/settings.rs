// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter settings and their resolution into a formatter.
//!
//! Every field is an optional plain string. Resolution is per field:
//! absent uses the built-in default, present-but-invalid logs an error and
//! uses the default, present-and-valid is used verbatim.

use crate::error::SettingsError;
use crate::unescape::unescape;
use rssdt_core::{
    CalendarSystem, CombinerPattern, DatePattern, DefaultFormatter, Epoch, EpochConfig,
    FormatterHandle, PatternKind, PatternLocale, RealFormatter,
};
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Which formatter variant to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarChoice {
    /// Real calendar with epoch and custom patterns.
    #[default]
    Real,
    /// Built-in formatter on the real calendar.
    Default,
    /// Built-in formatter on the alternate 6-hour-day calendar.
    Alternate,
}

impl FromStr for CalendarChoice {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "real" => Ok(Self::Real),
            "default" => Ok(Self::Default),
            "alternate" => Ok(Self::Alternate),
            _ => Err(SettingsError::UnknownCalendar(s.to_string())),
        }
    }
}

/// Raw formatter settings as read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterSettings {
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default)]
    pub time_format: Option<String>,
    #[serde(default)]
    pub date_time_format: Option<String>,
    #[serde(default)]
    pub epoch: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub calendar: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default, rename = "RSSTimeFormatter")]
    settings: Option<FormatterSettings>,
}

impl FormatterSettings {
    /// Read settings from the `[RSSTimeFormatter]` table of a TOML document.
    ///
    /// A document without that table yields all-absent settings.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let document: Document = toml::from_str(content)?;
        Ok(document.settings.unwrap_or_default())
    }

    /// Like [`from_toml`](Self::from_toml), but never fails.
    ///
    /// TOML rejects a repeated key while parsing, so one duplicated field
    /// makes the whole table unreadable. The error is logged and every
    /// field falls back to its default.
    pub fn load(content: &str) -> Self {
        Self::from_toml(content).unwrap_or_else(|e| {
            tracing::error!(error = %e, "unreadable formatter settings, using defaults");
            Self::default()
        })
    }

    /// Selected formatter variant, falling back to [`CalendarChoice::Real`].
    pub fn calendar_choice(&self) -> CalendarChoice {
        accept("calendar", self.calendar.as_deref(), |s| s.parse()).unwrap_or_default()
    }

    /// Locale for built-in patterns, falling back to English.
    pub fn pattern_locale(&self) -> PatternLocale {
        accept("locale", self.locale.as_deref(), |s| s.parse()).unwrap_or_default()
    }

    /// Epoch and patterns for the real-calendar formatter.
    pub fn epoch_config(&self) -> EpochConfig {
        let mut config = EpochConfig::for_locale(self.pattern_locale());

        if let Some(pattern) = accept("dateFormat", self.date_format.as_deref(), |s| {
            DatePattern::parse(s, PatternKind::Date)
        }) {
            config = config.with_date_pattern(pattern);
        }
        if let Some(pattern) = accept("timeFormat", self.time_format.as_deref(), |s| {
            DatePattern::parse(s, PatternKind::Time)
        }) {
            config = config.with_time_pattern(pattern);
        }
        if let Some(combiner) = accept(
            "dateTimeFormat",
            self.date_time_format.as_deref(),
            CombinerPattern::parse,
        ) {
            config = config.with_combiner(combiner);
        }
        if let Some(epoch) = accept("epoch", self.epoch.as_deref(), Epoch::from_str) {
            config = config.with_epoch(epoch);
        }
        config
    }

    /// Build the formatter these settings describe.
    pub fn resolve(&self) -> FormatterHandle {
        match self.calendar_choice() {
            CalendarChoice::Real => Arc::new(RealFormatter::new(self.epoch_config())),
            CalendarChoice::Default => Arc::new(DefaultFormatter::new(CalendarSystem::REAL)),
            CalendarChoice::Alternate => {
                Arc::new(DefaultFormatter::new(CalendarSystem::ALTERNATE))
            }
        }
    }
}

/// Unescape and parse one configured value.
///
/// `None` when the value is absent or invalid; invalid values are logged.
fn accept<T, E, F>(key: &'static str, raw: Option<&str>, parse: F) -> Option<T>
where
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    let raw = raw?;
    let value = match unescape(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(key, value = raw, error = %e, "invalid setting, using default");
            return None;
        }
    };
    match parse(&value) {
        Ok(parsed) => {
            tracing::debug!(key, value = %value, "using configured value");
            Some(parsed)
        }
        Err(e) => {
            tracing::error!(key, value = %value, error = %e, "invalid setting, using default");
            None
        }
    }
}

/// Resolve `settings` and make the result the active formatter.
pub fn install(settings: &FormatterSettings) -> FormatterHandle {
    let formatter = settings.resolve();
    rssdt_core::install(Arc::clone(&formatter));
    formatter
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
