// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Date, time, and combiner patterns.
//!
//! Date and time patterns use strftime syntax (`%Y-%m-%d`). A
//! [`DatePattern`] can only be obtained through validation, which renders a
//! fixed sentinel instant and rejects the pattern if formatting fails.
//!
//! Combiner patterns join an already formatted time and date: `{0}` is the
//! time, `{1}` the date, `{{` and `}}` are literal braces.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::{self, Write};
use thiserror::Error;

/// Which kind of pattern a candidate string is meant to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Date,
    Time,
    Combiner,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Time => write!(f, "time"),
            Self::Combiner => write!(f, "date and time combiner"),
        }
    }
}

/// Why a combiner pattern was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinerFault {
    #[error("unmatched '{{' at byte {0}")]
    UnmatchedOpen(usize),
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
    #[error("slot {{{0}}} is not {{0}} or {{1}}")]
    UnknownSlot(String),
    #[error("missing {{{0}}} slot")]
    MissingSlot(usize),
}

/// Errors from validating a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid {kind} pattern {pattern:?}")]
    Malformed { kind: PatternKind, pattern: String },
    #[error("invalid date and time combiner {pattern:?}: {fault}")]
    Combiner {
        pattern: String,
        fault: CombinerFault,
    },
}

/// The instant every candidate date/time pattern is test-rendered against.
pub fn sentinel_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1957, 10, 4)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn try_format(pattern: &str, instant: &NaiveDateTime) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern))?;
    Ok(out)
}

/// A strftime pattern known to format without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern(String);

impl DatePattern {
    /// Validate `pattern` by rendering the sentinel instant with it.
    pub fn parse(pattern: &str, kind: PatternKind) -> Result<Self, PatternError> {
        match try_format(pattern, &sentinel_instant()) {
            Ok(_) => Ok(Self(pattern.to_string())),
            Err(_) => Err(PatternError::Malformed {
                kind,
                pattern: pattern.to_string(),
            }),
        }
    }

    /// Built-in patterns skip validation; `locale` tests cover them.
    pub(crate) fn builtin(pattern: &'static str) -> Self {
        Self(pattern.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self, instant: &NaiveDateTime) -> String {
        try_format(&self.0, instant).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Time,
    Date,
}

/// A validated `{0}`/`{1}` combiner pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinerPattern {
    source: String,
    segments: Vec<Segment>,
}

impl CombinerPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        parse_segments(pattern)
            .map(|segments| Self {
                source: pattern.to_string(),
                segments,
            })
            .map_err(|fault| PatternError::Combiner {
                pattern: pattern.to_string(),
                fault,
            })
    }

    /// `"{1} {0}"`, built without parsing.
    pub(crate) fn date_then_time() -> Self {
        Self {
            source: "{1} {0}".to_string(),
            segments: vec![
                Segment::Date,
                Segment::Literal(" ".to_string()),
                Segment::Time,
            ],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute `time` into `{0}` and `date` into `{1}`.
    pub fn combine(&self, time: &str, date: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + time.len() + date.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Time => out.push_str(time),
                Segment::Date => out.push_str(date),
            }
        }
        out
    }
}

fn parse_segments(pattern: &str) -> Result<Vec<Segment>, CombinerFault> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut seen = [false; 2];
    let mut chars = pattern.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, n)| n) == Some('{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek().map(|&(_, n)| n) == Some('}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(CombinerFault::UnmatchedClose(pos)),
            '{' => {
                let mut slot = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, ch)) => slot.push(ch),
                        None => return Err(CombinerFault::UnmatchedOpen(pos)),
                    }
                }
                let segment = match slot.trim() {
                    "0" => Segment::Time,
                    "1" => Segment::Date,
                    _ => return Err(CombinerFault::UnknownSlot(slot)),
                };
                seen[usize::from(segment == Segment::Date)] = true;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(segment);
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    match seen.iter().position(|&s| !s) {
        Some(missing) => Err(CombinerFault::MissingSlot(missing)),
        None => Ok(segments),
    }
}

/// Whether `candidate` is a well-formed pattern of the given kind.
///
/// Meant for configuration load time; rendering never re-validates.
pub fn validate(candidate: &str, kind: PatternKind) -> bool {
    match kind {
        PatternKind::Date | PatternKind::Time => DatePattern::parse(candidate, kind).is_ok(),
        PatternKind::Combiner => CombinerPattern::parse(candidate).is_ok(),
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
