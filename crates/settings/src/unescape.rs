// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unescaping of configured string values.
//!
//! Configuration stores cannot always carry curly braces, so `｢` and `｣`
//! stand in for `{` and `}`. `\uXXXX` (four upper-case hex digits) and
//! `\UXXXXX` (five) name a code point directly, which also reaches beyond
//! the Basic Multilingual Plane.

use crate::error::SettingsError;
use regex::Regex;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:u([0-9A-F]{4})|U([0-9A-F]{5}))").expect("constant regex pattern is valid")
});

/// Replace bracket stand-ins and `\u`/`\U` escapes.
///
/// Escapes naming a surrogate are rejected rather than passed through.
pub fn unescape(raw: &str) -> Result<String, SettingsError> {
    let braced = raw.replace('｢', "{").replace('｣', "}");

    let mut out = String::with_capacity(braced.len());
    let mut last = 0;
    for caps in ESCAPE_PATTERN.captures_iter(&braced) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let digits = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        let ch = u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| SettingsError::InvalidEscape {
                escape: whole.as_str().to_string(),
            })?;
        out.push_str(&braced[last..whole.start()]);
        out.push(ch);
        last = whole.end();
    }
    out.push_str(&braced[last..]);
    Ok(out)
}

#[cfg(test)]
#[path = "unescape_tests.rs"]
mod tests;
