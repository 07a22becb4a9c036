//! Configuration load and formatter replacement.

use crate::prelude::*;
use rssdt_core::{validate, PatternKind};
use rssdt_settings::FormatterSettings;
use serial_test::serial;
use similar_asserts::assert_eq;

#[test]
fn validator_rejects_dangling_directive() {
    assert!(!validate("%Y-%m-%", PatternKind::Date));
    assert!(validate("just text", PatternKind::Date));
    assert!(validate("{1} {0}", PatternKind::Combiner));
    assert!(!validate("{0}", PatternKind::Combiner));
}

#[test]
#[serial]
fn invalid_values_fall_back_to_defaults() {
    use_settings(
        r#"
[RSSTimeFormatter]
dateFormat = "%Y-%"
timeFormat = "%H:%M"
dateTimeFormat = "{0"
epoch = "not a date"
"#,
    );
    let f = formatter();
    assert_eq!(f.render_date(0.0, Granularity::Days), "Jan 1, 1951");
    assert_eq!(f.render_date_time(0.0, true), "Jan 1, 1951, 00:00");
}

#[test]
#[serial]
fn locale_changes_word_order() {
    use_settings("[RSSTimeFormatter]\nlocale = \"ja\"\n");
    assert_eq!(formatter().render_date_time(0.0, true), "1951/01/01 0:00:00");

    use_settings("[RSSTimeFormatter]\nlocale = \"en-US\"\n");
    assert_eq!(
        formatter().render_date_time(0.0, true),
        "Jan 1, 1951, 12:00:00 AM"
    );
}

#[test]
#[serial]
fn escaped_braces_in_combiner() {
    use_settings("[RSSTimeFormatter]\ndateTimeFormat = \"｢1｣ ｢0｣\"\n");
    assert_eq!(formatter().render_date_time(0.0, true), "Jan 1, 1951 12:00:00 AM");
}

#[test]
#[serial]
fn held_handle_survives_replacement() {
    let held = use_settings("[RSSTimeFormatter]\nepoch = \"2000-01-01\"\n");
    use_settings("[RSSTimeFormatter]\ncalendar = \"alternate\"\n");
    assert_eq!(held.render_date(0.0, Granularity::Days), "Jan 1, 2000");
    assert_eq!(formatter().render_date(0.0, Granularity::Days), "Year 1, Day 1");

    rssdt_core::reset();
    assert_eq!(formatter().name(), "default");
    assert_eq!(formatter().day(), 86_400);
}

#[test]
#[serial]
fn duplicate_key_document_installs_defaults() {
    let settings = FormatterSettings::load(
        "[RSSTimeFormatter]\ncalendar = \"alternate\"\ncalendar = \"default\"\n",
    );
    let f = rssdt_settings::install(&settings);
    assert_eq!(f.name(), "real");
    assert_eq!(formatter().render_date(0.0, Granularity::Days), "Jan 1, 1951");
}
