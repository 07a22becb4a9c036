//! Duration rendering through the active formatter.

use crate::prelude::*;
use rssdt_core::CalendarSystem;
use serial_test::serial;
use similar_asserts::assert_eq;

#[test]
#[serial]
fn long_form_pluralizes_per_unit() {
    use_calendar(CalendarSystem::REAL);
    let f = formatter();
    assert_eq!(
        f.render_long(3661.0),
        "0 years, 0 days, 1 hour, 1 minute, 1 second"
    );
    assert_eq!(
        f.render_long(7322.0),
        "0 years, 0 days, 2 hours, 2 minutes, 2 seconds"
    );
    assert_eq!(
        f.render_long(31_536_000.0 + 86_400.0),
        "1 year, 1 day, 0 hours, 0 minutes, 0 seconds"
    );
}

#[test]
#[serial]
fn zero_delta_depends_on_granularity() {
    use_calendar(CalendarSystem::REAL);
    let f = formatter();
    assert_eq!(f.render_delta(0.0, Granularity::Seconds, false), "0 seconds");
    assert_eq!(f.render_delta(0.0, Granularity::Minutes, false), "0 minutes");
    assert_eq!(f.render_delta(0.0, Granularity::Days, false), "0 days");
    assert_eq!(f.render_delta_compact(0.0, Granularity::Seconds, false), "0s");
    assert_eq!(f.render_delta_compact(0.0, Granularity::Minutes, false), "0m");
    assert_eq!(f.render_delta_compact(0.0, Granularity::Days, false), "0d");
}

#[test]
#[serial]
fn delta_omits_zero_and_finer_units() {
    use_calendar(CalendarSystem::REAL);
    let f = formatter();
    let elapsed = 86_400.0 * 2.0 + 61.0;
    assert_eq!(
        f.render_delta(elapsed, Granularity::Seconds, false),
        "2 days, 1 minute, 1 second"
    );
    assert_eq!(f.render_delta(elapsed, Granularity::Days, false), "2 days");
    assert_eq!(
        f.render_delta_compact(-elapsed, Granularity::Minutes, true),
        "2d, 1m"
    );
}

#[test]
#[serial]
fn countdown_sign_prefix() {
    use_calendar(CalendarSystem::REAL);
    let f = formatter();
    assert!(f.render_countdown(-5000.0, 2, false).starts_with("- "));
    assert!(f.render_countdown(5000.0, 2, true).starts_with("+ "));
    let plain = f.render_countdown(5000.0, 2, false);
    assert_eq!(plain, "1h, 23m");
}

#[test]
#[serial]
fn countdown_follows_active_calendar() {
    use_calendar(CalendarSystem::ALTERNATE);
    let f = formatter();
    assert_eq!(f.render_countdown(25_200.0, 3, false), "1d, 1h, 0m");
    assert_eq!(f.render_countdown_compact(25_200.0, true), "+ 1:01:00:00");
    assert_eq!(f.day(), 21_600);
    assert_eq!(f.year(), 9_201_600);
    assert_eq!(f.minute(), 60);
    assert_eq!(f.hour(), 3_600);
}

#[test]
#[serial]
fn all_zero_countdown() {
    use_calendar(CalendarSystem::REAL);
    assert_eq!(formatter().render_countdown(0.0, 3, true), "0s");
}
