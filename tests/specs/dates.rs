//! Absolute date rendering through the active formatter.

use crate::prelude::*;
use rssdt_core::CalendarSystem;
use serial_test::serial;
use similar_asserts::assert_eq;

#[test]
#[serial]
fn built_in_dates_are_one_based() {
    use_calendar(CalendarSystem::REAL);
    let f = formatter();
    assert_eq!(f.render_date(0.0, Granularity::Days), "Year 1, Day 1");
    assert_eq!(
        f.render_date(31_536_000.0 + 86_400.0 + 3_723.0, Granularity::Seconds),
        "Year 2, Day 2 - 01:02:03"
    );
    assert_eq!(
        f.render_date_time(3_723.0, true),
        "Year 1, Day 1 - 01:02:03"
    );
}

#[test]
#[serial]
fn real_calendar_uses_epoch_and_patterns() {
    use_settings(
        r#"
[RSSTimeFormatter]
epoch = "2000-01-01"
dateFormat = "%Y-%m-%d"
timeFormat = "%H:%M"
dateTimeFormat = "{1} at {0}"
"#,
    );
    let f = formatter();
    assert_eq!(f.name(), "real");
    let elapsed = 86_400.0 * 31.0 + 3_600.0 * 13.0 + 5.0;
    assert_eq!(f.render_date(elapsed, Granularity::Days), "2000-02-01");
    assert_eq!(
        f.render_date(elapsed, Granularity::Seconds),
        "2000-02-01 13:00:05"
    );
    assert_eq!(f.render_date_time(elapsed, true), "2000-02-01 at 13:00");
    assert_eq!(f.render_date_time(elapsed, false), "2000-02-01");
    assert_eq!(
        f.render_compact_stamp(elapsed, Granularity::Minutes),
        "2000-032 13:00"
    );
}

#[test]
#[serial]
fn compact_stamp_ignores_date_pattern() {
    use_settings("[RSSTimeFormatter]\ndateFormat = \"%A %e %B\"\n");
    let real = formatter();
    use_calendar(CalendarSystem::ALTERNATE);
    let alternate = formatter();

    for elapsed in [0.0, 59.0, 3_601.0, 86_399.5, 40_000_000.0, 1.0e9, -1.0, -86_400.5] {
        for granularity in ALL_GRANULARITIES {
            for f in [&real, &alternate] {
                let stamp = f.render_compact_stamp(elapsed, granularity);
                assert!(is_compact_stamp(&stamp), "{}: {stamp:?}", f.name());
            }
        }
    }
}

#[test]
#[serial]
fn compact_stamp_outside_four_digit_years() {
    use_settings("[RSSTimeFormatter]
");
    let real = formatter();
    use_calendar(CalendarSystem::REAL);
    let built_in = formatter();

    for f in [&real, &built_in] {
        for granularity in ALL_GRANULARITIES {
            assert_eq!(f.render_compact_stamp(1.0e12, granularity), "+Inf", "{}", f.name());
            assert_eq!(f.render_compact_stamp(-7.0e10, granularity), "-Inf", "{}", f.name());
        }
    }
}

#[test]
#[serial]
fn built_in_dates_before_epoch() {
    use_calendar(CalendarSystem::REAL);
    let f = formatter();
    assert_eq!(
        f.render_date(-1.0, Granularity::Seconds),
        "Year 0, Day 365 - 23:59:59"
    );
    assert_eq!(
        f.render_compact_stamp(-100.0, Granularity::Seconds),
        "0000-365 23:58:20"
    );
}

#[test]
#[serial]
fn unrepresentable_instant_renders_infinity() {
    use_settings("[RSSTimeFormatter]\n");
    let f = formatter();
    assert_eq!(f.render_date(1.0e20, Granularity::Days), "+Inf");
    assert_eq!(f.render_date_time(-1.0e20, true), "-Inf");
}
