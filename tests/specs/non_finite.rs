//! Every renderer maps non-finite input to its sentinel.

use crate::prelude::*;
use rssdt_core::CalendarSystem;
use serial_test::serial;

fn check_all(f: &dyn DateTimeFormatter) {
    for (value, sentinel) in [(f64::NAN, "NaN"), (f64::INFINITY, "+Inf"), (f64::NEG_INFINITY, "-Inf")] {
        let mut outputs = vec![
            f.render_long(value),
            f.render_countdown_compact(value, true),
            f.render_countdown_compact(value, false),
        ];
        for flag in [false, true] {
            outputs.push(f.render_date_time(value, flag));
            outputs.push(f.render_timestamp(value, flag, !flag));
            outputs.push(f.render_timestamp_compact(value, flag, flag));
            for depth in 1..=5 {
                outputs.push(f.render_countdown(value, depth, flag));
            }
            for granularity in ALL_GRANULARITIES {
                outputs.push(f.render_delta(value, granularity, flag));
                outputs.push(f.render_delta_compact(value, granularity, flag));
            }
        }
        for granularity in ALL_GRANULARITIES {
            outputs.push(f.render_date(value, granularity));
            outputs.push(f.render_compact_stamp(value, granularity));
        }
        for output in outputs {
            assert_eq!(output, sentinel, "{} formatter", f.name());
        }
    }
}

#[test]
#[serial]
fn sentinels_from_every_variant() {
    check_all(use_calendar(CalendarSystem::REAL).as_ref());
    check_all(use_calendar(CalendarSystem::ALTERNATE).as_ref());
    check_all(use_settings("").as_ref());
}
