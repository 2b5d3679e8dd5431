//! Tests for week navigation arithmetic

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use fridge_door::week;
use fridge_door::week::{WeekCursor, WeekDirection};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_week_dates_shape() {
    let anchor = date(2026, 1, 4); // a Sunday
    let dates = week::week_dates(anchor);

    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0], "2026-01-04");
    assert_eq!(dates[6], "2026-01-10");

    // strictly increasing, one calendar day at a time
    for (offset, formatted) in dates.iter().enumerate() {
        let day = anchor + Duration::days(offset as i64);
        assert_eq!(formatted, &day.format("%Y-%m-%d").to_string());
    }
}

#[test]
fn test_shift_week_roundtrip() {
    let anchor = date(2026, 1, 4);

    let next = week::shift_week(anchor, WeekDirection::Next);
    assert_eq!(next, date(2026, 1, 11));
    assert_eq!(week::shift_week(next, WeekDirection::Prev), anchor);

    let prev = week::shift_week(anchor, WeekDirection::Prev);
    assert_eq!(prev, date(2025, 12, 28));
    assert_eq!(week::shift_week(prev, WeekDirection::Next), anchor);
}

#[test]
fn test_anchors_are_sundays() {
    for day_offset in 0..14 {
        let day = date(2026, 1, 1) + Duration::days(day_offset);
        let anchor = week::anchor_for(day);

        assert_eq!(anchor.weekday(), Weekday::Sun);
        assert!(anchor <= day);
        assert!(day - anchor < Duration::days(7));
        // a day that already is an anchor stays put
        assert_eq!(week::anchor_for(anchor), anchor);
    }

    assert_eq!(week::current_week_anchor().weekday(), Weekday::Sun);
    assert_eq!(week::reset_to_current_week(), week::current_week_anchor());
}

#[test]
fn test_format_range() {
    assert_eq!(week::format_range(date(2026, 1, 4)), "Jan 4-10, 2026");
    assert_eq!(week::format_range(date(2026, 1, 25)), "Jan 25-31, 2026");
    // a week that crosses a month boundary spells both months
    assert_eq!(week::format_range(date(2026, 1, 29)), "Jan 29 - Feb 4, 2026");
    assert_eq!(week::format_range(date(2026, 2, 1)), "Feb 1-7, 2026");
}

#[test]
fn test_cursor_transitions() {
    let mut cursor = WeekCursor::at(date(2026, 1, 7)); // a Wednesday
    assert_eq!(cursor.anchor(), date(2026, 1, 4));
    assert_eq!(cursor.label(), "Jan 4-10, 2026");

    cursor.next();
    cursor.next();
    assert_eq!(cursor.anchor(), date(2026, 1, 18));

    cursor.prev();
    assert_eq!(cursor.anchor(), date(2026, 1, 11));
    assert_eq!(cursor.dates()[0], "2026-01-11");

    cursor.reset();
    assert_eq!(cursor.anchor(), week::current_week_anchor());
}

#[test]
fn test_day_names_line_up_with_week_dates() {
    let names = week::day_names();
    assert_eq!(names.len(), 7);
    assert_eq!(names[0], "Sun");
    assert_eq!(names[6], "Sat");

    for (name, formatted) in names.iter().zip(week::week_dates(date(2026, 1, 4))) {
        let day = NaiveDate::parse_from_str(&formatted, "%Y-%m-%d").unwrap();
        assert_eq!(&day.format("%a").to_string(), name);
    }
}
