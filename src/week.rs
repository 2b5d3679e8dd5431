//! Week navigation: the 7-day windows the planner displays
//!
//! A displayed week is identified by its anchor: the Sunday that starts it. Moving through the planner is just moving this anchor by whole weeks, in either direction, without bounds.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Day column headers, in the order [`week_dates`] produces the dates
pub fn day_names() -> [&'static str; 7] {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
}

/// Where to move the displayed week
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekDirection {
    Prev,
    Next,
}

/// The Sunday of the week this day belongs to (i.e. the most recent Sunday at-or-before it)
pub fn anchor_for(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

/// The anchor of the week that contains today
pub fn current_week_anchor() -> NaiveDate {
    anchor_for(Local::now().date_naive())
}

/// The 7 dates of this week as `YYYY-MM-DD` strings, Sunday through Saturday
pub fn week_dates(anchor: NaiveDate) -> Vec<String> {
    (0..7)
        .map(|offset| (anchor + Duration::days(offset)).format("%Y-%m-%d").to_string())
        .collect()
}

/// The anchor of the week before or after this one
pub fn shift_week(anchor: NaiveDate, direction: WeekDirection) -> NaiveDate {
    match direction {
        WeekDirection::Prev => anchor - Duration::days(7),
        WeekDirection::Next => anchor + Duration::days(7),
    }
}

/// Back to the week that contains today
pub fn reset_to_current_week() -> NaiveDate {
    current_week_anchor()
}

/// A human-readable label for this week, e.g. `Jan 5-11, 2026`.
/// The month is only spelled twice when the week crosses a month boundary, e.g. `Jan 29 - Feb 4, 2026`
pub fn format_range(anchor: NaiveDate) -> String {
    let end = anchor + Duration::days(6);

    let start_month = anchor.format("%b").to_string();
    let end_month = end.format("%b").to_string();
    let year = anchor.year();

    if start_month == end_month {
        format!("{} {}-{}, {}", start_month, anchor.day(), end.day(), year)
    } else {
        format!("{} {} - {} {}, {}", start_month, anchor.day(), end_month, end.day(), year)
    }
}


/// The one piece of navigable state: which week is displayed.
///
/// The anchor only moves by whole weeks ([`prev`](Self::prev)/[`next`](Self::next)) or jumps back to the current week ([`reset`](Self::reset))
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekCursor {
    anchor: NaiveDate,
}

impl WeekCursor {
    /// A cursor on the current week
    pub fn new() -> Self {
        Self { anchor: current_week_anchor() }
    }

    /// A cursor on the week that contains this day
    pub fn at(day: NaiveDate) -> Self {
        Self { anchor: anchor_for(day) }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The 7 dates of the displayed week
    pub fn dates(&self) -> Vec<String> {
        week_dates(self.anchor)
    }

    /// The label of the displayed week
    pub fn label(&self) -> String {
        format_range(self.anchor)
    }

    pub fn prev(&mut self) {
        self.anchor = shift_week(self.anchor, WeekDirection::Prev);
    }

    pub fn next(&mut self) {
        self.anchor = shift_week(self.anchor, WeekDirection::Next);
    }

    pub fn reset(&mut self) {
        self.anchor = reset_to_current_week();
    }
}
