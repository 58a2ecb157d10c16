//! Date and time utility functions
//!
//! This module provides interval arithmetic and human-readable relative
//! formatting (e.g., "Today at 14:30", "Yesterday at 09:15").
//!
//! Two families of arithmetic coexist here on purpose and must not be
//! unified: [`yesterday`], [`tomorrow`], and [`date_by_adding_days`] use
//! fixed 86 400-second days (they ignore daylight-saving transitions),
//! while [`is_same_day`] compares calendar days in the host's local
//! timezone. This mismatch is a documented quirk of the contract.

use chrono::{DateTime, Datelike, Duration, Local};

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Time format used for the relative-day renderings
pub const FRIENDLY_TIME_FORMAT: &str = "%H:%M";

/// Strict floating-point equality of two intervals.
///
/// No epsilon is applied; callers wanting tolerance must pre-round.
#[must_use]
pub fn interval_is_equal(a: f64, b: f64) -> bool {
    a == b
}

/// Whole minutes in an interval, truncated toward zero
#[must_use]
pub fn interval_minutes(interval: f64) -> i64 {
    (interval / SECONDS_PER_MINUTE) as i64
}

/// Whole hours in an interval, truncated toward zero
#[must_use]
pub fn interval_hours(interval: f64) -> i64 {
    (interval / SECONDS_PER_HOUR) as i64
}

/// Whole days in an interval, truncated toward zero
#[must_use]
pub fn interval_days(interval: f64) -> i64 {
    (interval / SECONDS_PER_DAY) as i64
}

/// The current instant minus exactly 86 400 seconds (not calendar-aware)
#[must_use]
pub fn yesterday() -> DateTime<Local> {
    Local::now() - Duration::seconds(SECONDS_PER_DAY as i64)
}

/// The current instant plus exactly 86 400 seconds (not calendar-aware)
#[must_use]
pub fn tomorrow() -> DateTime<Local> {
    Local::now() + Duration::seconds(SECONDS_PER_DAY as i64)
}

/// Add `days` fixed-length days (86 400 seconds each) to a date
#[must_use]
pub fn date_by_adding_days(base: DateTime<Local>, days: i64) -> DateTime<Local> {
    base + Duration::seconds(days * SECONDS_PER_DAY as i64)
}

/// True when both instants fall on the same calendar day in local time.
///
/// Unlike the fixed-interval helpers above this is calendar-aware: two
/// instants an hour apart that straddle midnight are different days.
#[must_use]
pub fn is_same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// True when the date falls on yesterday's calendar day
#[must_use]
pub fn is_yesterday(date: DateTime<Local>) -> bool {
    is_same_day(date, yesterday())
}

/// True when the date falls on today's calendar day
#[must_use]
pub fn is_today(date: DateTime<Local>) -> bool {
    is_same_day(date, Local::now())
}

/// True when the date falls on tomorrow's calendar day
#[must_use]
pub fn is_tomorrow(date: DateTime<Local>) -> bool {
    is_same_day(date, tomorrow())
}

/// Calendar-component month difference between two dates.
///
/// Computed from the year and month components only; day-of-month is
/// ignored. Sign follows `a - b`.
#[must_use]
pub fn months_since(a: DateTime<Local>, b: DateTime<Local>) -> i64 {
    i64::from(a.year() - b.year()) * 12 + (i64::from(a.month()) - i64::from(b.month()))
}

/// Whole days between two instants, truncated toward zero; sign follows `a - b`
#[must_use]
pub fn days_since(a: DateTime<Local>, b: DateTime<Local>) -> i64 {
    interval_days(seconds_between(a, b))
}

/// Whole days between an instant and now, truncated toward zero
#[must_use]
pub fn days_since_now(date: DateTime<Local>) -> i64 {
    days_since(date, Local::now())
}

/// Whole hours between two instants, truncated toward zero; sign follows `a - b`
#[must_use]
pub fn hours_since(a: DateTime<Local>, b: DateTime<Local>) -> i64 {
    interval_hours(seconds_between(a, b))
}

/// Whole minutes between two instants, truncated toward zero; sign follows `a - b`
#[must_use]
pub fn minutes_since(a: DateTime<Local>, b: DateTime<Local>) -> i64 {
    interval_minutes(seconds_between(a, b))
}

/// Month and year of a date, e.g. "January 2026"
#[must_use]
pub fn month_year_string(date: DateTime<Local>) -> String {
    date.format("%B %Y").to_string()
}

/// Full month name of a date, e.g. "January"
#[must_use]
pub fn month_string(date: DateTime<Local>) -> String {
    date.format("%B").to_string()
}

/// Four-digit year of a date, e.g. "2026"
#[must_use]
pub fn year_string(date: DateTime<Local>) -> String {
    date.format("%Y").to_string()
}

/// Caller-supplied fallback rendering used by [`friendly_string`]
pub trait DateFormatter {
    fn format(&self, date: &DateTime<Local>) -> String;
}

/// Stock [`DateFormatter`] rendering through a chrono strftime pattern
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
}

impl PatternFormatter {
    #[must_use]
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        Self { pattern: pattern.into() }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl DateFormatter for PatternFormatter {
    fn format(&self, date: &DateTime<Local>) -> String {
        date.format(&self.pattern).to_string()
    }
}

/// Render a date as "Today/Yesterday/Tomorrow at HH:MM" when it falls on
/// one of those calendar days, otherwise through the supplied formatter.
#[must_use]
pub fn friendly_string(date: DateTime<Local>, formatter: &dyn DateFormatter) -> String {
    let time = date.format(FRIENDLY_TIME_FORMAT);

    if is_today(date) {
        format!("Today at {}", time)
    } else if is_yesterday(date) {
        format!("Yesterday at {}", time)
    } else if is_tomorrow(date) {
        format!("Tomorrow at {}", time)
    } else {
        formatter.format(&date)
    }
}

/// Signed seconds of `a - b`, carrying millisecond precision
fn seconds_between(a: DateTime<Local>, b: DateTime<Local>) -> f64 {
    (a - b).num_milliseconds() as f64 / 1000.0
}
