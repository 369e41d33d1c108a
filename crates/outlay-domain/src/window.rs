//! Calendar windows used to slice the expense collection.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar window evaluated against a caller-supplied `now` instant.
///
/// Passing `now` in explicitly (instead of reading a system clock) keeps
/// every window test deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeWindow {
    /// Same calendar month and year as `now`.
    CurrentMonth,
    /// The month immediately before `now`'s, wrapping December across years.
    PreviousMonth,
    /// Elapsed time from `occurred_at` to `now` is at most this many days
    /// (inclusive, fractional durations respected). Future-dated expenses
    /// have negative elapsed time and therefore pass; feeding only past or
    /// current data is the caller's responsibility.
    TrailingDays(i64),
    /// Same calendar day, time-of-day ignored.
    ExactDay(NaiveDate),
}

impl TimeWindow {
    /// Returns `true` when `occurred_at` falls inside the window.
    pub fn contains(&self, occurred_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let occurred = occurred_at.date_naive();
        let today = now.date_naive();
        match self {
            TimeWindow::CurrentMonth => {
                occurred.year() == today.year() && occurred.month() == today.month()
            }
            TimeWindow::PreviousMonth => {
                let (year, month) = previous_month(today);
                occurred.year() == year && occurred.month() == month
            }
            TimeWindow::TrailingDays(days) => {
                now.signed_duration_since(occurred_at) <= Duration::days(*days)
            }
            TimeWindow::ExactDay(date) => occurred == *date,
        }
    }
}

/// Year and month of the month preceding `date`'s.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    }
}

/// First day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Number of days in `date`'s month, via calendar arithmetic (leap years
/// included) rather than a fixed table.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let next_month_start = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month_start
        .and_then(|first| first.pred_opt())
        .map_or(30, |last| last.day())
}
