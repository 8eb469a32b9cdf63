//! ISO-8601 week arithmetic shared by the aggregator and the chart axis.
//!
//! Both directions live here so the forward key derivation and the inverse
//! label-to-date reconstruction cannot drift apart. Week 1 is the week
//! containing the year's first Thursday; weeks start on Monday.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the `YYYY-Www` bucket key for the ISO week containing `date`.
///
/// The year component is the ISO week-year, which differs from the calendar
/// year around January 1st (2021-01-01 falls in `2020-W53`).
pub fn week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Returns the Monday of the ISO week named by a `YYYY-Www` key.
///
/// `None` for labels that do not parse or name a week the year does not
/// have (e.g. `2024-W60`).
pub fn week_start(key: &str) -> Option<NaiveDate> {
    let (year, week) = key.split_once("-W")?;
    let year: i32 = year.parse().ok()?;
    let week: u32 = week.parse().ok()?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
}
