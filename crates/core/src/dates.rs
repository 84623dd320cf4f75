//! Calendar-date arithmetic for deadline formulas.
//!
//! Statutes count in calendar days and calendar months. Month addition lands
//! on the same day-of-month and clamps at month end (Jan 31 + 1 month =
//! Feb 28/29). All comparisons are date-only; time of day never enters into
//! a deadline.

use chrono::{Days, Months, NaiveDate};

/// `date` plus `days` calendar days.
///
/// Panics only if the result leaves chrono's representable date range.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date + Days::new(days)
}

/// `date` minus `days` calendar days.
pub fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date - Days::new(days)
}

/// `date` plus `months` calendar months, clamped at the target month's end.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date + Months::new(months)
}

/// Whole days from `today` until `deadline`.
///
/// Negative means the deadline has passed; zero means it is due today.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Render a date as "Jan 5, 2025" for human-readable remedy text.
pub fn format_month_day_year(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
