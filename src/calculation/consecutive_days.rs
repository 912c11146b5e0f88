//! Consecutive work day resolution.
//!
//! Determines how many unbroken calendar days a worker has worked up to and
//! including a given date. This drives the seventh-consecutive-day escalation.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::models::TimeEntry;

/// The streak length at which the seventh-day escalation applies.
///
/// Any day whose streak position is at or beyond this value is treated as a
/// seventh consecutive day; the escalation persists until the streak breaks.
pub const SEVENTH_DAY_STREAK: u32 = 7;

/// Counts the consecutive worked days ending at `as_of`.
///
/// Only entries dated on or before `as_of` are considered, and only the set of
/// distinct dates matters: entry order and the number of same-day job entries
/// have no effect. The count starts at 1 for `as_of` itself and grows by one
/// for each directly preceding calendar day that was worked. The first gap
/// ends the walk.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::consecutive_days;
/// use overtime_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d: u32| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
/// let entries: Vec<TimeEntry> = [1, 2, 3, 5]
///     .iter()
///     .map(|&d| TimeEntry::new(format!("te_{d}"), "wkr_001", day(d), Decimal::from(8)))
///     .collect();
///
/// assert_eq!(consecutive_days(&entries, day(3)), 3);
/// assert_eq!(consecutive_days(&entries, day(5)), 1);
/// ```
pub fn consecutive_days(entries: &[TimeEntry], as_of: NaiveDate) -> u32 {
    let worked: BTreeSet<NaiveDate> = entries
        .iter()
        .map(|entry| entry.date)
        .filter(|date| *date <= as_of)
        .collect();

    consecutive_days_in(&worked, as_of)
}

/// Counts the consecutive worked days ending at `as_of` over a set of dates.
///
/// Dates after `as_of` are ignored. Used by the weekly allocator so the worked
/// date set is built once per week rather than once per day.
pub fn consecutive_days_in(worked: &BTreeSet<NaiveDate>, as_of: NaiveDate) -> u32 {
    let mut count = 1;
    let mut cursor = as_of;

    for &date in worked.range(..as_of).rev() {
        if cursor - date != Duration::days(1) {
            break;
        }
        count += 1;
        cursor = date;
    }

    count
}

/// Returns true if a streak position triggers the seventh-day escalation.
pub fn is_seventh_day(consecutive_day: u32) -> bool {
    consecutive_day >= SEVENTH_DAY_STREAK
}
