//! Work week model.
//!
//! The engine does not bound a week itself: callers use [`WorkWeek`] to pick the
//! entries that belong to one calendar week before handing them to the weekly
//! allocator.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A seven-day work week, inclusive of both ends.
///
/// # Example
///
/// ```
/// use overtime_engine::models::WorkWeek;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2026-03-04 is a Wednesday
/// let week = WorkWeek::containing(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(), Weekday::Mon);
///
/// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// assert_eq!(week.end_date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkWeek {
    /// The first day of the week (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the week (inclusive).
    pub end_date: NaiveDate,
}

impl WorkWeek {
    /// Returns the week containing `date`, where weeks begin on `starts_on`.
    pub fn containing(date: NaiveDate, starts_on: Weekday) -> Self {
        let offset = (date.weekday().num_days_from_monday() + 7
            - starts_on.num_days_from_monday())
            % 7;
        let start_date = date - Duration::days(i64::from(offset));

        Self {
            start_date,
            end_date: start_date + Duration::days(6),
        }
    }

    /// Checks if a given date falls within this week (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::models::WorkWeek;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let week = WorkWeek::containing(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), Weekday::Mon);
    ///
    /// assert!(week.contains_date(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())); // start
    /// assert!(week.contains_date(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap())); // end
    /// assert!(!week.contains_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())); // before
    /// assert!(!week.contains_date(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
