//! Time entry and clock record models.
//!
//! A [`TimeEntry`] is the engine's input record: one worker, one calendar day,
//! a raw hour value and an optional job reference. A [`ClockRecord`] captures
//! clock-in/clock-out times with breaks and converts into a `TimeEntry`.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A break taken between clocking in and clocking out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
    /// Whether the break is paid (true) or unpaid (false).
    #[serde(default)]
    pub is_paid: bool,
}

impl Break {
    fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes().max(0)
    }
}

/// A raw clock-in/clock-out record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockRecord {
    /// When the worker clocked in.
    pub clock_in: NaiveDateTime,
    /// When the worker clocked out.
    pub clock_out: NaiveDateTime,
    /// Breaks taken in between.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl ClockRecord {
    /// Calculates the worked hours for the record.
    ///
    /// The span between clock-in and clock-out minus any unpaid breaks. Paid
    /// breaks are not subtracted. The result is never negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use overtime_engine::models::{Break, ClockRecord};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let record = ClockRecord {
    ///     clock_in: at("2026-03-02 07:00:00"),
    ///     clock_out: at("2026-03-02 15:30:00"),
    ///     breaks: vec![Break {
    ///         start_time: at("2026-03-02 12:00:00"),
    ///         end_time: at("2026-03-02 12:30:00"),
    ///         is_paid: false,
    ///     }],
    /// };
    /// assert_eq!(record.worked_hours(), Decimal::from(8));
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let total_minutes = (self.clock_out - self.clock_in).num_minutes();

        let unpaid_break_minutes: i64 = self
            .breaks
            .iter()
            .filter(|b| !b.is_paid)
            .map(Break::duration_minutes)
            .sum();

        let worked_minutes = (total_minutes - unpaid_break_minutes).max(0);

        Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
    }

    /// The calendar day the record is attributed to (the clock-in date).
    pub fn work_date(&self) -> NaiveDate {
        self.clock_in.date()
    }

    /// Converts the record into a [`TimeEntry`].
    pub fn into_entry(
        self,
        id: impl Into<String>,
        worker_id: impl Into<String>,
        job_id: Option<String>,
    ) -> TimeEntry {
        TimeEntry {
            id: id.into(),
            worker_id: worker_id.into(),
            job_id,
            date: self.work_date(),
            hours: self.worked_hours(),
        }
    }
}

/// One worker's raw hours against one calendar day.
///
/// Several entries may share the same `(worker_id, date)` when the worker logs
/// time against several jobs that day. The `job_id` is opaque to the engine.
///
/// # Example
///
/// ```
/// use overtime_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry::new(
///     "te_001",
///     "wkr_001",
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     Decimal::from(8),
/// )
/// .with_job("job_42");
///
/// assert_eq!(entry.job_id.as_deref(), Some("job_42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The worker who logged the time.
    pub worker_id: String,
    /// The job or task the time was logged against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// The calendar day worked.
    pub date: NaiveDate,
    /// Raw decimal hours.
    pub hours: Decimal,
}

impl TimeEntry {
    /// Creates an entry without a job reference.
    pub fn new(
        id: impl Into<String>,
        worker_id: impl Into<String>,
        date: NaiveDate,
        hours: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            worker_id: worker_id.into(),
            job_id: None,
            date,
            hours,
        }
    }

    /// Attaches a job reference.
    pub fn with_job(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }
}
