//! Request types for the overtime engine API.
//!
//! This module defines the JSON request structures for the `/weeks/calculate`
//! and `/days/allocate` endpoints and their conversion into domain types.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Break, ClockRecord, OvertimeSettings, RateSchedule, TimeEntry};

/// Request body for the `/weeks/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekCalculationRequest {
    /// The worker being calculated.
    pub worker: WorkerRequest,
    /// Settings override; the configured settings apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OvertimeSettings>,
    /// Any date within the week to calculate.
    pub week_of: NaiveDate,
    /// The worker's entries. Entries outside the week serve as streak history.
    #[serde(default)]
    pub entries: Vec<EntryRequest>,
}

/// Request body for the `/days/allocate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAllocationRequest {
    /// The worker being allocated.
    pub worker: WorkerRequest,
    /// Settings override; the configured settings apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OvertimeSettings>,
    /// The day the job entries were logged on.
    pub date: NaiveDate,
    /// Entries already recorded for the worker (the week and prior history).
    #[serde(default)]
    pub existing_entries: Vec<EntryRequest>,
    /// The newly submitted same-day job entries.
    pub job_entries: Vec<EntryRequest>,
    /// Independently supplied total the job entries must sum to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_total: Option<Decimal>,
}

/// Worker information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// Unique identifier for the worker.
    pub id: String,
    /// Rates override; the configured rate schedule applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateSchedule>,
}

/// A time entry in a request.
///
/// Either manual `hours` with a `date`, or `clock_in` and `clock_out` with
/// optional breaks. A clocked entry is dated by its clock-in day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// The job the time was logged against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// The day worked; required for manual entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Manually entered decimal hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// Clock-in time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<NaiveDateTime>,
    /// Clock-out time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks taken between clock-in and clock-out.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breaks: Vec<BreakRequest>,
}

/// Break information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRequest {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
    /// Whether the break is paid.
    #[serde(default)]
    pub is_paid: bool,
}

impl From<BreakRequest> for Break {
    fn from(req: BreakRequest) -> Self {
        Break {
            start_time: req.start_time,
            end_time: req.end_time,
            is_paid: req.is_paid,
        }
    }
}

impl EntryRequest {
    /// Converts the request entry into a [`TimeEntry`] for `worker_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if the entry has both or neither of manual hours
    /// and clock times, a manual entry has no date, only one clock time is
    /// given, the clock-out precedes the clock-in, or a supplied date differs
    /// from the clock-in day.
    pub fn into_time_entry(self, worker_id: &str) -> EngineResult<TimeEntry> {
        let invalid = |id: &str, message: &str| EngineError::InvalidEntry {
            entry_id: id.to_string(),
            message: message.to_string(),
        };

        let entry = match (self.hours, self.clock_in, self.clock_out) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(invalid(&self.id, "supply either hours or clock times, not both"));
            }
            (Some(hours), None, None) => {
                let date = self
                    .date
                    .ok_or_else(|| invalid(&self.id, "date is required with manual hours"))?;
                TimeEntry::new(self.id, worker_id, date, hours)
            }
            (None, Some(clock_in), Some(clock_out)) => {
                if clock_out < clock_in {
                    return Err(invalid(&self.id, "clock_out is before clock_in"));
                }
                if self.date.is_some_and(|date| date != clock_in.date()) {
                    return Err(invalid(&self.id, "date does not match the clock-in day"));
                }
                let record = ClockRecord {
                    clock_in,
                    clock_out,
                    breaks: self.breaks.into_iter().map(Into::into).collect(),
                };
                record.into_entry(self.id, worker_id, None)
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(invalid(&self.id, "both clock_in and clock_out are required"));
            }
            (None, None, None) => {
                return Err(invalid(&self.id, "either hours or clock_in/clock_out is required"));
            }
        };

        Ok(match self.job_id {
            Some(job_id) => entry.with_job(job_id),
            None => entry,
        })
    }
}

/// Converts a list of request entries, stopping at the first invalid one.
pub fn convert_entries(entries: Vec<EntryRequest>, worker_id: &str) -> EngineResult<Vec<TimeEntry>> {
    entries
        .into_iter()
        .map(|entry| entry.into_time_entry(worker_id))
        .collect()
}
