//! Caller-side input validation.
//!
//! The allocation functions accept any input and never fail. Submissions are
//! checked here before they reach them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeEntry;

/// Largest difference between a job split and its day total still treated as equal.
pub const ALLOCATION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Checks a single worker's entries before allocation.
///
/// # Errors
///
/// - [`EngineError::NegativeHours`] if any entry has negative hours
/// - [`EngineError::MixedWorkers`] if entries belong to more than one worker
/// - [`EngineError::DailyHoursExceeded`] if a day's raw total exceeds `max_daily_hours`
///
/// Entries are checked in the order given; days are checked in date order.
pub fn validate_entries(entries: &[TimeEntry], max_daily_hours: Decimal) -> EngineResult<()> {
    let Some(first) = entries.first() else {
        return Ok(());
    };

    let mut daily_totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for entry in entries {
        if entry.hours < Decimal::ZERO {
            return Err(EngineError::NegativeHours {
                entry_id: entry.id.clone(),
                hours: entry.hours,
            });
        }
        if entry.worker_id != first.worker_id {
            return Err(EngineError::MixedWorkers {
                expected: first.worker_id.clone(),
                found: entry.worker_id.clone(),
            });
        }
        *daily_totals.entry(entry.date).or_insert(Decimal::ZERO) += entry.hours;
    }

    match daily_totals
        .into_iter()
        .find(|(_, hours)| *hours > max_daily_hours)
    {
        Some((date, hours)) => Err(EngineError::DailyHoursExceeded {
            date,
            hours,
            limit: max_daily_hours,
        }),
        None => Ok(()),
    }
}

/// Checks that a day's job entries sum to the day total being allocated.
///
/// # Errors
///
/// Returns [`EngineError::AllocationMismatch`] when the job entries differ from
/// `expected_total` by more than [`ALLOCATION_TOLERANCE`].
pub fn validate_job_split(
    date: NaiveDate,
    expected_total: Decimal,
    job_entries: &[TimeEntry],
) -> EngineResult<()> {
    let actual: Decimal = job_entries.iter().map(|entry| entry.hours).sum();

    if (actual - expected_total).abs() > ALLOCATION_TOLERANCE {
        return Err(EngineError::AllocationMismatch {
            date,
            expected: expected_total,
            actual,
        });
    }

    Ok(())
}
