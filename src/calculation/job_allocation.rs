//! Multi-job same-day allocation.
//!
//! Distributes a day's finalized category split across the job entries logged
//! that day, in proportion to each entry's raw hours.

use rust_decimal::Decimal;

use crate::models::{CalculatedHours, CategorizedHours, JobEntryAllocation, RateSchedule, TimeEntry};

/// Splits a finalized day across its job entries.
///
/// Each entry receives `entry.hours / raw_total` of every category, where
/// `raw_total` is the sum of the submitted job entries' raw hours. Callers
/// guarantee (see [`validate_job_split`](super::validate_job_split)) that the
/// job entries sum to the day's hours, so this is the day's total; using the
/// raw sum keeps the per-entry categories summing to the day's categories
/// even when rounding moved the day total.
///
/// When the day total or the raw total is zero every entry receives zero hours
/// and zero pay. The streak position and seventh-day flag are copied from the
/// day. No plausibility bound is checked here.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::allocate_day;
/// use overtime_engine::models::{CalculatedHours, CategorizedHours, RateSchedule, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let day = CalculatedHours::from_split(
///     CategorizedHours::new(Decimal::from(8), Decimal::from(2), Decimal::ZERO),
///     1,
///     false,
/// );
/// let jobs = vec![
///     TimeEntry::new("te_a", "wkr_001", date, Decimal::from(6)).with_job("job_kitchen"),
///     TimeEntry::new("te_b", "wkr_001", date, Decimal::from(4)).with_job("job_garage"),
/// ];
///
/// let allocations = allocate_day(&day, &jobs, &RateSchedule::new(Decimal::from(20)));
///
/// assert_eq!(allocations[0].hours.regular_hours, Decimal::from_str("4.8").unwrap());
/// assert_eq!(allocations[0].hours.overtime_hours, Decimal::from_str("1.2").unwrap());
/// assert_eq!(allocations[1].hours.regular_hours, Decimal::from_str("3.2").unwrap());
/// assert_eq!(allocations[1].hours.overtime_hours, Decimal::from_str("0.8").unwrap());
/// ```
pub fn allocate_day(
    day: &CalculatedHours,
    jobs: &[TimeEntry],
    rates: &RateSchedule,
) -> Vec<JobEntryAllocation> {
    let raw_total: Decimal = jobs.iter().map(|job| job.hours).sum();
    let allocatable = !day.total_hours.is_zero() && !raw_total.is_zero();

    jobs.iter()
        .map(|job| {
            let proportion = if allocatable {
                job.hours / raw_total
            } else {
                Decimal::ZERO
            };

            let split = CategorizedHours::new(
                day.regular_hours * proportion,
                day.overtime_hours * proportion,
                day.double_time_hours * proportion,
            );
            let hours = CalculatedHours::from_split(split, day.consecutive_day, day.is_seventh_day);
            let estimated_pay = rates.pay_for(&hours);

            JobEntryAllocation {
                entry_id: job.id.clone(),
                job_id: job.job_id.clone(),
                raw_hours: job.hours,
                hours,
                estimated_pay,
            }
        })
        .collect()
}
