//! Weekly hour allocation.
//!
//! Walks one worker's week in date order, categorizes each day, and then
//! re-derives each day's split against the running weekly total so that
//! weekly thresholds crossed mid-week promote regular hours into overtime or
//! double-time.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AuditStep, CalculatedHours, CategorizedHours, OvertimeSettings, TimeEntry,
    WeeklyCalculation, WorkWeek,
};

use super::consecutive_days::{consecutive_days_in, is_seventh_day};
use super::daily_categorizer::{DailyCategorization, categorize_day};

/// Which weekly boundary case reclassified a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyBranch {
    /// The day carried the week across the overtime threshold.
    CrossedOvertime,
    /// The week was already in overtime and the day crossed the double-time threshold.
    CrossedDoubleTime,
    /// The week was already in overtime and stayed below double-time.
    WithinOvertime,
    /// The week was already at or above the double-time threshold.
    AboveDoubleTime,
}

/// Re-derives a day's split against the hours already worked this week.
///
/// Returns `None` when the week stays below the overtime threshold after
/// this day, leaving the split unchanged. Hours already categorized as
/// double-time by the daily step stay double-time in every case.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{WeeklyBranch, apply_weekly_thresholds};
/// use overtime_engine::models::{CategorizedHours, OvertimeSettings};
/// use rust_decimal::Decimal;
///
/// let settings = OvertimeSettings::default(); // weekly 40 / 60
/// let day = CategorizedHours::all_regular(Decimal::from(4));
///
/// let (split, branch) = apply_weekly_thresholds(day, Decimal::from(38), &settings).unwrap();
/// assert_eq!(branch, WeeklyBranch::CrossedOvertime);
/// assert_eq!(split.regular, Decimal::from(2));
/// assert_eq!(split.overtime, Decimal::from(2));
/// ```
pub fn apply_weekly_thresholds(
    split: CategorizedHours,
    weekly_before: Decimal,
    settings: &OvertimeSettings,
) -> Option<(CategorizedHours, WeeklyBranch)> {
    let ot_threshold = settings.weekly_ot_threshold;
    let dt_threshold = settings.weekly_dt_threshold;
    let weekly_after = weekly_before + split.total();

    if weekly_before < ot_threshold && weekly_after > ot_threshold {
        let regular_allowance = ot_threshold - weekly_before;
        let promoted = (split.regular - regular_allowance).max(Decimal::ZERO);
        let reclassified = CategorizedHours::new(
            split.regular - promoted,
            split.overtime + promoted,
            split.double_time,
        );
        Some((reclassified, WeeklyBranch::CrossedOvertime))
    } else if weekly_before >= ot_threshold && weekly_before < dt_threshold {
        if weekly_after > dt_threshold {
            let to_overtime = split.regular.min(dt_threshold - weekly_before);
            let reclassified = CategorizedHours::new(
                Decimal::ZERO,
                split.overtime + to_overtime,
                split.double_time + split.regular - to_overtime,
            );
            Some((reclassified, WeeklyBranch::CrossedDoubleTime))
        } else {
            let reclassified = CategorizedHours::new(
                Decimal::ZERO,
                split.overtime + split.regular,
                split.double_time,
            );
            Some((reclassified, WeeklyBranch::WithinOvertime))
        }
    } else if weekly_before >= dt_threshold {
        let reclassified =
            CategorizedHours::new(Decimal::ZERO, Decimal::ZERO, split.total());
        Some((reclassified, WeeklyBranch::AboveDoubleTime))
    } else {
        None
    }
}

/// Allocates one worker's week into regular, overtime and double-time hours.
///
/// `entries` are the worker's entries for the week; the caller restricts them
/// to one calendar week (see [`allocate_week_for`]). `history` is the worker's
/// wider entry history used only to resolve consecutive-day streaks, so that a
/// streak begun in a previous week still triggers the seventh-day escalation.
/// Entries may appear in both lists.
///
/// Same-day entries are summed into one day total before categorization. Each
/// day is then processed in date order:
///
/// 1. resolve the consecutive-day count over `entries` and `history`;
/// 2. categorize the day (rounding, seventh-day, daily thresholds);
/// 3. unless the seventh-day escalation applied, re-derive the split against
///    the weekly running total when weekly rules are enabled;
/// 4. advance the running total by the day's rounded total.
///
/// The result does not depend on the order of `entries` or `history`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::allocate_week;
/// use overtime_engine::models::{OvertimeSettings, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = OvertimeSettings { use_daily_ot: false, ..OvertimeSettings::default() };
/// let day = |d: u32| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
///
/// let entries = vec![
///     TimeEntry::new("te_1", "wkr_001", day(2), Decimal::from(10)),
///     TimeEntry::new("te_2", "wkr_001", day(3), Decimal::from(10)),
///     TimeEntry::new("te_3", "wkr_001", day(4), Decimal::from(10)),
///     TimeEntry::new("te_4", "wkr_001", day(5), Decimal::from(8)),
///     TimeEntry::new("te_5", "wkr_001", day(6), Decimal::from(4)),
/// ];
///
/// let week = allocate_week(&entries, &[], &settings);
/// let friday = week.day(day(6)).unwrap();
///
/// assert_eq!(friday.regular_hours, Decimal::from(2));
/// assert_eq!(friday.overtime_hours, Decimal::from(2));
/// assert_eq!(week.weekly_total, Decimal::from(42));
/// ```
pub fn allocate_week(
    entries: &[TimeEntry],
    history: &[TimeEntry],
    settings: &OvertimeSettings,
) -> WeeklyCalculation {
    let mut daily_totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for entry in entries {
        *daily_totals.entry(entry.date).or_insert(Decimal::ZERO) += entry.hours;
    }

    let worked: BTreeSet<NaiveDate> = entries
        .iter()
        .chain(history)
        .map(|entry| entry.date)
        .collect();

    daily_totals
        .into_iter()
        .fold(WeekAccumulator::default(), |acc, (date, raw_hours)| {
            acc.push_day(date, raw_hours, &worked, settings)
        })
        .finish()
}

/// Allocates the week `week` out of a worker's full entry list.
///
/// Entries inside the week are allocated; the full list serves as history for
/// consecutive-day resolution.
pub fn allocate_week_for(
    week: &WorkWeek,
    all_entries: &[TimeEntry],
    settings: &OvertimeSettings,
) -> WeeklyCalculation {
    let in_week: Vec<TimeEntry> = all_entries
        .iter()
        .filter(|entry| week.contains_date(entry.date))
        .cloned()
        .collect();

    allocate_week(&in_week, all_entries, settings)
}

#[derive(Default)]
struct WeekAccumulator {
    weekly_total: Decimal,
    calculation: WeeklyCalculation,
}

impl WeekAccumulator {
    fn push_day(
        mut self,
        date: NaiveDate,
        raw_hours: Decimal,
        worked: &BTreeSet<NaiveDate>,
        settings: &OvertimeSettings,
    ) -> Self {
        let consecutive_day = consecutive_days_in(worked, date);
        let escalated = is_seventh_day(consecutive_day) && settings.seventh_day_ot;

        let daily = categorize_day(raw_hours, settings, escalated);
        self.record_daily_step(date, raw_hours, consecutive_day, &daily);

        let mut split = daily.split;
        if !escalated && settings.use_weekly_ot {
            if let Some((reclassified, branch)) =
                apply_weekly_thresholds(split, self.weekly_total, settings)
            {
                if reclassified != split {
                    self.record_weekly_step(date, split, reclassified, branch, settings);
                    split = reclassified;
                }
            }
        }

        self.weekly_total += daily.total_hours;

        let hours = CalculatedHours::from_split(split, consecutive_day, escalated);
        let week = &mut self.calculation;
        week.weekly_regular += hours.regular_hours;
        week.weekly_overtime += hours.overtime_hours;
        week.weekly_double_time += hours.double_time_hours;
        week.weekly_total += hours.total_hours;
        week.days.insert(date, hours);

        self
    }

    fn next_step_number(&self) -> u32 {
        self.calculation.audit_steps.len() as u32 + 1
    }

    fn record_daily_step(
        &mut self,
        date: NaiveDate,
        raw_hours: Decimal,
        consecutive_day: u32,
        daily: &DailyCategorization,
    ) {
        let split = daily.split;
        let reasoning = format!(
            "{} raw hours rounded to {} on consecutive day {}: {} regular, {} overtime, {} double-time",
            raw_hours.normalize(),
            daily.total_hours.normalize(),
            consecutive_day,
            split.regular.normalize(),
            split.overtime.normalize(),
            split.double_time.normalize()
        );

        let step = AuditStep {
            step_number: self.next_step_number(),
            rule_id: daily.rule.rule_id().to_string(),
            rule_name: daily.rule.rule_name().to_string(),
            date,
            input: serde_json::json!({
                "raw_hours": raw_hours.normalize().to_string(),
                "consecutive_day": consecutive_day
            }),
            output: split_json(daily.total_hours, split),
            reasoning,
        };
        self.calculation.audit_steps.push(step);
    }

    fn record_weekly_step(
        &mut self,
        date: NaiveDate,
        before: CategorizedHours,
        after: CategorizedHours,
        branch: WeeklyBranch,
        settings: &OvertimeSettings,
    ) {
        let reasoning = match branch {
            WeeklyBranch::CrossedOvertime => format!(
                "Week reaches {} hours, crossing the {} hour overtime threshold; {} regular hours promoted to overtime",
                (self.weekly_total + before.total()).normalize(),
                settings.weekly_ot_threshold.normalize(),
                (before.regular - after.regular).normalize()
            ),
            WeeklyBranch::CrossedDoubleTime => format!(
                "Week reaches {} hours, crossing the {} hour double-time threshold; regular hours split into overtime and double-time",
                (self.weekly_total + before.total()).normalize(),
                settings.weekly_dt_threshold.normalize()
            ),
            WeeklyBranch::WithinOvertime => format!(
                "Week already at {} hours, past the {} hour overtime threshold; regular hours become overtime",
                self.weekly_total.normalize(),
                settings.weekly_ot_threshold.normalize()
            ),
            WeeklyBranch::AboveDoubleTime => format!(
                "Week already at {} hours, past the {} hour double-time threshold; all hours become double-time",
                self.weekly_total.normalize(),
                settings.weekly_dt_threshold.normalize()
            ),
        };

        let step = AuditStep {
            step_number: self.next_step_number(),
            rule_id: "weekly_reclassification".to_string(),
            rule_name: "Weekly Threshold Reclassification".to_string(),
            date,
            input: serde_json::json!({
                "weekly_hours_before": self.weekly_total.normalize().to_string(),
                "weekly_ot_threshold": settings.weekly_ot_threshold.normalize().to_string(),
                "weekly_dt_threshold": settings.weekly_dt_threshold.normalize().to_string(),
                "branch": branch,
                "regular": before.regular.normalize().to_string(),
                "overtime": before.overtime.normalize().to_string(),
                "double_time": before.double_time.normalize().to_string()
            }),
            output: split_json(after.total(), after),
            reasoning,
        };
        self.calculation.audit_steps.push(step);
    }

    fn finish(self) -> WeeklyCalculation {
        self.calculation
    }
}

fn split_json(total: Decimal, split: CategorizedHours) -> serde_json::Value {
    serde_json::json!({
        "total_hours": total.normalize().to_string(),
        "regular": split.regular.normalize().to_string(),
        "overtime": split.overtime.normalize().to_string(),
        "double_time": split.double_time.normalize().to_string()
    })
}
