//! Calculation output models.
//!
//! This module contains the per-day [`CalculatedHours`], the per-week
//! [`WeeklyCalculation`], the per-job [`JobEntryAllocation`] and the audit
//! steps recording how each figure was reached.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours split into the three pay categories.
///
/// # Example
///
/// ```
/// use overtime_engine::models::CategorizedHours;
/// use rust_decimal::Decimal;
///
/// let split = CategorizedHours::new(Decimal::from(8), Decimal::from(2), Decimal::ZERO);
/// assert_eq!(split.total(), Decimal::from(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategorizedHours {
    /// Hours paid at the regular rate.
    pub regular: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime: Decimal,
    /// Hours paid at the double-time rate.
    pub double_time: Decimal,
}

impl CategorizedHours {
    /// Creates a split from its three components.
    pub fn new(regular: Decimal, overtime: Decimal, double_time: Decimal) -> Self {
        Self {
            regular,
            overtime,
            double_time,
        }
    }

    /// All hours regular.
    pub fn all_regular(hours: Decimal) -> Self {
        Self::new(hours, Decimal::ZERO, Decimal::ZERO)
    }

    /// Sum of the three categories.
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime + self.double_time
    }
}

/// The categorized hours for one worker on one day.
///
/// `regular_hours + overtime_hours + double_time_hours == total_hours` holds for
/// every record the engine produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatedHours {
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Hours paid at the double-time rate.
    pub double_time_hours: Decimal,
    /// The day's rounded raw hours.
    pub total_hours: Decimal,
    /// Position of the day in the worker's current streak of consecutive days (1-based).
    pub consecutive_day: u32,
    /// Whether the seventh-day escalation applied.
    ///
    /// True only when the streak reached seven days and `seventh_day_ot` is
    /// on. A seventh consecutive day processed with the flag off reports
    /// `consecutive_day = 7` and `is_seventh_day = false`.
    pub is_seventh_day: bool,
}

impl CalculatedHours {
    /// Builds a record from a category split.
    pub fn from_split(split: CategorizedHours, consecutive_day: u32, is_seventh_day: bool) -> Self {
        Self {
            regular_hours: split.regular,
            overtime_hours: split.overtime,
            double_time_hours: split.double_time,
            total_hours: split.total(),
            consecutive_day,
            is_seventh_day,
        }
    }

    /// The category split of this record.
    pub fn split(&self) -> CategorizedHours {
        CategorizedHours::new(self.regular_hours, self.overtime_hours, self.double_time_hours)
    }
}

/// A single step in the audit trail recording a categorization decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The day the rule was applied to.
    pub date: NaiveDate,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The categorized hours for one worker across one week.
///
/// `days` is ordered by date. The weekly aggregates equal the per-day sums.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyCalculation {
    /// Per-date category breakdown.
    pub days: BTreeMap<NaiveDate, CalculatedHours>,
    /// Total regular hours for the week.
    pub weekly_regular: Decimal,
    /// Total overtime hours for the week.
    pub weekly_overtime: Decimal,
    /// Total double-time hours for the week.
    pub weekly_double_time: Decimal,
    /// Total hours for the week.
    pub weekly_total: Decimal,
    /// The decisions taken for each day, in processing order.
    pub audit_steps: Vec<AuditStep>,
}

impl WeeklyCalculation {
    /// Returns the breakdown for a single day, if it was worked.
    pub fn day(&self, date: NaiveDate) -> Option<&CalculatedHours> {
        self.days.get(&date)
    }
}

/// One job entry's share of a day's categorized hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntryAllocation {
    /// The time entry this share belongs to.
    pub entry_id: String,
    /// The job the entry was logged against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// The entry's raw hours.
    pub raw_hours: Decimal,
    /// The entry's categorized share of the day.
    pub hours: CalculatedHours,
    /// Estimated pay for the entry's share (unrounded).
    pub estimated_pay: Decimal,
}

/// Pay totals for a week, split by category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyPaySummary {
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for double-time hours.
    pub double_time_pay: Decimal,
    /// Sum of the three.
    pub total_pay: Decimal,
}
