//! Daily hour categorization.
//!
//! Splits one day's hours into regular, overtime and double-time portions. The
//! seventh-day escalation takes precedence over the daily thresholds; with
//! daily thresholds disabled every hour is provisionally regular and the weekly
//! allocator alone promotes hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CategorizedHours, OvertimeSettings};

use super::rounding::round_hours;

/// Hours on a seventh consecutive day paid as overtime before the
/// seventh-day double-time tier starts.
pub const SEVENTH_DAY_DT_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Which rule produced a day's provisional split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyRule {
    /// Seventh consecutive day escalation.
    SeventhDayEscalation,
    /// Daily overtime/double-time thresholds.
    DailyThresholds,
    /// No daily rule; all hours provisionally regular.
    WeeklyOnly,
}

impl DailyRule {
    /// Stable identifier used in audit steps.
    pub fn rule_id(&self) -> &'static str {
        match self {
            DailyRule::SeventhDayEscalation => "seventh_day_escalation",
            DailyRule::DailyThresholds => "daily_thresholds",
            DailyRule::WeeklyOnly => "weekly_only",
        }
    }

    /// Human-readable rule name used in audit steps.
    pub fn rule_name(&self) -> &'static str {
        match self {
            DailyRule::SeventhDayEscalation => "Seventh Consecutive Day Escalation",
            DailyRule::DailyThresholds => "Daily Overtime Thresholds",
            DailyRule::WeeklyOnly => "Weekly Thresholds Only",
        }
    }
}

/// The provisional split for one day and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCategorization {
    /// The day's rounded total hours.
    pub total_hours: Decimal,
    /// The provisional category split.
    pub split: CategorizedHours,
    /// The rule that produced the split.
    pub rule: DailyRule,
}

/// Categorizes one day's raw hours.
///
/// The raw total is first rounded with the configured rounding policy, then:
///
/// 1. **Seventh-day escalation** (`is_seventh_day && seventh_day_ot`): the
///    first 8 hours are overtime; hours beyond 8 are double-time when
///    `seventh_day_dt` is enabled, otherwise overtime.
/// 2. **Daily thresholds** (`use_daily_ot`): hours up to `daily_ot_threshold`
///    are regular, the slice up to `daily_dt_threshold` is overtime, and the
///    rest is double-time.
/// 3. Otherwise every hour is provisionally regular.
///
/// The split always sums to the rounded total, even when the configured
/// thresholds are inverted.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::categorize_day;
/// use overtime_engine::models::OvertimeSettings;
/// use rust_decimal::Decimal;
///
/// let settings = OvertimeSettings::default(); // daily 8 / 12
///
/// let day = categorize_day(Decimal::from(14), &settings, false);
/// assert_eq!(day.split.regular, Decimal::from(8));
/// assert_eq!(day.split.overtime, Decimal::from(4));
/// assert_eq!(day.split.double_time, Decimal::from(2));
///
/// let seventh = categorize_day(Decimal::from(6), &settings, true);
/// assert_eq!(seventh.split.regular, Decimal::ZERO);
/// assert_eq!(seventh.split.overtime, Decimal::from(6));
/// ```
pub fn categorize_day(
    raw_hours: Decimal,
    settings: &OvertimeSettings,
    is_seventh_day: bool,
) -> DailyCategorization {
    let total_hours = round_hours(raw_hours, settings.rounding_interval, settings.rounding_type);

    let (split, rule) = if is_seventh_day && settings.seventh_day_ot {
        (
            seventh_day_split(total_hours, settings.seventh_day_dt),
            DailyRule::SeventhDayEscalation,
        )
    } else if settings.use_daily_ot {
        (
            threshold_split(
                total_hours,
                settings.daily_ot_threshold,
                settings.daily_dt_threshold,
            ),
            DailyRule::DailyThresholds,
        )
    } else {
        (CategorizedHours::all_regular(total_hours), DailyRule::WeeklyOnly)
    };

    DailyCategorization {
        total_hours,
        split,
        rule,
    }
}

fn seventh_day_split(hours: Decimal, with_double_time: bool) -> CategorizedHours {
    if !with_double_time {
        return CategorizedHours::new(Decimal::ZERO, hours, Decimal::ZERO);
    }

    let overtime = hours.min(SEVENTH_DAY_DT_THRESHOLD);
    CategorizedHours::new(Decimal::ZERO, overtime, hours - overtime)
}

fn threshold_split(hours: Decimal, ot_threshold: Decimal, dt_threshold: Decimal) -> CategorizedHours {
    let regular = hours.min(ot_threshold).max(Decimal::ZERO);
    let overtime = (hours.min(dt_threshold) - ot_threshold).max(Decimal::ZERO);
    let double_time = hours - regular - overtime;

    CategorizedHours::new(regular, overtime, double_time)
}
