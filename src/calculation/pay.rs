//! Pay calculation.
//!
//! Prices categorized hours against a worker's rates. Results are left
//! unrounded; currency rounding is a presentation concern.

use rust_decimal::Decimal;

use crate::models::{
    CalculatedHours, DEFAULT_DOUBLE_TIME_MULTIPLIER, DEFAULT_OVERTIME_MULTIPLIER, RateSchedule,
    WeeklyCalculation, WeeklyPaySummary,
};

/// Calculates the pay for one set of categorized hours.
///
/// # Arguments
///
/// * `hours` - The categorized hours to price
/// * `regular_rate` - The base hourly rate
/// * `overtime_rate` - Explicit overtime rate; defaults to 1.5x `regular_rate`
/// * `double_time_rate` - Explicit double-time rate; defaults to 2x `regular_rate`
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::calculate_pay;
/// use overtime_engine::models::{CalculatedHours, CategorizedHours};
/// use rust_decimal::Decimal;
///
/// let hours = CalculatedHours::from_split(
///     CategorizedHours::new(Decimal::from(8), Decimal::from(4), Decimal::from(2)),
///     1,
///     false,
/// );
///
/// // 8 x 20 + 4 x 30 + 2 x 40
/// let pay = calculate_pay(&hours, Decimal::from(20), None, None);
/// assert_eq!(pay, Decimal::from(360));
/// ```
pub fn calculate_pay(
    hours: &CalculatedHours,
    regular_rate: Decimal,
    overtime_rate: Option<Decimal>,
    double_time_rate: Option<Decimal>,
) -> Decimal {
    let overtime_rate = overtime_rate.unwrap_or(regular_rate * DEFAULT_OVERTIME_MULTIPLIER);
    let double_time_rate =
        double_time_rate.unwrap_or(regular_rate * DEFAULT_DOUBLE_TIME_MULTIPLIER);

    hours.regular_hours * regular_rate
        + hours.overtime_hours * overtime_rate
        + hours.double_time_hours * double_time_rate
}

impl RateSchedule {
    /// Prices categorized hours against this schedule.
    pub fn pay_for(&self, hours: &CalculatedHours) -> Decimal {
        calculate_pay(
            hours,
            self.regular_rate,
            self.overtime_rate,
            self.double_time_rate,
        )
    }
}

/// Totals a week's pay by category.
pub fn summarize_week_pay(week: &WeeklyCalculation, rates: &RateSchedule) -> WeeklyPaySummary {
    let regular_pay = week.weekly_regular * rates.regular_rate;
    let overtime_pay = week.weekly_overtime * rates.overtime_rate();
    let double_time_pay = week.weekly_double_time * rates.double_time_rate();

    WeeklyPaySummary {
        regular_pay,
        overtime_pay,
        double_time_pay,
        total_pay: regular_pay + overtime_pay + double_time_pay,
    }
}
