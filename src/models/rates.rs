//! Worker rate schedules.
//!
//! A [`RateSchedule`] holds a worker's regular hourly rate and optional explicit
//! overtime and double-time rates. Missing rates default to 1.5x and 2x of the
//! regular rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default overtime multiplier (150%).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default double-time multiplier (200%).
pub const DEFAULT_DOUBLE_TIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// A worker's hourly rate schedule.
///
/// # Example
///
/// ```
/// use overtime_engine::models::RateSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateSchedule::new(Decimal::from(30));
/// assert_eq!(rates.overtime_rate(), Decimal::from(45));
/// assert_eq!(rates.double_time_rate(), Decimal::from(60));
///
/// let union = RateSchedule {
///     regular_rate: Decimal::from(30),
///     overtime_rate: Some(Decimal::from_str("47.50").unwrap()),
///     double_time_rate: None,
/// };
/// assert_eq!(union.overtime_rate(), Decimal::from_str("47.50").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// The base hourly rate.
    pub regular_rate: Decimal,
    /// Explicit overtime rate, if it differs from 1.5x regular.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_rate: Option<Decimal>,
    /// Explicit double-time rate, if it differs from 2x regular.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_time_rate: Option<Decimal>,
}

impl RateSchedule {
    /// Creates a schedule with default overtime and double-time multipliers.
    pub fn new(regular_rate: Decimal) -> Self {
        Self {
            regular_rate,
            overtime_rate: None,
            double_time_rate: None,
        }
    }

    /// The effective overtime rate.
    pub fn overtime_rate(&self) -> Decimal {
        self.overtime_rate
            .unwrap_or(self.regular_rate * DEFAULT_OVERTIME_MULTIPLIER)
    }

    /// The effective double-time rate.
    pub fn double_time_rate(&self) -> Decimal {
        self.double_time_rate
            .unwrap_or(self.regular_rate * DEFAULT_DOUBLE_TIME_MULTIPLIER)
    }
}
