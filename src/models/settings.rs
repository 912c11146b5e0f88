//! Overtime settings and rounding configuration.
//!
//! This module defines the [`OvertimeSettings`] consumed by every calculation and
//! the [`RoundingType`] used to snap raw hours to a configured interval.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How raw hours are snapped to the rounding interval.
///
/// # Example
///
/// ```
/// use overtime_engine::models::RoundingType;
///
/// let rounding: RoundingType = serde_json::from_str("\"up\"").unwrap();
/// assert_eq!(rounding, RoundingType::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingType {
    /// Round half-up to the nearest interval multiple.
    #[default]
    Nearest,
    /// Ceiling to the next interval multiple.
    Up,
    /// Floor to the previous interval multiple.
    Down,
}

/// Thresholds and switches controlling how hours are categorized.
///
/// Loaded once per calculation and never mutated by the engine. The engine does
/// not enforce `daily_ot_threshold < daily_dt_threshold` or
/// `weekly_ot_threshold < weekly_dt_threshold`; when violated it still produces
/// well-formed, conserving results.
///
/// Every field is optional when deserializing and falls back to
/// [`OvertimeSettings::default`].
///
/// # Example
///
/// ```
/// use overtime_engine::models::{OvertimeSettings, RoundingType};
///
/// let settings: OvertimeSettings = serde_json::from_str(
///     r#"{ "use_weekly_ot": false, "rounding_interval": 15 }"#,
/// ).unwrap();
///
/// assert!(!settings.use_weekly_ot);
/// assert!(settings.use_daily_ot);
/// assert_eq!(settings.rounding_interval, 15);
/// assert_eq!(settings.rounding_type, RoundingType::Nearest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeSettings {
    /// Hours per day before overtime.
    pub daily_ot_threshold: Decimal,
    /// Hours per day before double-time.
    pub daily_dt_threshold: Decimal,
    /// Cumulative hours per week before overtime.
    pub weekly_ot_threshold: Decimal,
    /// Cumulative hours per week before double-time.
    pub weekly_dt_threshold: Decimal,
    /// Enables the seventh-consecutive-day escalation.
    pub seventh_day_ot: bool,
    /// Gives the seventh-day escalation its own double-time tier.
    pub seventh_day_dt: bool,
    /// Applies the daily thresholds.
    pub use_daily_ot: bool,
    /// Applies the weekly thresholds.
    pub use_weekly_ot: bool,
    /// Rounding interval in minutes; `0` disables rounding.
    pub rounding_interval: u32,
    /// Rounding direction.
    pub rounding_type: RoundingType,
}

impl Default for OvertimeSettings {
    fn default() -> Self {
        Self {
            daily_ot_threshold: Decimal::from(8),
            daily_dt_threshold: Decimal::from(12),
            weekly_ot_threshold: Decimal::from(40),
            weekly_dt_threshold: Decimal::from(60),
            seventh_day_ot: true,
            seventh_day_dt: true,
            use_daily_ot: true,
            use_weekly_ot: true,
            rounding_interval: 0,
            rounding_type: RoundingType::Nearest,
        }
    }
}
