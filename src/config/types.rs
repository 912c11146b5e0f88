//! Configuration types for overtime calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{OvertimeSettings, RateSchedule};

/// Contents of `overtime.yaml`.
///
/// Every field is optional. Missing settings fall back to
/// [`OvertimeSettings::default`], the week starts on Monday, and a worker-day
/// may carry up to 24 raw hours.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OvertimeConfig {
    /// Thresholds, switches and rounding applied to every calculation.
    pub settings: OvertimeSettings,
    /// The first day of the work week.
    pub week_starts_on: Weekday,
    /// Plausibility bound on a worker's raw hours for one day.
    pub max_daily_hours: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            settings: OvertimeSettings::default(),
            week_starts_on: Weekday::Mon,
            max_daily_hours: Decimal::from(24),
        }
    }
}

/// Rate schedules effective from a given date (one `rates/*.yaml` file).
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Schedule used for workers without their own entry.
    #[serde(default)]
    pub default: Option<RateSchedule>,
    /// Per-worker schedules keyed by worker ID.
    #[serde(default)]
    pub workers: HashMap<String, RateSchedule>,
}

impl RateConfig {
    /// The schedule for a worker, falling back to the file's default.
    pub fn schedule_for(&self, worker_id: &str) -> Option<&RateSchedule> {
        self.workers.get(worker_id).or(self.default.as_ref())
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    overtime: OvertimeConfig,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl EngineConfig {
    /// Creates a new EngineConfig, sorting the rate files by effective date.
    pub fn new(overtime: OvertimeConfig, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            overtime,
            rates: sorted_rates,
        }
    }

    /// Returns the overtime configuration.
    pub fn overtime(&self) -> &OvertimeConfig {
        &self.overtime
    }

    /// Returns all rate configurations, oldest first.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }

    /// Returns the most recent rate configuration effective on or before `date`.
    pub fn rates_effective_on(&self, date: NaiveDate) -> Option<&RateConfig> {
        self.rates.iter().rev().find(|rc| rc.effective_date <= date)
    }
}
