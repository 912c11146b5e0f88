//! Core data models for the overtime engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculated_hours;
mod rates;
mod settings;
mod time_entry;
mod work_week;

pub use calculated_hours::{
    AuditStep, CalculatedHours, CategorizedHours, JobEntryAllocation, WeeklyCalculation,
    WeeklyPaySummary,
};
pub use rates::{DEFAULT_DOUBLE_TIME_MULTIPLIER, DEFAULT_OVERTIME_MULTIPLIER, RateSchedule};
pub use settings::{OvertimeSettings, RoundingType};
pub use time_entry::{Break, ClockRecord, TimeEntry};
pub use work_week::WorkWeek;
