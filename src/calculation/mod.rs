//! Calculation logic for the overtime engine.
//!
//! This module contains the allocation pipeline: rounding raw hours,
//! resolving consecutive-day streaks, categorizing each day, reclassifying
//! days against weekly thresholds, pricing the result, and splitting a day's
//! categories across same-day job entries. It also holds the caller-side
//! validation run before entries reach the pipeline.
//!
//! Every function here is pure and total: no I/O, no logging, and the same
//! input always yields the same output.

mod consecutive_days;
mod daily_categorizer;
mod job_allocation;
mod pay;
mod rounding;
mod validation;
mod weekly_allocator;

pub use consecutive_days::{
    SEVENTH_DAY_STREAK, consecutive_days, consecutive_days_in, is_seventh_day,
};
pub use daily_categorizer::{
    DailyCategorization, DailyRule, SEVENTH_DAY_DT_THRESHOLD, categorize_day,
};
pub use job_allocation::allocate_day;
pub use pay::{calculate_pay, summarize_week_pay};
pub use rounding::round_hours;
pub use validation::{ALLOCATION_TOLERANCE, validate_entries, validate_job_split};
pub use weekly_allocator::{
    WeeklyBranch, allocate_week, allocate_week_for, apply_weekly_thresholds,
};
