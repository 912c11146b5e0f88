//! Labor-Hours Allocation and Overtime Engine
//!
//! This crate turns raw clock-in/clock-out or manually entered time records into
//! categorized payable hours (regular / overtime / double-time), honoring daily and
//! weekly thresholds, the seventh-consecutive-day escalation, configurable rounding,
//! and proportional distribution of a day's categories across several job entries.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
