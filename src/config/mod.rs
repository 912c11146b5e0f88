//! Configuration loading and management for the overtime engine.
//!
//! This module loads the overtime thresholds, week boundaries and worker
//! rate schedules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Weekly overtime after {} hours", config.settings().weekly_ot_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, OvertimeConfig, RateConfig};
