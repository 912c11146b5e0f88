//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading overtime
//! settings and rate schedules from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimeSettings, RateSchedule};

use super::types::{EngineConfig, OvertimeConfig, RateConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── overtime.yaml        # Thresholds, rounding, week start, daily bound
/// └── rates/
///     └── 2026-01-01.yaml  # Rate schedules effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default")?;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let rates = loader.get_rate_schedule("wkr_001", date)?;
/// println!("Regular rate: ${}", rates.regular_rate);
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if `overtime.yaml` or the `rates` directory is missing,
    ///   or the directory holds no rate files
    /// - `ConfigParseError` if any file contains invalid YAML or invalid values
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let overtime_path = path.join("overtime.yaml");
        let overtime = Self::load_yaml::<OvertimeConfig>(&overtime_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        debug!(
            config_dir = %path.display(),
            rate_files = rates.len(),
            week_starts_on = %overtime.week_starts_on,
            "Loaded overtime configuration"
        );

        Ok(Self {
            config: EngineConfig::new(overtime, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let parsed = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %path_str, "Loaded configuration file");
        Ok(parsed)
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                rates.push(Self::load_yaml::<RateConfig>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the overtime configuration from `overtime.yaml`.
    pub fn overtime(&self) -> &OvertimeConfig {
        self.config.overtime()
    }

    /// Returns the configured overtime settings.
    pub fn settings(&self) -> &OvertimeSettings {
        &self.config.overtime().settings
    }

    /// Gets a worker's rate schedule on a given date.
    ///
    /// Uses the most recent rate file effective on or before `date`: the
    /// worker's own schedule if listed, otherwise that file's default.
    ///
    /// # Errors
    ///
    /// Returns `RateNotFound` if no rate file is effective on `date`, or the
    /// effective file has neither an entry for the worker nor a default.
    pub fn get_rate_schedule(&self, worker_id: &str, date: NaiveDate) -> EngineResult<&RateSchedule> {
        self.config
            .rates_effective_on(date)
            .and_then(|rc| rc.schedule_for(worker_id))
            .ok_or_else(|| EngineError::RateNotFound {
                worker_id: worker_id.to_string(),
                date,
            })
    }
}
