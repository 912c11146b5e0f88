//! Application state for the overtime engine API.

use std::path::Path;
use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the loaded overtime settings and rate schedules. Handlers only read
/// it; a request's settings or rates override never touches the shared copy.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Loads the configuration directory and wraps it in application state.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> EngineResult<Self> {
        ConfigLoader::load(config_dir).map(Self::new)
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
