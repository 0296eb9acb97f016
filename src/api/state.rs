//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollConfig};

/// Shared application state.
///
/// Holds the payroll configuration, loaded once at startup and shared
/// read-only by every handler.
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

    /// Returns the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        self.config.config()
    }
}
