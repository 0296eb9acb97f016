//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::BracketTable;

use super::types::{
    BonusSettings, DeductionsConfig, IncomeTaxConfig, PayrollConfig, PayrollMetadata,
};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and exposes the resulting [`PayrollConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ar_2026/
/// ├── metadata.yaml    # Code, name, tax year and currency
/// ├── deductions.yaml  # Flat mandatory rates and per-dependent deduction
/// ├── income_tax.yaml  # Progressive income tax brackets
/// └── bonus.yaml       # Aguinaldo proration settings
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ar_2026").unwrap();
/// println!("Loaded tables: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ar_2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The bracket table or rates break their invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("metadata.yaml"))?;
        let deductions = Self::load_yaml::<DeductionsConfig>(&path.join("deductions.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxConfig>(&path.join("income_tax.yaml"))?;
        let bonus = Self::load_yaml::<BonusSettings>(&path.join("bonus.yaml"))?;

        let table = BracketTable::new(income_tax.brackets)?;
        let config = PayrollConfig::new(metadata, deductions, table, bonus)?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, e.g. an alternative tax year.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }
}
