//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configurations from YAML
//! files: flat deduction rates, the income tax bracket table, and the bonus
//! proration settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ar_2026").unwrap();
//! println!("Loaded tables: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BonusSettings, DeductionsConfig, IncomeTaxConfig, MandatoryRates, PayrollConfig,
    PayrollMetadata,
};
