//! Configuration types for payroll calculations.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PayrollConfig`] they are assembled into.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{BracketTable, TaxBracket};

/// Metadata about the configuration set.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// Short identifier (e.g., "AR-2026").
    pub code: String,
    /// The human-readable name of the configuration.
    pub name: String,
    /// The tax year the tables apply to.
    pub tax_year: i32,
    /// ISO code of the currency amounts are expressed in.
    pub currency: String,
}

/// Flat rates withheld from the gross salary, as fractions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MandatoryRates {
    /// Retirement contribution (jubilación).
    pub pension: Decimal,
    /// PAMI contribution.
    pub pami: Decimal,
    /// Health insurance contribution (obra social).
    pub health_insurance: Decimal,
    /// Union dues, withheld only for unionised employees.
    pub union: Decimal,
}

/// Deductions configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeductionsConfig {
    /// Flat mandatory rates.
    pub mandatory: MandatoryRates,
    /// Amount subtracted from the taxable base per dependent.
    pub per_dependent: Decimal,
}

/// Income tax configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// Brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// Bonus proration settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BonusSettings {
    /// Months in a semester; working this many months earns the full bonus.
    pub semester_months: u32,
    /// Day count used to turn remainder days into a month fraction.
    pub days_per_month: u32,
    /// The better salary is divided by this to get the per-month bonus.
    pub salary_divisor: u32,
}

impl Default for BonusSettings {
    fn default() -> Self {
        Self {
            semester_months: 6,
            days_per_month: 30,
            salary_divisor: 12,
        }
    }
}

/// The complete, validated payroll configuration.
///
/// Built once and shared read-only; no calculation mutates it.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    deductions: DeductionsConfig,
    income_tax: BracketTable,
    bonus: BonusSettings,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// Fails with [`EngineError::InvalidConfig`] if a rate falls outside
    /// `[0, 1]`, the per-dependent deduction is negative, or a bonus setting
    /// is zero.
    pub fn new(
        metadata: PayrollMetadata,
        deductions: DeductionsConfig,
        income_tax: BracketTable,
        bonus: BonusSettings,
    ) -> EngineResult<Self> {
        let rates = &deductions.mandatory;
        for (name, rate) in [
            ("pension", rates.pension),
            ("pami", rates.pami),
            ("health_insurance", rates.health_insurance),
            ("union", rates.union),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} rate {} is outside [0, 1]", name, rate),
                });
            }
        }

        if deductions.per_dependent < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "per_dependent deduction {} is negative",
                    deductions.per_dependent
                ),
            });
        }

        if bonus.semester_months == 0 || bonus.days_per_month == 0 || bonus.salary_divisor == 0 {
            return Err(EngineError::InvalidConfig {
                message: "bonus settings must all be greater than zero".to_string(),
            });
        }

        Ok(Self {
            metadata,
            deductions,
            income_tax,
            bonus,
        })
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the deduction rates.
    pub fn deductions(&self) -> &DeductionsConfig {
        &self.deductions
    }

    /// Returns the income tax bracket table.
    pub fn bracket_table(&self) -> &BracketTable {
        &self.income_tax
    }

    /// Returns the bonus proration settings.
    pub fn bonus(&self) -> &BonusSettings {
        &self.bonus
    }
}
