//! Core data models for the payroll engine.
//!
//! This module contains all the value objects produced and consumed by the
//! calculations. They are built fresh per call and never mutated afterwards.

mod audit;
mod bonus_result;
mod currency;
mod net_salary_result;
mod period;
mod tax_bracket;

pub use audit::AuditStep;
pub use bonus_result::BonusResult;
pub use currency::{
    ConversionDirection, ConversionResult, DollarQuote, QuoteVariation, VariationDirection,
};
pub use net_salary_result::{
    AppliedBracket, DeductionLine, IncomeTaxDetail, MandatoryDeductions, NetSalaryResult,
};
pub use period::{Semester, WorkPeriod};
pub use tax_bracket::{BracketTable, TaxBracket};
