//! Net salary calculation result models.
//!
//! This module contains the [`NetSalaryResult`] type and the per-item
//! deduction structures that make up its breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// A flat-rate deduction applied to the gross salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DeductionLine;
/// use rust_decimal::Decimal;
///
/// let pension = DeductionLine {
///     amount: Decimal::from(55_000),
///     percentage: Decimal::from(11),
/// };
/// assert_eq!(pension.percentage, Decimal::from(11));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The amount deducted, rounded to two places.
    pub amount: Decimal,
    /// The rate applied, as a percentage of gross.
    pub percentage: Decimal,
}

/// The bracket an income tax amount was resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedBracket {
    /// Lower bound of the bracket.
    pub from: Decimal,
    /// Upper bound of the bracket; `None` for the top bracket.
    pub to: Option<Decimal>,
    /// The bracket rate as a percentage.
    pub rate: Decimal,
    /// The bracket's fixed deduction.
    pub deduction: Decimal,
}

/// How the income tax amount was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxDetail {
    /// Gross salary minus the dependents deduction, floored at zero.
    pub taxable_salary: Decimal,
    /// Total deducted for dependents.
    pub dependents_deduction: Decimal,
    /// The bracket the taxable salary fell into.
    pub applied_bracket: Option<AppliedBracket>,
}

/// Every deduction withheld from the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryDeductions {
    /// Retirement contribution (jubilación).
    pub pension: DeductionLine,
    /// PAMI contribution.
    pub pami: DeductionLine,
    /// Health insurance contribution (obra social).
    pub health_insurance: DeductionLine,
    /// Union dues; zero when the employee is not unionised.
    pub union: DeductionLine,
    /// Income tax (Ganancias, fourth category).
    pub income_tax: Decimal,
    /// Present only when income tax is due.
    pub income_tax_detail: Option<IncomeTaxDetail>,
    /// Sum of all deductions above.
    pub total: Decimal,
}

/// The complete gross-to-net salary breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryResult {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Whether union dues were withheld.
    pub has_union: bool,
    /// Number of dependents declared.
    pub dependents_count: u32,
    /// Per-item breakdown of the deductions.
    pub mandatory_deductions: MandatoryDeductions,
    /// Total withheld from the gross salary.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
    /// Total deductions as a percentage of gross.
    pub deductions_percentage: Decimal,
    /// Net salary as a percentage of gross.
    pub net_percentage: Decimal,
    /// True when any income tax is due.
    pub pays_income_tax: bool,
    /// Taxable amounts at or below this pay no income tax.
    pub minimum_taxable_income: Option<Decimal>,
    /// The rules applied, in order.
    pub audit_trace: Vec<AuditStep>,
}
