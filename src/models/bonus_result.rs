//! Bonus (aguinaldo) calculation result model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, Semester, WorkPeriod};

/// The complete result of a prorated bonus calculation.
///
/// Monetary and ratio fields are rounded to two decimals; `full_semester_work`
/// is derived from the unrounded month count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusResult {
    /// The best monthly salary of the semester, as supplied.
    pub better_salary: Decimal,
    /// The date the employee started working.
    pub entry_date: NaiveDate,
    /// The date the bonus is calculated for.
    pub calculation_date: NaiveDate,
    /// The semester enclosing the calculation date.
    pub semester: Semester,
    /// The later of the entry date and the semester start.
    pub effective_start_date: NaiveDate,
    /// Time worked between the effective start and the calculation date.
    pub work_period: WorkPeriod,
    /// Months worked as a decimal, rounded to two places.
    pub months_worked_decimal: Decimal,
    /// Percentage of the semester worked, rounded to two places.
    pub proportion: Decimal,
    /// The prorated bonus, rounded to two places.
    pub bonus_amount: Decimal,
    /// True when the whole semester has been worked.
    pub full_semester_work: bool,
    /// The rules applied, in order.
    pub audit_trace: Vec<AuditStep>,
}

impl BonusResult {
    /// Whole months worked.
    pub fn months_worked(&self) -> u32 {
        self.work_period.months
    }

    /// Remainder days worked after the whole months.
    pub fn days_worked(&self) -> u32 {
        self.work_period.days
    }
}
