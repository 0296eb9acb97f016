//! Gross-to-net salary calculation.
//!
//! This module applies the flat mandatory deductions and the progressive
//! income tax to a monthly gross salary and reports the full breakdown.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AppliedBracket, AuditStep, DeductionLine, IncomeTaxDetail, MandatoryDeductions,
    NetSalaryResult,
};

use super::income_tax::{evaluate_tax, resolve_bracket};
use super::rounding::round_money;

/// A flat deduction before rounding.
struct FlatDeduction {
    rule_id: &'static str,
    rule_name: &'static str,
    rate: Decimal,
    amount: Decimal,
}

impl FlatDeduction {
    fn new(rule_id: &'static str, rule_name: &'static str, gross: Decimal, rate: Decimal) -> Self {
        Self {
            rule_id,
            rule_name,
            rate,
            amount: gross * rate,
        }
    }

    fn line(&self) -> DeductionLine {
        DeductionLine {
            amount: round_money(self.amount),
            percentage: (self.rate * Decimal::ONE_HUNDRED).normalize(),
        }
    }

    fn audit_step(&self, step_number: u32, gross: Decimal) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: self.rule_id.to_string(),
            rule_name: self.rule_name.to_string(),
            input: serde_json::json!({
                "gross_salary": gross.normalize().to_string(),
                "rate": self.rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": round_money(self.amount).to_string()
            }),
            reasoning: format!(
                "${} x {} = ${}",
                gross.normalize(),
                self.rate.normalize(),
                round_money(self.amount)
            ),
        }
    }
}

/// Computes the net salary breakdown for a monthly gross salary.
///
/// Pension, PAMI and health insurance are withheld at their flat rates; union
/// dues only when `has_union` is set. Income tax is evaluated on the gross
/// salary minus `dependents_count` per-dependent deductions, floored at zero.
/// The income tax detail is populated only when some tax is due.
///
/// # Errors
///
/// - [`EngineError::Validation`] on `gross_salary` if it is not greater than zero.
/// - [`EngineError::Validation`] on `dependents_count` if it is negative.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::compute_net_salary;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/ar_2026").unwrap();
/// let result = compute_net_salary(Decimal::from(500_000), true, 0, loader.config()).unwrap();
/// assert_eq!(result.net_salary, Decimal::from(405_000));
/// ```
pub fn compute_net_salary(
    gross_salary: Decimal,
    has_union: bool,
    dependents_count: i32,
    config: &PayrollConfig,
) -> EngineResult<NetSalaryResult> {
    if gross_salary <= Decimal::ZERO {
        return Err(EngineError::validation(
            "gross_salary",
            "must be greater than zero",
        ));
    }
    let dependents = u32::try_from(dependents_count)
        .map_err(|_| EngineError::validation("dependents_count", "cannot be negative"))?;

    let rates = &config.deductions().mandatory;
    let union_rate = if has_union { rates.union } else { Decimal::ZERO };
    let flat = [
        FlatDeduction::new("pension", "Pension Contribution", gross_salary, rates.pension),
        FlatDeduction::new("pami", "PAMI Contribution", gross_salary, rates.pami),
        FlatDeduction::new(
            "health_insurance",
            "Health Insurance",
            gross_salary,
            rates.health_insurance,
        ),
        FlatDeduction::new("union", "Union Dues", gross_salary, union_rate),
    ];

    let mut audit_trace: Vec<AuditStep> = flat
        .iter()
        .zip(1..)
        .map(|(deduction, step_number)| deduction.audit_step(step_number, gross_salary))
        .collect();

    let table = config.bracket_table();
    let dependents_deduction = Decimal::from(dependents) * config.deductions().per_dependent;
    let taxable_salary = (gross_salary - dependents_deduction).max(Decimal::ZERO);
    let income_tax = evaluate_tax(taxable_salary, table);
    let bracket = resolve_bracket(taxable_salary, table);

    audit_trace.push(AuditStep {
        step_number: 5,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "dependents_count": dependents,
            "dependents_deduction": round_money(dependents_deduction).to_string(),
            "taxable_salary": round_money(taxable_salary).to_string()
        }),
        output: serde_json::json!({
            "income_tax": round_money(income_tax).to_string(),
            "bracket_from": bracket.map(|b| b.from.normalize().to_string())
        }),
        reasoning: match bracket {
            Some(b) => format!(
                "${} x {} - ${} = ${}",
                round_money(taxable_salary),
                b.rate.normalize(),
                b.deduction.normalize(),
                round_money(income_tax)
            ),
            None => format!(
                "Taxable salary ${} does not exceed the minimum taxable income",
                round_money(taxable_salary)
            ),
        },
    });

    let income_tax_detail = (income_tax > Decimal::ZERO).then(|| IncomeTaxDetail {
        taxable_salary: round_money(taxable_salary),
        dependents_deduction: round_money(dependents_deduction),
        applied_bracket: bracket.map(|b| AppliedBracket {
            from: b.from,
            to: b.to,
            rate: (b.rate * Decimal::ONE_HUNDRED).normalize(),
            deduction: b.deduction,
        }),
    });

    let flat_total: Decimal = flat.iter().map(|d| d.amount).sum();
    let total_deductions = flat_total + income_tax;
    let net_salary = gross_salary - total_deductions;
    let deductions_percentage = total_deductions / gross_salary * Decimal::ONE_HUNDRED;
    let net_percentage = net_salary / gross_salary * Decimal::ONE_HUNDRED;

    audit_trace.push(AuditStep {
        step_number: 6,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "total_deductions": round_money(total_deductions).to_string()
        }),
        output: serde_json::json!({
            "net_salary": round_money(net_salary).to_string(),
            "net_percentage": round_money(net_percentage).to_string()
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            gross_salary.normalize(),
            round_money(total_deductions),
            round_money(net_salary)
        ),
    });

    debug!(
        %gross_salary,
        has_union,
        dependents,
        income_tax = %round_money(income_tax),
        net_salary = %round_money(net_salary),
        "Net salary computed"
    );

    let [pension, pami, health_insurance, union] = flat;
    Ok(NetSalaryResult {
        gross_salary: round_money(gross_salary),
        has_union,
        dependents_count: dependents,
        mandatory_deductions: MandatoryDeductions {
            pension: pension.line(),
            pami: pami.line(),
            health_insurance: health_insurance.line(),
            union: union.line(),
            income_tax: round_money(income_tax),
            income_tax_detail,
            total: round_money(total_deductions),
        },
        total_deductions: round_money(total_deductions),
        net_salary: round_money(net_salary),
        deductions_percentage: round_money(deductions_percentage),
        net_percentage: round_money(net_percentage),
        pays_income_tax: income_tax > Decimal::ZERO,
        minimum_taxable_income: table.threshold(),
        audit_trace,
    })
}
