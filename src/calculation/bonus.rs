//! Bonus (aguinaldo) calculation.
//!
//! This module prorates the semi-annual bonus by the time worked inside the
//! semester that contains the calculation date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BonusSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BonusResult};

use super::calendar::elapsed;
use super::rounding::round_money;
use super::semester::resolve_semester;

/// Computes the prorated bonus for a calculation date.
///
/// The semester is resolved from `calculation_date`, the effective start is
/// the later of `entry_date` and the semester start, and the time worked up to
/// `calculation_date` is converted into decimal months with a fixed
/// `days_per_month` month length. The bonus is
/// `better_salary / salary_divisor x months_worked`.
///
/// The month length is an approximation: a full January 1 to June 30 run
/// yields 5 months 29 days, i.e. 5.97 months, and does not count as a full
/// semester.
///
/// # Errors
///
/// - [`EngineError::Validation`] on `better_salary` if it is not greater than zero.
/// - [`EngineError::InvalidRange`] if `entry_date` is after `calculation_date`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_bonus;
/// use payroll_engine::config::BonusSettings;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute_bonus(
///     Decimal::from(600_000),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     &BonusSettings::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.months_worked_decimal, Decimal::from_str("5.97").unwrap());
/// assert_eq!(result.bonus_amount, Decimal::from_str("298333.33").unwrap());
/// assert!(!result.full_semester_work);
/// ```
pub fn compute_bonus(
    better_salary: Decimal,
    entry_date: NaiveDate,
    calculation_date: NaiveDate,
    settings: &BonusSettings,
) -> EngineResult<BonusResult> {
    if better_salary <= Decimal::ZERO {
        return Err(EngineError::validation(
            "better_salary",
            "must be greater than zero",
        ));
    }
    if entry_date > calculation_date {
        return Err(EngineError::InvalidRange {
            start: entry_date,
            end: calculation_date,
        });
    }

    let mut audit_trace = Vec::with_capacity(4);

    let semester = resolve_semester(calculation_date)?;
    audit_trace.push(AuditStep {
        step_number: 1,
        rule_id: "semester_resolution".to_string(),
        rule_name: "Semester Resolution".to_string(),
        input: serde_json::json!({
            "calculation_date": calculation_date.to_string()
        }),
        output: serde_json::json!({
            "ordinal": semester.ordinal,
            "start": semester.start.to_string(),
            "end": semester.end.to_string()
        }),
        reasoning: format!(
            "{} falls in the {} semester ({} to {})",
            calculation_date,
            if semester.is_first() { "first" } else { "second" },
            semester.start,
            semester.end
        ),
    });

    let effective_start_date = entry_date.max(semester.start);
    audit_trace.push(AuditStep {
        step_number: 2,
        rule_id: "effective_start".to_string(),
        rule_name: "Effective Start Date".to_string(),
        input: serde_json::json!({
            "entry_date": entry_date.to_string(),
            "semester_start": semester.start.to_string()
        }),
        output: serde_json::json!({
            "effective_start_date": effective_start_date.to_string()
        }),
        reasoning: if entry_date > semester.start {
            format!("Entered on {} during the semester", entry_date)
        } else {
            format!("Employed before the semester began; counting from {}", semester.start)
        },
    });

    let work_period = elapsed(effective_start_date, calculation_date)?;
    let days_per_month = Decimal::from(settings.days_per_month);
    let months_worked = work_period.months_decimal(days_per_month);
    audit_trace.push(AuditStep {
        step_number: 3,
        rule_id: "time_worked".to_string(),
        rule_name: "Time Worked".to_string(),
        input: serde_json::json!({
            "from": effective_start_date.to_string(),
            "to": calculation_date.to_string(),
            "days_per_month": settings.days_per_month
        }),
        output: serde_json::json!({
            "months": work_period.months,
            "days": work_period.days,
            "months_decimal": round_money(months_worked).to_string()
        }),
        reasoning: format!(
            "{} months + {}/{} days = {} months",
            work_period.months,
            work_period.days,
            settings.days_per_month,
            round_money(months_worked)
        ),
    });

    let semester_months = Decimal::from(settings.semester_months);
    let monthly_share = better_salary / Decimal::from(settings.salary_divisor);
    let bonus_amount = monthly_share * months_worked;
    let proportion = months_worked / semester_months * Decimal::ONE_HUNDRED;
    let full_semester_work = months_worked >= semester_months;
    audit_trace.push(AuditStep {
        step_number: 4,
        rule_id: "bonus_proration".to_string(),
        rule_name: "Bonus Proration".to_string(),
        input: serde_json::json!({
            "better_salary": better_salary.normalize().to_string(),
            "salary_divisor": settings.salary_divisor,
            "months_worked": round_money(months_worked).to_string()
        }),
        output: serde_json::json!({
            "bonus_amount": round_money(bonus_amount).to_string(),
            "proportion": round_money(proportion).to_string(),
            "full_semester_work": full_semester_work
        }),
        reasoning: format!(
            "${} / {} x {} months = ${}",
            better_salary.normalize(),
            settings.salary_divisor,
            round_money(months_worked),
            round_money(bonus_amount)
        ),
    });

    debug!(
        %better_salary,
        %entry_date,
        %calculation_date,
        semester = semester.ordinal,
        months = work_period.months,
        days = work_period.days,
        bonus_amount = %round_money(bonus_amount),
        "Bonus computed"
    );

    Ok(BonusResult {
        better_salary,
        entry_date,
        calculation_date,
        semester,
        effective_start_date,
        work_period,
        months_worked_decimal: round_money(months_worked),
        proportion: round_money(proportion),
        bonus_amount: round_money(bonus_amount),
        full_semester_work,
        audit_trace,
    })
}
