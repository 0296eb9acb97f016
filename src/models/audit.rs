//! Audit trail models.
//!
//! Every orchestrated calculation records the rules it applied as a sequence of
//! [`AuditStep`]s so a result can be explained line by line.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "pension".to_string(),
///     rule_name: "Pension Contribution".to_string(),
///     input: serde_json::json!({ "gross_salary": "500000" }),
///     output: serde_json::json!({ "amount": "55000" }),
///     reasoning: "$500000 x 0.11 = $55000".to_string(),
/// };
/// assert_eq!(step.rule_id, "pension");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
