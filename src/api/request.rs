//! Request types for the payroll engine API.
//!
//! This module defines the JSON request bodies accepted by each endpoint.
//! Dates are ISO-8601 calendar dates (`YYYY-MM-DD`); amounts may be sent as
//! JSON strings or numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ConversionDirection, DollarQuote};

/// Request body for the `/bonus` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRequest {
    /// The best monthly salary of the semester.
    pub better_salary: Decimal,
    /// The date the employee started working.
    pub entry_date: NaiveDate,
    /// The date to calculate the bonus for.
    pub calculation_date: NaiveDate,
}

/// Request body for the `/net-salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetSalaryRequest {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Whether union dues are withheld.
    #[serde(default = "default_has_union")]
    pub has_union: bool,
    /// Number of dependents declared for income tax.
    #[serde(default)]
    pub dependents_count: i32,
}

fn default_has_union() -> bool {
    true
}

/// Request body for the `/currency/convert` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// The amount to convert.
    pub amount: Decimal,
    /// Which way to convert.
    pub direction: ConversionDirection,
    /// The quote to convert with.
    pub quote: DollarQuote,
}

/// Request body for the `/currency/variation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationRequest {
    /// The earlier quote.
    pub previous: Decimal,
    /// The latest quote.
    pub current: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bonus_request() {
        let json = r#"{
            "better_salary": "600000",
            "entry_date": "2024-01-01",
            "calculation_date": "2024-06-30"
        }"#;

        let request: BonusRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.better_salary, Decimal::from(600_000));
        assert_eq!(
            request.entry_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            request.calculation_date,
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        let json = r#"{
            "better_salary": "600000",
            "entry_date": "2024-02-30",
            "calculation_date": "2024-06-30"
        }"#;

        assert!(serde_json::from_str::<BonusRequest>(json).is_err());
    }

    #[test]
    fn test_net_salary_request_defaults() {
        let request: NetSalaryRequest =
            serde_json::from_str(r#"{ "gross_salary": "500000" }"#).unwrap();
        assert!(request.has_union);
        assert_eq!(request.dependents_count, 0);
    }

    #[test]
    fn test_net_salary_request_accepts_negative_dependents_for_validation() {
        let request: NetSalaryRequest = serde_json::from_str(
            r#"{ "gross_salary": "500000", "has_union": false, "dependents_count": -2 }"#,
        )
        .unwrap();
        assert!(!request.has_union);
        assert_eq!(request.dependents_count, -2);
    }

    #[test]
    fn test_deserialize_conversion_request() {
        let json = r#"{
            "amount": "10000",
            "direction": "ars_to_usd",
            "quote": { "house": "oficial", "buy": "1400", "sell": "1450" }
        }"#;

        let request: ConversionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.direction, ConversionDirection::ArsToUsd);
        assert_eq!(request.quote.house, "oficial");
    }
}
