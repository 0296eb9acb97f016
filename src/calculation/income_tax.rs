//! Progressive income tax evaluation.
//!
//! This module resolves a taxable amount against a [`BracketTable`] and
//! applies the bracket's `amount x rate - deduction` formula.

use rust_decimal::Decimal;

use crate::models::{BracketTable, TaxBracket};

/// Finds the bracket a taxable amount is taxed in.
///
/// Returns `None` when the amount is at or below the table's threshold, i.e.
/// when no tax is due.
pub fn resolve_bracket(taxable_amount: Decimal, table: &BracketTable) -> Option<&TaxBracket> {
    match table.threshold() {
        Some(threshold) if taxable_amount > threshold => table.find(taxable_amount),
        _ => None,
    }
}

/// Evaluates the income tax for a taxable amount.
///
/// Amounts at or below the threshold pay nothing. Above it, the bracket with
/// `from <= amount < to` is applied (the last bracket has no upper limit) and
/// the result is clamped at zero. The result is never negative and, because
/// every table is continuous at its boundaries, never jumps when an amount
/// crosses into the next bracket.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::evaluate_tax;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/ar_2026").unwrap();
/// let tax = evaluate_tax(Decimal::from(5_000_000), loader.config().bracket_table());
/// assert_eq!(tax, Decimal::from(142_000));
/// ```
pub fn evaluate_tax(taxable_amount: Decimal, table: &BracketTable) -> Decimal {
    resolve_bracket(taxable_amount, table)
        .map(|bracket| bracket.raw_tax(taxable_amount).max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table() -> BracketTable {
        ConfigLoader::load("./config/ar_2026")
            .unwrap()
            .config()
            .bracket_table()
            .clone()
    }

    #[test]
    fn test_zero_below_threshold() {
        let table = table();
        assert_eq!(evaluate_tax(Decimal::ZERO, &table), Decimal::ZERO);
        assert_eq!(evaluate_tax(dec("500000"), &table), Decimal::ZERO);
        assert_eq!(evaluate_tax(dec("2799999.99"), &table), Decimal::ZERO);
    }

    #[test]
    fn test_zero_at_threshold() {
        assert_eq!(evaluate_tax(dec("2800000"), &table()), Decimal::ZERO);
        assert!(resolve_bracket(dec("2800000"), &table()).is_none());
    }

    #[test]
    fn test_second_bracket() {
        // 3,500,000 x 5% - 140,000
        assert_eq!(evaluate_tax(dec("3500000"), &table()), dec("35000"));
    }

    #[test]
    fn test_third_bracket() {
        // 5,000,000 x 9% - 308,000
        let table = table();
        assert_eq!(evaluate_tax(dec("5000000"), &table), dec("142000"));
        let bracket = resolve_bracket(dec("5000000"), &table).unwrap();
        assert_eq!(bracket.from, dec("4200000"));
        assert_eq!(bracket.rate, dec("0.09"));
    }

    #[test]
    fn test_top_bracket_is_unbounded() {
        // 20,000,000 x 27% - 1,694,000
        let table = table();
        assert_eq!(evaluate_tax(dec("20000000"), &table), dec("3706000"));
        assert_eq!(resolve_bracket(dec("20000000"), &table).unwrap().to, None);
    }

    #[test]
    fn test_boundary_belongs_to_upper_bracket() {
        let table = table();
        let bracket = resolve_bracket(dec("4200000"), &table).unwrap();
        assert_eq!(bracket.from, dec("4200000"));
    }

    #[test]
    fn test_continuous_at_every_boundary() {
        let table = table();
        let cent = dec("0.01");
        for bracket in table.brackets() {
            if let Some(to) = bracket.to {
                let below = evaluate_tax(to - cent, &table);
                let at = evaluate_tax(to, &table);
                assert!(
                    (at - below).abs() <= cent,
                    "jump at {}: {} -> {}",
                    to,
                    below,
                    at
                );
            }
        }
    }

    #[test]
    fn test_known_boundary_values() {
        let table = table();
        assert_eq!(evaluate_tax(dec("4200000"), &table), dec("70000"));
        assert_eq!(evaluate_tax(dec("5600000"), &table), dec("196000"));
        assert_eq!(evaluate_tax(dec("7000000"), &table), dec("364000"));
        assert_eq!(evaluate_tax(dec("8400000"), &table), dec("574000"));
    }

    #[test]
    fn test_negative_amount_pays_nothing() {
        assert_eq!(evaluate_tax(dec("-1000"), &table()), Decimal::ZERO);
    }

    #[test]
    fn test_alternative_table() {
        let table = BracketTable::new(vec![
            TaxBracket {
                from: dec("0"),
                to: Some(dec("100")),
                rate: dec("0"),
                deduction: dec("0"),
            },
            TaxBracket {
                from: dec("100"),
                to: None,
                rate: dec("0.5"),
                deduction: dec("50"),
            },
        ])
        .unwrap();
        assert_eq!(evaluate_tax(dec("100"), &table), Decimal::ZERO);
        assert_eq!(evaluate_tax(dec("300"), &table), dec("100"));
    }

    #[test]
    fn test_untaxed_table_never_taxes() {
        let table = BracketTable::new(vec![TaxBracket {
            from: dec("0"),
            to: None,
            rate: dec("0"),
            deduction: dec("0"),
        }])
        .unwrap();
        assert_eq!(evaluate_tax(dec("99999999"), &table), Decimal::ZERO);
    }
}
