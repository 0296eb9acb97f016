//! Presentation rounding.
//!
//! Calculations run at full precision; values are rounded only when they are
//! written into a result structure.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept in results.
pub const RESULT_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to two decimal places, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("298333.3333").unwrap()), Decimal::from_str("298333.33").unwrap());
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
