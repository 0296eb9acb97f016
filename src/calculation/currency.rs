//! Dollar conversion arithmetic.
//!
//! Quotes are passed in by the caller; nothing here fetches, stores or caches
//! them.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ConversionDirection, ConversionResult, DollarQuote, QuoteVariation, VariationDirection,
};

use super::rounding::round_money;

/// Converts an amount between pesos and dollars with the given quote.
///
/// Pesos are converted to dollars at the quote's sell price (the price the
/// buyer of dollars pays); dollars are converted to pesos at the buy price.
///
/// # Errors
///
/// - [`EngineError::Validation`] on `amount` if it is negative.
/// - [`EngineError::Validation`] on `quote` if the price used is not positive.
/// - [`EngineError::Validation`] on `amount` if the converted value does not fit
///   in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::convert_currency;
/// use payroll_engine::models::{ConversionDirection, DollarQuote};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let quote = DollarQuote {
///     house: "oficial".to_string(),
///     buy: Decimal::from(1400),
///     sell: Decimal::from(1450),
/// };
///
/// let usd = convert_currency(Decimal::from(10_000), ConversionDirection::ArsToUsd, &quote).unwrap();
/// assert_eq!(usd.converted, Decimal::from_str("6.90").unwrap());
///
/// let ars = convert_currency(Decimal::from(10), ConversionDirection::UsdToArs, &quote).unwrap();
/// assert_eq!(ars.converted, Decimal::from(14_000));
/// ```
pub fn convert_currency(
    amount: Decimal,
    direction: ConversionDirection,
    quote: &DollarQuote,
) -> EngineResult<ConversionResult> {
    if amount < Decimal::ZERO {
        return Err(EngineError::validation("amount", "cannot be negative"));
    }

    let rate_used = match direction {
        ConversionDirection::ArsToUsd => quote.sell,
        ConversionDirection::UsdToArs => quote.buy,
    };
    if rate_used <= Decimal::ZERO {
        return Err(EngineError::validation(
            "quote",
            format!(
                "{} price must be greater than zero",
                match direction {
                    ConversionDirection::ArsToUsd => "sell",
                    ConversionDirection::UsdToArs => "buy",
                }
            ),
        ));
    }

    let converted = match direction {
        ConversionDirection::ArsToUsd => amount.checked_div(rate_used),
        ConversionDirection::UsdToArs => amount.checked_mul(rate_used),
    }
    .ok_or_else(|| EngineError::validation("amount", "result out of range"))?;

    Ok(ConversionResult {
        amount,
        direction,
        source_currency: direction.source_currency().to_string(),
        target_currency: direction.target_currency().to_string(),
        rate_used,
        converted: round_money(converted),
    })
}

/// Computes how a quote moved from `previous` to `current`.
///
/// Returns `Ok(None)` when there is no previous value to compare against (zero).
///
/// # Errors
///
/// - [`EngineError::Validation`] on `current` if the difference or the
///   percentage does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::quote_variation;
/// use payroll_engine::models::VariationDirection;
/// use rust_decimal::Decimal;
///
/// let variation = quote_variation(Decimal::from(1000), Decimal::from(1050))
///     .unwrap()
///     .unwrap();
/// assert_eq!(variation.difference, Decimal::from(50));
/// assert_eq!(variation.percentage, Decimal::from(5));
/// assert_eq!(variation.direction, VariationDirection::Up);
/// ```
pub fn quote_variation(
    previous: Decimal,
    current: Decimal,
) -> EngineResult<Option<QuoteVariation>> {
    if previous.is_zero() {
        return Ok(None);
    }

    let out_of_range = || EngineError::validation("current", "variation out of range");
    let difference = current.checked_sub(previous).ok_or_else(out_of_range)?;
    let percentage = difference
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(out_of_range)?;
    let direction = if difference >= Decimal::ZERO {
        VariationDirection::Up
    } else {
        VariationDirection::Down
    };

    Ok(Some(QuoteVariation {
        difference,
        percentage: round_money(percentage),
        direction,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn quote() -> DollarQuote {
        DollarQuote {
            house: "blue".to_string(),
            buy: dec("1430"),
            sell: dec("1450"),
        }
    }

    #[test]
    fn test_pesos_to_dollars_uses_sell_price() {
        let result = convert_currency(dec("10000"), ConversionDirection::ArsToUsd, &quote()).unwrap();
        assert_eq!(result.rate_used, dec("1450"));
        assert_eq!(result.converted, dec("6.90"));
    }

    #[test]
    fn test_dollars_to_pesos_uses_buy_price() {
        let result = convert_currency(dec("10"), ConversionDirection::UsdToArs, &quote()).unwrap();
        assert_eq!(result.rate_used, dec("1430"));
        assert_eq!(result.converted, dec("14300"));
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        let result = convert_currency(Decimal::ZERO, ConversionDirection::ArsToUsd, &quote()).unwrap();
        assert_eq!(result.converted, Decimal::ZERO);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = convert_currency(dec("-1"), ConversionDirection::ArsToUsd, &quote());
        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "amount"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let mut quote = quote();
        quote.sell = Decimal::ZERO;
        match convert_currency(dec("100"), ConversionDirection::ArsToUsd, &quote) {
            Err(EngineError::Validation { field, message }) => {
                assert_eq!(field, "quote");
                assert!(message.contains("sell"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
        // the buy side is still usable
        assert!(convert_currency(dec("100"), ConversionDirection::UsdToArs, &quote).is_ok());
    }

    #[test]
    fn test_oversized_dollar_conversion_is_rejected() {
        let quote = DollarQuote {
            house: "oficial".to_string(),
            buy: dec("1000000000000"),
            sell: dec("1000000000000"),
        };
        match convert_currency(dec("100000000000000000000"), ConversionDirection::UsdToArs, &quote) {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "amount"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_tiny_sell_price_overflow_is_rejected() {
        let quote = DollarQuote {
            house: "oficial".to_string(),
            buy: dec("0.0001"),
            sell: dec("0.0001"),
        };
        match convert_currency(dec("10000000000000000000000000000"), ConversionDirection::ArsToUsd, &quote) {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "amount"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_result_carries_currency_codes() {
        let result = convert_currency(dec("10000"), ConversionDirection::ArsToUsd, &quote()).unwrap();
        assert_eq!(result.source_currency, "ARS");
        assert_eq!(result.target_currency, "USD");
    }

    #[test]
    fn test_variation_up() {
        let variation = quote_variation(dec("1000"), dec("1050")).unwrap().unwrap();
        assert_eq!(variation.difference, dec("50"));
        assert_eq!(variation.percentage, dec("5"));
        assert_eq!(variation.direction, VariationDirection::Up);
    }

    #[test]
    fn test_variation_down() {
        let variation = quote_variation(dec("1450"), dec("1420")).unwrap().unwrap();
        assert_eq!(variation.difference, dec("-30"));
        assert_eq!(variation.percentage, dec("-2.07"));
        assert_eq!(variation.direction, VariationDirection::Down);
    }

    #[test]
    fn test_flat_variation_counts_as_up() {
        let variation = quote_variation(dec("1450"), dec("1450")).unwrap().unwrap();
        assert_eq!(variation.difference, Decimal::ZERO);
        assert_eq!(variation.direction, VariationDirection::Up);
    }

    #[test]
    fn test_no_previous_quote() {
        assert_eq!(quote_variation(Decimal::ZERO, dec("1450")), Ok(None));
    }

    #[test]
    fn test_variation_from_tiny_previous_is_rejected() {
        match quote_variation(dec("0.0000001"), dec("10000000000000000000000")) {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "current"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
