//! Dollar quote and conversion models.
//!
//! Quotes are supplied by the caller; the engine never fetches or caches them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dollar quote in pesos for a given market (oficial, blue, MEP, ...).
///
/// # Example
///
/// ```
/// use payroll_engine::models::DollarQuote;
/// use rust_decimal::Decimal;
///
/// let quote = DollarQuote {
///     house: "oficial".to_string(),
///     buy: Decimal::from(1400),
///     sell: Decimal::from(1450),
/// };
/// assert!(quote.sell > quote.buy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DollarQuote {
    /// Market identifier.
    #[serde(default)]
    pub house: String,
    /// Price in pesos at which one dollar is bought (compra).
    pub buy: Decimal,
    /// Price in pesos at which one dollar is sold (venta).
    pub sell: Decimal,
}

/// Which way an amount is being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    /// Pesos to dollars, priced at the quote's sell price.
    ArsToUsd,
    /// Dollars to pesos, priced at the quote's buy price.
    UsdToArs,
}

impl ConversionDirection {
    /// Returns the ISO code of the source currency.
    pub fn source_currency(&self) -> &'static str {
        match self {
            ConversionDirection::ArsToUsd => "ARS",
            ConversionDirection::UsdToArs => "USD",
        }
    }

    /// Returns the ISO code of the target currency.
    pub fn target_currency(&self) -> &'static str {
        match self {
            ConversionDirection::ArsToUsd => "USD",
            ConversionDirection::UsdToArs => "ARS",
        }
    }
}

/// The result of converting an amount with a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The amount supplied.
    pub amount: Decimal,
    /// The conversion direction.
    pub direction: ConversionDirection,
    /// ISO code of the currency converted from.
    pub source_currency: String,
    /// ISO code of the currency converted to.
    pub target_currency: String,
    /// The price used for the conversion.
    pub rate_used: Decimal,
    /// The converted amount, rounded to two places.
    pub converted: Decimal,
}

/// Whether a quote went up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationDirection {
    /// The quote rose or stayed flat.
    Up,
    /// The quote fell.
    Down,
}

/// Change between two consecutive quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteVariation {
    /// `current - previous`.
    pub difference: Decimal,
    /// The difference as a percentage of the previous quote, rounded to two places.
    pub percentage: Decimal,
    /// Up when the difference is zero or positive.
    pub direction: VariationDirection,
}
