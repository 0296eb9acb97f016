//! Income tax bracket models.
//!
//! This module contains the [`TaxBracket`] row type and the validated
//! [`BracketTable`] the progressive evaluator works against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single row of a progressive income tax table.
///
/// Tax for an amount inside the bracket is `amount x rate - deduction`. The
/// deduction makes the piecewise tax curve continuous at each boundary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bracket = TaxBracket {
///     from: Decimal::from(4_200_000),
///     to: Some(Decimal::from(5_600_000)),
///     rate: Decimal::from_str("0.09").unwrap(),
///     deduction: Decimal::from(308_000),
/// };
///
/// assert!(bracket.contains(Decimal::from(5_000_000)));
/// assert_eq!(bracket.raw_tax(Decimal::from(5_000_000)), Decimal::from(142_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive).
    pub from: Decimal,
    /// Upper bound of the bracket (exclusive); `None` means unbounded.
    pub to: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 = 5%).
    pub rate: Decimal,
    /// Fixed amount subtracted from `amount x rate`.
    pub deduction: Decimal,
}

impl TaxBracket {
    /// Returns true if `from <= amount < to`.
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.from && self.to.is_none_or(|to| amount < to)
    }

    /// The bracket formula before clamping at zero.
    pub fn raw_tax(&self, amount: Decimal) -> Decimal {
        amount * self.rate - self.deduction
    }
}

/// An ordered, contiguous set of brackets partitioning `[0, ∞)`.
///
/// Construction fails with [`EngineError::InvalidConfig`] unless the brackets
/// start at zero, are sorted and contiguous, end with an unbounded bracket,
/// carry rates in `[0, 1]` with non-negative deductions, and produce the same
/// tax from both sides of every boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates and wraps a list of brackets.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let first = brackets.first().ok_or_else(|| invalid("bracket table is empty"))?;
        if !first.from.is_zero() {
            return Err(invalid(format!(
                "first bracket must start at 0, found {}",
                first.from
            )));
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} has rate {} outside [0, 1]",
                    index, bracket.rate
                )));
            }
            if bracket.deduction < Decimal::ZERO {
                return Err(invalid(format!(
                    "bracket {} has negative deduction {}",
                    index, bracket.deduction
                )));
            }
            if let Some(to) = bracket.to {
                if to <= bracket.from {
                    return Err(invalid(format!(
                        "bracket {} upper bound {} is not above its lower bound {}",
                        index, to, bracket.from
                    )));
                }
            }
        }

        for (index, pair) in brackets.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            let boundary = current.to.ok_or_else(|| {
                invalid(format!("bracket {} is unbounded but is not the last", index))
            })?;
            if boundary != next.from {
                return Err(invalid(format!(
                    "bracket {} ends at {} but bracket {} starts at {}",
                    index,
                    boundary,
                    index + 1,
                    next.from
                )));
            }
            if current.raw_tax(boundary) != next.raw_tax(boundary) {
                return Err(invalid(format!(
                    "tax is discontinuous at {}: {} below, {} above",
                    boundary,
                    current.raw_tax(boundary),
                    next.raw_tax(boundary)
                )));
            }
        }

        if brackets.last().is_some_and(|last| last.to.is_some()) {
            return Err(invalid("last bracket must be unbounded"));
        }

        Ok(Self { brackets })
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the bracket with `from <= amount < to`.
    ///
    /// Returns `None` only for negative amounts.
    pub fn find(&self, amount: Decimal) -> Option<&TaxBracket> {
        let index = self.brackets.partition_point(|b| b.from <= amount);
        index
            .checked_sub(1)
            .and_then(|i| self.brackets.get(i))
            .filter(|b| b.contains(amount))
    }

    /// The lower bound of the first bracket with a positive rate.
    ///
    /// Amounts at or below the threshold pay no tax. `None` means the table
    /// never taxes anything.
    pub fn threshold(&self) -> Option<Decimal> {
        self.brackets
            .iter()
            .find(|b| b.rate > Decimal::ZERO)
            .map(|b| b.from)
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}
