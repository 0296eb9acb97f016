//! Elapsed-time and semester models.
//!
//! This module contains the [`WorkPeriod`] and [`Semester`] types produced by
//! the calendar arithmetic and semester resolution steps of the bonus calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized elapsed duration expressed as whole months plus remainder days.
///
/// `days` is always below the length of the month it was borrowed from, so it
/// never exceeds 30.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkPeriod;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let period = WorkPeriod { months: 5, days: 15 };
/// assert_eq!(period.months_decimal(Decimal::from(30)), Decimal::from_str("5.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkPeriod {
    /// Whole months elapsed.
    pub months: u32,
    /// Remainder days after the whole months.
    pub days: u32,
}

impl WorkPeriod {
    /// A zero-length period.
    pub const ZERO: WorkPeriod = WorkPeriod { months: 0, days: 0 };

    /// Returns the period as a decimal month count, treating every month as
    /// `days_per_month` days long.
    pub fn months_decimal(&self, days_per_month: Decimal) -> Decimal {
        Decimal::from(self.months) + Decimal::from(self.days) / days_per_month
    }
}

/// One of the two fixed half-year windows of a calendar year.
///
/// The first semester spans January 1 to June 30 and the second July 1 to
/// December 31.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Semester;
/// use chrono::NaiveDate;
///
/// let semester = Semester {
///     start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
///     ordinal: 2,
/// };
///
/// assert!(semester.contains(NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()));
/// assert!(!semester.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Semester {
    /// First day of the semester (inclusive).
    pub start: NaiveDate,
    /// Last day of the semester (inclusive).
    pub end: NaiveDate,
    /// 1 for January to June, 2 for July to December.
    pub ordinal: u8,
}

impl Semester {
    /// Checks if a given date falls within this semester, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true for the January to June semester.
    pub fn is_first(&self) -> bool {
        self.ordinal == 1
    }
}
