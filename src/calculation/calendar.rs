//! Calendar arithmetic.
//!
//! This module computes the whole months and remainder days elapsed between
//! two calendar dates, borrowing days from the month preceding the end date
//! when the day-of-month difference goes negative.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkPeriod;

/// Returns the number of days in the given month, accounting for leap years.
///
/// Returns 0 for a month outside `1..=12`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the (year, month) immediately before the given one.
fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Computes the elapsed whole months and remainder days from `start` to `end`.
///
/// Months are counted from the year and month difference; when the end's
/// day-of-month is below the start's, one month is borrowed and the length of
/// the month preceding `end` is added to the days. If a start day past the end
/// of that month still leaves the days negative, the borrow repeats with the
/// month before it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::elapsed;
/// use payroll_engine::models::WorkPeriod;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// assert_eq!(elapsed(start, end).unwrap(), WorkPeriod { months: 5, days: 29 });
/// ```
pub fn elapsed(start: NaiveDate, end: NaiveDate) -> EngineResult<WorkPeriod> {
    if start > end {
        return Err(EngineError::InvalidRange { start, end });
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    let (mut borrow_year, mut borrow_month) = (end.year(), end.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        months -= 1;
        days += days_in_month(borrow_year, borrow_month) as i32;
    }

    // start <= end keeps both fields non-negative after normalization.
    Ok(WorkPeriod {
        months: months.max(0) as u32,
        days: days as u32,
    })
}
