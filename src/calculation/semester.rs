//! Semester resolution.
//!
//! Maps a calculation date to the half-year window that contains it.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::Semester;

/// Resolves the semester enclosing `date`.
///
/// January to June resolves to `[Jan 1, Jun 30]` (ordinal 1), July to
/// December to `[Jul 1, Dec 31]` (ordinal 2), both of `date`'s year. Only the
/// year and month are consulted.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] only if the window cannot be represented,
/// which happens at the edges of chrono's supported year range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_semester;
/// use chrono::NaiveDate;
///
/// let semester = resolve_semester(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()).unwrap();
/// assert_eq!(semester.ordinal, 1);
/// assert_eq!(semester.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn resolve_semester(date: NaiveDate) -> EngineResult<Semester> {
    let year = date.year();
    let (ordinal, (start_month, start_day), (end_month, end_day)) = if date.month() <= 6 {
        (1, (1, 1), (6, 30))
    } else {
        (2, (7, 1), (12, 31))
    };

    let window_date = |month: u32, day: u32| {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            EngineError::validation("calculation_date", format!("year {} is out of range", year))
        })
    };

    Ok(Semester {
        start: window_date(start_month, start_day)?,
        end: window_date(end_month, end_day)?,
        ordinal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_january_is_first_semester() {
        let semester = resolve_semester(make_date(2024, 1, 1)).unwrap();
        assert_eq!(semester.ordinal, 1);
        assert_eq!(semester.start, make_date(2024, 1, 1));
        assert_eq!(semester.end, make_date(2024, 6, 30));
    }

    #[test]
    fn test_june_30_and_july_1_differ() {
        let june = resolve_semester(make_date(2024, 6, 30)).unwrap();
        let july = resolve_semester(make_date(2024, 7, 1)).unwrap();
        assert_eq!(june.ordinal, 1);
        assert_eq!(july.ordinal, 2);
        assert_ne!(june, july);
    }

    #[test]
    fn test_december_is_second_semester() {
        let semester = resolve_semester(make_date(2025, 12, 31)).unwrap();
        assert_eq!(semester.ordinal, 2);
        assert_eq!(semester.start, make_date(2025, 7, 1));
        assert_eq!(semester.end, make_date(2025, 12, 31));
    }

    #[test]
    fn test_day_of_month_does_not_change_resolution() {
        let early = resolve_semester(make_date(2024, 9, 1)).unwrap();
        let late = resolve_semester(make_date(2024, 9, 30)).unwrap();
        assert_eq!(early, late);
    }

    #[test]
    fn test_resolved_semester_contains_date() {
        for month in 1..=12 {
            let date = make_date(2023, month, 15);
            let semester = resolve_semester(date).unwrap();
            assert!(semester.contains(date), "{} not in {:?}", date, semester);
            assert!(semester.start <= semester.end);
        }
    }
}
