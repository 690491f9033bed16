//! # Date Difference Calculator
//!
//! Computes the span between two calendar dates as a years/months/days
//! breakdown plus total days, whole weeks, and hours.
//!
//! Unlike the age calculator, reversed inputs are not an error: the dates are
//! swapped and the result carries a `swapped` flag so the front-end can
//! notify the user. Hours are derived from whole calendar days (total days
//! times 24); time-of-day never enters the calculation.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ToolResult;

/// Input parameters for the date difference calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateDifferenceInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Date difference results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "years": 0,
///   "months": 5,
///   "days": 0,
///   "weeks": 21,
///   "total_days": 152,
///   "hours": 3648,
///   "swapped": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateDifferenceResult {
    /// Complete years between the dates
    pub years: u32,

    /// Complete months left over after years (0-11)
    pub months: u32,

    /// Days left over after whole months
    pub days: u32,

    /// Total whole weeks (total_days / 7)
    pub weeks: u64,

    /// Total whole days between the dates
    pub total_days: u64,

    /// total_days * 24 (whole calendar days; clock time is ignored)
    pub hours: u64,

    /// True when start was after end and the dates were swapped
    pub swapped: bool,
}

/// Step `months` calendar months forward, clamping to month-end.
fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months <= 0 {
        return date;
    }
    date.checked_add_months(Months::new(months as u32)).unwrap_or(date)
}

/// Calculate the difference between two dates.
///
/// Reversed inputs are swapped rather than rejected, so this function only
/// fails if a future revision adds stricter validation.
pub fn calculate(input: &DateDifferenceInput) -> ToolResult<DateDifferenceResult> {
    let swapped = input.start_date > input.end_date;
    let (start, end) = if swapped {
        (input.end_date, input.start_date)
    } else {
        (input.start_date, input.end_date)
    };

    // Complete years, then complete months, then leftover days. Same
    // decomposition as the age calculator, anchored at the start date.
    let mut years = end.year() - start.year();
    if add_months(start, years * 12) > end {
        years -= 1;
    }
    let after_years = add_months(start, years * 12);

    let mut months =
        (end.year() - after_years.year()) * 12 + end.month() as i32 - after_years.month() as i32;
    let mut anchor = add_months(after_years, months);
    if anchor > end {
        months -= 1;
        anchor = add_months(after_years, months);
    }
    let days = end.signed_duration_since(anchor).num_days();

    let total_days = end.signed_duration_since(start).num_days() as u64;

    Ok(DateDifferenceResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        weeks: total_days / 7,
        total_days,
        hours: total_days * 24,
        swapped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_date() {
        let input = DateDifferenceInput {
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 1),
        };
        let diff = calculate(&input).unwrap();
        assert_eq!(diff.total_days, 0);
        assert_eq!(diff.years, 0);
        assert_eq!(diff.months, 0);
        assert_eq!(diff.days, 0);
        assert!(!diff.swapped);
    }

    #[test]
    fn test_five_month_span() {
        let input = DateDifferenceInput {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 1),
        };
        let diff = calculate(&input).unwrap();
        assert_eq!(diff.years, 0);
        assert_eq!(diff.months, 5);
        assert_eq!(diff.days, 0);
        // Jan 1 to Jun 1 in a leap year: 31+29+31+30+31 = 152 days.
        assert_eq!(diff.total_days, 152);
        assert_eq!(diff.weeks, 21);
        assert_eq!(diff.hours, 152 * 24);
    }

    #[test]
    fn test_reversed_dates_swap_and_flag() {
        let forward = calculate(&DateDifferenceInput {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 1),
        })
        .unwrap();
        let reversed = calculate(&DateDifferenceInput {
            start_date: date(2024, 6, 1),
            end_date: date(2024, 1, 1),
        })
        .unwrap();

        assert!(!forward.swapped);
        assert!(reversed.swapped);
        assert_eq!(forward.total_days, reversed.total_days);
        assert_eq!(forward.years, reversed.years);
        assert_eq!(forward.months, reversed.months);
        assert_eq!(forward.days, reversed.days);
    }

    #[test]
    fn test_multi_year_breakdown() {
        let input = DateDifferenceInput {
            start_date: date(2020, 3, 10),
            end_date: date(2024, 5, 25),
        };
        let diff = calculate(&input).unwrap();
        assert_eq!(diff.years, 4);
        assert_eq!(diff.months, 2);
        assert_eq!(diff.days, 15);
    }

    #[test]
    fn test_month_end_clamping() {
        // Jan 31 + 1 month clamps to Feb 29 in a leap year.
        let input = DateDifferenceInput {
            start_date: date(2024, 1, 31),
            end_date: date(2024, 3, 1),
        };
        let diff = calculate(&input).unwrap();
        assert_eq!(diff.years, 0);
        assert_eq!(diff.months, 1);
        assert_eq!(diff.days, 1);
        assert_eq!(diff.total_days, 30);
    }
}
