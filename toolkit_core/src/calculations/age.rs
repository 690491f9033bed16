//! # Age Calculator
//!
//! Computes an exact age breakdown (years, months, days) between a birth date
//! and an as-of date, plus a countdown to the next birthday.
//!
//! ## Algorithm
//!
//! - Whole years by calendar-year subtraction, adjusted for whether the
//!   birth month/day has occurred yet in the as-of year
//! - Remaining months as complete calendar months since the last birthday
//! - Remaining days as the leftover after stepping that many months forward
//! - Next birthday is this year's occurrence of the birth month/day, rolling
//!   to next year if it has already passed
//!
//! Feb 29 birthdays clamp to Feb 28 in common years.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toolkit_core::calculations::age::{calculate, AgeInput};
//!
//! let input = AgeInput {
//!     birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
//!     as_of_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//! };
//! let age = calculate(&input).unwrap();
//! assert_eq!(age.years, 33);
//! assert_eq!(age.months, 8);
//! ```

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Input parameters for the age calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "birth_date": "1990-06-15",
///   "as_of_date": "2024-03-01"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeInput {
    /// Date of birth
    pub birth_date: NaiveDate,

    /// Date to calculate the age at
    pub as_of_date: NaiveDate,
}

impl AgeInput {
    /// Age as of today (the usual front-end default)
    pub fn as_of_today(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            as_of_date: Local::now().date_naive(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> ToolResult<()> {
        if self.birth_date > self.as_of_date {
            return Err(ToolError::invalid_input(
                "birth_date",
                self.birth_date.to_string(),
                "Birth date cannot be after the as-of date",
            ));
        }
        Ok(())
    }
}

/// Age breakdown results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "years": 33,
///   "months": 8,
///   "days": 14,
///   "days_until_next_birthday": 106
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeResult {
    /// Complete years lived
    pub years: u32,

    /// Complete months since the last birthday (0-11)
    pub months: u32,

    /// Days left over after whole months
    pub days: u32,

    /// Days until the next occurrence of the birth month/day (0 = today)
    pub days_until_next_birthday: u32,
}

/// The birth month/day placed in `year`. Feb 29 falls back to Feb 28 when
/// `year` is not a leap year.
fn anniversary(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), birth.day() - 1))
        .unwrap_or(birth)
}

/// Step `months` calendar months forward, clamping to month-end.
fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months <= 0 {
        return date;
    }
    date.checked_add_months(Months::new(months as u32)).unwrap_or(date)
}

/// Calculate the age breakdown.
///
/// # Returns
///
/// * `Ok(AgeResult)` - Years/months/days plus next-birthday countdown
/// * `Err(ToolError)` - `InvalidInput` if the birth date is in the future
pub fn calculate(input: &AgeInput) -> ToolResult<AgeResult> {
    input.validate()?;

    let birth = input.birth_date;
    let as_of = input.as_of_date;

    // Whole years, stepping back one if the birthday hasn't happened yet.
    let mut years = as_of.year() - birth.year();
    let mut last_birthday = anniversary(as_of.year(), birth);
    if last_birthday > as_of {
        years -= 1;
        last_birthday = anniversary(as_of.year() - 1, birth);
    }

    // Complete months since the last birthday, then leftover days.
    let mut months = (as_of.year() - last_birthday.year()) * 12 + as_of.month() as i32
        - last_birthday.month() as i32;
    let mut anchor = add_months(last_birthday, months);
    if anchor > as_of {
        months -= 1;
        anchor = add_months(last_birthday, months);
    }
    let days = as_of.signed_duration_since(anchor).num_days();

    // Next birthday: this year's occurrence, or next year's if already passed.
    let mut next_birthday = anniversary(as_of.year(), birth);
    if next_birthday < as_of {
        next_birthday = anniversary(as_of.year() + 1, birth);
    }
    let days_until = next_birthday.signed_duration_since(as_of).num_days();

    Ok(AgeResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        days_until_next_birthday: days_until as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_today_is_all_zero() {
        let input = AgeInput {
            birth_date: date(2000, 5, 20),
            as_of_date: date(2000, 5, 20),
        };
        let age = calculate(&input).unwrap();
        assert_eq!(
            age,
            AgeResult {
                years: 0,
                months: 0,
                days: 0,
                days_until_next_birthday: 0
            }
        );
    }

    #[test]
    fn test_birthday_anniversary() {
        let input = AgeInput {
            birth_date: date(1990, 6, 15),
            as_of_date: date(2024, 6, 15),
        };
        let age = calculate(&input).unwrap();
        assert_eq!(age.years, 34);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 0);
        assert_eq!(age.days_until_next_birthday, 0);
    }

    #[test]
    fn test_day_before_birthday() {
        let input = AgeInput {
            birth_date: date(1990, 6, 15),
            as_of_date: date(2024, 6, 14),
        };
        let age = calculate(&input).unwrap();
        assert_eq!(age.years, 33);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 30);
        assert_eq!(age.days_until_next_birthday, 1);
    }

    #[test]
    fn test_mid_year_breakdown() {
        let input = AgeInput {
            birth_date: date(1990, 6, 15),
            as_of_date: date(2024, 3, 1),
        };
        let age = calculate(&input).unwrap();
        assert_eq!(age.years, 33);
        assert_eq!(age.months, 8);
        // Last birthday 2023-06-15; +8 months = 2024-02-15; 15 days to Mar 1.
        assert_eq!(age.days, 15);
        // Next birthday 2024-06-15.
        assert_eq!(age.days_until_next_birthday, 106);
    }

    #[test]
    fn test_leap_day_birth_in_common_year() {
        let input = AgeInput {
            birth_date: date(2000, 2, 29),
            as_of_date: date(2023, 3, 1),
        };
        let age = calculate(&input).unwrap();
        // Feb 29 clamps to Feb 28 in 2023, so the 23rd birthday has passed.
        assert_eq!(age.years, 23);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 1);
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let input = AgeInput {
            birth_date: date(2030, 1, 1),
            as_of_date: date(2024, 1, 1),
        };
        let result = calculate(&input);
        assert!(matches!(result, Err(ToolError::InvalidInput { .. })));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = AgeInput {
            birth_date: date(1990, 6, 15),
            as_of_date: date(2024, 3, 1),
        };
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: AgeInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.birth_date, roundtrip.birth_date);
        assert_eq!(input.as_of_date, roundtrip.as_of_date);
    }
}
