use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You are {} years, {} months, and {} days old.",
            self.years, self.months, self.days
        )
    }
}

/// Calendar difference between `birth` and `today`.
///
/// Negative days borrow the length of the month before `today`'s month;
/// negative months borrow a year.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> Result<Age, CalcError> {
    if birth > today {
        return Err(CalcError::FutureDate);
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(today);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Age {
        years,
        months,
        days,
    })
}

/// Number of days in the month preceding `date`'s month.
fn days_in_previous_month(date: NaiveDate) -> i32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}

/// Parses a `YYYY-MM-DD` date of birth and computes the age as text.
pub fn evaluate(birth_date: Option<&str>, today: NaiveDate) -> String {
    let result = match birth_date.map(str::trim).filter(|s| !s.is_empty()) {
        None => Err(CalcError::MissingDate),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| CalcError::InvalidDate)
            .and_then(|birth| calculate_age(birth, today)),
    };

    match result {
        Ok(age) => age.to_string(),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_birthday() {
        let age = calculate_age(date(1990, 6, 15), date(2024, 6, 15)).unwrap();
        assert_eq!(
            age,
            Age {
                years: 34,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_borrows_days_from_previous_month() {
        // February 2024 has 29 days.
        let age = calculate_age(date(2000, 1, 15), date(2024, 3, 10)).unwrap();
        assert_eq!(
            age.to_string(),
            "You are 24 years, 1 months, and 24 days old."
        );
    }

    #[test]
    fn test_borrows_months_from_year() {
        let age = calculate_age(date(2000, 11, 1), date(2024, 2, 1)).unwrap();
        assert_eq!(
            age,
            Age {
                years: 23,
                months: 3,
                days: 0
            }
        );
    }

    #[test]
    fn test_january_borrows_from_december() {
        let age = calculate_age(date(2020, 12, 20), date(2021, 1, 5)).unwrap();
        assert_eq!(
            age,
            Age {
                years: 0,
                months: 0,
                days: 16
            }
        );
    }

    #[test]
    fn test_future_birth_date() {
        assert_eq!(
            calculate_age(date(2030, 1, 1), date(2024, 1, 1)),
            Err(CalcError::FutureDate)
        );
    }

    #[test]
    fn test_evaluate_validation_messages() {
        let today = date(2024, 1, 1);
        assert_eq!(evaluate(None, today), "Please select a date.");
        assert_eq!(evaluate(Some("  "), today), "Please select a date.");
        assert_eq!(
            evaluate(Some("01/02/2000"), today),
            "Please enter a valid date (YYYY-MM-DD)."
        );
        assert_eq!(
            evaluate(Some("2023-01-01"), today),
            "You are 1 years, 0 months, and 0 days old."
        );
    }
}
