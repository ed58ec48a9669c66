//! Utility calculators.
//!
//! Every calculator has a typed entry point that returns `Result<_, CalcError>`
//! and an `evaluate` function taking the raw form inputs. `evaluate` always
//! returns a displayable string: validation failures become the error's
//! message instead of propagating.

pub mod age;
pub mod currency;
pub mod emi;
pub mod gpa;
pub mod percentage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Please select a date.")]
    MissingDate,

    #[error("Please enter a valid date (YYYY-MM-DD).")]
    InvalidDate,

    #[error("Date of birth cannot be in the future.")]
    FutureDate,

    #[error("Please fill all fields correctly.")]
    InvalidLoan,

    #[error("Add valid courses.")]
    NoCourses,

    #[error("Please enter a valid number.")]
    InvalidValue,

    #[error("Total cannot be zero")]
    ZeroTotal,

    #[error("Enter amount")]
    MissingAmount,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

/// Parses a user-entered number. Blank, unparsable and non-finite input
/// yields `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses a number that must be present and non-zero.
fn parse_non_zero(input: &str) -> Option<f64> {
    parse_number(input).filter(|value| *value != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_non_zero() {
        assert_eq!(parse_non_zero("0"), None);
        assert_eq!(parse_non_zero("0.0"), None);
        assert_eq!(parse_non_zero("4"), Some(4.0));
    }
}
