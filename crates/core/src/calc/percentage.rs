use super::{parse_non_zero, parse_number, CalcError};

/// What share of `total` is `value`, in percent.
pub fn calculate_percentage(value: f64, total: f64) -> Result<f64, CalcError> {
    if total == 0.0 || !total.is_finite() {
        return Err(CalcError::ZeroTotal);
    }
    Ok(value / total * 100.0)
}

/// Renders e.g. `25 is 12.50% of 200`.
pub fn evaluate(value: &str, total: &str) -> String {
    let Some(total) = parse_non_zero(total) else {
        return CalcError::ZeroTotal.to_string();
    };
    let Some(value) = parse_number(value) else {
        return CalcError::InvalidValue.to_string();
    };

    match calculate_percentage(value, total) {
        Ok(percent) => format!("{} is {:.2}% of {}", value, percent, total),
        Err(err) => err.to_string(),
    }
}
