use serde::Serialize;
use std::fmt;

use super::{parse_non_zero, CalcError};

/// Equated monthly installment breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emi {
    pub monthly: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

impl fmt::Display for Emi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monthly EMI: {:.2}\nTotal Interest: {:.2}\nTotal Payment: {:.2}",
            self.monthly, self.total_interest, self.total_payment
        )
    }
}

/// `P*r*(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// number of monthly payments.
pub fn calculate_emi(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
) -> Result<Emi, CalcError> {
    let r = annual_rate_percent / 12.0 / 100.0;
    let n = tenure_years * 12.0;

    if [principal, r, n].iter().any(|v| *v == 0.0 || !v.is_finite()) {
        return Err(CalcError::InvalidLoan);
    }

    let growth = (1.0 + r).powf(n);
    let monthly = principal * r * growth / (growth - 1.0);
    if !monthly.is_finite() {
        return Err(CalcError::InvalidLoan);
    }

    let total_payment = monthly * n;

    Ok(Emi {
        monthly,
        total_interest: total_payment - principal,
        total_payment,
    })
}

pub fn evaluate(principal: &str, annual_rate_percent: &str, tenure_years: &str) -> String {
    let inputs = (
        parse_non_zero(principal),
        parse_non_zero(annual_rate_percent),
        parse_non_zero(tenure_years),
    );

    let result = match inputs {
        (Some(p), Some(rate), Some(years)) => calculate_emi(p, rate, years),
        _ => Err(CalcError::InvalidLoan),
    };

    match result {
        Ok(emi) => emi.to_string(),
        Err(err) => err.to_string(),
    }
}
