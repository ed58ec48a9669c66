use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{parse_non_zero, CalcError};

/// Currencies with a static rate relative to one US dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    INR,
    JPY,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::INR,
        Currency::JPY,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
        }
    }

    /// Units of this currency per US dollar.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.92,
            Currency::GBP => 0.79,
            Currency::INR => 83.5,
            Currency::JPY => 150.1,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(CalcError::UnsupportedCurrency(code))
    }
}

/// `amount / rate[from] * rate[to]`.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    amount / from.rate() * to.rate()
}

/// Renders e.g. `100 USD = 92.00 EUR`.
pub fn evaluate(amount: &str, from: &str, to: &str) -> String {
    let Some(amount) = parse_non_zero(amount) else {
        return CalcError::MissingAmount.to_string();
    };

    let currencies = from
        .parse::<Currency>()
        .and_then(|from| Ok((from, to.parse::<Currency>()?)));

    match currencies {
        Ok((from, to)) => format!(
            "{} {} = {:.2} {}",
            amount,
            from,
            convert(amount, from, to),
            to
        ),
        Err(err) => err.to_string(),
    }
}
