//! A validated, strictly positive amount of money.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An amount of money that is guaranteed to be finite and greater than zero.
///
/// Use [Amount::new] for numbers and [Amount::parse] for raw user input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from `value`.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is zero, negative, NaN or
    /// infinite.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAmount(value.to_string()))
        }
    }

    /// Parse an amount from user entered text.
    ///
    /// Surrounding whitespace is ignored, everything else must be a plain
    /// decimal number: digits with at most one decimal point, e.g. "50",
    /// "12.34" or ".5". Signs, exponents and thousands separators are
    /// rejected.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `text` is empty, not a plain decimal
    /// number, or does not describe a positive amount.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        let is_plain_decimal = trimmed.chars().any(|c| c.is_ascii_digit())
            && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
            && trimmed.matches('.').count() <= 1;

        if !is_plain_decimal {
            return Err(Error::InvalidAmount(text.to_owned()));
        }

        let value = trimmed
            .parse::<f64>()
            .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

        Self::new(value).map_err(|_| Error::InvalidAmount(text.to_owned()))
    }

    /// The amount as a plain number.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
