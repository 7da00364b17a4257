//! Locale-aware amount input
//!
//! Parses what the user typed into the opening balance field and formats
//! stored balances back into it. The sign is never part of the text; the
//! form keeps it in a separate income/expense toggle.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::config::settings::LocaleSettings;

/// Why an amount could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("an amount is required")]
    Empty,

    #[error("'{0}' is not a number")]
    Invalid(String),

    #[error("at most {max} digits are allowed after the decimal separator")]
    TooManyFractionDigits { max: u32 },

    #[error("amount is too large")]
    OutOfRange,
}

/// Decimal and grouping separators used for amount fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountFormat {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self::from(&LocaleSettings::default())
    }
}

impl From<&LocaleSettings> for AmountFormat {
    fn from(locale: &LocaleSettings) -> Self {
        Self {
            decimal_separator: locale.decimal_separator,
            grouping_separator: locale.grouping_separator,
        }
    }
}

impl AmountFormat {
    /// Parse a non-negative major-unit amount
    ///
    /// Grouping separators are ignored wherever they appear. At most
    /// `fraction_digits` digits may follow the decimal separator.
    pub fn parse(&self, text: &str, fraction_digits: u32) -> Result<Decimal, AmountParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let invalid = || AmountParseError::Invalid(text.to_string());

        let ungrouped: String = text
            .chars()
            .filter(|c| Some(*c) != self.grouping_separator)
            .collect();

        let (integer, fraction) = match ungrouped.split_once(self.decimal_separator) {
            Some((integer, fraction)) => (integer, fraction),
            None => (ungrouped.as_str(), ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        let empty = integer.is_empty() && fraction.is_empty();
        if empty || !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }
        if fraction.len() as u32 > fraction_digits {
            return Err(AmountParseError::TooManyFractionDigits {
                max: fraction_digits,
            });
        }

        let integer = if integer.is_empty() { "0" } else { integer };
        let normalized = if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, fraction)
        };

        Decimal::from_str(&normalized).map_err(|_| AmountParseError::OutOfRange)
    }

    /// Format `amount` with exactly `fraction_digits` decimals
    pub fn format(&self, amount: Decimal, fraction_digits: u32) -> String {
        let mut rounded =
            amount.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(fraction_digits);

        let plain = rounded.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 1);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        for (idx, digit) in integer.chars().enumerate() {
            if idx > 0 && (integer.len() - idx) % 3 == 0 {
                if let Some(sep) = self.grouping_separator {
                    out.push(sep);
                }
            }
            out.push(digit);
        }
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}
