//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! precision issues. The currency's fraction digits decide how a minor-unit
//! amount maps to the major-unit decimal a user types.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A monetary amount stored in minor units (cents for most currencies)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use account_editor::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50 in a two-digit currency
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Convert a major-unit decimal into minor units
    ///
    /// Extra precision beyond `fraction_digits` is rounded half away from
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use account_editor::models::Money;
    /// use rust_decimal::Decimal;
    /// let m = Money::from_major(Decimal::new(-5000, 2), 2).unwrap();
    /// assert_eq!(m.minor(), -5000);
    /// ```
    pub fn from_major(amount: Decimal, fraction_digits: u32) -> Result<Self, MoneyError> {
        let scale = Decimal::from(10_i64.pow(fraction_digits));
        let minor = amount
            .checked_mul(scale)
            .ok_or(MoneyError::Overflow(amount))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        minor.to_i64().map(Self).ok_or(MoneyError::Overflow(amount))
    }

    /// The amount as a major-unit decimal carrying exactly `fraction_digits`
    /// decimal places
    pub fn to_major(&self, fraction_digits: u32) -> Decimal {
        Decimal::new(self.0, fraction_digits)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    /// Formats assuming two fraction digits; currency-aware formatting goes
    /// through `editor::amount::AmountFormat`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_major(2))
    }
}

/// Errors converting between major and minor units
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount out of range: {0}")]
    Overflow(Decimal),
}
