//! Core data models for the account editor
//!
//! This module contains the data structures describing an account record:
//! identifiers, currencies, colors, and monetary amounts.

pub mod account;
pub mod color;
pub mod currency;
pub mod ids;
pub mod money;

pub use account::{Account, AccountType, AccountValidationError, MAX_SORT_KEY};
pub use color::{Rgb, DEFAULT_ACCOUNT_COLOR, THEME_PALETTE};
pub use currency::Currency;
pub use ids::AccountId;
pub use money::{Money, MoneyError};
