//! Account model
//!
//! Represents financial accounts (cash, bank accounts, credit cards, etc.)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::{Rgb, DEFAULT_ACCOUNT_COLOR};
use super::currency::Currency;
use super::ids::AccountId;
use super::money::Money;

/// Largest sort key accepted (nine decimal digits)
pub const MAX_SORT_KEY: i32 = 999_999_999;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Cash/wallet
    Cash,
    /// Bank account
    Bank,
    /// Credit card
    CreditCard,
    /// Other asset
    Asset,
    /// Other liability
    Liability,
}

impl AccountType {
    /// Every account type, in display order
    pub const ALL: &'static [AccountType] = &[
        Self::Cash,
        Self::Bank,
        Self::CreditCard,
        Self::Asset,
        Self::Liability,
    ];
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Cash
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Repository-assigned identifier, `AccountId::NEW` until first save
    pub id: AccountId,

    /// Display name (e.g., "Wallet")
    pub label: String,

    /// Free-form notes
    #[serde(default)]
    pub description: String,

    pub currency: Currency,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Color tag, `Rgb::UNSET` when none was chosen
    #[serde(default)]
    pub color: Rgb,

    /// Opening balance in minor units of `currency`
    pub opening_balance: Money,

    /// Sort order for display
    #[serde(default)]
    pub sort_key: i32,

    /// Whether this account is left out of aggregate totals
    #[serde(default)]
    pub exclude_from_totals: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an unsaved account with default values
    pub fn new(currency: Currency) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::NEW,
            label: String::new(),
            description: String::new(),
            currency,
            account_type: AccountType::default(),
            color: DEFAULT_ACCOUNT_COLOR,
            opening_balance: Money::zero(),
            sort_key: 0,
            exclude_from_totals: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an unsaved account with a label and opening balance
    pub fn with_opening_balance(
        label: impl Into<String>,
        currency: Currency,
        opening_balance: Money,
    ) -> Self {
        let mut account = Self::new(currency);
        account.label = label.into();
        account.opening_balance = opening_balance;
        account
    }

    /// True once the repository has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_persisted()
    }

    /// Switch the currency, rejecting codes this build does not know
    pub fn set_currency_code(&mut self, code: &str) -> Result<(), AccountValidationError> {
        let currency = Currency::parse(code)
            .ok_or_else(|| AccountValidationError::UnknownCurrency(code.to_string()))?;
        self.currency = currency;
        Ok(())
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.label.trim().is_empty() {
            return Err(AccountValidationError::EmptyLabel);
        }

        if !(0..=MAX_SORT_KEY).contains(&self.sort_key) {
            return Err(AccountValidationError::SortKeyOutOfRange(self.sort_key));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.label, self.account_type, self.currency)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyLabel,
    UnknownCurrency(String),
    SortKeyOutOfRange(i32),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Account label cannot be empty"),
            Self::UnknownCurrency(code) => write!(f, "Unknown currency code: {}", code),
            Self::SortKeyOutOfRange(key) => {
                write!(f, "Sort key {} out of range (0 to {})", key, MAX_SORT_KEY)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new(Currency::Eur);
        assert_eq!(account.id, AccountId::NEW);
        assert!(!account.is_persisted());
        assert_eq!(account.currency, Currency::Eur);
        assert_eq!(account.account_type, AccountType::Cash);
        assert_eq!(account.color, DEFAULT_ACCOUNT_COLOR);
        assert_eq!(account.opening_balance, Money::zero());
        assert!(!account.exclude_from_totals);
    }

    #[test]
    fn test_set_currency_code() {
        let mut account = Account::new(Currency::Usd);
        account.set_currency_code("chf").unwrap();
        assert_eq!(account.currency, Currency::Chf);

        assert_eq!(
            account.set_currency_code("XYZ"),
            Err(AccountValidationError::UnknownCurrency("XYZ".into()))
        );
        assert_eq!(account.currency, Currency::Chf);
    }

    #[test]
    fn test_validation() {
        let mut account =
            Account::with_opening_balance("Wallet", Currency::Usd, Money::from_minor(100));
        assert!(account.validate().is_ok());

        account.label = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyLabel));

        account.label = "Wallet".into();
        account.sort_key = MAX_SORT_KEY + 1;
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::SortKeyOutOfRange(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let mut account = Account::new(Currency::Jpy);
        account.label = "Suica".into();
        account.account_type = AccountType::CreditCard;
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"type\":\"credit_card\""));
        assert!(json.contains("\"currency\":\"JPY\""));
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }

    #[test]
    fn test_display() {
        let mut account = Account::new(Currency::Eur);
        account.label = "Giro".into();
        account.account_type = AccountType::Bank;
        assert_eq!(account.to_string(), "Giro (Bank, EUR)");
    }
}
