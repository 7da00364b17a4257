//! Account identifier
//!
//! Accounts are keyed by a positive integer assigned by the repository on
//! first save. The value 0 marks a draft that has never been persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Integer identifier of a persisted account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// The identifier of an account that has not been saved yet
    pub const NEW: Self = Self(0);

    /// Wrap a raw identifier
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// True once the repository has assigned this identifier
    pub const fn is_persisted(&self) -> bool {
        self.0 != 0
    }

    /// The identifier following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for AccountId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sentinel() {
        assert!(!AccountId::NEW.is_persisted());
        assert!(AccountId::new(42).is_persisted());
        assert_eq!(AccountId::default(), AccountId::NEW);
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<AccountId>().unwrap(), AccountId::new(42));
        assert_eq!(" #7 ".parse::<AccountId>().unwrap(), AccountId::new(7));
        assert!("abc".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_serialization() {
        let id = AccountId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
