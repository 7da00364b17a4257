//! Supported currencies
//!
//! A fixed enumeration of ISO-4217 currencies. Each entry knows its code,
//! display name, and the number of fraction digits used for minor units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! define_currencies {
    ($($variant:ident => ($code:literal, $digits:literal, $name:literal)),+ $(,)?) => {
        /// An ISO-4217 currency known to the editor
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Currency {
            $($variant),+
        }

        impl Currency {
            /// Every supported currency, in display order
            pub const ALL: &'static [Currency] = &[$(Currency::$variant),+];

            /// The three-letter ISO code
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Number of digits after the decimal point in the major unit
            pub fn fraction_digits(&self) -> u32 {
                match self {
                    $(Self::$variant => $digits),+
                }
            }

            /// Human-readable currency name
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }
    };
}

define_currencies! {
    Aed => ("AED", 2, "UAE Dirham"),
    Ars => ("ARS", 2, "Argentine Peso"),
    Aud => ("AUD", 2, "Australian Dollar"),
    Bgn => ("BGN", 2, "Bulgarian Lev"),
    Bhd => ("BHD", 3, "Bahraini Dinar"),
    Brl => ("BRL", 2, "Brazilian Real"),
    Cad => ("CAD", 2, "Canadian Dollar"),
    Chf => ("CHF", 2, "Swiss Franc"),
    Clp => ("CLP", 0, "Chilean Peso"),
    Cny => ("CNY", 2, "Yuan Renminbi"),
    Czk => ("CZK", 2, "Czech Koruna"),
    Dkk => ("DKK", 2, "Danish Krone"),
    Eur => ("EUR", 2, "Euro"),
    Gbp => ("GBP", 2, "Pound Sterling"),
    Hkd => ("HKD", 2, "Hong Kong Dollar"),
    Huf => ("HUF", 2, "Forint"),
    Idr => ("IDR", 2, "Rupiah"),
    Ils => ("ILS", 2, "New Israeli Sheqel"),
    Inr => ("INR", 2, "Indian Rupee"),
    Isk => ("ISK", 0, "Iceland Krona"),
    Jpy => ("JPY", 0, "Yen"),
    Krw => ("KRW", 0, "Won"),
    Kwd => ("KWD", 3, "Kuwaiti Dinar"),
    Mxn => ("MXN", 2, "Mexican Peso"),
    Myr => ("MYR", 2, "Malaysian Ringgit"),
    Nok => ("NOK", 2, "Norwegian Krone"),
    Nzd => ("NZD", 2, "New Zealand Dollar"),
    Php => ("PHP", 2, "Philippine Peso"),
    Pln => ("PLN", 2, "Zloty"),
    Ron => ("RON", 2, "Romanian Leu"),
    Rub => ("RUB", 2, "Russian Ruble"),
    Sek => ("SEK", 2, "Swedish Krona"),
    Sgd => ("SGD", 2, "Singapore Dollar"),
    Thb => ("THB", 2, "Baht"),
    Try => ("TRY", 2, "Turkish Lira"),
    Twd => ("TWD", 2, "New Taiwan Dollar"),
    Uah => ("UAH", 2, "Hryvnia"),
    Usd => ("USD", 2, "US Dollar"),
    Vnd => ("VND", 0, "Dong"),
    Zar => ("ZAR", 2, "Rand"),
}

impl Currency {
    /// Look up a currency by its ISO code (case-insensitive)
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::parse(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown currency code: {}", code)))
    }
}
