//! Color tags for accounts
//!
//! Colors are stored as packed 24-bit RGB values in a `u32`. The value 0 is
//! reserved to mean "no color chosen".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A packed RGB color (`0xRRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(u32);

impl Rgb {
    /// Sentinel for an account without a color
    pub const UNSET: Self = Self(0);

    /// Create a color from a packed value; bits above the low 24 are dropped
    pub const fn new(packed: u32) -> Self {
        Self(packed & 0x00FF_FFFF)
    }

    /// The packed value
    pub const fn packed(&self) -> u32 {
        self.0
    }

    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Red, green and blue components
    pub const fn components(&self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Parse `#RRGGBB`, `RRGGBB`, or `0xRRGGBB`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Material design 500 shades offered by every color selector
pub const THEME_PALETTE: [Rgb; 19] = [
    Rgb::new(0xF44336), // red
    Rgb::new(0xE91E63), // pink
    Rgb::new(0x9C27B0), // purple
    Rgb::new(0x673AB7), // deep purple
    Rgb::new(0x3F51B5), // indigo
    Rgb::new(0x2196F3), // blue
    Rgb::new(0x03A9F4), // light blue
    Rgb::new(0x00BCD4), // cyan
    Rgb::new(0x009688), // teal
    Rgb::new(0x4CAF50), // green
    Rgb::new(0x8BC34A), // light green
    Rgb::new(0xCDDC39), // lime
    Rgb::new(0xFFEB3B), // yellow
    Rgb::new(0xFFC107), // amber
    Rgb::new(0xFF9800), // orange
    Rgb::new(0xFF5722), // deep orange
    Rgb::new(0x795548), // brown
    Rgb::new(0x9E9E9E), // grey
    Rgb::new(0x607D8B), // blue grey
];

/// Color given to freshly created accounts
pub const DEFAULT_ACCOUNT_COLOR: Rgb = THEME_PALETTE[5];
