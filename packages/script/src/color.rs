//! Color values as they appear in `color` rules.

use std::fmt;

use crate::error::{ScriptError, ScriptResult};

/// Anything that can be written as a canonical `#rrggbb` color value
pub trait HexColor {
    fn to_hex(&self) -> ScriptResult<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl HexColor for Rgb {
    fn to_hex(&self) -> ScriptResult<String> {
        Ok(self.to_string())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Text colors go through [`Rgb::from_hex`], so anything else is rejected
impl HexColor for str {
    fn to_hex(&self) -> ScriptResult<String> {
        Rgb::from_hex(self)
            .map(|rgb| rgb.to_string())
            .ok_or_else(|| ScriptError::invalid_color(self))
    }
}

impl<T: HexColor + ?Sized> HexColor for &T {
    fn to_hex(&self) -> ScriptResult<String> {
        (**self).to_hex()
    }
}

impl HexColor for String {
    fn to_hex(&self) -> ScriptResult<String> {
        self.as_str().to_hex()
    }
}
