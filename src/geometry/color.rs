use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A 32-bit color packed as `0xAARRGGBB`. Every value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for Color32 {
    fn from(color: Argb) -> Self {
        Color32::from_rgba_unmultiplied(color.red(), color.green(), color.blue(), color.alpha())
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Accepts `#AARRGGBB`, `#RRGGBB` (opaque) and the same digits behind `0x` or no prefix.
impl FromStr for Argb {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let invalid = || ConfigError::InvalidColor(s.to_string());

        // from_str_radix tolerates a leading sign
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            8 => Ok(Self(value)),
            6 => Ok(Self(0xFF00_0000 | value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Argb {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_string()
    }
}
