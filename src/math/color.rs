use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` must look like #rrggbb")]
    Format(String),
}

/// 24-bit sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(u32);

impl HexColor {
    pub const fn from_u32(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Parse `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Format(text.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ColorError::Format(text.to_string()))
    }

    /// Channels in 0..=1, still sRGB encoded.
    pub fn to_rgb(self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }

    /// Channels converted to linear light for shading.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_rgb().map(srgb_to_linear)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_red() {
        let color = HexColor::parse("#ef4444").unwrap();
        assert_eq!(color.to_u32(), 0xef4444);
        assert_eq!(color.to_string(), "#ef4444");
    }

    #[test]
    fn test_parse_uppercase_without_hash() {
        let color = HexColor::parse("6366F1").unwrap();
        assert_eq!(color, HexColor::from_u32(0x6366f1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("#gggggg").is_err());
        assert!(HexColor::parse("").is_err());
    }

    #[test]
    fn test_white_to_rgb() {
        let rgb = HexColor::from_u32(0xffffff).to_rgb();
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!((rgb[1] - 1.0).abs() < 0.01);
        assert!((rgb[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_linear_keeps_black_and_white() {
        assert_eq!(HexColor::from_u32(0x000000).to_linear(), [0.0, 0.0, 0.0]);
        let white = HexColor::from_u32(0xffffff).to_linear();
        assert!((white[0] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        let json = serde_json::to_string(&HexColor::from_u32(0x22c55e)).unwrap();
        assert_eq!(json, "\"#22c55e\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_u32(), 0x22c55e);
    }
}
