#![forbid(unsafe_code)]

//! Opaque RGB colors and hex parsing.

use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#RRGGBB`, `RRGGBB`, or the short `#RGB` form.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(Self::from_u32)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string())),
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    *slot = v * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Pair this color with an opacity, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Tint {
        Tint {
            color: self,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A color drawn at partial opacity (overlays, shadows).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tint {
    pub color: Rgb,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f64,
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string contains a non-hex character.
    InvalidDigit(String),
    /// Wrong number of hex digits (expected 3 or 6).
    InvalidLength(usize),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit(s) => write!(f, "invalid hex color: {s:?}"),
            Self::InvalidLength(len) => {
                write!(f, "hex color must have 3 or 6 digits, got {len}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
