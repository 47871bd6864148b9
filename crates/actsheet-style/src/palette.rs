#![forbid(unsafe_code)]

//! Light and dark color slots for sheet chrome.

use actsheet_core::ColorScheme;

use crate::Rgb;

/// Semantic color slots used by the sheet chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Rounded content container behind the caller's content.
    pub sheet_bg: Rgb,
    /// Card background for the centered dialog.
    pub centered_bg: Rgb,
    /// Pressed-state color of the cancel button.
    pub underlay: Rgb,
    /// Cancel button background.
    pub cancel_bg: Rgb,
    pub border: Rgb,
    pub fg: Rgb,
}

impl Palette {
    pub const LIGHT: Self = Self {
        sheet_bg: Rgb::from_u32(0xEFEFEC),
        centered_bg: Rgb::from_u32(0xF6F6F0),
        underlay: Rgb::from_u32(0xDBDBD7),
        cancel_bg: Rgb::from_u32(0xFFFFFF),
        border: Rgb::from_u32(0xD7D8D4),
        fg: Rgb::from_u32(0x93948D),
    };

    pub const DARK: Self = Self {
        sheet_bg: Rgb::from_u32(0x212120),
        centered_bg: Rgb::from_u32(0x202020),
        underlay: Rgb::from_u32(0x3E3E3E),
        cancel_bg: Rgb::from_u32(0x2C2C2E),
        border: Rgb::from_u32(0x3A3939),
        fg: Rgb::from_u32(0x7D7C7C),
    };

    #[must_use]
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::LIGHT,
            ColorScheme::Dark => Self::DARK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
