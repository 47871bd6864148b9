#![forbid(unsafe_code)]

//! Fixed chrome geometry in logical units.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of the framed bottom sheet and the centered card.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetMetrics {
    /// Corner radius of the content container and cancel button.
    pub border_radius: f64,
    /// Gap between the content container and the cancel button.
    pub container_gap: f64,
    /// Horizontal margin around the framed sheet.
    pub horizontal_margin: f64,
    pub cancel_height: f64,
    pub cancel_font_size: f64,
    pub cancel_padding: f64,
    /// Padding around an optional title row at the top of the content.
    pub title_padding: f64,
    pub title_font_size: f64,
    /// Height of each confirm row inside the content container.
    pub confirm_height: f64,
    pub confirm_font_size: f64,
    /// Separator between title and confirm rows.
    pub hairline_width: f64,
    pub centered_width: f64,
    pub centered_radius: f64,
    pub shadow_radius: f64,
    pub shadow_opacity: f64,
}

impl SheetMetrics {
    pub const DEFAULT: Self = Self {
        border_radius: 13.0,
        container_gap: 8.0,
        horizontal_margin: 10.0,
        cancel_height: 57.0,
        cancel_font_size: 20.0,
        cancel_padding: 10.0,
        title_padding: 14.0,
        title_font_size: 13.0,
        confirm_height: 57.0,
        confirm_font_size: 20.0,
        hairline_width: 0.5,
        centered_width: 360.0,
        centered_radius: 10.0,
        shadow_radius: 40.0,
        shadow_opacity: 0.2,
    };
}

impl SheetMetrics {
    /// One physical pixel in logical units on a display with `pixel_ratio`.
    ///
    /// Non-positive ratios fall back to one logical unit.
    #[must_use]
    pub fn hairline(pixel_ratio: f64) -> f64 {
        if pixel_ratio > 0.0 { 1.0 / pixel_ratio } else { 1.0 }
    }

    /// Same metrics with separators one physical pixel wide.
    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.hairline_width = Self::hairline(pixel_ratio);
        self
    }
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}
