#![forbid(unsafe_code)]

//! Choice between the bottom sheet and the centered dialog.

use actsheet_style::SheetMetrics;

/// Default window width above which the centered dialog is used.
pub const CENTERED_THRESHOLD: f64 = 800.0;

/// How the sheet is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationVariant {
    /// Panel sliding up from the bottom edge.
    #[default]
    BottomSheet,
    /// Fixed-width card fading in at the center.
    Centered,
}

impl PresentationVariant {
    #[inline]
    pub fn is_centered(self) -> bool {
        matches!(self, Self::Centered)
    }
}

/// Picks a [`PresentationVariant`] from the window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationSelector {
    /// Widths strictly greater than this select the centered dialog.
    pub threshold: f64,
    /// Width of the centered card.
    pub centered_width: f64,
}

impl Default for PresentationSelector {
    fn default() -> Self {
        Self {
            threshold: CENTERED_THRESHOLD,
            centered_width: SheetMetrics::DEFAULT.centered_width,
        }
    }
}

impl PresentationSelector {
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn centered_width(mut self, width: f64) -> Self {
        self.centered_width = width;
        self
    }

    pub fn select(&self, window_width: f64) -> PresentationVariant {
        if window_width > self.threshold {
            PresentationVariant::Centered
        } else {
            PresentationVariant::BottomSheet
        }
    }

    /// Card width on a window of `window_width`; never wider than the window.
    pub fn card_width(&self, window_width: f64) -> f64 {
        self.centered_width.min(window_width).max(0.0)
    }
}
