#![forbid(unsafe_code)]

//! Per-mount options and widget tuning.

use actsheet_style::{Rgb, SheetMetrics};

use super::animation::TransitionTiming;
use super::chrome::OverlayConfig;
use super::offset::SafeAreaPolicy;
use super::presentation::{PresentationSelector, PresentationVariant};

/// Default cancel control label.
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Default cancel control color (`#0076FF`).
pub const DEFAULT_CANCEL_COLOR: Rgb = Rgb::from_u32(0x0076FF);

/// Callback receiving the sheet's result once it has fully disappeared.
pub type DismissFn<T> = Box<dyn FnOnce(Option<T>)>;

/// Caller options for one mounted sheet.
pub struct SheetOptions<T> {
    /// Reserve the device's bottom inset below the panel.
    pub safe_bottom: bool,
    /// Wrap content in the rounded container with a cancel control.
    pub show_frame: bool,
    pub cancel_text: String,
    pub cancel_color: Rgb,
    pub(crate) dismiss: DismissFn<T>,
}

impl<T> SheetOptions<T> {
    /// Options with defaults and the given dismissal callback.
    pub fn new(dismiss: impl FnOnce(Option<T>) + 'static) -> Self {
        Self {
            safe_bottom: true,
            show_frame: true,
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            cancel_color: DEFAULT_CANCEL_COLOR,
            dismiss: Box::new(dismiss),
        }
    }

    #[must_use]
    pub fn safe_bottom(mut self, safe_bottom: bool) -> Self {
        self.safe_bottom = safe_bottom;
        self
    }

    #[must_use]
    pub fn show_frame(mut self, show_frame: bool) -> Self {
        self.show_frame = show_frame;
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    #[must_use]
    pub fn cancel_color(mut self, color: Rgb) -> Self {
        self.cancel_color = color;
        self
    }
}

impl<T> std::fmt::Debug for SheetOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetOptions")
            .field("safe_bottom", &self.safe_bottom)
            .field("show_frame", &self.show_frame)
            .field("cancel_text", &self.cancel_text)
            .field("cancel_color", &self.cancel_color)
            .finish_non_exhaustive()
    }
}

/// Tuning shared by every sheet of an application.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub bottom_sheet: TransitionTiming,
    pub centered: TransitionTiming,
    pub overlay: OverlayConfig,
    pub selector: PresentationSelector,
    pub safe_area: SafeAreaPolicy,
    pub metrics: SheetMetrics,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            bottom_sheet: TransitionTiming::bottom_sheet(),
            centered: TransitionTiming::centered(),
            overlay: OverlayConfig::default(),
            selector: PresentationSelector::default(),
            safe_area: SafeAreaPolicy::default(),
            metrics: SheetMetrics::DEFAULT,
        }
    }
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bottom_sheet_timing(mut self, timing: TransitionTiming) -> Self {
        self.bottom_sheet = timing;
        self
    }

    #[must_use]
    pub fn centered_timing(mut self, timing: TransitionTiming) -> Self {
        self.centered = timing;
        self
    }

    #[must_use]
    pub fn overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn selector(mut self, selector: PresentationSelector) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub fn safe_area(mut self, policy: SafeAreaPolicy) -> Self {
        self.safe_area = policy;
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: SheetMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn timing_for(&self, variant: PresentationVariant) -> TransitionTiming {
        match variant {
            PresentationVariant::BottomSheet => self.bottom_sheet,
            PresentationVariant::Centered => self.centered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn option_defaults() {
        let opts = SheetOptions::<()>::new(|_| {});
        assert!(opts.safe_bottom);
        assert!(opts.show_frame);
        assert_eq!(opts.cancel_text, "Cancel");
        assert_eq!(opts.cancel_color.to_string(), "#0076FF");
        assert!(format!("{opts:?}").contains("show_frame"));
    }

    #[test]
    fn option_builders() {
        let opts = SheetOptions::<()>::new(|_| {})
            .safe_bottom(false)
            .show_frame(false)
            .cancel_text("Close")
            .cancel_color(Rgb::BLACK);
        assert!(!opts.safe_bottom);
        assert!(!opts.show_frame);
        assert_eq!(opts.cancel_text, "Close");
        assert_eq!(opts.cancel_color, Rgb::BLACK);
    }

    #[test]
    fn timings_per_variant() {
        let config = SheetConfig::new();
        let bottom = config.timing_for(PresentationVariant::BottomSheet);
        let centered = config.timing_for(PresentationVariant::Centered);
        assert_eq!(bottom.appear_duration, Duration::from_millis(400));
        assert_eq!(bottom.disappear_duration, Duration::from_millis(100));
        assert_eq!(centered.appear_duration, Duration::from_millis(50));
        assert_eq!(centered.disappear_duration, Duration::from_millis(200));
    }
}
