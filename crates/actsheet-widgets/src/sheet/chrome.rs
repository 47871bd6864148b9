#![forbid(unsafe_code)]

//! Frame description handed to the host renderer.
//!
//! A [`SheetFrame`] is a plain-data snapshot of one rendered frame: colors,
//! sizes, the animated transform or opacity, and the caller's content. The
//! host maps it onto its own view primitives.

use actsheet_core::ColorScheme;
use actsheet_style::{Palette, Rgb, SheetMetrics, Tint};

use super::presentation::PresentationVariant;

/// Dim overlay behind the bottom sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    pub color: Rgb,
    /// Fully-shown opacity with the light appearance.
    pub light_opacity: f64,
    /// Fully-shown opacity with the dark appearance.
    pub dark_opacity: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            light_opacity: 0.2,
            dark_opacity: 0.5,
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn opacities(mut self, light: f64, dark: f64) -> Self {
        self.light_opacity = light;
        self.dark_opacity = dark;
        self
    }

    /// Fully-shown opacity for `scheme`, clamped to `[0.0, 1.0]`.
    pub fn target(&self, scheme: ColorScheme) -> f64 {
        let opacity = match scheme {
            ColorScheme::Light => self.light_opacity,
            ColorScheme::Dark => self.dark_opacity,
        };
        opacity.clamp(0.0, 1.0)
    }
}

/// Region of the sheet under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetHit {
    /// Outside the panel or card.
    Backdrop,
    /// Inside the caller's content.
    Content,
    /// On the cancel control.
    Cancel,
}

/// Action emitted by `ActionSheet::handle_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetAction {
    BackdropTapped,
    CancelPressed,
    /// Hardware back or Escape.
    BackPressed,
}

/// Rounded container around framed content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    pub background: Rgb,
    pub border_radius: f64,
    /// Gap between the container and the cancel control.
    pub bottom_margin: f64,
    pub horizontal_margin: f64,
}

/// The cancel control drawn beneath framed content.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelButton {
    pub text: String,
    pub color: Rgb,
    pub background: Rgb,
    /// Background while pressed.
    pub underlay: Rgb,
    pub height: f64,
    pub border_radius: f64,
    pub font_size: f64,
    pub padding: f64,
}

/// The centered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub width: f64,
    pub background: Rgb,
    pub border_radius: f64,
    pub shadow: Tint,
    pub shadow_radius: f64,
}

/// Contents of the bottom sheet panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetBody<C> {
    Framed {
        container: ContainerStyle,
        content: C,
        cancel: CancelButton,
    },
    Bare(C),
}

impl<C> SheetBody<C> {
    pub fn content(&self) -> &C {
        match self {
            Self::Framed { content, .. } | Self::Bare(content) => content,
        }
    }

    pub fn is_framed(&self) -> bool {
        matches!(self, Self::Framed { .. })
    }
}

/// One rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetFrame<C> {
    BottomSheet {
        overlay: Tint,
        /// Vertical transform of the panel. `None` until the panel height
        /// and bottom offset are known; the panel is then drawn untransformed
        /// just below the container.
        translate_y: Option<f64>,
        /// Untransformed top edge of the panel (the container's height).
        panel_top: f64,
        body: SheetBody<C>,
    },
    Centered {
        opacity: f64,
        card: CardStyle,
        content: C,
    },
}

impl<C> SheetFrame<C> {
    pub fn variant(&self) -> PresentationVariant {
        match self {
            Self::BottomSheet { .. } => PresentationVariant::BottomSheet,
            Self::Centered { .. } => PresentationVariant::Centered,
        }
    }

    pub fn content(&self) -> &C {
        match self {
            Self::BottomSheet { body, .. } => body.content(),
            Self::Centered { content, .. } => content,
        }
    }
}

/// Display options the chrome is built from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Chrome {
    pub(crate) show_frame: bool,
    pub(crate) cancel_text: String,
    pub(crate) cancel_color: Rgb,
    pub(crate) metrics: SheetMetrics,
    pub(crate) overlay: OverlayConfig,
}

impl Chrome {
    pub(crate) fn container(&self, palette: &Palette) -> ContainerStyle {
        ContainerStyle {
            background: palette.sheet_bg,
            border_radius: self.metrics.border_radius,
            bottom_margin: self.metrics.container_gap,
            horizontal_margin: self.metrics.horizontal_margin,
        }
    }

    pub(crate) fn cancel(&self, palette: &Palette) -> CancelButton {
        CancelButton {
            text: self.cancel_text.clone(),
            color: self.cancel_color,
            background: palette.cancel_bg,
            underlay: palette.underlay,
            height: self.metrics.cancel_height,
            border_radius: self.metrics.border_radius,
            font_size: self.metrics.cancel_font_size,
            padding: self.metrics.cancel_padding,
        }
    }

    pub(crate) fn card(&self, palette: &Palette, width: f64) -> CardStyle {
        CardStyle {
            width,
            background: palette.centered_bg,
            border_radius: self.metrics.centered_radius,
            shadow: Rgb::BLACK.with_opacity(self.metrics.shadow_opacity),
            shadow_radius: self.metrics.shadow_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome() -> Chrome {
        Chrome {
            show_frame: true,
            cancel_text: "Cancel".into(),
            cancel_color: Rgb::from_u32(0x0076FF),
            metrics: SheetMetrics::DEFAULT,
            overlay: OverlayConfig::default(),
        }
    }

    #[test]
    fn overlay_targets_follow_scheme() {
        let overlay = OverlayConfig::default();
        assert_eq!(overlay.target(ColorScheme::Light), 0.2);
        assert_eq!(overlay.target(ColorScheme::Dark), 0.5);
        assert_eq!(overlay.opacities(2.0, -1.0).target(ColorScheme::Light), 1.0);
    }

    #[test]
    fn cancel_uses_palette_and_metrics() {
        let cancel = chrome().cancel(&Palette::DARK);
        assert_eq!(cancel.text, "Cancel");
        assert_eq!(cancel.background, Palette::DARK.cancel_bg);
        assert_eq!(cancel.height, 57.0);
        assert_eq!(cancel.border_radius, 13.0);
    }

    #[test]
    fn card_has_soft_shadow() {
        let card = chrome().card(&Palette::LIGHT, 360.0);
        assert_eq!(card.shadow.color, Rgb::BLACK);
        assert_eq!(card.shadow.opacity, 0.2);
        assert_eq!(card.shadow_radius, 40.0);
        assert_eq!(card.border_radius, 10.0);
    }

    #[test]
    fn frame_accessors() {
        let frame = SheetFrame::BottomSheet {
            overlay: Tint::default(),
            translate_y: None,
            panel_top: 700.0,
            body: SheetBody::Bare("menu"),
        };
        assert_eq!(frame.variant(), PresentationVariant::BottomSheet);
        assert_eq!(*frame.content(), "menu");
        assert!(matches!(frame, SheetFrame::BottomSheet { ref body, .. } if !body.is_framed()));
    }
}
