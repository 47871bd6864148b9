#![forbid(unsafe_code)]

//! Policy-as-data configuration for action sheets.
//!
//! Captures every tunable of the sheet as a single [`SheetPolicy`] that can be
//! loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # actsheet.toml
//! [timing]
//! appear_ms = 300
//! appear_easing = "ease_out"
//!
//! [overlay]
//! dark_opacity = 0.6
//!
//! [presentation]
//! centered_threshold = 700.0
//! ```
//!
//! ```rust,ignore
//! let policy = SheetPolicy::from_toml_file("actsheet.toml")?.validated()?;
//! let sheet = ActionSheet::mount_with_config(&env, options, policy.to_sheet_config(), children);
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the built-in behavior, so
//! `SheetPolicy::default().to_sheet_config() == SheetConfig::default()`.

#[cfg(feature = "policy-config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use actsheet_core::Os;
use actsheet_style::{Rgb, SheetMetrics};
use actsheet_widgets::sheet::{
    NOTCHED_INSET, NOTCHED_SCREEN_HEIGHTS, OverlayConfig, PresentationSelector, SafeAreaPolicy,
    SafeAreaTable, SheetConfig, SheetEasing, TransitionTiming,
};
#[cfg(feature = "policy-config")]
use tracing::debug;

/// Longest transition a policy may configure.
pub const MAX_TRANSITION_MS: u64 = 10_000;

// ---------------------------------------------------------------------------
// Top-level SheetPolicy
// ---------------------------------------------------------------------------

/// Top-level policy for action sheets.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct SheetPolicy {
    /// Entrance and exit transitions for both variants.
    pub timing: TimingPolicyConfig,

    /// Dim overlay behind the bottom sheet.
    pub overlay: OverlayPolicyConfig,

    /// Bottom sheet versus centered card.
    pub presentation: PresentationPolicyConfig,

    /// Bottom inset detection.
    pub safe_area: SafeAreaPolicyConfig,

    /// Chrome geometry.
    pub metrics: SheetMetrics,
}

impl SheetPolicy {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, PolicyError> {
        toml::from_str(s).map_err(PolicyError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyError::Io)?;
        let policy = Self::from_toml_str(&content)?;
        debug!(path = %path.as_ref().display(), "sheet policy loaded");
        Ok(policy)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, PolicyError> {
        serde_json::from_str(s).map_err(PolicyError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyError::Io)?;
        let policy = Self::from_json_str(&content)?;
        debug!(path = %path.as_ref().display(), "sheet policy loaded");
        Ok(policy)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the policy
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, ms) in [
            ("timing.appear_ms", self.timing.appear_ms),
            ("timing.disappear_ms", self.timing.disappear_ms),
            ("timing.fade_in_ms", self.timing.fade_in_ms),
            ("timing.fade_out_ms", self.timing.fade_out_ms),
        ] {
            if ms > MAX_TRANSITION_MS {
                errors.push(format!("{name} must be <= {MAX_TRANSITION_MS}, got {ms}"));
            }
        }

        for (name, opacity) in [
            ("overlay.light_opacity", self.overlay.light_opacity),
            ("overlay.dark_opacity", self.overlay.dark_opacity),
            ("metrics.shadow_opacity", self.metrics.shadow_opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                errors.push(format!("{name} must be in [0, 1], got {opacity}"));
            }
        }

        if self.presentation.centered_threshold <= 0.0 {
            errors.push(format!(
                "presentation.centered_threshold must be > 0, got {}",
                self.presentation.centered_threshold
            ));
        }
        if self.presentation.centered_width <= 0.0 {
            errors.push(format!(
                "presentation.centered_width must be > 0, got {}",
                self.presentation.centered_width
            ));
        }

        if self.safe_area.inset < 0.0 {
            errors.push(format!(
                "safe_area.inset must be >= 0, got {}",
                self.safe_area.inset
            ));
        }
        if let Some(h) = self.safe_area.screen_heights.iter().find(|h| **h <= 0.0) {
            errors.push(format!("safe_area.screen_heights must be > 0, got {h}"));
        }
        if let Some(inset) = self.safe_area.fixed_inset.filter(|inset| *inset < 0.0) {
            errors.push(format!("safe_area.fixed_inset must be >= 0, got {inset}"));
        }

        for (name, value) in [
            ("metrics.cancel_height", self.metrics.cancel_height),
            ("metrics.confirm_height", self.metrics.confirm_height),
        ] {
            if value <= 0.0 {
                errors.push(format!("{name} must be > 0, got {value}"));
            }
        }
        for (name, value) in [
            ("metrics.border_radius", self.metrics.border_radius),
            ("metrics.container_gap", self.metrics.container_gap),
            ("metrics.horizontal_margin", self.metrics.horizontal_margin),
            ("metrics.centered_radius", self.metrics.centered_radius),
            ("metrics.shadow_radius", self.metrics.shadow_radius),
            ("metrics.title_padding", self.metrics.title_padding),
            ("metrics.hairline_width", self.metrics.hairline_width),
        ] {
            if value < 0.0 {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }

        errors
    }

    /// Return `self` if it validates, otherwise every problem found.
    pub fn validated(self) -> Result<Self, PolicyError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(PolicyError::Validation(errors))
        }
    }

    /// Build the bottom sheet [`TransitionTiming`] from this policy.
    #[must_use]
    pub fn to_bottom_sheet_timing(&self) -> TransitionTiming {
        TransitionTiming::bottom_sheet()
            .appear(
                Duration::from_millis(self.timing.appear_ms),
                self.timing.appear_easing,
            )
            .disappear(
                Duration::from_millis(self.timing.disappear_ms),
                self.timing.disappear_easing,
            )
    }

    /// Build the centered-card [`TransitionTiming`] from this policy.
    #[must_use]
    pub fn to_centered_timing(&self) -> TransitionTiming {
        TransitionTiming::centered()
            .appear(Duration::from_millis(self.timing.fade_in_ms), SheetEasing::Linear)
            .disappear(Duration::from_millis(self.timing.fade_out_ms), SheetEasing::Linear)
    }

    /// Build an [`OverlayConfig`] from this policy.
    #[must_use]
    pub fn to_overlay_config(&self) -> OverlayConfig {
        OverlayConfig::default()
            .color(self.overlay.color)
            .opacities(self.overlay.light_opacity, self.overlay.dark_opacity)
    }

    /// Build a [`PresentationSelector`] from this policy.
    #[must_use]
    pub fn to_presentation_selector(&self) -> PresentationSelector {
        PresentationSelector::default()
            .threshold(self.presentation.centered_threshold)
            .centered_width(self.presentation.centered_width)
    }

    /// Build a [`SafeAreaPolicy`] from this policy.
    #[must_use]
    pub fn to_safe_area_policy(&self) -> SafeAreaPolicy {
        match self.safe_area.fixed_inset {
            Some(inset) => SafeAreaPolicy::HostInset(inset),
            None => SafeAreaPolicy::KnownDevices(SafeAreaTable {
                os: self.safe_area.os,
                screen_heights: self.safe_area.screen_heights.clone(),
                inset: self.safe_area.inset,
            }),
        }
    }

    /// Build the full widget [`SheetConfig`].
    #[must_use]
    pub fn to_sheet_config(&self) -> SheetConfig {
        SheetConfig::new()
            .bottom_sheet_timing(self.to_bottom_sheet_timing())
            .centered_timing(self.to_centered_timing())
            .overlay(self.to_overlay_config())
            .selector(self.to_presentation_selector())
            .safe_area(self.to_safe_area_policy())
            .metrics(self.metrics)
    }

    /// Format as a JSONL line for structured logging.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        format!(
            r#"{{"schema":"sheet-policy-v1","appear_ms":{},"disappear_ms":{},"fade_in_ms":{},"fade_out_ms":{},"overlay_light":{},"overlay_dark":{},"centered_threshold":{}}}"#,
            self.timing.appear_ms,
            self.timing.disappear_ms,
            self.timing.fade_in_ms,
            self.timing.fade_out_ms,
            self.overlay.light_opacity,
            self.overlay.dark_opacity,
            self.presentation.centered_threshold,
        )
    }
}

// ---------------------------------------------------------------------------
// Sub-configs (flat, serde-friendly)
// ---------------------------------------------------------------------------

/// Transition policy for both variants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct TimingPolicyConfig {
    /// Bottom sheet slide-in duration. Default: 400.
    pub appear_ms: u64,
    /// Bottom sheet slide-in curve. Default: `ease_out_quint`.
    #[cfg_attr(
        feature = "policy-config",
        serde(serialize_with = "serialize_easing", deserialize_with = "deserialize_easing")
    )]
    pub appear_easing: SheetEasing,
    /// Bottom sheet slide-out duration. Default: 100.
    pub disappear_ms: u64,
    /// Bottom sheet slide-out curve. Default: `linear`.
    #[cfg_attr(
        feature = "policy-config",
        serde(serialize_with = "serialize_easing", deserialize_with = "deserialize_easing")
    )]
    pub disappear_easing: SheetEasing,
    /// Centered card fade-in duration. Default: 50.
    pub fade_in_ms: u64,
    /// Centered card fade-out duration. Default: 200.
    pub fade_out_ms: u64,
}

impl Default for TimingPolicyConfig {
    fn default() -> Self {
        Self {
            appear_ms: 400,
            appear_easing: SheetEasing::EaseOutQuint,
            disappear_ms: 100,
            disappear_easing: SheetEasing::Linear,
            fade_in_ms: 50,
            fade_out_ms: 200,
        }
    }
}

/// Overlay policy parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct OverlayPolicyConfig {
    /// Overlay color. Default: `#000000`.
    pub color: Rgb,
    /// Fully-shown opacity, light appearance. Default: 0.2.
    pub light_opacity: f64,
    /// Fully-shown opacity, dark appearance. Default: 0.5.
    pub dark_opacity: f64,
}

impl Default for OverlayPolicyConfig {
    fn default() -> Self {
        let overlay = OverlayConfig::default();
        Self {
            color: overlay.color,
            light_opacity: overlay.light_opacity,
            dark_opacity: overlay.dark_opacity,
        }
    }
}

/// Presentation policy parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct PresentationPolicyConfig {
    /// Window widths above this use the centered card. Default: 800.
    pub centered_threshold: f64,
    /// Centered card width. Default: 360.
    pub centered_width: f64,
}

impl Default for PresentationPolicyConfig {
    fn default() -> Self {
        let selector = PresentationSelector::default();
        Self {
            centered_threshold: selector.threshold,
            centered_width: selector.centered_width,
        }
    }
}

/// Safe-area policy parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct SafeAreaPolicyConfig {
    /// Platform whose phones the height table applies to. Default: `ios`.
    pub os: Os,
    /// Screen heights that get the inset. Default: `[812, 896]`.
    pub screen_heights: Vec<f64>,
    /// Inset for matching devices. Default: 24.
    pub inset: f64,
    /// Use this inset on every device instead of the table. Default: none.
    pub fixed_inset: Option<f64>,
}

impl Default for SafeAreaPolicyConfig {
    fn default() -> Self {
        Self {
            os: Os::Ios,
            screen_heights: NOTCHED_SCREEN_HEIGHTS.to_vec(),
            inset: NOTCHED_INSET,
            fixed_inset: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a sheet policy.
#[derive(Debug)]
pub enum PolicyError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for PolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for SheetEasing
// ---------------------------------------------------------------------------

#[cfg(feature = "policy-config")]
fn serialize_easing<S>(easing: &SheetEasing, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let s = match easing {
        SheetEasing::Linear => "linear",
        SheetEasing::EaseOut => "ease_out",
        SheetEasing::EaseOutQuint => "ease_out_quint",
        SheetEasing::EaseIn => "ease_in",
    };
    serializer.serialize_str(s)
}

#[cfg(feature = "policy-config")]
fn deserialize_easing<'de, D>(deserializer: D) -> Result<SheetEasing, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "linear" | "Linear" => Ok(SheetEasing::Linear),
        "ease_out" | "EaseOut" => Ok(SheetEasing::EaseOut),
        "ease_out_quint" | "EaseOutQuint" => Ok(SheetEasing::EaseOutQuint),
        "ease_in" | "EaseIn" => Ok(SheetEasing::EaseIn),
        other => Err(serde::de::Error::custom(format!(
            "unknown easing: {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_widget_defaults() {
        assert_eq!(SheetPolicy::default().to_sheet_config(), SheetConfig::default());
    }

    #[test]
    fn default_validates_clean() {
        let errors = SheetPolicy::default().validate();
        assert!(errors.is_empty(), "default should validate: {errors:?}");
    }

    #[test]
    fn validate_catches_bad_opacity() {
        let mut policy = SheetPolicy::default();
        policy.overlay.dark_opacity = 1.5;
        let errors = policy.validate();
        assert!(errors.iter().any(|e| e.contains("overlay.dark_opacity")));
    }

    #[test]
    fn validate_catches_long_transition() {
        let mut policy = SheetPolicy::default();
        policy.timing.fade_out_ms = 60_000;
        let errors = policy.validate();
        assert!(errors.iter().any(|e| e.contains("timing.fade_out_ms")));
    }

    #[test]
    fn validate_catches_bad_threshold() {
        let mut policy = SheetPolicy::default();
        policy.presentation.centered_threshold = 0.0;
        let errors = policy.validate();
        assert!(errors.iter().any(|e| e.contains("centered_threshold")));
    }

    #[test]
    fn validate_catches_negative_insets() {
        let mut policy = SheetPolicy::default();
        policy.safe_area.inset = -1.0;
        policy.safe_area.fixed_inset = Some(-2.0);
        policy.safe_area.screen_heights.push(0.0);
        let errors = policy.validate();
        assert!(errors.iter().any(|e| e.contains("safe_area.inset")));
        assert!(errors.iter().any(|e| e.contains("safe_area.fixed_inset")));
        assert!(errors.iter().any(|e| e.contains("safe_area.screen_heights")));
    }

    #[test]
    fn validate_catches_bad_metrics() {
        let mut policy = SheetPolicy::default();
        policy.metrics.cancel_height = 0.0;
        policy.metrics.border_radius = -3.0;
        policy.metrics.confirm_height = -1.0;
        policy.metrics.hairline_width = -0.5;
        let errors = policy.validate();
        assert!(errors.iter().any(|e| e.contains("metrics.cancel_height")));
        assert!(errors.iter().any(|e| e.contains("metrics.border_radius")));
        assert!(errors.iter().any(|e| e.contains("metrics.confirm_height")));
        assert!(errors.iter().any(|e| e.contains("metrics.hairline_width")));
    }

    #[test]
    fn validated_returns_every_error() {
        let mut policy = SheetPolicy::default();
        policy.overlay.light_opacity = -0.1;
        policy.presentation.centered_width = 0.0;
        match policy.validated() {
            Err(PolicyError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(SheetPolicy::default().validated().is_ok());
    }

    #[test]
    fn fixed_inset_overrides_table() {
        let mut policy = SheetPolicy::default();
        policy.safe_area.fixed_inset = Some(34.0);
        assert_eq!(policy.to_safe_area_policy(), SafeAreaPolicy::HostInset(34.0));
    }

    #[test]
    fn timing_conversion() {
        let mut policy = SheetPolicy::default();
        policy.timing.appear_ms = 250;
        policy.timing.appear_easing = SheetEasing::EaseOut;
        let timing = policy.to_bottom_sheet_timing();
        assert_eq!(timing.appear_duration, Duration::from_millis(250));
        assert_eq!(timing.appear_easing, SheetEasing::EaseOut);
        assert_eq!(timing.disappear_duration, Duration::from_millis(100));
    }

    #[test]
    fn to_jsonl_produces_valid_json() {
        let jsonl = SheetPolicy::default().to_jsonl();
        assert!(jsonl.starts_with('{'));
        assert!(jsonl.ends_with('}'));
        assert!(jsonl.contains("sheet-policy-v1"));
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let policy = SheetPolicy::from_toml_str(
            r##"
            [timing]
            appear_ms = 300
            appear_easing = "ease_out"

            [overlay]
            color = "#101010"
            "##,
        )
        .expect("valid toml");
        assert_eq!(policy.timing.appear_ms, 300);
        assert_eq!(policy.timing.appear_easing, SheetEasing::EaseOut);
        assert_eq!(policy.timing.disappear_ms, 100);
        assert_eq!(policy.overlay.color, Rgb::from_u32(0x101010));
        assert_eq!(policy.overlay.dark_opacity, 0.5);
        assert_eq!(policy.metrics, SheetMetrics::DEFAULT);
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn unknown_easing_is_rejected() {
        let err = SheetPolicy::from_json_str(r#"{"timing":{"appear_easing":"bounce"}}"#)
            .expect_err("bounce is not an easing");
        assert!(matches!(err, PolicyError::Json(_)));
        assert!(err.to_string().contains("unknown easing"));
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn json_serialization_names_easing() {
        let json = serde_json::to_string(&SheetPolicy::default()).expect("serializable");
        assert!(json.contains(r#""appear_easing":"ease_out_quint""#));
        assert!(json.contains(r##""color":"#000000""##));
        let back = SheetPolicy::from_json_str(&json).expect("own output parses");
        assert_eq!(back, SheetPolicy::default());
    }
}
