#![forbid(unsafe_code)]

//! Bottom offset resolution.
//!
//! The bottom offset is how far above the bottom of its parent the panel
//! must settle: the keyboard's intrusion when a keyboard overlaps the parent,
//! otherwise the device's bottom safe-area inset.
//!
//! # Invariants
//!
//! - The result is `None` exactly when the parent height is unmeasured.
//! - The keyboard only counts when its top edge lies strictly inside
//!   `(0, parent_height)`.
//! - With `safe_bottom == false` the inset contribution is always 0.

use actsheet_core::{KeyboardState, Os, Platform};

/// Screen heights of notched phones that need the fixed bottom inset.
pub const NOTCHED_SCREEN_HEIGHTS: [f64; 2] = [812.0, 896.0];

/// Fixed bottom inset for devices in [`NOTCHED_SCREEN_HEIGHTS`].
pub const NOTCHED_INSET: f64 = 24.0;

const HEIGHT_EPSILON: f64 = 1e-6;

/// Lookup table of devices that need a bottom inset, keyed by screen height.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeAreaTable {
    pub os: Os,
    pub screen_heights: Vec<f64>,
    pub inset: f64,
}

impl Default for SafeAreaTable {
    fn default() -> Self {
        Self {
            os: Os::Ios,
            screen_heights: NOTCHED_SCREEN_HEIGHTS.to_vec(),
            inset: NOTCHED_INSET,
        }
    }
}

impl SafeAreaTable {
    /// Whether a device on `platform` with `screen_height` is in the table.
    /// Only phones qualify.
    pub fn matches(&self, platform: Platform, screen_height: f64) -> bool {
        platform.os == self.os
            && platform.form_factor.is_phone()
            && self
                .screen_heights
                .iter()
                .any(|h| (h - screen_height).abs() < HEIGHT_EPSILON)
    }
}

/// Where the bottom inset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SafeAreaPolicy {
    /// Detect notched devices by screen height.
    KnownDevices(SafeAreaTable),
    /// Use the inset the host reported, on any device.
    HostInset(f64),
}

impl Default for SafeAreaPolicy {
    fn default() -> Self {
        Self::KnownDevices(SafeAreaTable::default())
    }
}

impl SafeAreaPolicy {
    /// Inset for a device, before the `safe_bottom` switch is applied.
    pub fn inset(&self, platform: Platform, screen_height: f64) -> f64 {
        match self {
            Self::KnownDevices(table) if table.matches(platform, screen_height) => table.inset,
            Self::KnownDevices(_) => 0.0,
            Self::HostInset(inset) => inset.max(0.0),
        }
    }
}

/// Computes the bottom offset from screen, keyboard, and parent geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetResolver {
    platform: Platform,
    policy: SafeAreaPolicy,
}

impl OffsetResolver {
    pub fn new(platform: Platform, policy: SafeAreaPolicy) -> Self {
        Self { platform, policy }
    }

    #[inline]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[inline]
    pub fn policy(&self) -> &SafeAreaPolicy {
        &self.policy
    }

    /// Device inset honoring the caller's `safe_bottom` switch.
    pub fn device_inset(&self, screen_height: f64, safe_bottom: bool) -> f64 {
        if !safe_bottom {
            return 0.0;
        }
        self.policy.inset(self.platform, screen_height)
    }

    /// Resolve the bottom offset, or `None` while the parent is unmeasured.
    pub fn resolve(
        &self,
        screen_height: f64,
        keyboard: KeyboardState,
        parent_height: Option<f64>,
        safe_bottom: bool,
    ) -> Option<f64> {
        let parent_height = parent_height?;
        match keyboard.top_edge() {
            Some(top) if top > 0.0 && top < parent_height => Some(parent_height - top),
            _ => Some(self.device_inset(screen_height, safe_bottom)),
        }
    }
}

impl Default for OffsetResolver {
    fn default() -> Self {
        Self::new(Platform::default(), SafeAreaPolicy::default())
    }
}
