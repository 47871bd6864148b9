#![forbid(unsafe_code)]

//! Description of the running platform.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Os {
    Ios,
    Android,
    Web,
    #[default]
    Other,
}

/// Device form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FormFactor {
    #[default]
    Phone,
    Tablet,
    Tv,
}

impl FormFactor {
    /// Handheld phones are the only form factor with hardware cut-outs
    /// at the bottom edge.
    #[inline]
    pub fn is_phone(self) -> bool {
        matches!(self, Self::Phone)
    }
}

/// Operating system plus form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Platform {
    pub os: Os,
    pub form_factor: FormFactor,
}

impl Platform {
    pub const fn new(os: Os, form_factor: FormFactor) -> Self {
        Self { os, form_factor }
    }

    /// An iOS phone.
    pub const fn ios_phone() -> Self {
        Self::new(Os::Ios, FormFactor::Phone)
    }

    /// An Android phone.
    pub const fn android_phone() -> Self {
        Self::new(Os::Android, FormFactor::Phone)
    }
}

/// System appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Platform::default().os, Os::Other);
        assert!(Platform::default().form_factor.is_phone());
        assert!(!ColorScheme::default().is_dark());
    }

    #[test]
    fn tablet_and_tv_are_not_phones() {
        assert!(!FormFactor::Tablet.is_phone());
        assert!(!FormFactor::Tv.is_phone());
    }
}
