#![forbid(unsafe_code)]

//! On-screen keyboard notifications and the normalized keyboard state.
//!
//! Platforms disagree on how they announce the soft keyboard: some send one
//! "frame will change" notification for every show, hide, and resize, others
//! send separate "did show" and "did hide" notifications. Both carry the
//! keyboard's end frame. [`KeyboardState`] is the single shape the rest of
//! the system sees.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// End frame of the keyboard in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyboardFrame {
    /// Y coordinate of the keyboard's top edge.
    pub screen_y: f64,
    /// Keyboard height. Zero (or less) means the keyboard is off screen.
    pub height: f64,
}

impl KeyboardFrame {
    pub const fn new(screen_y: f64, height: f64) -> Self {
        Self { screen_y, height }
    }
}

/// Raw keyboard notification as delivered by a host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyboardNotification {
    /// Unified show/hide/resize notification.
    WillChangeFrame(KeyboardFrame),
    /// Keyboard finished appearing.
    DidShow(KeyboardFrame),
    /// Keyboard finished disappearing.
    DidHide(KeyboardFrame),
}

impl KeyboardNotification {
    /// Normalize into a [`KeyboardState`].
    pub fn state(&self) -> KeyboardState {
        match *self {
            Self::WillChangeFrame(frame) | Self::DidShow(frame) => KeyboardState::from_frame(frame),
            Self::DidHide(_) => KeyboardState::HIDDEN,
        }
    }
}

/// Normalized keyboard state: the top edge, or unknown when hidden.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyboardState {
    top_edge: Option<f64>,
}

impl KeyboardState {
    /// No keyboard on screen (or nothing known about one).
    pub const HIDDEN: Self = Self { top_edge: None };

    /// A keyboard whose top edge sits at `screen_y`.
    pub const fn visible(screen_y: f64) -> Self {
        Self {
            top_edge: Some(screen_y),
        }
    }

    /// Normalize an end frame. A frame with no height is a hidden keyboard.
    pub fn from_frame(frame: KeyboardFrame) -> Self {
        if frame.height > 0.0 {
            Self::visible(frame.screen_y)
        } else {
            Self::HIDDEN
        }
    }

    /// Top edge in screen coordinates, if known.
    #[inline]
    pub fn top_edge(&self) -> Option<f64> {
        self.top_edge
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.top_edge.is_some()
    }
}
