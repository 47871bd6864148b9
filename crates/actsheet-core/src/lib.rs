#![forbid(unsafe_code)]

//! Core: geometry, platform description, keyboard state, and input events.
//!
//! # Role in actsheet
//! `actsheet-core` is the shared vocabulary. Hosts report dimensions,
//! keyboard frames, and taps in these types; the runtime and widget crates
//! consume them without knowing anything about the host toolkit.
//!
//! # Primary responsibilities
//! - **Geometry**: logical-unit sizes, rectangles, and [`ScreenMetrics`].
//! - **Platform**: operating system, form factor, and color scheme.
//! - **Keyboard**: raw keyboard frames and the normalized [`KeyboardState`].
//! - **Event**: canonical input events (pointer and key).

pub mod event;
pub mod geometry;
pub mod keyboard;
pub mod platform;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, PointerEvent, PointerEventKind};
pub use geometry::{Dimensions, Rect, ScreenMetrics, Size};
pub use keyboard::{KeyboardFrame, KeyboardNotification, KeyboardState};
pub use platform::{ColorScheme, FormFactor, Os, Platform};
