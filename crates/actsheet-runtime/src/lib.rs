#![forbid(unsafe_code)]

//! Runtime plumbing for actsheet: reactive sources and host injection.
//!
//! # Role in actsheet
//! Sheets never query process-wide state. The host builds a
//! [`HostEnvironment`] out of the sources in [`host`] and hands it to each
//! sheet at mount time; the sheet subscribes and releases everything when it
//! is torn down.
//!
//! # Key components
//! - [`Observable`] / [`Emitter`] / [`Subscription`]: single-threaded change
//!   notification with RAII unsubscription.
//! - [`DimensionSource`] and [`KeyboardSource`]: the injected seams.
//! - [`FrameChangeKeyboard`], [`ShowHideKeyboard`], [`PlatformKeyboard`]:
//!   per-platform keyboard adapters behind one normalized interface.

pub mod host;
pub mod reactive;

pub use host::{
    DimensionSource, FrameChangeKeyboard, HostEnvironment, KeyboardSource, NoKeyboard,
    PlatformKeyboard, ShowHideKeyboard,
};
pub use reactive::{Emitter, Observable, Subscription};
