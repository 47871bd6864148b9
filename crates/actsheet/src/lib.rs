#![forbid(unsafe_code)]

//! actsheet public facade crate.
//!
//! Re-exports the types a host needs to present an action sheet: the host
//! environment and its reactive sources, the sheet widget itself, and the
//! policy loader that turns a TOML or JSON file into a [`SheetConfig`].
//!
//! ```rust,ignore
//! use actsheet::prelude::*;
//!
//! let env = HostEnvironment::new(Platform::ios_phone(), dims);
//! let options = SheetOptions::new(|choice: Option<&str>| println!("{choice:?}"));
//! let mut sheet = ActionSheet::mount(&env, options, |ctx| build_menu(ctx));
//! ```

mod error;
pub mod policy;

// --- Core re-exports -------------------------------------------------------

pub use actsheet_core::{
    ColorScheme, Dimensions, Event, FormFactor, KeyCode, KeyEvent, KeyEventKind, KeyboardFrame,
    KeyboardNotification, KeyboardState, Os, Platform, PointerEvent, PointerEventKind, Rect,
    ScreenMetrics, Size,
};

// --- Runtime re-exports ----------------------------------------------------

pub use actsheet_runtime::{
    DimensionSource, Emitter, FrameChangeKeyboard, HostEnvironment, KeyboardSource, NoKeyboard,
    Observable, PlatformKeyboard, ShowHideKeyboard, Subscription,
};

// --- Style re-exports ------------------------------------------------------

pub use actsheet_style::{ColorParseError, Palette, Rgb, SheetMetrics, Tint};

// --- Widget re-exports -----------------------------------------------------

pub use actsheet_widgets::{
    ActionSheet, AnimationPhase, OverlayConfig, PresentationSelector, PresentationVariant,
    SafeAreaPolicy, SheetAction, SheetConfig, SheetContext, SheetFrame, SheetHandle, SheetHit,
    SheetOptions, TransitionTiming,
};
pub use actsheet_widgets::sheet::{SheetBody, SheetEasing};

// --- Errors ---------------------------------------------------------------

pub use error::{Error, Result};
pub use policy::{PolicyError, SheetPolicy};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ActionSheet, AnimationPhase, Dimensions, Error, Event, HostEnvironment, KeyCode,
        Observable, Platform, PresentationVariant, Result, SheetAction, SheetConfig,
        SheetContext, SheetFrame, SheetHandle, SheetOptions, SheetPolicy,
    };

    pub use crate::{core, runtime, style, widgets};
}

pub use actsheet_core as core;
pub use actsheet_runtime as runtime;
pub use actsheet_style as style;
pub use actsheet_widgets as widgets;
