#![forbid(unsafe_code)]

//! Host-facing sources injected into a mounted sheet.
//!
//! A host (the toolkit glue that owns the real window) publishes dimension
//! and keyboard changes through these traits instead of the sheet querying
//! process-wide state. Each subscription is scoped to the sheet that made it
//! and ends when the returned [`Subscription`] is dropped.
//!
//! Keyboard wiring differs per platform. [`FrameChangeKeyboard`] consumes a
//! single unified "frame will change" stream; [`ShowHideKeyboard`] consumes
//! separate "did show" / "did hide" streams. Both implement
//! [`KeyboardSource`] and report the same [`KeyboardState`] shape.
//! [`PlatformKeyboard`] picks the right adapter for an [`Os`].

use std::rc::Rc;

use actsheet_core::{
    ColorScheme, Dimensions, KeyboardFrame, KeyboardNotification, KeyboardState, Os, Platform,
};
use tracing::trace;

use crate::reactive::{Emitter, Observable, Subscription};

/// Source of screen/window dimensions.
pub trait DimensionSource {
    /// Current dimensions.
    fn current(&self) -> Dimensions;

    /// Invoke `on_change` with every new value until the guard is dropped.
    fn subscribe(&self, on_change: Box<dyn Fn(&Dimensions)>) -> Subscription;
}

impl DimensionSource for Observable<Dimensions> {
    fn current(&self) -> Dimensions {
        self.get()
    }

    fn subscribe(&self, on_change: Box<dyn Fn(&Dimensions)>) -> Subscription {
        Observable::subscribe(self, move |dims| on_change(dims))
    }
}

/// Normalized keyboard notifications.
pub trait KeyboardSource {
    /// Invoke `on_change` with every normalized state until the guard is
    /// dropped. Nothing is delivered on subscribe; the initial state is
    /// [`KeyboardState::HIDDEN`].
    fn subscribe(&self, on_change: Box<dyn Fn(KeyboardState)>) -> Subscription;
}

/// Adapter for platforms that announce every keyboard change through one
/// frame-change notification.
#[derive(Debug, Clone, Default)]
pub struct FrameChangeKeyboard {
    frames: Emitter<KeyboardFrame>,
}

impl FrameChangeKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new keyboard end frame.
    pub fn frame_changed(&self, frame: KeyboardFrame) {
        trace!(screen_y = frame.screen_y, height = frame.height, "keyboard frame change");
        self.frames.emit(&frame);
    }
}

impl KeyboardSource for FrameChangeKeyboard {
    fn subscribe(&self, on_change: Box<dyn Fn(KeyboardState)>) -> Subscription {
        self.frames
            .subscribe(move |frame| on_change(KeyboardState::from_frame(*frame)))
    }
}

/// Adapter for platforms that send separate show and hide notifications.
#[derive(Debug, Clone, Default)]
pub struct ShowHideKeyboard {
    shown: Emitter<KeyboardFrame>,
    hidden: Emitter<KeyboardFrame>,
}

impl ShowHideKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The keyboard finished appearing with `frame`.
    pub fn did_show(&self, frame: KeyboardFrame) {
        trace!(screen_y = frame.screen_y, height = frame.height, "keyboard did show");
        self.shown.emit(&frame);
    }

    /// The keyboard finished disappearing.
    pub fn did_hide(&self, frame: KeyboardFrame) {
        trace!("keyboard did hide");
        self.hidden.emit(&frame);
    }
}

impl KeyboardSource for ShowHideKeyboard {
    fn subscribe(&self, on_change: Box<dyn Fn(KeyboardState)>) -> Subscription {
        let on_change: Rc<dyn Fn(KeyboardState)> = Rc::from(on_change);
        let on_show = Rc::clone(&on_change);
        Subscription::merge([
            self.shown
                .subscribe(move |frame| on_show(KeyboardState::from_frame(*frame))),
            self.hidden
                .subscribe(move |_| on_change(KeyboardState::HIDDEN)),
        ])
    }
}

/// Keyboard source for hosts without a soft keyboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKeyboard;

impl KeyboardSource for NoKeyboard {
    fn subscribe(&self, _on_change: Box<dyn Fn(KeyboardState)>) -> Subscription {
        Subscription::empty()
    }
}

/// Platform-selected keyboard adapter.
///
/// iOS delivers the unified frame-change notification; every other platform
/// is wired through show/hide. Notifications the selected adapter does not
/// listen to are dropped, matching what each platform actually sends.
#[derive(Debug, Clone)]
pub enum PlatformKeyboard {
    FrameChange(FrameChangeKeyboard),
    ShowHide(ShowHideKeyboard),
}

impl PlatformKeyboard {
    pub fn for_os(os: Os) -> Self {
        match os {
            Os::Ios => Self::FrameChange(FrameChangeKeyboard::new()),
            Os::Android | Os::Web | Os::Other => Self::ShowHide(ShowHideKeyboard::new()),
        }
    }

    /// Feed a raw host notification. Returns `false` if this platform's
    /// adapter does not listen to that notification kind.
    pub fn post(&self, notification: KeyboardNotification) -> bool {
        match (self, notification) {
            (Self::FrameChange(kb), KeyboardNotification::WillChangeFrame(frame)) => {
                kb.frame_changed(frame);
                true
            }
            (Self::ShowHide(kb), KeyboardNotification::DidShow(frame)) => {
                kb.did_show(frame);
                true
            }
            (Self::ShowHide(kb), KeyboardNotification::DidHide(frame)) => {
                kb.did_hide(frame);
                true
            }
            _ => {
                trace!(?notification, "keyboard notification ignored on this platform");
                false
            }
        }
    }
}

impl KeyboardSource for PlatformKeyboard {
    fn subscribe(&self, on_change: Box<dyn Fn(KeyboardState)>) -> Subscription {
        match self {
            Self::FrameChange(kb) => kb.subscribe(on_change),
            Self::ShowHide(kb) => kb.subscribe(on_change),
        }
    }
}

/// Everything a sheet needs from its host.
#[derive(Clone)]
pub struct HostEnvironment {
    pub platform: Platform,
    pub dimensions: Rc<dyn DimensionSource>,
    pub keyboard: Rc<dyn KeyboardSource>,
    pub color_scheme: Observable<ColorScheme>,
    /// Bottom safe-area inset reported by the host, when it can report one.
    /// Hosts update it when the inset changes, e.g. on rotation.
    pub safe_area_bottom: Option<Observable<f64>>,
}

impl HostEnvironment {
    /// Environment with no keyboard, light appearance, and no host inset.
    pub fn new(platform: Platform, dimensions: Rc<dyn DimensionSource>) -> Self {
        Self {
            platform,
            dimensions,
            keyboard: Rc::new(NoKeyboard),
            color_scheme: Observable::new(ColorScheme::Light),
            safe_area_bottom: None,
        }
    }

    #[must_use]
    pub fn keyboard(mut self, keyboard: Rc<dyn KeyboardSource>) -> Self {
        self.keyboard = keyboard;
        self
    }

    #[must_use]
    pub fn color_scheme(mut self, scheme: Observable<ColorScheme>) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Report a bottom inset that never changes.
    #[must_use]
    pub fn safe_area_bottom(self, inset: f64) -> Self {
        self.safe_area_source(Observable::new(inset))
    }

    /// Report a bottom inset the host keeps current.
    #[must_use]
    pub fn safe_area_source(mut self, inset: Observable<f64>) -> Self {
        self.safe_area_bottom = Some(inset);
        self
    }
}

impl std::fmt::Debug for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEnvironment")
            .field("platform", &self.platform)
            .field("dimensions", &self.dimensions.current())
            .field("color_scheme", &self.color_scheme.get())
            .field(
                "safe_area_bottom",
                &self.safe_area_bottom.as_ref().map(Observable::get),
            )
            .finish_non_exhaustive()
    }
}
