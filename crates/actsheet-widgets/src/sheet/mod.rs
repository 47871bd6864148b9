#![forbid(unsafe_code)]

//! Modal action sheet.
//!
//! A bottom sheet on narrow windows, a centered card on wide ones. The
//! pieces are usable on their own; [`ActionSheet`] composes them.
//!
//! - [`GeometryTracker`] / [`KeyboardTracker`]: host subscriptions.
//! - [`LayoutMeasurer`]: panel and parent heights.
//! - [`OffsetResolver`]: how far above the bottom edge the panel settles.
//! - [`AnimationController`]: phase machine and progress.
//! - [`PresentationSelector`]: bottom sheet or centered card.

pub mod action_sheet;
pub mod animation;
pub mod chrome;
pub mod config;
pub mod geometry;
pub mod keyboard;
pub mod layout;
pub mod offset;
pub mod presentation;

pub use action_sheet::{ActionSheet, SheetContext, SheetHandle};
pub use animation::{
    AnimationController, AnimationPhase, DismissRequest, SheetEasing, TickOutcome,
    TransitionTiming,
};
pub use chrome::{
    CancelButton, CardStyle, ContainerStyle, OverlayConfig, SheetAction, SheetBody, SheetFrame,
    SheetHit,
};
pub use config::{
    DEFAULT_CANCEL_COLOR, DEFAULT_CANCEL_TEXT, DismissFn, SheetConfig, SheetOptions,
};
pub use geometry::GeometryTracker;
pub use keyboard::KeyboardTracker;
pub use layout::{LayoutMeasurer, MeasuredHeights};
pub use offset::{
    NOTCHED_INSET, NOTCHED_SCREEN_HEIGHTS, OffsetResolver, SafeAreaPolicy, SafeAreaTable,
};
pub use presentation::{CENTERED_THRESHOLD, PresentationSelector, PresentationVariant};
