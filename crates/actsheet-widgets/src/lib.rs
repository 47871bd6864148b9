#![forbid(unsafe_code)]

//! Action sheet widgets built on actsheet runtime sources.

pub mod sheet;

pub use sheet::{
    ActionSheet, AnimationPhase, OverlayConfig, PresentationSelector, PresentationVariant,
    SafeAreaPolicy, SheetAction, SheetConfig, SheetContext, SheetFrame, SheetHandle, SheetHit,
    SheetOptions, TransitionTiming,
};
