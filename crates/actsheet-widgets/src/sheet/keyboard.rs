#![forbid(unsafe_code)]

//! Keyboard tracking for a mounted sheet.

use std::cell::Cell;
use std::rc::Rc;

use actsheet_core::KeyboardState;
use actsheet_runtime::{KeyboardSource, Subscription};

/// Follows a normalized [`KeyboardSource`]. Starts hidden.
#[derive(Debug)]
pub struct KeyboardTracker {
    latest: Rc<Cell<KeyboardState>>,
    subscription: Option<Subscription>,
}

impl KeyboardTracker {
    /// Subscribe to `source`. Every reported state is forwarded, including
    /// repeats, so the caller can recompute on each notification.
    pub fn mount(source: &dyn KeyboardSource, on_change: impl Fn(KeyboardState) + 'static) -> Self {
        let latest = Rc::new(Cell::new(KeyboardState::HIDDEN));
        let slot = Rc::clone(&latest);
        let subscription = source.subscribe(Box::new(move |state| {
            slot.set(state);
            on_change(state);
        }));
        Self {
            latest,
            subscription: Some(subscription),
        }
    }

    #[inline]
    pub fn state(&self) -> KeyboardState {
        self.latest.get()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
    }
}
