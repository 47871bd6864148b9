#![forbid(unsafe_code)]

//! Stateless event emitter.
//!
//! Unlike [`Observable`](super::Observable), an [`Emitter`] keeps no current
//! value: every `emit` is delivered, even if it repeats the previous event.
//! Hosts use it for notifications such as keyboard frame changes where
//! "nothing is known yet" is the natural initial state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace_span;

use super::Subscription;

type ListenerRc<E> = Rc<dyn Fn(&E)>;
type ListenerWeak<E> = Weak<dyn Fn(&E)>;

/// A multicast event source with RAII listener registration.
///
/// Cloning an `Emitter` yields another handle to the same listener list.
pub struct Emitter<E> {
    listeners: Rc<RefCell<Vec<ListenerWeak<E>>>>,
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<E> std::fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("listener_count", &self.listeners.borrow().len())
            .finish()
    }
}

impl<E: 'static> Emitter<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Dropping the guard removes it.
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let strong: ListenerRc<E> = Rc::new(listener);
        self.listeners.borrow_mut().push(Rc::downgrade(&strong));
        Subscription::from_guard(strong)
    }

    /// Deliver `event` to every live listener in registration order.
    ///
    /// Returns the number of listeners reached.
    pub fn emit(&self, event: &E) -> usize {
        let live: Vec<ListenerRc<E>> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.retain(|w| w.strong_count() > 0);
            listeners.iter().filter_map(|w| w.upgrade()).collect()
        };
        if live.is_empty() {
            return 0;
        }

        let _span = trace_span!(
            "actsheet.notify",
            source = "emitter",
            subscribers = live.len() as u64
        )
        .entered();
        for listener in &live {
            listener(event);
        }
        live.len()
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}
