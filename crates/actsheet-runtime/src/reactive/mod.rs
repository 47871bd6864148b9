#![forbid(unsafe_code)]

//! Single-threaded reactive primitives.
//!
//! - [`Observable`]: a value with change notification.
//! - [`Emitter`]: a stateless multicast event source.
//! - [`Subscription`]: RAII guard; dropping it unsubscribes.

pub mod emitter;
pub mod observable;

pub use emitter::Emitter;
pub use observable::Observable;

/// RAII guard for one or more registered callbacks.
///
/// Dropping the `Subscription` drops the strong references that keep the
/// callbacks alive; the source only holds weak references, so the callbacks
/// become unreachable immediately.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    guards: Vec<Box<dyn std::any::Any>>,
}

impl Subscription {
    /// A subscription that holds nothing.
    pub fn empty() -> Self {
        Self { guards: Vec::new() }
    }

    pub(crate) fn from_guard(guard: impl std::any::Any) -> Self {
        Self {
            guards: vec![Box::new(guard)],
        }
    }

    /// Combine several subscriptions into one guard.
    pub fn merge(subscriptions: impl IntoIterator<Item = Subscription>) -> Self {
        Self {
            guards: subscriptions
                .into_iter()
                .flat_map(|s| s.guards)
                .collect(),
        }
    }

    /// Whether this guard keeps any callback alive.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("guards", &self.guards.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn merged_guard_releases_all_sources() {
        let a = Emitter::<u8>::new();
        let b = Observable::new(0u8);
        let hits = Rc::new(Cell::new(0u32));

        let ha = Rc::clone(&hits);
        let hb = Rc::clone(&hits);
        let sub = Subscription::merge([
            a.subscribe(move |_| ha.set(ha.get() + 1)),
            b.subscribe(move |_| hb.set(hb.get() + 1)),
        ]);
        assert!(!sub.is_empty());

        a.emit(&1);
        b.set(1);
        assert_eq!(hits.get(), 2);

        drop(sub);
        a.emit(&2);
        b.set(2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn empty_subscription() {
        assert!(Subscription::empty().is_empty());
        assert!(Subscription::merge(Vec::new()).is_empty());
    }
}
