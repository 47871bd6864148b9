#![forbid(unsafe_code)]

//! Screen and window tracking for a mounted sheet.

use std::cell::Cell;
use std::rc::Rc;

use actsheet_core::ScreenMetrics;
use actsheet_runtime::{DimensionSource, Subscription};

/// Follows a [`DimensionSource`] for as long as it stays mounted.
///
/// Only the screen height and window width are tracked. Dimension updates
/// that leave both unchanged are not forwarded.
#[derive(Debug)]
pub struct GeometryTracker {
    latest: Rc<Cell<ScreenMetrics>>,
    subscription: Option<Subscription>,
}

impl GeometryTracker {
    /// Read the current metrics and subscribe for changes. `on_change` runs
    /// after the tracker's own value is updated.
    pub fn mount(source: &dyn DimensionSource, on_change: impl Fn(ScreenMetrics) + 'static) -> Self {
        let latest = Rc::new(Cell::new(ScreenMetrics::from(source.current())));
        let slot = Rc::clone(&latest);
        let subscription = source.subscribe(Box::new(move |dims| {
            let metrics = ScreenMetrics::from(dims);
            if slot.get() == metrics {
                return;
            }
            slot.set(metrics);
            on_change(metrics);
        }));
        Self {
            latest,
            subscription: Some(subscription),
        }
    }

    #[inline]
    pub fn metrics(&self) -> ScreenMetrics {
        self.latest.get()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Drop the subscription. Later dimension changes are not observed.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actsheet_core::{Dimensions, Size};
    use actsheet_runtime::Observable;
    use std::cell::RefCell;

    #[test]
    fn reports_initial_and_updates() {
        let dims = Observable::new(Dimensions::uniform(375.0, 812.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let tracker = GeometryTracker::mount(&dims, move |m| sink.borrow_mut().push(m));

        assert_eq!(tracker.metrics(), ScreenMetrics::new(812.0, 375.0));
        dims.set(Dimensions::uniform(812.0, 375.0));
        assert_eq!(tracker.metrics(), ScreenMetrics::new(375.0, 812.0));
        assert_eq!(*seen.borrow(), vec![ScreenMetrics::new(375.0, 812.0)]);
    }

    #[test]
    fn irrelevant_changes_are_filtered() {
        let dims = Observable::new(Dimensions::uniform(375.0, 812.0));
        let count = Rc::new(Cell::new(0u32));
        let hits = Rc::clone(&count);
        let _tracker = GeometryTracker::mount(&dims, move |_| hits.set(hits.get() + 1));

        // Only the window height changes.
        dims.set(Dimensions::new(Size::new(375.0, 812.0), Size::new(375.0, 700.0)));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unmount_stops_updates() {
        let dims = Observable::new(Dimensions::uniform(375.0, 812.0));
        let mut tracker = GeometryTracker::mount(&dims, |_| {});
        assert_eq!(dims.subscriber_count(), 1);

        tracker.unmount();
        assert!(!tracker.is_mounted());
        dims.set(Dimensions::uniform(1024.0, 768.0));
        assert_eq!(tracker.metrics().window_width, 375.0);
        assert_eq!(dims.subscriber_count(), 0);
    }
}
