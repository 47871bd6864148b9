#![forbid(unsafe_code)]

//! The action sheet itself.
//!
//! [`ActionSheet`] wires the trackers, the offset resolver, the presentation
//! selector, and one [`AnimationController`] into a single mounted instance.
//! The host drives it with layout reports, input events, and ticks, and asks
//! it for a [`SheetFrame`] whenever it repaints.
//!
//! # Invariants
//!
//! - The dismissal callback runs at most once, and only from `tick` when an
//!   exit transition completes. Unmounting never runs it.
//! - Tracker callbacks and [`SheetHandle`]s hold weak references; once the
//!   sheet is dropped they do nothing.
//! - No `RefCell` borrow is held while caller code (children or the
//!   dismissal callback) runs.
//!
//! # Failure Modes
//!
//! - A bottom sheet whose host never reports the panel or parent height
//!   never starts its entrance; it can still be dismissed.
//! - Switching variants discards measurements; the host must report layout
//!   again for the new view tree.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use actsheet_core::{
    ColorScheme, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardState, PointerEvent,
    PointerEventKind, Rect, ScreenMetrics,
};
use actsheet_runtime::{HostEnvironment, Subscription};
use actsheet_style::{Palette, SheetMetrics};
use tracing::{debug, trace};
use web_time::Instant;

use super::animation::{AnimationController, AnimationPhase, TickOutcome, TransitionTiming};
use super::chrome::{Chrome, SheetAction, SheetBody, SheetFrame, SheetHit};
use super::config::{DismissFn, SheetConfig, SheetOptions};
use super::geometry::GeometryTracker;
use super::keyboard::KeyboardTracker;
use super::layout::{LayoutMeasurer, MeasuredHeights};
use super::offset::{OffsetResolver, SafeAreaPolicy};
use super::presentation::{PresentationSelector, PresentationVariant};

// ============================================================================
// Shared state
// ============================================================================

struct SheetState<T> {
    resolver: OffsetResolver,
    selector: PresentationSelector,
    bottom_timing: TransitionTiming,
    centered_timing: TransitionTiming,
    safe_bottom: bool,
    metrics: ScreenMetrics,
    keyboard: KeyboardState,
    scheme: ColorScheme,
    layout: LayoutMeasurer,
    bottom_offset: Option<f64>,
    variant: PresentationVariant,
    animation: AnimationController<T>,
}

impl<T> SheetState<T> {
    fn timing_for(&self, variant: PresentationVariant) -> TransitionTiming {
        match variant {
            PresentationVariant::BottomSheet => self.bottom_timing,
            PresentationVariant::Centered => self.centered_timing,
        }
    }

    fn set_metrics(&mut self, metrics: ScreenMetrics) {
        self.metrics = metrics;
        self.reselect_variant();
        self.recompute_offset();
        self.try_appear();
    }

    fn set_keyboard(&mut self, keyboard: KeyboardState) {
        self.keyboard = keyboard;
        self.recompute_offset();
        self.try_appear();
    }

    fn set_panel_height(&mut self, height: f64) {
        self.layout.record_panel(height);
        self.try_appear();
    }

    fn set_parent_height(&mut self, height: f64) {
        self.layout.record_parent(height);
        self.recompute_offset();
        self.try_appear();
    }

    fn set_host_inset(&mut self, inset: f64) {
        let policy = SafeAreaPolicy::HostInset(inset);
        self.resolver = OffsetResolver::new(self.resolver.platform(), policy);
        self.recompute_offset();
        self.try_appear();
    }

    /// An unmeasured parent leaves the previous offset in place.
    fn recompute_offset(&mut self) {
        let Some(offset) = self.resolver.resolve(
            self.metrics.screen_height,
            self.keyboard,
            self.layout.parent_height(),
            self.safe_bottom,
        ) else {
            return;
        };
        trace!(
            offset,
            keyboard = ?self.keyboard.top_edge(),
            parent_height = ?self.layout.parent_height(),
            "bottom offset resolved"
        );
        self.bottom_offset = Some(offset);
    }

    fn try_appear(&mut self) {
        let ready = match self.variant {
            PresentationVariant::Centered => true,
            PresentationVariant::BottomSheet => {
                self.layout.panel_height().is_some() && self.bottom_offset.is_some()
            }
        };
        if ready {
            self.animation.start_appear();
        }
    }

    fn reselect_variant(&mut self) {
        let next = self.selector.select(self.metrics.window_width);
        if next == self.variant || self.animation.is_cancelled() {
            return;
        }
        debug!(
            from = ?self.variant,
            to = ?next,
            window_width = self.metrics.window_width,
            "presentation variant switch"
        );
        self.variant = next;
        if self.animation.phase().is_terminal() {
            return;
        }
        let carried = self.animation.take_dismiss_request();
        self.animation = AnimationController::new(self.timing_for(next));
        self.layout.reset();
        self.bottom_offset = None;
        if let Some(request) = carried {
            self.animation.request_dismiss(request.result);
        }
    }

    /// Height of the full-screen container; the screen height until the
    /// host reports it.
    fn container_height(&self) -> f64 {
        self.layout
            .parent_height()
            .unwrap_or(self.metrics.screen_height)
    }

    fn translation(&self) -> Option<f64> {
        match self.variant {
            PresentationVariant::BottomSheet => {
                let panel = self.layout.panel_height()?;
                let offset = self.bottom_offset?;
                Some(self.animation.translation(panel, offset))
            }
            PresentationVariant::Centered => None,
        }
    }
}

// ============================================================================
// Handle and context
// ============================================================================

/// Weak handle that requests dismissal of a mounted sheet.
///
/// Any number of calls are allowed; only the first one that reaches a
/// mounted, not-yet-dismissing sheet has an effect.
pub struct SheetHandle<T> {
    state: Weak<RefCell<SheetState<T>>>,
}

impl<T> Clone for SheetHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<T> std::fmt::Debug for SheetHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetHandle")
            .field("alive", &(self.state.strong_count() > 0))
            .finish()
    }
}

impl<T> SheetHandle<T> {
    /// Start the exit transition carrying `result`. Returns `true` if this
    /// call started it.
    pub fn animate_out(&self, result: Option<T>) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let accepted = state.borrow_mut().animation.request_dismiss(result);
        accepted
    }

    /// Whether the sheet this handle points at still exists.
    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }
}

/// What the children callback receives on every render.
#[derive(Debug)]
pub struct SheetContext<T> {
    /// Dismissal entry point; cloneable and safe to keep past the render.
    pub handle: SheetHandle<T>,
    /// Rendering inside the centered card rather than the bottom panel.
    pub is_centered: bool,
    /// Chrome geometry, for title and confirm rows that match the frame.
    pub metrics: SheetMetrics,
    /// Colors for the current appearance.
    pub palette: Palette,
}

impl<T> Clone for SheetContext<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            is_centered: self.is_centered,
            metrics: self.metrics,
            palette: self.palette,
        }
    }
}

impl<T> SheetContext<T> {
    /// Request dismissal with `result`; see [`SheetHandle::animate_out`].
    pub fn animate_out(&self, result: Option<T>) -> bool {
        self.handle.animate_out(result)
    }
}

// ============================================================================
// ActionSheet
// ============================================================================

struct Snapshot {
    variant: PresentationVariant,
    scheme: ColorScheme,
    overlay_opacity: f64,
    opacity: f64,
    translate_y: Option<f64>,
    panel_top: f64,
    card_width: f64,
}

/// A mounted action sheet producing content of type `C` and dismissing with
/// an optional result of type `T`.
pub struct ActionSheet<T, C> {
    state: Rc<RefCell<SheetState<T>>>,
    dismiss: Option<DismissFn<T>>,
    children: Box<dyn FnMut(&SheetContext<T>) -> C>,
    chrome: Chrome,
    geometry: GeometryTracker,
    keyboard: KeyboardTracker,
    scheme_subscription: Option<Subscription>,
    inset_subscription: Option<Subscription>,
    last_tick: Option<Instant>,
}

impl<T: 'static, C> ActionSheet<T, C> {
    /// Mount with the default [`SheetConfig`].
    pub fn mount(
        env: &HostEnvironment,
        options: SheetOptions<T>,
        children: impl FnMut(&SheetContext<T>) -> C + 'static,
    ) -> Self {
        Self::mount_with_config(env, options, SheetConfig::default(), children)
    }

    /// Mount, subscribing to the host's dimension, keyboard, and appearance
    /// sources.
    ///
    /// A host-reported bottom inset replaces the configured safe-area
    /// policy and is followed as the host updates it.
    pub fn mount_with_config(
        env: &HostEnvironment,
        options: SheetOptions<T>,
        config: SheetConfig,
        children: impl FnMut(&SheetContext<T>) -> C + 'static,
    ) -> Self {
        let SheetOptions {
            safe_bottom,
            show_frame,
            cancel_text,
            cancel_color,
            dismiss,
        } = options;

        let policy = match &env.safe_area_bottom {
            Some(inset) => SafeAreaPolicy::HostInset(inset.get()),
            None => config.safe_area.clone(),
        };
        let metrics = ScreenMetrics::from(env.dimensions.current());
        let variant = config.selector.select(metrics.window_width);

        let state = Rc::new(RefCell::new(SheetState {
            resolver: OffsetResolver::new(env.platform, policy),
            selector: config.selector,
            bottom_timing: config.bottom_sheet,
            centered_timing: config.centered,
            safe_bottom,
            metrics,
            keyboard: KeyboardState::HIDDEN,
            scheme: env.color_scheme.get(),
            layout: LayoutMeasurer::new(),
            bottom_offset: None,
            variant,
            animation: AnimationController::new(config.timing_for(variant)),
        }));

        let weak = Rc::downgrade(&state);
        let geometry = GeometryTracker::mount(env.dimensions.as_ref(), move |metrics| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().set_metrics(metrics);
            }
        });

        let weak = Rc::downgrade(&state);
        let keyboard = KeyboardTracker::mount(env.keyboard.as_ref(), move |keyboard| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().set_keyboard(keyboard);
            }
        });

        let weak = Rc::downgrade(&state);
        let scheme_subscription = env.color_scheme.subscribe(move |scheme| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().scheme = *scheme;
            }
        });

        let inset_subscription = env.safe_area_bottom.as_ref().map(|inset| {
            let weak = Rc::downgrade(&state);
            inset.subscribe(move |inset| {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().set_host_inset(*inset);
                }
            })
        });

        state.borrow_mut().try_appear();
        debug!(
            ?variant,
            window_width = metrics.window_width,
            screen_height = metrics.screen_height,
            "action sheet mounted"
        );

        Self {
            state,
            dismiss: Some(dismiss),
            children: Box::new(children),
            chrome: Chrome {
                show_frame,
                cancel_text,
                cancel_color,
                metrics: config.metrics,
                overlay: config.overlay,
            },
            geometry,
            keyboard,
            scheme_subscription: Some(scheme_subscription),
            inset_subscription,
            last_tick: None,
        }
    }

    /// A weak handle for requesting dismissal from outside `render`.
    pub fn handle(&self) -> SheetHandle<T> {
        SheetHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Layout report for the panel (bottom sheet) or card (centered).
    pub fn on_panel_layout(&mut self, height: f64) {
        self.state.borrow_mut().set_panel_height(height);
    }

    /// Layout report for the full-screen container.
    pub fn on_parent_layout(&mut self, height: f64) {
        self.state.borrow_mut().set_parent_height(height);
    }

    /// Request dismissal with `result`. Returns `true` if this call started
    /// the exit transition.
    pub fn animate_out(&self, result: Option<T>) -> bool {
        self.state.borrow_mut().animation.request_dismiss(result)
    }

    /// Advance animations by `delta`. Runs the dismissal callback if the
    /// exit transition completes.
    pub fn tick(&mut self, delta: Duration) -> AnimationPhase {
        let outcome = self.state.borrow_mut().animation.tick(delta);
        if let TickOutcome::Dismissed(result) = outcome {
            self.fire_dismiss(result);
        }
        self.phase()
    }

    /// Advance animations to the wall-clock instant `now`. The first call
    /// only records the instant.
    pub fn tick_at(&mut self, now: Instant) -> AnimationPhase {
        let delta = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        self.tick(delta)
    }

    /// Map an input event to a dismissal.
    ///
    /// `hit` overrides hit testing for pointer events; pass `None` to let
    /// the sheet classify the pointer position itself. Returns the action
    /// only if it started the exit transition.
    pub fn handle_event(&mut self, event: &Event, hit: Option<SheetHit>) -> Option<SheetAction> {
        let action = match event {
            Event::Key(KeyEvent {
                code: KeyCode::Back | KeyCode::Escape,
                kind: KeyEventKind::Press,
            }) => SheetAction::BackPressed,
            Event::Pointer(PointerEvent {
                x,
                y,
                kind: PointerEventKind::Up,
            }) => match hit.unwrap_or_else(|| self.hit_test(*x, *y)) {
                SheetHit::Backdrop => SheetAction::BackdropTapped,
                SheetHit::Cancel => SheetAction::CancelPressed,
                SheetHit::Content => return None,
            },
            _ => return None,
        };
        self.animate_out(None).then_some(action)
    }

    /// Classify a point against the current geometry.
    ///
    /// An unmeasured bottom panel is all backdrop; an unmeasured centered
    /// card is classified by its column alone.
    pub fn hit_test(&self, x: f64, y: f64) -> SheetHit {
        let s = self.state.borrow();
        let width = s.metrics.window_width;
        let container_height = s.container_height();
        let panel_height = s.layout.panel_height();

        match s.variant {
            PresentationVariant::BottomSheet => {
                let Some(panel_height) = panel_height else {
                    return SheetHit::Backdrop;
                };
                let top = container_height + s.translation().unwrap_or(0.0);
                let panel = Rect::new(0.0, top, width, panel_height);
                if !panel.contains(x, y) {
                    return SheetHit::Backdrop;
                }
                if !self.chrome.show_frame {
                    return SheetHit::Content;
                }
                let metrics = &self.chrome.metrics;
                let cancel = Rect::new(
                    0.0,
                    panel.bottom() - metrics.cancel_height,
                    width,
                    metrics.cancel_height,
                )
                .inset_x(metrics.horizontal_margin);
                if cancel.contains(x, y) {
                    SheetHit::Cancel
                } else {
                    SheetHit::Content
                }
            }
            PresentationVariant::Centered => {
                let card_width = s.selector.card_width(width);
                let left = (width - card_width) / 2.0;
                // Until the card reports its height, only its column is known.
                let card = match panel_height {
                    Some(card_height) => Rect::new(
                        left,
                        (container_height - card_height) / 2.0,
                        card_width,
                        card_height,
                    ),
                    None => Rect::new(left, 0.0, card_width, container_height),
                };
                if card.contains(x, y) {
                    SheetHit::Content
                } else {
                    SheetHit::Backdrop
                }
            }
        }
    }

    /// Build the frame for the current state, invoking the children
    /// callback once.
    pub fn render(&mut self) -> SheetFrame<C> {
        let snap = {
            let s = self.state.borrow();
            let target = self.chrome.overlay.target(s.scheme);
            Snapshot {
                variant: s.variant,
                scheme: s.scheme,
                overlay_opacity: s.animation.overlay_opacity(target),
                opacity: s.animation.opacity(),
                translate_y: s.translation(),
                panel_top: s.container_height(),
                card_width: s.selector.card_width(s.metrics.window_width),
            }
        };

        let palette = Palette::for_scheme(snap.scheme);
        let ctx = SheetContext {
            handle: self.handle(),
            is_centered: snap.variant.is_centered(),
            metrics: self.chrome.metrics,
            palette,
        };
        let content = (self.children)(&ctx);

        match snap.variant {
            PresentationVariant::BottomSheet => {
                let body = if self.chrome.show_frame {
                    SheetBody::Framed {
                        container: self.chrome.container(&palette),
                        content,
                        cancel: self.chrome.cancel(&palette),
                    }
                } else {
                    SheetBody::Bare(content)
                };
                SheetFrame::BottomSheet {
                    overlay: self.chrome.overlay.color.with_opacity(snap.overlay_opacity),
                    translate_y: snap.translate_y,
                    panel_top: snap.panel_top,
                    body,
                }
            }
            PresentationVariant::Centered => SheetFrame::Centered {
                opacity: snap.opacity,
                card: self.chrome.card(&palette, snap.card_width),
                content,
            },
        }
    }

    fn fire_dismiss(&mut self, result: Option<T>) {
        if let Some(dismiss) = self.dismiss.take() {
            debug!(has_result = result.is_some(), "invoking dismiss callback");
            dismiss(result);
        }
    }
}

impl<T, C> ActionSheet<T, C> {
    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.state.borrow().animation.phase()
    }

    /// Raw animation progress (0 = hidden, 1 = shown).
    pub fn progress(&self) -> f64 {
        self.state.borrow().animation.progress()
    }

    #[inline]
    pub fn variant(&self) -> PresentationVariant {
        self.state.borrow().variant
    }

    pub fn bottom_offset(&self) -> Option<f64> {
        self.state.borrow().bottom_offset
    }

    /// Current panel translation; `None` until it can be computed.
    pub fn translation(&self) -> Option<f64> {
        self.state.borrow().translation()
    }

    pub fn measured(&self) -> MeasuredHeights {
        self.state.borrow().layout.heights()
    }

    pub fn screen_metrics(&self) -> ScreenMetrics {
        self.geometry.metrics()
    }

    pub fn keyboard(&self) -> KeyboardState {
        self.keyboard.state()
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.state.borrow().scheme
    }

    pub fn is_animating(&self) -> bool {
        self.state.borrow().animation.is_animating()
    }

    pub fn is_mounted(&self) -> bool {
        self.geometry.is_mounted()
    }

    /// Release every subscription and stop any running transition. The
    /// dismissal callback is dropped without being called.
    pub fn unmount(&mut self) {
        if !self.geometry.is_mounted() {
            return;
        }
        self.geometry.unmount();
        self.keyboard.unmount();
        self.scheme_subscription = None;
        self.inset_subscription = None;
        self.dismiss = None;
        let (phase, interrupted) = {
            let mut s = self.state.borrow_mut();
            let phase = s.animation.phase();
            (phase, s.animation.cancel())
        };
        debug!(?phase, interrupted, "action sheet unmounted");
    }
}

impl<T, C> Drop for ActionSheet<T, C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<T, C> std::fmt::Debug for ActionSheet<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("ActionSheet")
            .field("variant", &s.variant)
            .field("phase", &s.animation.phase())
            .field("bottom_offset", &s.bottom_offset)
            .field("measured", &s.layout.heights())
            .field("mounted", &self.geometry.is_mounted())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
