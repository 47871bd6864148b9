#![forbid(unsafe_code)]

//! Animation controller for sheet entrance and exit.
//!
//! One [`AnimationController`] exists per mounted sheet variant. It owns the
//! single normalized progress value (0 = hidden, 1 = shown) and is the only
//! thing that mutates it. Everything else reads derived values: translation
//! for the bottom sheet, opacity for the centered dialog, overlay dimming.
//!
//! # Example
//!
//! ```ignore
//! let mut anim = AnimationController::<()>::new(TransitionTiming::bottom_sheet());
//! anim.start_appear();
//! anim.tick(Duration::from_millis(16));
//! let y = anim.translation(panel_height, bottom_offset);
//! ```
//!
//! # Invariants
//!
//! - Phases only move forward: Idle → Appearing → Shown → Disappearing →
//!   Dismissed. Idle and Appearing may jump straight to Disappearing.
//! - `start_appear` succeeds at most once per controller.
//! - A dismissal request is accepted at most once; the carried result is
//!   handed out by exactly one `tick` (the one reaching `Dismissed`).
//! - Progress is always in [0.0, 1.0].
//!
//! # Failure Modes
//!
//! - Zero-duration transitions complete on the next tick.
//! - After [`cancel`](AnimationController::cancel) every operation is a
//!   no-op and the pending result is dropped without being reported.

use std::time::Duration;

use tracing::{debug, trace};

// ============================================================================
// Phase
// ============================================================================

/// Lifecycle of one mounted sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationPhase {
    /// Mounted, waiting for measurements.
    #[default]
    Idle,
    /// Entrance transition running.
    Appearing,
    /// Fully presented.
    Shown,
    /// Exit transition running; a dismissal result is pending.
    Disappearing,
    /// Exit finished. Terminal.
    Dismissed,
}

impl AnimationPhase {
    /// Check if a transition is in progress.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Appearing | Self::Disappearing)
    }

    /// Check if a dismissal request would be accepted.
    #[inline]
    pub fn accepts_dismissal(self) -> bool {
        matches!(self, Self::Idle | Self::Appearing | Self::Shown)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Dismissed)
    }
}

// ============================================================================
// Easing
// ============================================================================

/// Easing curve applied to the time fraction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetEasing {
    #[default]
    Linear,
    /// Cubic ease-out.
    EaseOut,
    /// Quintic ease-out; a long, soft landing.
    EaseOutQuint,
    /// Cubic ease-in.
    EaseIn,
}

impl SheetEasing {
    /// Apply the curve to `t`, clamped to [0.0, 1.0].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseOutQuint => 1.0 - (1.0 - t).powi(5),
            Self::EaseIn => t * t * t,
        }
    }
}

// ============================================================================
// Timing
// ============================================================================

/// Durations and curves for one variant's entrance and exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub appear_duration: Duration,
    pub appear_easing: SheetEasing,
    pub disappear_duration: Duration,
    pub disappear_easing: SheetEasing,
}

impl TransitionTiming {
    /// Slide up over 400ms with a quintic ease-out, slide away in 100ms.
    pub const fn bottom_sheet() -> Self {
        Self {
            appear_duration: Duration::from_millis(400),
            appear_easing: SheetEasing::EaseOutQuint,
            disappear_duration: Duration::from_millis(100),
            disappear_easing: SheetEasing::Linear,
        }
    }

    /// Fade in over 50ms, fade out over 200ms.
    pub const fn centered() -> Self {
        Self {
            appear_duration: Duration::from_millis(50),
            appear_easing: SheetEasing::Linear,
            disappear_duration: Duration::from_millis(200),
            disappear_easing: SheetEasing::Linear,
        }
    }

    /// No motion; both transitions finish on the next tick.
    pub const fn instant() -> Self {
        Self {
            appear_duration: Duration::ZERO,
            appear_easing: SheetEasing::Linear,
            disappear_duration: Duration::ZERO,
            disappear_easing: SheetEasing::Linear,
        }
    }

    #[must_use]
    pub fn appear(mut self, duration: Duration, easing: SheetEasing) -> Self {
        self.appear_duration = duration;
        self.appear_easing = easing;
        self
    }

    #[must_use]
    pub fn disappear(mut self, duration: Duration, easing: SheetEasing) -> Self {
        self.disappear_duration = duration;
        self.disappear_easing = easing;
        self
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Result of advancing the controller by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome<T> {
    /// Nothing is animating.
    Inactive,
    /// A transition advanced but has not finished.
    Running,
    /// The entrance transition finished during this tick.
    Shown,
    /// The exit transition finished during this tick. Carries the result of
    /// the dismissal request; reported exactly once.
    Dismissed(Option<T>),
}

/// An accepted dismissal that has not been reported yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissRequest<T> {
    pub result: Option<T>,
}

/// Phase machine plus the progress value it drives.
#[derive(Debug, Clone)]
pub struct AnimationController<T> {
    phase: AnimationPhase,
    /// Current progress in [0.0, 1.0].
    progress: f64,
    /// Progress at the start of the running transition.
    from: f64,
    elapsed: Duration,
    timing: TransitionTiming,
    pending: Option<DismissRequest<T>>,
    cancelled: bool,
}

impl<T> AnimationController<T> {
    /// New controller in `Idle` at progress 0.
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            phase: AnimationPhase::Idle,
            progress: 0.0,
            from: 0.0,
            elapsed: Duration::ZERO,
            timing,
            pending: None,
            cancelled: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Raw progress (0 = hidden, 1 = shown).
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.cancelled && self.phase.is_animating()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Begin the entrance transition.
    ///
    /// Only succeeds from `Idle`, so calling it on every readiness update is
    /// safe: the entrance runs once.
    pub fn start_appear(&mut self) -> bool {
        if self.cancelled || self.phase != AnimationPhase::Idle {
            return false;
        }
        self.enter(AnimationPhase::Appearing);
        true
    }

    /// Begin the exit transition, carrying `result` to the eventual
    /// dismissal.
    ///
    /// From `Appearing` the entrance is cut short and the exit runs from the
    /// current progress. Returns `false` (and drops `result`) if a dismissal
    /// is already under way or the controller was cancelled.
    pub fn request_dismiss(&mut self, result: Option<T>) -> bool {
        if self.cancelled || !self.phase.accepts_dismissal() {
            trace!(phase = ?self.phase, "dismissal request ignored");
            return false;
        }
        self.pending = Some(DismissRequest { result });
        self.enter(AnimationPhase::Disappearing);
        true
    }

    /// Advance the running transition by `delta`.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome<T> {
        if self.cancelled {
            return TickOutcome::Inactive;
        }
        match self.phase {
            AnimationPhase::Appearing => {
                let t = self.advance(delta, self.timing.appear_duration);
                let eased = self.timing.appear_easing.apply(t);
                self.progress = (self.from + (1.0 - self.from) * eased).clamp(0.0, 1.0);
                if t >= 1.0 {
                    self.progress = 1.0;
                    self.transition(AnimationPhase::Shown);
                    return TickOutcome::Shown;
                }
                TickOutcome::Running
            }
            AnimationPhase::Disappearing => {
                let t = self.advance(delta, self.timing.disappear_duration);
                let eased = self.timing.disappear_easing.apply(t);
                self.progress = (self.from * (1.0 - eased)).clamp(0.0, 1.0);
                if t >= 1.0 {
                    self.progress = 0.0;
                    self.transition(AnimationPhase::Dismissed);
                    let result = self.pending.take().and_then(|req| req.result);
                    return TickOutcome::Dismissed(result);
                }
                TickOutcome::Running
            }
            AnimationPhase::Idle | AnimationPhase::Shown | AnimationPhase::Dismissed => {
                TickOutcome::Inactive
            }
        }
    }

    /// Stop whatever is running. The controller goes inert and any pending
    /// dismissal is dropped without being reported.
    ///
    /// Returns `true` if a transition was interrupted.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        let interrupted = self.phase.is_animating();
        self.cancelled = true;
        self.pending = None;
        debug!(phase = ?self.phase, interrupted, "animation cancelled");
        interrupted
    }

    /// Move a pending dismissal out of this controller so a replacement
    /// can finish it. The controller is cancelled afterwards.
    ///
    /// Returns `None` unless the controller is `Disappearing`.
    pub fn take_dismiss_request(&mut self) -> Option<DismissRequest<T>> {
        if self.cancelled || self.phase != AnimationPhase::Disappearing {
            return None;
        }
        let request = self.pending.take();
        self.cancel();
        request
    }

    /// Vertical translation of the bottom sheet panel.
    ///
    /// Progress 0 keeps the panel just below the container; progress 1
    /// lifts it by its own height plus the bottom offset.
    pub fn translation(&self, panel_height: f64, bottom_offset: f64) -> f64 {
        -(panel_height + bottom_offset) * self.progress
    }

    /// Opacity of the dim overlay for a given fully-shown target.
    pub fn overlay_opacity(&self, target: f64) -> f64 {
        target.clamp(0.0, 1.0) * self.progress
    }

    /// Opacity of the centered dialog.
    pub fn opacity(&self) -> f64 {
        self.progress
    }

    fn enter(&mut self, phase: AnimationPhase) {
        self.from = self.progress;
        self.elapsed = Duration::ZERO;
        self.transition(phase);
    }

    fn transition(&mut self, to: AnimationPhase) {
        debug!(from = ?self.phase, to = ?to, progress = self.progress, "sheet phase transition");
        self.phase = to;
    }

    /// Accumulate `delta` and return the time fraction of `duration`.
    fn advance(&mut self, delta: Duration, duration: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(delta);
        if duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn bottom() -> AnimationController<&'static str> {
        AnimationController::new(TransitionTiming::bottom_sheet())
    }

    fn run_until_settled<T>(anim: &mut AnimationController<T>) -> Vec<TickOutcome<T>> {
        let mut outcomes = Vec::new();
        for _ in 0..1000 {
            let outcome = anim.tick(FRAME);
            let done = !matches!(outcome, TickOutcome::Running);
            outcomes.push(outcome);
            if done {
                break;
            }
        }
        outcomes
    }

    // -------------------------------------------------------------------------
    // Phase transitions
    // -------------------------------------------------------------------------

    #[test]
    fn phase_predicates() {
        assert!(!AnimationPhase::Idle.is_animating());
        assert!(AnimationPhase::Appearing.is_animating());
        assert!(AnimationPhase::Disappearing.is_animating());
        assert!(AnimationPhase::Shown.accepts_dismissal());
        assert!(!AnimationPhase::Disappearing.accepts_dismissal());
        assert!(AnimationPhase::Dismissed.is_terminal());
    }

    #[test]
    fn appear_starts_only_once() {
        let mut anim = bottom();
        assert!(anim.start_appear());
        assert!(!anim.start_appear());
        run_until_settled(&mut anim);
        assert_eq!(anim.phase(), AnimationPhase::Shown);
        assert!(!anim.start_appear());
    }

    #[test]
    fn appear_completes_at_full_progress() {
        let mut anim = bottom();
        anim.start_appear();
        assert_eq!(anim.tick(Duration::from_millis(200)), TickOutcome::Running);
        let mid = anim.progress();
        assert!(mid > 0.5, "ease-out should be past halfway at half time, got {mid}");
        assert_eq!(anim.tick(Duration::from_millis(200)), TickOutcome::Shown);
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.tick(FRAME), TickOutcome::Inactive);
    }

    #[test]
    fn dismiss_from_shown_reports_result_once() {
        let mut anim = bottom();
        anim.start_appear();
        run_until_settled(&mut anim);

        assert!(anim.request_dismiss(Some("picked")));
        assert_eq!(anim.phase(), AnimationPhase::Disappearing);
        let outcomes = run_until_settled(&mut anim);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Dismissed(Some("picked"))));
        assert_eq!(anim.phase(), AnimationPhase::Dismissed);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.tick(FRAME), TickOutcome::Inactive);
    }

    #[test]
    fn disappear_uses_short_duration() {
        let mut anim = bottom();
        anim.start_appear();
        run_until_settled(&mut anim);
        anim.request_dismiss(None);

        assert_eq!(anim.tick(Duration::from_millis(50)), TickOutcome::Running);
        assert!((anim.progress() - 0.5).abs() < 1e-9, "linear exit at half time");
        assert_eq!(anim.tick(Duration::from_millis(50)), TickOutcome::Dismissed(None));
    }

    #[test]
    fn double_dismiss_while_appearing_is_idempotent() {
        let mut anim = bottom();
        anim.start_appear();
        anim.tick(Duration::from_millis(100));
        let cut_at = anim.progress();

        assert!(anim.request_dismiss(Some("first")));
        assert!(!anim.request_dismiss(Some("second")));
        assert_eq!(anim.phase(), AnimationPhase::Disappearing);
        assert_eq!(anim.progress(), cut_at);

        let outcomes = run_until_settled(&mut anim);
        let dismissals: Vec<_> = outcomes
            .iter()
            .filter(|o| matches!(o, TickOutcome::Dismissed(_)))
            .collect();
        assert_eq!(dismissals, vec![&TickOutcome::Dismissed(Some("first"))]);
    }

    #[test]
    fn dismiss_while_appearing_descends_from_current_progress() {
        let mut anim = bottom();
        anim.start_appear();
        anim.tick(Duration::from_millis(100));
        let cut_at = anim.progress();
        anim.request_dismiss(None);

        anim.tick(Duration::from_millis(50));
        assert!(anim.progress() < cut_at);
        assert!(anim.progress() > 0.0);
    }

    #[test]
    fn dismiss_from_idle_skips_entrance() {
        let mut anim = bottom();
        assert!(anim.request_dismiss(None));
        assert!(!anim.start_appear());
        let outcomes = run_until_settled(&mut anim);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Dismissed(None)));
        assert!(outcomes.iter().all(|o| !matches!(o, TickOutcome::Shown)));
    }

    #[test]
    fn dismissed_is_terminal() {
        let mut anim = AnimationController::<u8>::new(TransitionTiming::instant());
        anim.request_dismiss(Some(1));
        assert_eq!(anim.tick(FRAME), TickOutcome::Dismissed(Some(1)));
        assert!(!anim.request_dismiss(Some(2)));
        assert!(!anim.start_appear());
        assert_eq!(anim.tick(FRAME), TickOutcome::Inactive);
    }

    // -------------------------------------------------------------------------
    // Cancellation
    // -------------------------------------------------------------------------

    #[test]
    fn cancel_mid_exit_drops_result() {
        let mut anim = bottom();
        anim.start_appear();
        anim.request_dismiss(Some("lost"));
        anim.tick(FRAME);

        assert!(anim.cancel());
        assert!(!anim.cancel());
        assert!(!anim.is_animating());
        let outcomes = run_until_settled(&mut anim);
        assert_eq!(outcomes, vec![TickOutcome::Inactive]);
        assert!(!anim.request_dismiss(None));
    }

    #[test]
    fn cancel_when_idle_reports_no_interruption() {
        let mut anim = bottom();
        assert!(!anim.cancel());
        assert!(anim.is_cancelled());
        assert!(!anim.start_appear());
    }

    #[test]
    fn dismiss_request_handoff() {
        let mut old = bottom();
        assert!(old.take_dismiss_request().is_none());
        old.request_dismiss(Some("carried"));

        let request = old.take_dismiss_request().expect("pending request");
        assert!(old.is_cancelled());
        assert_eq!(request.result, Some("carried"));

        let mut new = AnimationController::new(TransitionTiming::centered());
        assert!(new.request_dismiss(request.result));
        let outcomes = run_until_settled(&mut new);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Dismissed(Some("carried"))));
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    #[test]
    fn translation_settles_at_panel_plus_offset() {
        let mut anim = bottom();
        assert_eq!(anim.translation(300.0, 24.0), 0.0);
        anim.start_appear();
        run_until_settled(&mut anim);
        assert_eq!(anim.translation(300.0, 24.0), -324.0);
    }

    #[test]
    fn overlay_follows_progress() {
        let mut anim = bottom();
        anim.start_appear();
        run_until_settled(&mut anim);
        assert!((anim.overlay_opacity(0.5) - 0.5).abs() < 1e-9);
        assert!((anim.overlay_opacity(0.2) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn centered_timing_fades() {
        let mut anim = AnimationController::<()>::new(TransitionTiming::centered());
        anim.start_appear();
        anim.tick(Duration::from_millis(25));
        assert!((anim.opacity() - 0.5).abs() < 1e-9);
        assert_eq!(anim.tick(Duration::from_millis(25)), TickOutcome::Shown);
        assert_eq!(anim.opacity(), 1.0);
    }

    #[test]
    fn zero_duration_completes_on_next_tick() {
        let mut anim = AnimationController::<()>::new(TransitionTiming::instant());
        anim.start_appear();
        assert_eq!(anim.tick(Duration::ZERO), TickOutcome::Shown);
    }

    // -------------------------------------------------------------------------
    // Easing
    // -------------------------------------------------------------------------

    #[test]
    fn easing_endpoints_and_clamp() {
        for easing in [
            SheetEasing::Linear,
            SheetEasing::EaseOut,
            SheetEasing::EaseOutQuint,
            SheetEasing::EaseIn,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn ease_out_quint_decelerates_harder_than_cubic() {
        assert!(SheetEasing::EaseOutQuint.apply(0.3) > SheetEasing::EaseOut.apply(0.3));
        assert!(SheetEasing::EaseIn.apply(0.5) < SheetEasing::Linear.apply(0.5));
    }

    #[test]
    fn progress_always_in_bounds() {
        let mut anim = bottom();
        anim.start_appear();
        for i in 0..200 {
            if i == 10 {
                anim.request_dismiss(None);
            }
            anim.tick(Duration::from_millis(7));
            assert!((0.0..=1.0).contains(&anim.progress()));
        }
    }
}
