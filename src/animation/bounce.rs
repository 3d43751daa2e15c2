//! Parabolic bounce animation
//!
//! A bounce is a sawtooth in unit time mapped through a parabola: over the
//! configured duration the marker completes `bounces` up-down arcs, peaking at
//! `height` pixels at the midpoint of each arc and touching the ground at the
//! arc boundaries. The host polls [`BounceAnimator::update`] once per frame;
//! `None` means no further frame is needed.

use crate::core::config::ShadowTransform;
use crate::core::geo::Point;
use instant::Instant;
use std::time::Duration;

/// Completion callback invoked exactly once when a bounce runs to its end.
/// Never invoked for a cancelled or replaced bounce.
pub type DoneCallback = Box<dyn FnOnce() + Send>;

/// Parameters for a single bounce run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceOptions {
    /// Number of full up-down arcs over the duration.
    pub bounces: u32,
    pub duration: Duration,
    /// Peak amplitude in pixels. Negative values clamp to 0.
    pub height: f64,
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            bounces: 1,
            duration: Duration::from_millis(500),
            height: 50.0,
        }
    }
}

impl BounceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounces(mut self, bounces: u32) -> Self {
        self.bounces = bounces;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
}

/// The transient vertical displacement applied to the icon and shadow while a
/// bounce is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatOffset {
    /// Current float height in pixels above the rest position.
    pub height: f64,
}

impl FloatOffset {
    /// The settled state: both nodes at their anchored position.
    pub const REST: FloatOffset = FloatOffset { height: 0.0 };

    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Vertical margin for the icon's float container.
    pub fn icon_margin_top(&self) -> f64 {
        -self.height
    }

    /// `(margin_left, margin_top)` for the shadow's float container. The
    /// shadow shortens and shifts with the skew/scale transform so it reads
    /// as the icon's shadow while the icon lifts off the ground.
    pub fn shadow_margins(&self, transform: &ShadowTransform) -> Point {
        Point::new(
            -(self.height * transform.skew),
            -(self.height * transform.scale),
        )
    }
}

struct ActiveBounce {
    /// Fixed by the first tick, so the first observed frame is `delta = 0`.
    started: Option<Instant>,
    duration: Duration,
    bounces: u32,
    height: f64,
    on_done: Option<DoneCallback>,
}

/// Per-marker bounce driver.
///
/// At most one bounce is active per animator at any time: starting a new one
/// replaces (and never completes) the one in flight.
#[derive(Default)]
pub struct BounceAnimator {
    active: Option<ActiveBounce>,
}

impl BounceAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a bounce, cancelling any in-flight one.
    pub fn bounce(&mut self, options: BounceOptions) {
        self.bounce_with(options, None);
    }

    /// Starts a bounce with a completion callback. A callback pending on a
    /// replaced bounce is dropped without being invoked.
    pub fn bounce_with(&mut self, options: BounceOptions, on_done: Option<DoneCallback>) {
        if self.active.is_some() {
            log::debug!("bounce replaced while in flight");
        }
        log::debug!(
            "bounce start: bounces={} duration={:?} height={}",
            options.bounces,
            options.duration,
            options.height
        );
        self.active = Some(ActiveBounce {
            started: None,
            duration: options.duration,
            bounces: options.bounces,
            height: options.height.max(0.0),
            on_done,
        });
    }

    /// Cancels any pending bounce and returns the rest offset so the caller
    /// can settle the nodes synchronously. Idempotent: stopping while idle is
    /// a no-op. The pending completion callback is never invoked.
    pub fn stop(&mut self) -> FloatOffset {
        if self.active.take().is_some() {
            log::debug!("bounce stopped");
        }
        FloatOffset::REST
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Advances the animation to `now`.
    ///
    /// Returns the offset to apply this frame, or `None` when idle. The final
    /// frame of a run returns [`FloatOffset::REST`] and fires the completion
    /// callback exactly once; subsequent ticks return `None`.
    pub fn tick(&mut self, now: Instant) -> Option<FloatOffset> {
        let state = self.active.as_mut()?;
        let started = *state.started.get_or_insert(now);
        let delta = now.duration_since(started);
        if delta < state.duration {
            let progress = 2.0 * delta.as_secs_f64() / state.duration.as_secs_f64();
            let unit = (progress * f64::from(state.bounces)) % 2.0 - 1.0;
            Some(FloatOffset::new((1.0 - unit * unit) * state.height))
        } else {
            if let Some(done) = state.on_done.take() {
                done();
            }
            self.active = None;
            Some(FloatOffset::REST)
        }
    }

    /// Advances the animation to the current instant.
    pub fn update(&mut self) -> Option<FloatOffset> {
        self.tick(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_callback() -> (DoneCallback, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (
            Box::new(move || {
                inner.fetch_add(1, Ordering::SeqCst);
            }),
            count,
        )
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_parabola_peaks_at_midpoint() {
        let mut animator = BounceAnimator::new();
        animator.bounce(BounceOptions::new());
        let t0 = Instant::now();

        let first = animator.tick(t0).unwrap();
        assert_eq!(first.height, 0.0);

        let mid = animator.tick(t0 + ms(250)).unwrap();
        assert_eq!(mid.height, 50.0);
    }

    #[test]
    fn test_settles_and_fires_done_once() {
        let mut animator = BounceAnimator::new();
        let (callback, count) = counting_callback();
        animator.bounce_with(BounceOptions::new(), Some(callback));
        let t0 = Instant::now();

        animator.tick(t0);
        let settled = animator.tick(t0 + ms(500)).unwrap();
        assert_eq!(settled, FloatOffset::REST);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // No further frames requested, callback not re-fired
        assert!(animator.tick(t0 + ms(600)).is_none());
        assert!(!animator.is_active());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_bounces_touch_ground_between_arcs() {
        let mut animator = BounceAnimator::new();
        animator.bounce(BounceOptions::new().with_bounces(2).with_duration(ms(400)));
        let t0 = Instant::now();
        animator.tick(t0);

        // First arc peaks at a quarter of the duration
        assert_eq!(animator.tick(t0 + ms(100)).unwrap().height, 50.0);
        // Ground contact between the two arcs
        assert_eq!(animator.tick(t0 + ms(200)).unwrap().height, 0.0);
        // Second arc peaks again
        assert_eq!(animator.tick(t0 + ms(300)).unwrap().height, 50.0);
    }

    #[test]
    fn test_replacing_bounce_drops_prior_callback() {
        let mut animator = BounceAnimator::new();
        let (first_callback, first_count) = counting_callback();
        animator.bounce_with(BounceOptions::new(), Some(first_callback));
        let t0 = Instant::now();
        animator.tick(t0);

        let (second_callback, second_count) = counting_callback();
        animator.bounce_with(BounceOptions::new().with_duration(ms(100)), Some(second_callback));

        let t1 = t0 + ms(250);
        animator.tick(t1);
        animator.tick(t1 + ms(100));
        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_forces_rest_without_callback() {
        let mut animator = BounceAnimator::new();
        let (callback, count) = counting_callback();
        animator.bounce_with(BounceOptions::new(), Some(callback));
        let t0 = Instant::now();
        animator.tick(t0);

        assert_eq!(animator.stop(), FloatOffset::REST);
        assert!(!animator.is_active());
        assert!(animator.tick(t0 + ms(250)).is_none());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut animator = BounceAnimator::new();
        assert_eq!(animator.stop(), FloatOffset::REST);
        assert_eq!(animator.stop(), FloatOffset::REST);

        animator.bounce(BounceOptions::new());
        animator.stop();
        assert_eq!(animator.stop(), FloatOffset::REST);
    }

    #[test]
    fn test_zero_duration_settles_on_first_tick() {
        let mut animator = BounceAnimator::new();
        let (callback, count) = counting_callback();
        animator.bounce_with(
            BounceOptions::new().with_duration(Duration::ZERO),
            Some(callback),
        );
        assert_eq!(animator.tick(Instant::now()).unwrap(), FloatOffset::REST);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_negative_height_clamps_to_zero() {
        let mut animator = BounceAnimator::new();
        animator.bounce(BounceOptions::new().with_height(-20.0));
        let t0 = Instant::now();
        animator.tick(t0);
        assert_eq!(animator.tick(t0 + ms(250)).unwrap().height, 0.0);
    }

    #[test]
    fn test_shadow_margins_follow_transform() {
        let offset = FloatOffset::new(40.0);
        let transform = ShadowTransform {
            skew: -0.25,
            scale: 0.5,
        };
        assert_eq!(offset.icon_margin_top(), -40.0);
        let margins = offset.shadow_margins(&transform);
        assert_eq!(margins.x, 10.0);
        assert_eq!(margins.y, -20.0);
    }
}
