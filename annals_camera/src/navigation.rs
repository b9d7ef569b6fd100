// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based camera glides.
//!
//! The animator does not own a clock. Hosts pass a monotonic `now` (any fixed
//! origin will do) to both [`NavigationAnimator::start`] and
//! [`NavigationAnimator::step`], so tests can drive time by hand.

use core::time::Duration;

use kurbo::Vec2;

/// Ease-out cubic: `1 − (1 − t)³`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Handle for an in-flight animation.
///
/// A ticket names the controller epoch its animation was started under. Once
/// anything else claims the camera the epoch moves on and the ticket goes
/// stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationTicket {
    pub(crate) epoch: u64,
}

impl AnimationTicket {
    /// The epoch this ticket was issued for.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Animator state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    /// Nothing is animating.
    #[default]
    Idle,
    /// Gliding the translation from `from` to `to`.
    Running {
        /// `now` when the glide began.
        start: Duration,
        /// Total glide length.
        duration: Duration,
        /// Translation at the start.
        from: Vec2,
        /// Translation at the end.
        to: Vec2,
        /// Epoch the glide belongs to.
        epoch: u64,
    },
}

/// Result of advancing the animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// No animation is running.
    Idle,
    /// The running animation belongs to another epoch; nothing changed.
    Stale,
    /// Still running; the translation to apply now.
    Moving(Vec2),
    /// Reached the end; the exact target translation. The animator is idle again.
    Finished(Vec2),
}

/// Drives one camera glide at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationAnimator {
    state: AnimationState,
}

impl NavigationAnimator {
    /// Begins a glide, replacing any glide in progress.
    pub fn start(&mut self, from: Vec2, to: Vec2, now: Duration, duration: Duration, epoch: u64) {
        self.state = AnimationState::Running {
            start: now,
            duration,
            from,
            to,
            epoch,
        };
    }

    /// Abandons any glide in progress.
    pub fn stop(&mut self) {
        self.state = AnimationState::Idle;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Returns `true` while a glide is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// Samples the glide at `now` on behalf of `epoch`.
    ///
    /// Once `now − start` reaches the duration the glide snaps exactly onto
    /// its target and the animator returns to idle. A `now` earlier than the
    /// start samples the beginning of the glide.
    pub fn step(&mut self, epoch: u64, now: Duration) -> Step {
        let AnimationState::Running {
            start,
            duration,
            from,
            to,
            epoch: running,
        } = self.state
        else {
            return Step::Idle;
        };
        if running != epoch {
            return Step::Stale;
        }
        let elapsed = now.saturating_sub(start);
        if elapsed >= duration {
            self.state = AnimationState::Idle;
            return Step::Finished(to);
        }
        let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
        Step::Moving(from.lerp(to, ease_out_cubic(progress)))
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Vec2;

    use super::{NavigationAnimator, Step, ease_out_cubic};

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn glide_eases_then_snaps_to_target() {
        let mut animator = NavigationAnimator::default();
        let to = Vec2::new(100.0, -40.0);
        animator.start(Vec2::ZERO, to, Duration::from_millis(1000), Duration::from_millis(1000), 7);

        assert_eq!(
            animator.step(7, Duration::from_millis(1500)),
            Step::Moving(Vec2::new(87.5, -35.0))
        );
        assert!(animator.is_running());
        assert_eq!(animator.step(7, Duration::from_millis(2300)), Step::Finished(to));
        assert!(!animator.is_running());
        assert_eq!(animator.step(7, Duration::from_millis(2400)), Step::Idle);
    }

    #[test]
    fn foreign_epoch_is_stale() {
        let mut animator = NavigationAnimator::default();
        animator.start(Vec2::ZERO, Vec2::new(1.0, 1.0), Duration::ZERO, Duration::from_secs(1), 1);
        assert_eq!(animator.step(2, Duration::from_secs(5)), Step::Stale);
        assert!(animator.is_running());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut animator = NavigationAnimator::default();
        let to = Vec2::new(3.0, 4.0);
        animator.start(Vec2::ZERO, to, Duration::from_secs(2), Duration::ZERO, 0);
        assert_eq!(animator.step(0, Duration::from_secs(2)), Step::Finished(to));
    }
}
