// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Size, Vec2};

use crate::drag::DragSession;
use crate::navigation::{AnimationTicket, NavigationAnimator, Step};
use crate::transform::{CameraTransform, ZoomLimits};

/// Tunable factors of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerOptions {
    /// Scale factor for one wheel step towards the user (negative `delta_y`).
    pub wheel_zoom_in: f64,
    /// Scale factor for one wheel step away from the user (positive `delta_y`).
    pub wheel_zoom_out: f64,
    /// Factor applied by [`ViewportController::zoom_in`], and divided out by
    /// [`ViewportController::zoom_out`].
    pub button_step: f64,
    /// Scale restored by [`ViewportController::reset_view`].
    pub default_scale: f64,
}

impl ControllerOptions {
    /// Sets the per-step wheel factors.
    #[must_use]
    pub fn with_wheel_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.wheel_zoom_in = zoom_in;
        self.wheel_zoom_out = zoom_out;
        self
    }

    /// Sets the button zoom factor.
    #[must_use]
    pub fn with_button_step(mut self, step: f64) -> Self {
        self.button_step = step;
        self
    }

    /// Sets the scale restored on reset.
    #[must_use]
    pub fn with_default_scale(mut self, scale: f64) -> Self {
        self.default_scale = scale;
        self
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            button_step: 1.2,
            default_scale: 0.5,
        }
    }
}

/// Outcome of [`ViewportController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The ticket no longer owns the camera; nothing changed.
    Stale,
    /// The camera moved and the glide continues.
    Running,
    /// The camera reached the target; the ticket is spent.
    Finished,
}

/// Sole owner of the camera.
///
/// Every path that moves the camera (drag, wheel, zoom buttons,
/// re-centering, navigation) goes through the controller. Each user gesture
/// claims a new epoch, which cancels any navigation glide in flight, so at
/// most one of them drives the camera at a time.
#[derive(Clone, Debug)]
pub struct ViewportController {
    camera: CameraTransform,
    limits: ZoomLimits,
    options: ControllerOptions,
    view_size: Size,
    drag: DragSession,
    animator: NavigationAnimator,
    epoch: u64,
}

impl ViewportController {
    /// Creates a controller for a view of `view_size`, at the default scale
    /// with the content origin at the top-left of the view.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let options = ControllerOptions::default();
        let limits = ZoomLimits::default();
        Self {
            camera: CameraTransform::new(Vec2::ZERO, limits.clamp(options.default_scale)),
            limits,
            options,
            view_size,
            drag: DragSession::default(),
            animator: NavigationAnimator::default(),
            epoch: 0,
        }
    }

    /// Replaces the zoom limits, re-clamping the current scale.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self.camera.scale = limits.clamp(self.camera.scale);
        self
    }

    /// Replaces the options and moves to the new default scale.
    #[must_use]
    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self.camera.scale = self.limits.clamp(options.default_scale);
        self
    }

    /// Read-only copy of the camera.
    #[must_use]
    pub fn camera(&self) -> CameraTransform {
        self.camera
    }

    /// Zoom limits in force.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Size of the view in screen units.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Updates the view size. The camera itself is left alone.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Current epoch. Any camera-driving call moves it forward.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns `true` while a drag is engaged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_engaged()
    }

    /// Returns `true` while a navigation glide is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Maps a screen point into content space through the current camera.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        self.camera.screen_to_content(pt)
    }

    fn view_center(&self) -> Point {
        Point::new(self.view_size.width / 2.0, self.view_size.height / 2.0)
    }

    /// Claims the camera for a new operation, cancelling any glide.
    fn supersede(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.animator.stop();
    }

    /// Scales by `factor` about the screen point `anchor`, keeping the
    /// content under `anchor` fixed. Returns `true` if the scale changed.
    fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }
        let old = self.camera.scale;
        let new = self.limits.clamp(old * factor);
        if (new - old).abs() < f64::EPSILON {
            return false;
        }
        let p = anchor.to_vec2();
        self.camera.translation = p - (p - self.camera.translation) * (new / old);
        self.camera.scale = new;
        true
    }

    /// Starts a drag at `pointer`, cancelling any glide.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.supersede();
        self.drag.start(pointer, self.camera.translation);
    }

    /// Follows the pointer while a drag is engaged.
    ///
    /// Returns `true` if the camera moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(translation) = self.drag.translation_for(pointer) else {
            return false;
        };
        self.supersede();
        let moved = translation != self.camera.translation;
        self.camera.translation = translation;
        moved
    }

    /// Ends any drag.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Ends any drag; the pointer left the view.
    pub fn pointer_leave(&mut self) {
        self.drag.end();
    }

    /// Applies one discrete wheel step at `position`.
    ///
    /// Positive `delta_y` zooms out; zero or negative zooms in. A NaN delta is
    /// ignored entirely. An engaged drag is re-anchored so the next move does
    /// not jump. Returns `true` if the scale changed.
    pub fn wheel(&mut self, position: Point, delta_y: f64) -> bool {
        if delta_y.is_nan() {
            return false;
        }
        let factor = if delta_y > 0.0 {
            self.options.wheel_zoom_out
        } else {
            self.options.wheel_zoom_in
        };
        self.supersede();
        let changed = self.zoom_about(position, factor);
        self.drag.rebase(position, self.camera.translation);
        changed
    }

    /// Zooms in by the button step, anchored at the view center.
    pub fn zoom_in(&mut self) -> bool {
        self.supersede();
        self.zoom_about(self.view_center(), self.options.button_step)
    }

    /// Zooms out by the button step, anchored at the view center.
    pub fn zoom_out(&mut self) -> bool {
        self.supersede();
        self.zoom_about(self.view_center(), 1.0 / self.options.button_step)
    }

    /// Pans so that the content point `content` sits at the view center.
    pub fn center_on(&mut self, content: Point) {
        self.supersede();
        self.camera.translation = self.center_translation(content);
    }

    /// Restores the default scale and centers on `content`.
    pub fn reset_view(&mut self, content: Point) {
        self.supersede();
        self.camera.scale = self.limits.clamp(self.options.default_scale);
        self.camera.translation = self.center_translation(content);
    }

    fn center_translation(&self, content: Point) -> Vec2 {
        self.view_center().to_vec2() - content.to_vec2() * self.camera.scale
    }

    /// Starts a glide that brings `content` to the view center at the current
    /// scale.
    ///
    /// Any drag is ended and any earlier glide is cancelled. The returned
    /// ticket is passed back to [`tick`](Self::tick) on each frame.
    pub fn animate_to(
        &mut self,
        content: Point,
        now: Duration,
        duration: Duration,
    ) -> AnimationTicket {
        self.supersede();
        self.drag.end();
        let to = self.center_translation(content);
        self.animator
            .start(self.camera.translation, to, now, duration, self.epoch);
        AnimationTicket { epoch: self.epoch }
    }

    /// Advances the glide owned by `ticket` to `now`.
    ///
    /// A stale ticket (superseded by a gesture or a newer glide, or already
    /// finished) leaves the camera untouched.
    pub fn tick(&mut self, ticket: AnimationTicket, now: Duration) -> TickOutcome {
        if ticket.epoch != self.epoch {
            return TickOutcome::Stale;
        }
        match self.animator.step(ticket.epoch, now) {
            Step::Idle | Step::Stale => TickOutcome::Stale,
            Step::Moving(translation) => {
                self.camera.translation = translation;
                TickOutcome::Running
            }
            Step::Finished(translation) => {
                self.camera.translation = translation;
                TickOutcome::Finished
            }
        }
    }
}
