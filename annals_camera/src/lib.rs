// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Camera: pan, zoom, and glide over timeline content.
//!
//! - [`CameraTransform`]: uniform scale + translation from content to screen.
//! - [`ViewportController`]: the single owner of the camera. Drag, wheel,
//!   zoom buttons, re-centering, and navigation all write through it.
//! - [`NavigationAnimator`]: an explicit idle/running state machine that glides
//!   the translation with an ease-out cubic.
//!
//! ## Cancellation
//!
//! The controller keeps an epoch counter. Every camera-driving call claims a
//! new epoch; a glide remembers the epoch it started under and hands back an
//! [`AnimationTicket`]. When the host ticks a ticket whose epoch has moved on,
//! nothing happens and [`TickOutcome::Stale`] is reported. A drag that starts
//! mid-glide therefore wins without any shared flags.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use annals_camera::{TickOutcome, ViewportController};
//!
//! let mut controller = ViewportController::new(Size::new(800.0, 600.0));
//! let ticket = controller.animate_to(Point::new(1000.0, 500.0), Duration::ZERO, Duration::from_secs(1));
//!
//! assert_eq!(controller.tick(ticket, Duration::from_millis(400)), TickOutcome::Running);
//!
//! // The user grabs the view: the glide is cancelled.
//! controller.pointer_down(Point::new(20.0, 20.0));
//! assert_eq!(controller.tick(ticket, Duration::from_millis(800)), TickOutcome::Stale);
//! ```
//!
//! Time is passed in as a [`Duration`](core::time::Duration) since any fixed
//! origin, so this crate needs no clock and is `no_std`.

#![no_std]

mod controller;
pub mod drag;
mod navigation;
mod transform;

pub use controller::{ControllerOptions, TickOutcome, ViewportController};
pub use drag::DragSession;
pub use navigation::{AnimationState, AnimationTicket, NavigationAnimator, Step, ease_out_cubic};
pub use transform::{CameraTransform, ZoomLimits};
