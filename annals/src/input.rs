// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Host input a [`Timeline`](crate::Timeline) reacts to.
///
/// Positions are in screen (view) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved, pressed or not.
    PointerMove(Point),
    /// Primary button released.
    PointerUp,
    /// Pointer left the view.
    PointerLeave,
    /// One wheel notch or trackpad scroll.
    Wheel {
        /// Pointer position during the scroll.
        position: Point,
        /// Vertical scroll amount; only its sign matters.
        delta_y: f64,
    },
    /// The view was resized.
    Resize(Size),
}

#[cfg(feature = "ui_events")]
impl InputEvent {
    /// Adapts a `ui-events` pointer event.
    ///
    /// Enter and gesture events have no timeline meaning and map to `None`.
    /// A cancelled pointer is treated like one that left the view.
    #[must_use]
    pub fn from_pointer_event(event: &ui_events::pointer::PointerEvent) -> Option<Self> {
        use ui_events::ScrollDelta;
        use ui_events::pointer::PointerEvent;

        match event {
            PointerEvent::Down(e) => Some(Self::PointerDown(e.state.logical_point())),
            PointerEvent::Move(e) => Some(Self::PointerMove(e.current.logical_point())),
            PointerEvent::Up(_) => Some(Self::PointerUp),
            PointerEvent::Leave(_) | PointerEvent::Cancel(_) => Some(Self::PointerLeave),
            PointerEvent::Scroll(e) => {
                let delta_y = match &e.delta {
                    ScrollDelta::PixelDelta(pos) => pos.to_logical::<f64>(e.state.scale_factor).y,
                    ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
                };
                Some(Self::Wheel {
                    position: e.state.logical_point(),
                    delta_y,
                })
            }
            _ => None,
        }
    }
}
