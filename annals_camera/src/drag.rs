// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan bookkeeping.
//!
//! A drag remembers where the content origin sat relative to the pointer when
//! it started. Every move then places the origin at the same offset from the
//! new pointer position, so the content stays glued to the pointer. There is
//! no inertia: the drag stops the moment it ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use annals_camera::DragSession;
//!
//! let mut drag = DragSession::default();
//! drag.start(Point::new(100.0, 100.0), Vec2::new(10.0, 0.0));
//! assert!(drag.is_engaged());
//!
//! assert_eq!(drag.translation_for(Point::new(150.0, 130.0)), Some(Vec2::new(60.0, 30.0)));
//!
//! drag.end();
//! assert_eq!(drag.translation_for(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    anchor: Option<Vec2>,
}

impl DragSession {
    /// Engages the drag with the pointer at `pointer` and the camera at
    /// `translation`.
    pub fn start(&mut self, pointer: Point, translation: Vec2) {
        self.anchor = Some(pointer.to_vec2() - translation);
    }

    /// Translation that keeps the content glued to `pointer`, or `None` when
    /// not engaged.
    #[must_use]
    pub fn translation_for(&self, pointer: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| pointer.to_vec2() - anchor)
    }

    /// Re-anchors an engaged drag after the camera moved underneath it.
    ///
    /// Does nothing when not engaged.
    pub fn rebase(&mut self, pointer: Point, translation: Vec2) {
        if self.anchor.is_some() {
            self.start(pointer, translation);
        }
    }

    /// Disengages the drag.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while the drag is engaged.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragSession;

    #[test]
    fn idle_session_produces_nothing() {
        let drag = DragSession::default();
        assert!(!drag.is_engaged());
        assert_eq!(drag.translation_for(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn moves_track_the_pointer() {
        let mut drag = DragSession::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);
        assert_eq!(drag.translation_for(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.translation_for(Point::new(8.0, 7.0)), Some(Vec2::new(8.0, 7.0)));
    }

    #[test]
    fn rebase_only_applies_while_engaged() {
        let mut drag = DragSession::default();
        drag.rebase(Point::new(1.0, 1.0), Vec2::ZERO);
        assert!(!drag.is_engaged());

        drag.start(Point::new(10.0, 10.0), Vec2::ZERO);
        drag.rebase(Point::new(10.0, 10.0), Vec2::new(4.0, 4.0));
        assert_eq!(drag.translation_for(Point::new(10.0, 10.0)), Some(Vec2::new(4.0, 4.0)));
    }
}
