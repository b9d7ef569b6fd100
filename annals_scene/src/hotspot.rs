// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive regions registered by the layer renderers.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Kinds of pointer input a hotspot responds to.
    ///
    /// Hit tests pass the interest they need; hotspots without it are skipped
    /// and do not block hotspots beneath them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interest: u8 {
        /// Hover enter/leave.
        const HOVER = 0b0000_0001;
        /// Press/click selection.
        const CLICK = 0b0000_0010;
    }
}

/// The record a hotspot stands for.
///
/// Indices refer to the record slices owned by [`Scene`](crate::Scene):
/// [`Scene::rulers`](crate::Scene::rulers) and the birth-sorted
/// [`Scene::poets`](crate::Scene::poets).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotspotTarget {
    /// A ruler block.
    Ruler(usize),
    /// A poet bar.
    Poet(usize),
}

/// A pointer-interactive region in content space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hotspot {
    /// Region that reacts to the pointer.
    pub bounds: Rect,
    /// Record the region belongs to.
    pub target: HotspotTarget,
    /// Input kinds the region responds to.
    pub interest: Interest,
}

impl Hotspot {
    /// Returns `true` if `pt` lies inside the bounds and the hotspot has
    /// any of the `wanted` interests.
    ///
    /// Bounds are inclusive on every edge so a one-unit ruler block can
    /// still be hovered at its border.
    #[must_use]
    pub fn accepts(&self, pt: Point, wanted: Interest) -> bool {
        self.interest.intersects(wanted)
            && pt.x >= self.bounds.x0
            && pt.x <= self.bounds.x1
            && pt.y >= self.bounds.y0
            && pt.y <= self.bounds.y1
    }
}
