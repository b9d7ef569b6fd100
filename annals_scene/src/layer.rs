// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::hotspot::Hotspot;
use crate::primitive::Primitive;

/// The independently rendered groupings of a timeline, bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Year rule, ticks, and year labels. Always visible.
    Axis,
    /// Translucent dynasty bands.
    Dynasties,
    /// Ruler reign blocks.
    Rulers,
    /// Poet lifespan bars.
    Poets,
}

impl LayerKind {
    /// All layers in paint order.
    pub const ALL: [Self; 4] = [Self::Axis, Self::Dynasties, Self::Rulers, Self::Poets];

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Axis => 0,
            Self::Dynasties => 1,
            Self::Rulers => 2,
            Self::Poets => 3,
        }
    }
}

/// One rendered layer: primitives in paint order plus interactive hotspots.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    kind: LayerKind,
    pub(crate) primitives: Vec<Primitive>,
    pub(crate) hotspots: Vec<Hotspot>,
}

impl Layer {
    /// An empty layer; hidden layers render to this.
    #[must_use]
    pub fn empty(kind: LayerKind) -> Self {
        Self {
            kind,
            primitives: Vec::new(),
            hotspots: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(kind: LayerKind, primitives: usize, hotspots: usize) -> Self {
        Self {
            kind,
            primitives: Vec::with_capacity(primitives),
            hotspots: Vec::with_capacity(hotspots),
        }
    }

    /// Which layer this is.
    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Primitives in paint order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Interactive regions, in paint order (later entries are on top).
    #[must_use]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Returns `true` if the layer produced nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.hotspots.is_empty()
    }
}

/// Visibility toggles for the optional layers.
///
/// The axis has no toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Visibility {
    /// Draw dynasty bands.
    pub dynasties: bool,
    /// Draw ruler blocks.
    pub rulers: bool,
    /// Draw poet bars.
    pub poets: bool,
}

impl Visibility {
    /// Returns whether `kind` is drawn.
    #[must_use]
    pub fn is_visible(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Axis => true,
            LayerKind::Dynasties => self.dynasties,
            LayerKind::Rulers => self.rulers,
            LayerKind::Poets => self.poets,
        }
    }

    /// Sets whether `kind` is drawn, returning `true` if the flag changed.
    ///
    /// Setting the axis is a no-op.
    pub fn set(&mut self, kind: LayerKind, visible: bool) -> bool {
        let flag = match kind {
            LayerKind::Axis => return false,
            LayerKind::Dynasties => &mut self.dynasties,
            LayerKind::Rulers => &mut self.rulers,
            LayerKind::Poets => &mut self.poets,
        };
        let changed = *flag != visible;
        *flag = visible;
        changed
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            dynasties: true,
            rulers: true,
            poets: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerKind, Visibility};

    #[test]
    fn axis_cannot_be_hidden() {
        let mut vis = Visibility::default();
        assert!(!vis.set(LayerKind::Axis, false));
        assert!(vis.is_visible(LayerKind::Axis));
    }

    #[test]
    fn set_reports_changes_only() {
        let mut vis = Visibility::default();
        assert!(vis.set(LayerKind::Poets, false));
        assert!(!vis.set(LayerKind::Poets, false));
        assert!(!vis.is_visible(LayerKind::Poets));
        assert!(vis.is_visible(LayerKind::Rulers));
    }

    #[test]
    fn slots_follow_paint_order() {
        for (i, kind) in LayerKind::ALL.iter().enumerate() {
            assert_eq!(kind.slot(), i);
        }
    }
}
