// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use annals_projection::Projection;
use annals_records::{
    CategoryPalette, DynastyRecord, PoetColumns, PoetRecord, RulerRecord, birth_order,
};
use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::hotspot::{HotspotTarget, Interest};
use crate::layer::{Layer, LayerKind, Visibility};
use crate::render;
use crate::style::SceneStyle;

/// Records drawn by a [`Scene`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneRecords {
    /// Dynasty bands.
    pub dynasties: Vec<DynastyRecord>,
    /// Merged rulers, see [`merge_dynasty_rulers`](annals_records::merge_dynasty_rulers).
    pub rulers: Vec<RulerRecord>,
    /// Poets in any order; the scene sorts them by birth.
    pub poets: Vec<PoetRecord>,
}

/// Presentation parameters of a [`Scene`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneOptions {
    /// Geometry and paint of every layer.
    pub style: SceneStyle,
    /// Poet column rule.
    pub columns: PoetColumns,
    /// Poet category colors.
    pub palette: CategoryPalette,
    /// Initial layer visibility.
    pub visibility: Visibility,
}

/// All layers of a timeline in one shared content space.
///
/// A scene owns the projection and the records, and keeps the four rendered
/// layers in paint order: axis, dynasties, rulers, poets. Any change that
/// affects geometry re-renders into fresh layers which are then swapped in
/// whole, so a reader never observes a half-built scene.
#[derive(Clone, Debug)]
pub struct Scene {
    projection: Projection,
    style: SceneStyle,
    columns: PoetColumns,
    palette: CategoryPalette,
    dynasties: Vec<DynastyRecord>,
    rulers: Vec<RulerRecord>,
    poets: Vec<PoetRecord>,
    poet_index: HashMap<String, usize>,
    birth_rank: Vec<usize>,
    visibility: Visibility,
    layers: [Layer; 4],
    revision: u64,
}

impl Scene {
    /// Builds a scene and renders every layer.
    #[must_use]
    pub fn new(projection: Projection, records: SceneRecords, options: SceneOptions) -> Self {
        let order = birth_order(&records.poets);
        let mut birth_rank = alloc::vec![0; order.len()];
        for (rank, &input) in order.iter().enumerate() {
            birth_rank[input] = rank;
        }
        let poets: Vec<PoetRecord> = order
            .iter()
            .map(|&input| records.poets[input].clone())
            .collect();
        let mut poet_index = HashMap::with_capacity(poets.len());
        for (index, poet) in poets.iter().enumerate() {
            poet_index.entry(poet.name.clone()).or_insert(index);
        }
        let mut scene = Self {
            projection,
            style: options.style,
            columns: options.columns,
            palette: options.palette,
            dynasties: records.dynasties,
            rulers: records.rulers,
            poets,
            poet_index,
            birth_rank,
            visibility: options.visibility,
            layers: LayerKind::ALL.map(Layer::empty),
            revision: 0,
        };
        scene.rebuild();
        scene
    }

    fn render_layer(&self, kind: LayerKind) -> Layer {
        let visible = self.visibility.is_visible(kind);
        let projection = &self.projection;
        match kind {
            LayerKind::Axis => render::axis::render(projection, &self.style.axis),
            LayerKind::Dynasties => {
                render::dynasty::render(&self.dynasties, projection, &self.style.band, visible)
            }
            LayerKind::Rulers => {
                render::ruler::render(&self.rulers, projection, &self.style.ruler, visible)
            }
            LayerKind::Poets => render::poet::render(
                &self.poets,
                projection,
                &self.style.poet,
                self.columns,
                &self.palette,
                visible,
            ),
        }
    }

    /// Re-renders every layer and swaps the results in.
    pub fn rebuild(&mut self) {
        let fresh = LayerKind::ALL.map(|kind| self.render_layer(kind));
        self.layers = fresh;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replaces the projection and re-renders every layer.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.rebuild();
    }

    /// Replaces the style and re-renders every layer.
    pub fn set_style(&mut self, style: SceneStyle) {
        self.style = style;
        self.rebuild();
    }

    /// Shows or hides a layer, re-rendering only that layer.
    ///
    /// Returns `true` if visibility changed. The axis cannot be hidden.
    pub fn set_visibility(&mut self, kind: LayerKind, visible: bool) -> bool {
        if !self.visibility.set(kind, visible) {
            return false;
        }
        let fresh = self.render_layer(kind);
        self.layers[kind.slot()] = fresh;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Current visibility flags.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The projection every layer is drawn with.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Layers in paint order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The layer of the given kind.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &Layer {
        &self.layers[kind.slot()]
    }

    /// Returns the topmost hotspot under `pt` that has any of `interest`.
    ///
    /// Later layers paint over earlier ones, and within a layer later
    /// hotspots paint over earlier ones.
    #[must_use]
    pub fn hit_test(&self, pt: Point, interest: Interest) -> Option<HotspotTarget> {
        self.layers
            .iter()
            .rev()
            .flat_map(|layer| layer.hotspots().iter().rev())
            .find(|spot| spot.accepts(pt, interest))
            .map(|spot| spot.target)
    }

    /// Merged rulers, indexed by [`HotspotTarget::Ruler`].
    #[must_use]
    pub fn rulers(&self) -> &[RulerRecord] {
        &self.rulers
    }

    /// Poets in birth order, indexed by [`HotspotTarget::Poet`].
    #[must_use]
    pub fn poets(&self) -> &[PoetRecord] {
        &self.poets
    }

    /// Dynasty records.
    #[must_use]
    pub fn dynasties(&self) -> &[DynastyRecord] {
        &self.dynasties
    }

    /// The ruler at `index`, if any.
    #[must_use]
    pub fn ruler(&self, index: usize) -> Option<&RulerRecord> {
        self.rulers.get(index)
    }

    /// The poet at birth-order `index`, if any.
    #[must_use]
    pub fn poet(&self, index: usize) -> Option<&PoetRecord> {
        self.poets.get(index)
    }

    /// Birth-order index of the poet at `input` in [`SceneRecords::poets`].
    #[must_use]
    pub fn birth_index(&self, input: usize) -> Option<usize> {
        self.birth_rank.get(input).copied()
    }

    /// Navigation target for the poet named exactly `name`: the left edge of
    /// its bar at the birth year.
    ///
    /// When several poets share a name, the earliest-born one wins.
    #[must_use]
    pub fn poet_anchor(&self, name: &str) -> Option<Point> {
        self.poet_anchor_at(*self.poet_index.get(name)?)
    }

    /// Navigation target for the poet at birth-order `index`.
    #[must_use]
    pub fn poet_anchor_at(&self, index: usize) -> Option<Point> {
        let poet = self.poets.get(index)?;
        Some(render::poet::anchor(
            &self.projection,
            &self.style.poet,
            self.columns,
            index,
            poet,
        ))
    }

    /// Bounds of the whole content space.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.projection.content_rect()
    }

    /// Counter bumped whenever any layer is replaced.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
