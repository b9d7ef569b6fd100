// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Scene: layered, hit-testable timeline content.
//!
//! This crate turns records into drawable content-space layers:
//! - [`render`]: one pure renderer per layer (axis, dynasties, rulers, poets).
//! - [`Primitive`]: rectangles, lines, and labels a host paints in order.
//! - [`Hotspot`]: interactive regions tagged with an [`Interest`] set.
//! - [`Scene`]: owns a projection, the records, and the four layers, and
//!   answers topmost-first hit tests.
//!
//! Nothing here knows about the camera. Hosts paint each layer under the
//! camera transform and hit test in content coordinates.
//!
//! ## Example
//!
//! ```rust
//! use annals_projection::{Projection, TimelineConfig};
//! use annals_records::{PoetRecord, Rgb, DynastyRecord};
//! use annals_scene::{HotspotTarget, Interest, LayerKind, Scene, SceneOptions, SceneRecords};
//! use kurbo::Point;
//!
//! let projection = Projection::new(TimelineConfig::default()).unwrap();
//! let records = SceneRecords {
//!     dynasties: vec![DynastyRecord::new("Tang", 618, 907, Rgb::new(0xff6b6b))],
//!     rulers: Vec::new(),
//!     poets: vec![PoetRecord::new("Li Bai", "Tang", "Romanticism", 701, 762)],
//! };
//! let mut scene = Scene::new(projection, records, SceneOptions::default());
//!
//! let anchor = scene.poet_anchor("Li Bai").unwrap();
//! let inside = Point::new(anchor.x + 1.0, anchor.y + 1.0);
//! assert_eq!(scene.hit_test(inside, Interest::CLICK), Some(HotspotTarget::Poet(0)));
//!
//! scene.set_visibility(LayerKind::Poets, false);
//! assert_eq!(scene.hit_test(inside, Interest::CLICK), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hotspot;
mod layer;
mod primitive;
pub mod render;
mod scene;
mod style;

pub use hotspot::{Hotspot, HotspotTarget, Interest};
pub use layer::{Layer, LayerKind, Visibility};
pub use primitive::{Label, LabelAnchor, Primitive, Stroke, paint};
pub use scene::{Scene, SceneOptions, SceneRecords};
pub use style::{AxisStyle, BandStyle, PoetStyle, RulerStyle, SceneStyle};
