// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Records: the typed data behind an Annals timeline.
//!
//! Data providers hand Annals pre-validated arrays of plain records. This
//! crate defines those records and the small amount of aggregation the
//! timeline needs before drawing:
//! - [`DynastyRecord`], [`RulerSource`], and [`DynastyRulers`] as supplied by providers.
//! - [`merge_dynasty_rulers`]: flattens per-dynasty lists into [`RulerRecord`]s.
//! - [`PoetRecord`] with [`sort_by_birth`], [`filter_by_query`], and [`find_by_name`].
//! - [`PoetColumns`]: the round-robin column rule for poet bars.
//! - [`CategoryPalette`]: the category → color legend for poet bars.
//!
//! Nothing here parses text or touches the network; records are taken as-is
//! and only tolerated, never repaired.
//!
//! ## Example
//!
//! ```rust
//! use annals_records::{PoetRecord, filter_by_query, find_by_name, sort_by_birth};
//!
//! let poets = [
//!     PoetRecord::new("Du Fu", "Tang", "Realism", 712, 770),
//!     PoetRecord::new("Li Bai", "Tang", "Romanticism", 701, 762).with_peak(725, 755),
//! ];
//!
//! let sorted = sort_by_birth(&poets);
//! assert_eq!(sorted[0].name, "Li Bai");
//!
//! assert_eq!(filter_by_query(&poets, "Real").len(), 1);
//! assert!(find_by_name(&poets, "Wang").is_none());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for every record. Field names are
//!   camelCase, `peakPeriod` may be omitted, and the short provider spellings
//!   (`birth`, `death`, `start`, `end`) are accepted as aliases.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod dynasty;
mod layout;
mod palette;
mod poet;

pub use color::Rgb;
pub use dynasty::{DynastyRecord, DynastyRulers, RulerRecord, RulerSource, merge_dynasty_rulers};
pub use layout::PoetColumns;
pub use palette::CategoryPalette;
pub use poet::{
    PeakPeriod, PoetRecord, birth_order, filter_by_query, find_by_name, position_by_name,
    sort_by_birth,
};
