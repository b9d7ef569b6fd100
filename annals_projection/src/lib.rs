// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Projection: the shared year axis of a layered timeline.
//!
//! Every Annals layer (year axis, dynasty bands, ruler blocks, poet bars) is
//! drawn into one unscaled *content space*. This crate defines that space:
//! - [`TimelineConfig`]: year range, content size, margins, and poet bar metrics.
//! - [`Projection`]: the linear year ↔ vertical offset mapping built from a
//!   validated config.
//!
//! It does **not** own a camera. Pan and zoom live in `annals_camera` and are
//! applied on top of content space at display time.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use annals_projection::{Projection, TimelineConfig};
//!
//! let config = TimelineConfig::default()
//!     .with_year_range(600, 1300)
//!     .with_content_size(Size::new(2000.0, 1400.0));
//! let projection = Projection::new(config).unwrap();
//!
//! assert_eq!(projection.year_to_offset(950.0), 700.0);
//! assert_eq!(projection.offset_to_year(700.0), 950.0);
//! ```
//!
//! Configs are validated once, when the projection is built, so the mapping
//! itself never divides by zero.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod projection;

pub use config::{ConfigError, Margins, TimelineConfig};
pub use projection::Projection;
