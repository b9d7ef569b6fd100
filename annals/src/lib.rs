// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals: an interactive vertical timeline of dynasties, rulers, and poets.
//!
//! A [`Timeline`] puts three datasets on one year axis and lets the user pan,
//! zoom, hover, and jump between them:
//! - Dynasty bands, ruler reign blocks, and poet lifespan bars are rendered
//!   into a shared content space by [`annals_scene`].
//! - The camera over that space is owned by an
//!   [`annals_camera::ViewportController`]; drag, wheel, zoom buttons, and
//!   navigation glides all go through it, and user gestures cancel glides.
//! - Hovering a ruler shows a single viewport-clamped [`Tooltip`].
//!
//! The host owns the window, the clock, and the painter. It feeds
//! [`InputEvent`]s to [`Timeline::handle`], ticks running glides each frame,
//! and paints [`Timeline::scene`] under [`Timeline::camera`].
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use annals::{Dataset, InputEvent, Timeline, TimelineOptions};
//! use annals_camera::TickOutcome;
//! use annals_records::PoetRecord;
//! use kurbo::{Point, Size};
//!
//! let dataset = Dataset {
//!     poets: vec![
//!         PoetRecord::new("Li Bai", "Tang", "Romanticism", 701, 762),
//!         PoetRecord::new("Su Shi", "Song", "Haofang", 1037, 1101),
//!     ],
//!     ..Dataset::default()
//! };
//! let mut timeline = Timeline::new(dataset, Size::new(1200.0, 800.0), TimelineOptions::default())?;
//!
//! let ticket = timeline.animate_to_poet("Su", Duration::ZERO)?;
//! assert_eq!(timeline.tick(ticket, Duration::from_secs(2)), TickOutcome::Finished);
//!
//! timeline.handle(InputEvent::Wheel { position: Point::new(600.0, 400.0), delta_y: -1.0 });
//! assert_eq!(timeline.search("Tang").len(), 1);
//! # Ok::<(), annals::TimelineError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): log resizes, visibility changes, navigation, and
//!   failed lookups through `tracing`.
//! - `serde`: deserialize a [`Dataset`] and its records.
//! - `ui_events`: `InputEvent::from_pointer_event` for `ui-events` pointer events.

mod error;
mod input;
mod logging;
mod timeline;
mod tooltip;

pub use error::TimelineError;
pub use input::InputEvent;
pub use timeline::{Dataset, Timeline, TimelineEvent, TimelineOptions};
pub use tooltip::{Tooltip, TooltipContent, TooltipManager, TooltipMetrics, place};

pub use annals_camera;
pub use annals_projection;
pub use annals_records;
pub use annals_scene;
