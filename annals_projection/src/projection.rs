// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::config::{ConfigError, TimelineConfig};

/// Linear mapping between calendar years and vertical content offsets.
///
/// A `Projection` can only be built from a validated [`TimelineConfig`], so
/// the year span used as the divisor is always positive. Years outside the
/// configured range extrapolate linearly; callers decide whether to clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    config: TimelineConfig,
    min_year: f64,
    years_span: f64,
}

impl Projection {
    /// Builds a projection, validating `config` first.
    pub fn new(config: TimelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let min_year = f64::from(config.min_year);
        let years_span = f64::from(config.max_year) - min_year;
        Ok(Self {
            config,
            min_year,
            years_span,
        })
    }

    /// Returns the config this projection was built from.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Maps a year to a vertical offset in content space.
    #[must_use]
    pub fn year_to_offset(&self, year: f64) -> f64 {
        (year - self.min_year) / self.years_span * self.config.content_size.height
    }

    /// Maps a vertical content offset back to a (fractional) year.
    ///
    /// This is the exact inverse of [`Projection::year_to_offset`].
    #[must_use]
    pub fn offset_to_year(&self, offset: f64) -> f64 {
        offset / self.config.content_size.height * self.years_span + self.min_year
    }

    /// Returns the top offset and height of the span `start..end`.
    ///
    /// The height is floored at `min_height` (itself floored at zero), so an
    /// inverted or zero-length span still yields a non-negative extent.
    #[must_use]
    pub fn year_span(&self, start: f64, end: f64, min_height: f64) -> (f64, f64) {
        let top = self.year_to_offset(start);
        let bottom = self.year_to_offset(end);
        (top, (bottom - top).max(min_height.max(0.0)))
    }

    /// The full content rectangle, anchored at the origin.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.config.content_size)
    }

    /// Content width left between the left and right margins.
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        let margins = &self.config.margins;
        (self.config.content_size.width - margins.left - margins.right).max(0.0)
    }

    /// Center of the timeline content, used when re-centering the view.
    #[must_use]
    pub fn content_center(&self) -> Point {
        Point::new(
            self.config.margins.left + self.usable_width() / 2.0,
            self.config.content_size.height / 2.0,
        )
    }
}
