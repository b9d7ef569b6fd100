// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Space reserved around the content when deriving it from a viewport.
///
/// The host chrome (search bar, legend, side panels) takes this much of the
/// window before the timeline content is sized.
const VIEWPORT_RESERVE: Size = Size::new(200.0, 100.0);

/// Content is laid out at this multiple of the remaining viewport so that the
/// initial half-scale view shows the whole timeline.
const CONTENT_DENSITY: f64 = 2.0;

/// Margins around the timeline content, in content units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Space above the first year.
    pub top: f64,
    /// Space to the right of the dynasty bands.
    pub right: f64,
    /// Space below the last year.
    pub bottom: f64,
    /// Space to the left of the year axis; the axis rule sits on this line.
    pub left: f64,
}

impl Margins {
    /// Creates margins from explicit edges.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Margins of `value` on every edge.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    fn edges(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50.0, 100.0, 50.0, 100.0)
    }
}

/// Layout configuration shared by every timeline layer.
///
/// A config is a plain value; it is checked once when a
/// [`Projection`](crate::Projection) is built from it. Hosts derive a fresh
/// config from the viewport on every resize with [`TimelineConfig::for_viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineConfig {
    /// First year of the axis (maps to offset `0`).
    pub min_year: i32,
    /// Last year of the axis (maps to the content height).
    pub max_year: i32,
    /// Size of the unscaled content space.
    pub content_size: Size,
    /// Margins inside the content space.
    pub margins: Margins,
    /// Width of a poet bar.
    pub poet_bar_width: f64,
    /// Horizontal gap between adjacent poet columns.
    pub poet_bar_spacing: f64,
}

impl TimelineConfig {
    /// Default first year of the axis.
    pub const DEFAULT_MIN_YEAR: i32 = 600;
    /// Default last year of the axis.
    pub const DEFAULT_MAX_YEAR: i32 = 1300;

    /// Derives a config from the host viewport size.
    ///
    /// The result is not validated here; a degenerate viewport yields a
    /// config that [`Projection::new`](crate::Projection::new) rejects.
    #[must_use]
    pub fn for_viewport(viewport: Size) -> Self {
        Self {
            content_size: Size::new(
                (viewport.width - VIEWPORT_RESERVE.width) * CONTENT_DENSITY,
                (viewport.height - VIEWPORT_RESERVE.height) * CONTENT_DENSITY,
            ),
            ..Self::default()
        }
    }

    /// Returns this config with a different year range.
    #[must_use]
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Returns this config with a different content size.
    #[must_use]
    pub fn with_content_size(mut self, content_size: Size) -> Self {
        self.content_size = content_size;
        self
    }

    /// Returns this config with different margins.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Returns this config with a different poet bar width and column gap.
    #[must_use]
    pub fn with_poet_bars(mut self, width: f64, spacing: f64) -> Self {
        self.poet_bar_width = width;
        self.poet_bar_spacing = spacing;
        self
    }

    /// Checks the config invariants.
    ///
    /// - `min_year < max_year`
    /// - content width and height are positive
    /// - margins are non-negative
    /// - every float is finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            self.content_size.width,
            self.content_size.height,
            self.poet_bar_width,
            self.poet_bar_spacing,
        ];
        if floats
            .iter()
            .chain(self.margins.edges().iter())
            .any(|v| !v.is_finite())
        {
            return Err(ConfigError::NonFinite);
        }
        if self.min_year >= self.max_year {
            return Err(ConfigError::EmptyYearRange {
                min_year: self.min_year,
                max_year: self.max_year,
            });
        }
        if self.content_size.width <= 0.0 || self.content_size.height <= 0.0 {
            return Err(ConfigError::NonPositiveContent {
                size: self.content_size,
            });
        }
        if self.margins.edges().iter().any(|v| *v < 0.0) {
            return Err(ConfigError::NegativeMargin {
                margins: self.margins,
            });
        }
        Ok(())
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_year: Self::DEFAULT_MIN_YEAR,
            max_year: Self::DEFAULT_MAX_YEAR,
            content_size: Size::new(1400.0, 1400.0),
            margins: Margins::default(),
            poet_bar_width: 80.0,
            poet_bar_spacing: 36.0,
        }
    }
}

/// Error returned when a [`TimelineConfig`] cannot back a projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `min_year` is not strictly before `max_year`.
    EmptyYearRange {
        /// The configured first year.
        min_year: i32,
        /// The configured last year.
        max_year: i32,
    },
    /// Content width or height is zero or negative.
    NonPositiveContent {
        /// The rejected content size.
        size: Size,
    },
    /// At least one margin is negative.
    NegativeMargin {
        /// The rejected margins.
        margins: Margins,
    },
    /// A size, margin, or bar dimension is NaN or infinite.
    NonFinite,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyYearRange { min_year, max_year } => write!(
                f,
                "year range {min_year}..{max_year} is empty; the first year must precede the last"
            ),
            Self::NonPositiveContent { size } => write!(
                f,
                "content size {}x{} must be positive in both dimensions",
                size.width, size.height
            ),
            Self::NegativeMargin { margins } => write!(
                f,
                "margins must be non-negative (top {}, right {}, bottom {}, left {})",
                margins.top, margins.right, margins.bottom, margins.left
            ),
            Self::NonFinite => f.write_str("timeline config contains a non-finite value"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ConfigError, Margins, TimelineConfig};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(TimelineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn for_viewport_reserves_chrome_and_doubles() {
        let config = TimelineConfig::for_viewport(Size::new(1200.0, 800.0));
        assert_eq!(config.content_size, Size::new(2000.0, 1400.0));
        assert_eq!(config.min_year, TimelineConfig::DEFAULT_MIN_YEAR);
        assert_eq!(config.max_year, TimelineConfig::DEFAULT_MAX_YEAR);
    }

    #[test]
    fn degenerate_viewport_fails_validation() {
        let config = TimelineConfig::for_viewport(Size::ZERO);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveContent { .. })
        ));
    }

    #[test]
    fn empty_year_range_is_rejected() {
        let config = TimelineConfig::default().with_year_range(900, 900);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyYearRange {
                min_year: 900,
                max_year: 900
            })
        );
    }

    #[test]
    fn negative_margin_and_nan_are_rejected() {
        let config = TimelineConfig::default().with_margins(Margins::new(0.0, -1.0, 0.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeMargin { .. })
        ));

        let config = TimelineConfig::default().with_content_size(Size::new(f64::NAN, 10.0));
        assert_eq!(config.validate(), Err(ConfigError::NonFinite));
    }
}
