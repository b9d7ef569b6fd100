// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and paint parameters for the layer renderers.
//!
//! Every value is in content units. The defaults reproduce the reference
//! timeline layout; hosts override individual fields through the `with_*`
//! setters or by plain field assignment.

use annals_records::Rgb;

/// Year axis: the vertical rule, its ticks and year labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    /// Years between ticks.
    pub step_years: i32,
    /// Rule width.
    pub rule_width: f64,
    /// Rule color.
    pub rule_color: Rgb,
    /// Distance a tick reaches on either side of the rule.
    pub tick_half_length: f64,
    /// Tick width.
    pub tick_width: f64,
    /// Tick color.
    pub tick_color: Rgb,
    /// Gap between the rule and the right edge of a year label.
    pub label_gap: f64,
    /// Year label font size.
    pub label_size: f64,
    /// Year label color.
    pub label_color: Rgb,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            step_years: 50,
            rule_width: 3.0,
            rule_color: Rgb::new(0x33_3333),
            tick_half_length: 10.0,
            tick_width: 2.0,
            tick_color: Rgb::new(0x66_6666),
            label_gap: 15.0,
            label_size: 24.0,
            label_color: Rgb::new(0x33_3333),
        }
    }
}

/// Dynasty bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandStyle {
    /// Horizontal inset from both margins.
    pub inset: f64,
    /// Fill opacity.
    pub fill_alpha: f32,
    /// Outline width.
    pub stroke_width: f64,
    /// Outline opacity.
    pub stroke_alpha: f32,
    /// Label offset from the band's top-left margin corner.
    pub label_offset: (f64, f64),
    /// Label font size.
    pub label_size: f64,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            inset: 20.0,
            fill_alpha: 0.05,
            stroke_width: 2.0,
            stroke_alpha: 0.6,
            label_offset: (30.0, 20.0),
            label_size: 32.0,
        }
    }
}

/// Ruler reign blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerStyle {
    /// Lane offset from the left margin.
    pub lane_offset: f64,
    /// Block width.
    pub width: f64,
    /// Smallest block height, so one-year reigns stay visible.
    pub min_height: f64,
    /// Fill opacity.
    pub fill_alpha: f32,
    /// Outline width.
    pub stroke_width: f64,
    /// Outline opacity; the outline uses the darkened dynasty color.
    pub stroke_alpha: f32,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            lane_offset: 180.0,
            width: 120.0,
            min_height: 1.0,
            fill_alpha: 0.3,
            stroke_width: 1.0,
            stroke_alpha: 0.8,
        }
    }
}

/// Poet lifespan bars and their peak sub-bars.
///
/// Bar width and column spacing come from the
/// [`TimelineConfig`](annals_projection::TimelineConfig), since navigation
/// needs them too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoetStyle {
    /// Lane offset from the left margin.
    pub lane_offset: f64,
    /// Smallest lifespan bar height.
    pub min_height: f64,
    /// Lifespan fill opacity.
    pub fill_alpha: f32,
    /// Lifespan outline width.
    pub stroke_width: f64,
    /// Horizontal inset of the peak sub-bar.
    pub peak_inset: f64,
    /// Smallest peak sub-bar height.
    pub peak_min_height: f64,
    /// Peak sub-bar opacity.
    pub peak_alpha: f32,
    /// Name label font size.
    pub label_size: f64,
    /// Gap between the label baseline and the top of the bar.
    pub label_gap: f64,
}

impl Default for PoetStyle {
    fn default() -> Self {
        Self {
            lane_offset: 280.0,
            min_height: 15.0,
            fill_alpha: 0.15,
            stroke_width: 2.0,
            peak_inset: 3.0,
            peak_min_height: 8.0,
            peak_alpha: 0.8,
            label_size: 27.0,
            label_gap: 3.0,
        }
    }
}

/// Styles for all layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneStyle {
    /// Year axis.
    pub axis: AxisStyle,
    /// Dynasty bands.
    pub band: BandStyle,
    /// Ruler blocks.
    pub ruler: RulerStyle,
    /// Poet bars.
    pub poet: PoetStyle,
}

impl SceneStyle {
    /// Replaces the axis style.
    #[must_use]
    pub fn with_axis(mut self, axis: AxisStyle) -> Self {
        self.axis = axis;
        self
    }

    /// Replaces the dynasty band style.
    #[must_use]
    pub fn with_band(mut self, band: BandStyle) -> Self {
        self.band = band;
        self
    }

    /// Replaces the ruler block style.
    #[must_use]
    pub fn with_ruler(mut self, ruler: RulerStyle) -> Self {
        self.ruler = ruler;
        self
    }

    /// Replaces the poet bar style.
    #[must_use]
    pub fn with_poet(mut self, poet: PoetStyle) -> Self {
        self.poet = poet;
        self
    }
}
