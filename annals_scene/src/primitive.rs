// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives emitted by the layer renderers.

use alloc::string::String;

use annals_records::Rgb;
use kurbo::{Line, Point, Rect};
use peniko::Color;

/// Converts a record color into a paint color with the given opacity.
#[must_use]
pub fn paint(rgb: Rgb, alpha: f32) -> Color {
    Color::from_rgba8(rgb.red(), rgb.green(), rgb.blue(), 255).multiply_alpha(alpha)
}

/// An outline description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width in content units.
    pub width: f64,
    /// Line color.
    pub color: Color,
}

/// Which point of a label's text box sits on [`Label::position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelAnchor {
    /// Top-left corner of the text box.
    TopLeft,
    /// Middle of the bottom edge (text sits above the point).
    BottomCenter,
    /// Middle of the right edge (text ends at the point).
    CenterRight,
}

/// A single line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text to draw.
    pub text: String,
    /// Anchor position in content space.
    pub position: Point,
    /// How the text box is aligned to `position`.
    pub anchor: LabelAnchor,
    /// Font size in content units.
    pub font_size: f64,
    /// Whether to use a bold weight.
    pub bold: bool,
    /// Text color.
    pub color: Color,
}

/// A drawable shape in content space.
///
/// Primitives are plain values; a host backend walks a layer's primitives in
/// order and paints them under the camera transform.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// An axis-aligned rectangle with optional fill and outline.
    Rect {
        /// Rectangle bounds.
        rect: Rect,
        /// Fill color, if filled.
        fill: Option<Color>,
        /// Outline, if stroked.
        stroke: Option<Stroke>,
    },
    /// A stroked line segment.
    Line {
        /// Segment endpoints.
        line: Line,
        /// Line style.
        stroke: Stroke,
    },
    /// A text label.
    Label(Label),
}

impl Primitive {
    /// Conservative content-space bounds of this primitive.
    ///
    /// Labels report a zero-size rect at their anchor, since text is measured
    /// by the host.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { rect, .. } => *rect,
            Self::Line { line, .. } => Rect::from_points(line.p0, line.p1),
            Self::Label(label) => Rect::from_points(label.position, label.position),
        }
    }
}
