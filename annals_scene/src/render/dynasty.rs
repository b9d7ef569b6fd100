// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynasty bands.

use annals_projection::Projection;
use annals_records::DynastyRecord;
use kurbo::{Point, Rect};

use crate::layer::{Layer, LayerKind};
use crate::primitive::{Label, LabelAnchor, Primitive, Stroke, paint};
use crate::style::BandStyle;

/// Bounds of the band for `dynasty`.
///
/// Bands span the content width between the margins, inset on both sides. An
/// inverted year span collapses to zero height.
#[must_use]
pub fn band_rect(projection: &Projection, style: &BandStyle, dynasty: &DynastyRecord) -> Rect {
    let config = projection.config();
    let x0 = config.margins.left + style.inset;
    let x1 = (config.content_size.width - config.margins.right - style.inset).max(x0);
    let (top, height) = projection.year_span(
        f64::from(dynasty.start_year),
        f64::from(dynasty.end_year),
        0.0,
    );
    Rect::new(x0, top, x1, top + height)
}

/// Renders one translucent, outlined band per dynasty with its name.
#[must_use]
pub fn render(
    dynasties: &[DynastyRecord],
    projection: &Projection,
    style: &BandStyle,
    visible: bool,
) -> Layer {
    if !visible {
        return Layer::empty(LayerKind::Dynasties);
    }
    let margin_left = projection.config().margins.left;
    let mut layer = Layer::with_capacity(LayerKind::Dynasties, 2 * dynasties.len(), 0);
    for dynasty in dynasties {
        let rect = band_rect(projection, style, dynasty);
        layer.primitives.push(Primitive::Rect {
            rect,
            fill: Some(paint(dynasty.color, style.fill_alpha)),
            stroke: Some(Stroke {
                width: style.stroke_width,
                color: paint(dynasty.color, style.stroke_alpha),
            }),
        });
        layer.primitives.push(Primitive::Label(Label {
            text: dynasty.name.clone(),
            position: Point::new(
                margin_left + style.label_offset.0,
                rect.y0 + style.label_offset.1,
            ),
            anchor: LabelAnchor::TopLeft,
            font_size: style.label_size,
            bold: true,
            color: paint(dynasty.color, 1.0),
        }));
    }
    layer
}
