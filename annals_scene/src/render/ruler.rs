// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler reign blocks.

use annals_projection::Projection;
use annals_records::RulerRecord;
use kurbo::Rect;

use crate::hotspot::{Hotspot, HotspotTarget, Interest};
use crate::layer::{Layer, LayerKind};
use crate::primitive::{Primitive, Stroke, paint};
use crate::style::RulerStyle;

/// Bounds of the block for `ruler`, floored at the style's minimum height.
#[must_use]
pub fn block_rect(projection: &Projection, style: &RulerStyle, ruler: &RulerRecord) -> Rect {
    let x = projection.config().margins.left + style.lane_offset;
    let (top, height) = projection.year_span(
        f64::from(ruler.reign_start),
        f64::from(ruler.reign_end),
        style.min_height,
    );
    Rect::new(x, top, x + style.width, top + height)
}

/// Renders one block per ruler in a single lane, each with a hover hotspot.
///
/// Hotspot targets index into `rulers`.
#[must_use]
pub fn render(
    rulers: &[RulerRecord],
    projection: &Projection,
    style: &RulerStyle,
    visible: bool,
) -> Layer {
    if !visible {
        return Layer::empty(LayerKind::Rulers);
    }
    let mut layer = Layer::with_capacity(LayerKind::Rulers, rulers.len(), rulers.len());
    for (index, ruler) in rulers.iter().enumerate() {
        let rect = block_rect(projection, style, ruler);
        layer.primitives.push(Primitive::Rect {
            rect,
            fill: Some(paint(ruler.color, style.fill_alpha)),
            stroke: Some(Stroke {
                width: style.stroke_width,
                color: paint(ruler.color.darker(), style.stroke_alpha),
            }),
        });
        layer.hotspots.push(Hotspot {
            bounds: rect,
            target: HotspotTarget::Ruler(index),
            interest: Interest::HOVER,
        });
    }
    layer
}
