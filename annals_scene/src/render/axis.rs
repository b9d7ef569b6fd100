// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The year axis.

use alloc::string::ToString;

use annals_projection::Projection;
use kurbo::{Line, Point};

use crate::layer::{Layer, LayerKind};
use crate::primitive::{Label, LabelAnchor, Primitive, Stroke, paint};
use crate::style::AxisStyle;

/// Years that receive a tick: `min_year`, then every `step` years up to and
/// including `max_year`.
///
/// A non-positive step yields no ticks.
pub fn tick_years(min_year: i32, max_year: i32, step: i32) -> impl Iterator<Item = i32> {
    let step = usize::try_from(step).unwrap_or(0);
    (min_year..=max_year)
        .step_by(step.max(1))
        .take_while(move |_| step > 0)
}

/// Renders the axis: a rule along the left margin plus labelled ticks.
///
/// The axis has no visibility toggle and no hotspots.
#[must_use]
pub fn render(projection: &Projection, style: &AxisStyle) -> Layer {
    let config = projection.config();
    let x = config.margins.left;
    let height = config.content_size.height;

    let ticks = tick_years(config.min_year, config.max_year, style.step_years);
    let tick_count = ticks.size_hint().1.unwrap_or(0);
    let mut layer = Layer::with_capacity(LayerKind::Axis, 1 + 2 * tick_count, 0);

    layer.primitives.push(Primitive::Line {
        line: Line::new((x, 0.0), (x, height)),
        stroke: Stroke {
            width: style.rule_width,
            color: paint(style.rule_color, 1.0),
        },
    });

    let tick_stroke = Stroke {
        width: style.tick_width,
        color: paint(style.tick_color, 1.0),
    };
    let label_color = paint(style.label_color, 1.0);
    for year in ticks {
        let y = projection.year_to_offset(f64::from(year));
        layer.primitives.push(Primitive::Line {
            line: Line::new(
                (x - style.tick_half_length, y),
                (x + style.tick_half_length, y),
            ),
            stroke: tick_stroke,
        });
        layer.primitives.push(Primitive::Label(Label {
            text: year.to_string(),
            position: Point::new(x - style.label_gap, y),
            anchor: LabelAnchor::CenterRight,
            font_size: style.label_size,
            bold: false,
            color: label_color,
        }));
    }
    layer
}
