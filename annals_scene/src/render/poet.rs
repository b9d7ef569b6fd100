// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poet lifespan bars.

use annals_projection::Projection;
use annals_records::{CategoryPalette, PoetColumns, PoetRecord};
use kurbo::{Point, Rect};

use crate::hotspot::{Hotspot, HotspotTarget, Interest};
use crate::layer::{Layer, LayerKind};
use crate::primitive::{Label, LabelAnchor, Primitive, Stroke, paint};
use crate::style::PoetStyle;

/// Left edge of the bar for the poet at `birth_index` in birth order.
#[must_use]
pub fn bar_x(
    projection: &Projection,
    style: &PoetStyle,
    columns: PoetColumns,
    birth_index: usize,
) -> f64 {
    let config = projection.config();
    let pitch = config.poet_bar_width + config.poet_bar_spacing;
    let column = columns.column_of(birth_index) as f64;
    config.margins.left + style.lane_offset + column * pitch
}

/// Content point navigation aims at for the poet at `birth_index`: the bar's
/// left edge at the birth year.
#[must_use]
pub fn anchor(
    projection: &Projection,
    style: &PoetStyle,
    columns: PoetColumns,
    birth_index: usize,
    poet: &PoetRecord,
) -> Point {
    Point::new(
        bar_x(projection, style, columns, birth_index),
        projection.year_to_offset(f64::from(poet.birth_year)),
    )
}

/// Bounds of the lifespan bar, floored at the style's minimum height.
#[must_use]
pub fn bar_rect(
    projection: &Projection,
    style: &PoetStyle,
    columns: PoetColumns,
    birth_index: usize,
    poet: &PoetRecord,
) -> Rect {
    let x = bar_x(projection, style, columns, birth_index);
    let (top, height) = projection.year_span(
        f64::from(poet.birth_year),
        f64::from(poet.death_year),
        style.min_height,
    );
    Rect::new(x, top, x + projection.config().poet_bar_width, top + height)
}

/// Bounds of the peak sub-bar inside `bar`, if the poet has a peak period.
#[must_use]
pub fn peak_rect(
    projection: &Projection,
    style: &PoetStyle,
    bar: Rect,
    poet: &PoetRecord,
) -> Option<Rect> {
    let peak = poet.peak_period?;
    let (top, height) = projection.year_span(
        f64::from(peak.start),
        f64::from(peak.end),
        style.peak_min_height,
    );
    let x0 = bar.x0 + style.peak_inset;
    let x1 = (bar.x1 - style.peak_inset).max(x0);
    Some(Rect::new(x0, top, x1, top + height))
}

/// Renders a bar per poet with an optional peak sub-bar and a name label.
///
/// `poets` must already be in birth order (see
/// [`sort_by_birth`](annals_records::sort_by_birth)), since the column of
/// each bar follows its index. Hotspot targets index into `poets`.
///
/// Poets sharing a column overlap when their lifespans intersect.
#[must_use]
pub fn render(
    poets: &[PoetRecord],
    projection: &Projection,
    style: &PoetStyle,
    columns: PoetColumns,
    palette: &CategoryPalette,
    visible: bool,
) -> Layer {
    if !visible {
        return Layer::empty(LayerKind::Poets);
    }
    let mut layer = Layer::with_capacity(LayerKind::Poets, 3 * poets.len(), poets.len());
    for (index, poet) in poets.iter().enumerate() {
        let color = palette.color_for(&poet.category);
        let bar = bar_rect(projection, style, columns, index, poet);
        layer.primitives.push(Primitive::Rect {
            rect: bar,
            fill: Some(paint(color, style.fill_alpha)),
            stroke: Some(Stroke {
                width: style.stroke_width,
                color: paint(color, 1.0),
            }),
        });
        if let Some(peak) = peak_rect(projection, style, bar, poet) {
            layer.primitives.push(Primitive::Rect {
                rect: peak,
                fill: Some(paint(color, style.peak_alpha)),
                stroke: None,
            });
        }
        layer.primitives.push(Primitive::Label(Label {
            text: poet.name.clone(),
            position: Point::new(bar.center().x, bar.y0 - style.label_gap),
            anchor: LabelAnchor::BottomCenter,
            font_size: style.label_size,
            bold: true,
            color: paint(color, 1.0),
        }));
        layer.hotspots.push(Hotspot {
            bounds: bar,
            target: HotspotTarget::Poet(index),
            interest: Interest::CLICK,
        });
    }
    layer
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use annals_projection::{Projection, TimelineConfig};
    use annals_records::{CategoryPalette, PoetColumns, PoetRecord, Rgb};
    use kurbo::Point;

    use super::{anchor, bar_rect, bar_x, peak_rect, render};
    use crate::hotspot::{HotspotTarget, Interest};
    use crate::primitive::{Primitive, paint};
    use crate::style::PoetStyle;

    fn projection() -> Projection {
        Projection::new(TimelineConfig::default()).unwrap()
    }

    #[test]
    fn columns_wrap_after_twelve() {
        let p = projection();
        let style = PoetStyle::default();
        let columns = PoetColumns::default();
        assert_eq!(bar_x(&p, &style, columns, 0), 380.0);
        assert_eq!(bar_x(&p, &style, columns, 12), 380.0);
        assert_eq!(bar_x(&p, &style, columns, 1), 380.0 + 116.0);
    }

    #[test]
    fn short_life_keeps_minimum_height() {
        let poet = PoetRecord::new("Brief", "Tang", "Misc", 700, 700);
        let rect = bar_rect(&projection(), &PoetStyle::default(), PoetColumns::default(), 0, &poet);
        assert_eq!(rect.height(), 15.0);
        assert_eq!(rect.width(), 80.0);
    }

    #[test]
    fn peak_is_inset_and_floored() {
        let p = projection();
        let style = PoetStyle::default();
        let poet = PoetRecord::new("Li Bai", "Tang", "Romanticism", 701, 762).with_peak(740, 740);
        let bar = bar_rect(&p, &style, PoetColumns::default(), 0, &poet);
        let peak = peak_rect(&p, &style, bar, &poet).unwrap();
        assert_eq!(peak.x0, bar.x0 + 3.0);
        assert_eq!(peak.x1, bar.x1 - 3.0);
        assert_eq!(peak.height(), 8.0);

        let plain = PoetRecord::new("Du Fu", "Tang", "Realism", 712, 770);
        assert!(peak_rect(&p, &style, bar, &plain).is_none());
    }

    #[test]
    fn anchor_is_bar_left_at_birth() {
        let p = projection();
        let poet = PoetRecord::new("Du Fu", "Tang", "Realism", 712, 770);
        let pt = anchor(&p, &PoetStyle::default(), PoetColumns::default(), 1, &poet);
        assert_eq!(pt.x, 496.0);
        assert!((pt.y - 224.0).abs() < 1e-9);
    }

    #[test]
    fn bars_use_palette_and_click_hotspots() {
        let poets = [
            PoetRecord::new("Li Bai", "Tang", "Romanticism", 701, 762).with_peak(725, 755),
            PoetRecord::new("Du Fu", "Tang", "Realism", 712, 770),
        ];
        let palette: CategoryPalette = [("Romanticism", Rgb::new(0xff3333))].into_iter().collect();
        let layer = render(
            &poets,
            &projection(),
            &PoetStyle::default(),
            PoetColumns::default(),
            &palette,
            true,
        );

        // Li Bai: bar, peak, label. Du Fu: bar, label.
        assert_eq!(layer.primitives().len(), 5);
        let targets: Vec<_> = layer.hotspots().iter().map(|h| h.target).collect();
        assert_eq!(targets, [HotspotTarget::Poet(0), HotspotTarget::Poet(1)]);
        assert!(layer.hotspots().iter().all(|h| h.interest == Interest::CLICK));

        let Primitive::Rect { fill, .. } = &layer.primitives()[0] else {
            panic!("expected Li Bai's bar");
        };
        assert_eq!(*fill, Some(paint(Rgb::new(0xff3333), 0.15)));
        let Primitive::Rect { fill, .. } = &layer.primitives()[3] else {
            panic!("expected Du Fu's bar");
        };
        assert_eq!(*fill, Some(paint(CategoryPalette::DEFAULT_FALLBACK, 0.15)));

        let Primitive::Label(label) = &layer.primitives()[2] else {
            panic!("expected Li Bai's label");
        };
        assert_eq!(label.text, "Li Bai");
        assert_eq!(label.position.x, 420.0);
        assert_eq!(label.position, Point::new(420.0, layer.hotspots()[0].bounds.y0 - 3.0));
    }
}
