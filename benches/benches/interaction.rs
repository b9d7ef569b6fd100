// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

use annals::{Dataset, InputEvent, Timeline, TimelineOptions};
use annals_projection::{Projection, TimelineConfig};
use annals_records::{DynastyRecord, DynastyRulers, PoetRecord, Rgb, RulerSource};
use annals_scene::{Interest, Scene, SceneOptions, SceneRecords};

fn poets(n: usize) -> Vec<PoetRecord> {
    (0..n)
        .map(|i| {
            let birth = 600 + (i * 7 % 650) as i32;
            PoetRecord::new(format!("Poet {i}"), "Tang", "Realism", birth, birth + 55)
        })
        .collect()
}

fn dataset(n_poets: usize) -> Dataset {
    let dynasty = DynastyRecord::new("Tang", 618, 907, Rgb::new(0xff6b6b));
    let rulers = (0..90)
        .map(|r| RulerSource {
            title: format!("Ruler {r}"),
            name: String::new(),
            from: 618 + r * 3,
            to: 621 + r * 3,
            description: String::new(),
        })
        .collect();
    Dataset {
        dynasties: vec![dynasty.clone()],
        rulers: vec![DynastyRulers { dynasty, rulers }],
        poets: poets(n_poets),
    }
}

/// A deterministic sweep of screen points across the view.
fn sweep(view: Size, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Point::new(view.width * t, view.height * (1.0 - t))
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let projection = Projection::new(TimelineConfig::default()).unwrap();
    let records = SceneRecords {
        dynasties: Vec::new(),
        rulers: annals_records::merge_dynasty_rulers(&dataset(0).rulers),
        poets: poets(2_000),
    };
    let scene = Scene::new(projection, records, SceneOptions::default());
    let points: Vec<Point> = sweep(Size::new(1400.0, 1400.0), 256);

    c.bench_function("scene/hit_test/2000_poets", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &pt in &points {
                if scene.hit_test(black_box(pt), Interest::all()).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

fn bench_pointer_stream(c: &mut Criterion) {
    let view = Size::new(1200.0, 800.0);
    let mut timeline = Timeline::new(dataset(500), view, TimelineOptions::default()).unwrap();
    let points = sweep(view, 128);

    c.bench_function("timeline/pointer_stream/128", |b| {
        b.iter(|| {
            let mut events = 0_usize;
            timeline.handle(InputEvent::PointerDown(points[0]));
            for &pt in &points {
                events += timeline.handle(InputEvent::PointerMove(pt)).len();
            }
            timeline.handle(InputEvent::PointerUp);
            for &pt in points.iter().rev() {
                events += timeline.handle(InputEvent::PointerMove(pt)).len();
            }
            timeline.reset_view();
            black_box(events)
        });
    });
}

criterion_group!(benches, bench_hit_test, bench_pointer_stream);
criterion_main!(benches);
