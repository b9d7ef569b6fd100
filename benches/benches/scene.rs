// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use annals_projection::{Projection, TimelineConfig};
use annals_records::{
    DynastyRecord, DynastyRulers, PoetRecord, Rgb, RulerSource, merge_dynasty_rulers,
    sort_by_birth,
};
use annals_scene::{LayerKind, Scene, SceneOptions, SceneRecords};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn year_in(&mut self, start: i32, span: u32) -> i32 {
        start + (self.next_u32() % span.max(1)) as i32
    }
}

fn poets(n: usize, seed: u64) -> Vec<PoetRecord> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|i| {
            let birth = rng.year_in(600, 650);
            let life = rng.year_in(20, 60);
            let mut poet = PoetRecord::new(
                format!("Poet {i}"),
                "Tang",
                ["Realism", "Romanticism", "Frontier"][i % 3],
                birth,
                birth + life,
            );
            if i % 2 == 0 {
                poet = poet.with_peak(birth + 20, birth + life - 5);
            }
            poet
        })
        .collect()
}

fn ruler_lists(dynasties: usize, per_dynasty: usize) -> Vec<DynastyRulers> {
    (0..dynasties)
        .rev()
        .map(|d| {
            let start = 600 + (d * 700 / dynasties.max(1)) as i32;
            let dynasty = DynastyRecord::new(format!("D{d}"), start, start + 60, Rgb::new(0x336699));
            let rulers = (0..per_dynasty)
                .map(|r| RulerSource {
                    title: format!("R{d}.{r}"),
                    name: String::new(),
                    from: start + r as i32 * 3,
                    to: start + r as i32 * 3 + 3,
                    description: String::new(),
                })
                .collect();
            DynastyRulers { dynasty, rulers }
        })
        .collect()
}

fn records(n_poets: usize) -> SceneRecords {
    let lists = ruler_lists(12, 20);
    SceneRecords {
        dynasties: lists.iter().map(|l| l.dynasty.clone()).collect(),
        rulers: merge_dynasty_rulers(&lists),
        poets: poets(n_poets, 0x5eed),
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("records/aggregate");
    for &n in &[100_usize, 1_000, 10_000] {
        let input = poets(n, 7);
        group.bench_with_input(BenchmarkId::new("sort_by_birth", n), &input, |b, input| {
            b.iter(|| black_box(sort_by_birth(black_box(input))));
        });
    }
    let lists = ruler_lists(40, 25);
    group.bench_function("merge_dynasty_rulers/40x25", |b| {
        b.iter(|| black_box(merge_dynasty_rulers(black_box(&lists))));
    });
    group.finish();
}

fn bench_scene_build(c: &mut Criterion) {
    let projection = Projection::new(TimelineConfig::default()).unwrap();
    let mut group = c.benchmark_group("scene/build");
    for &n in &[100_usize, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || records(n),
                |records| black_box(Scene::new(projection, records, SceneOptions::default())),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_visibility_toggle(c: &mut Criterion) {
    let projection = Projection::new(TimelineConfig::default()).unwrap();
    let mut scene = Scene::new(projection, records(1_000), SceneOptions::default());
    c.bench_function("scene/toggle_poets/1000", |b| {
        b.iter(|| {
            scene.set_visibility(LayerKind::Poets, false);
            scene.set_visibility(LayerKind::Poets, true);
            black_box(scene.revision())
        });
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_scene_build,
    bench_visibility_toggle
);
criterion_main!(benches);
