// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use quill_canvas::Canvas;
use quill_ink::PrimitiveKind;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// A canvas with `n` short freehand strokes spread over a 4000px square.
fn build_canvas(n: usize, seed: u64) -> Canvas {
    let mut rng = Lcg(seed);
    let mut canvas = Canvas::new(Rect::new(0.0, 0.0, 1280.0, 800.0));
    for _ in 0..n {
        let mut at = Point::new(rng.next_f64() * 4000.0, rng.next_f64() * 4000.0);
        canvas
            .begin_stroke(PrimitiveKind::Stroke, at)
            .expect("finite start");
        for _ in 0..8 {
            at += Vec2::new(rng.next_f64() * 12.0 - 6.0, rng.next_f64() * 12.0 - 6.0);
            canvas.extend_stroke(at).expect("finite sample");
        }
        canvas.commit_stroke().expect("stroke in progress");
    }
    canvas
}

fn bench_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/visible");

    for len in [256usize, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        // Same view every frame: bounds come from the cache.
        let canvas = build_canvas(len, 11);
        let _ = canvas.visible();
        group.bench_with_input(BenchmarkId::new("steady", len), &canvas, |b, canvas| {
            b.iter(|| black_box(canvas.visible()));
        });

        // A pan before every frame: every cached projection is stale.
        group.bench_with_input(BenchmarkId::new("after_pan", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut canvas = build_canvas(len, 11);
                    let _ = canvas.visible();
                    canvas.pan_by(Vec2::new(-300.0, -200.0));
                    canvas
                },
                |canvas| black_box(canvas.visible()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible);
criterion_main!(benches);
