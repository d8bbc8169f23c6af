// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Line, Rect};
use quill_geometry::{SegmentRectTest, classify_segment_rect, segment_intersects_rect};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn coord(&mut self, extent: f64) -> f64 {
        self.next_f64() * extent
    }
}

fn segments(n: usize, seed: u64) -> Vec<Line> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let p0 = (rng.coord(2000.0), rng.coord(2000.0));
            let p1 = (p0.0 + rng.coord(40.0) - 20.0, p0.1 + rng.coord(40.0) - 20.0);
            Line::new(p0, p1)
        })
        .collect()
}

fn bench_segment_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/segment_rect");
    let view = Rect::new(400.0, 300.0, 1200.0, 900.0);

    for len in [1_024usize, 16_384] {
        let segs = segments(len, 7);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("intersects", len), &segs, |b, segs| {
            b.iter(|| {
                segs.iter()
                    .filter(|s| segment_intersects_rect(**s, black_box(view)))
                    .count()
            });
        });

        // How often each stage decides, for reading the numbers above.
        group.bench_with_input(BenchmarkId::new("classify", len), &segs, |b, segs| {
            b.iter(|| {
                let mut stages = [0_usize; 3];
                for s in segs {
                    let slot = match classify_segment_rect(*s, black_box(view)) {
                        SegmentRectTest::LineMisses => 0,
                        SegmentRectTest::SegmentMisses => 1,
                        SegmentRectTest::Intersects => 2,
                    };
                    stages[slot] += 1;
                }
                stages
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment_rect);
criterion_main!(benches);
