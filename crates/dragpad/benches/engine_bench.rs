//! Criterion benchmarks for the drag engine.
//! Focus: per-move classification and replay of synthetic scripts with
//! gesture counts in {1, 10, 100}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dragpad

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dragpad::api::{draw_script, replay, DragCfg, Frame, GestureCfg};
use dragpad::geom::classify;
use dragpad::{DragGeometryEngine, PointerEvent, RecordingHost};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_candidates(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-120.0..120.0), rng.gen_range(-120.0..120.0)))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let anchor = Vector2::zeros();
    let pts = random_candidates(1024, 41);
    c.bench_function("classify_1024", |b| {
        b.iter(|| {
            let mut prev = 0;
            for p in &pts {
                prev = classify(black_box(*p), anchor, 45.0, prev).angle;
            }
            prev
        })
    });
}

fn bench_replay(c: &mut Criterion) {
    let frame = Frame::new(200.0, 300.0, 100.0);
    let mut group = c.benchmark_group("replay");
    for &n in &[1u64, 10, 100] {
        group.bench_with_input(BenchmarkId::new("recorded", n), &n, |b, &n| {
            b.iter_batched(
                || draw_script(frame, DragCfg::default(), GestureCfg::default(), 43, n),
                |script| {
                    let _trace = replay(&script, DragCfg::default());
                },
                BatchSize::SmallInput,
            )
        });

        // bare engine without listeners
        group.bench_with_input(BenchmarkId::new("bare", n), &n, |b, &n| {
            let script = draw_script(frame, DragCfg::default(), GestureCfg::default(), 44, n);
            b.iter(|| {
                let mut engine = DragGeometryEngine::default();
                let mut host = RecordingHost::new(frame);
                for e in &script.events {
                    engine.handle(black_box::<PointerEvent>(*e), &mut host);
                }
                host.taps
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_replay);
criterion_main!(benches);
