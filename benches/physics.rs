//! Benchmarks for tatter cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tatter::*;

fn bench_cloth_build(c: &mut Criterion) {
    c.bench_function("cloth_54x28_build", |b| {
        b.iter(|| {
            ClothGrid::new(&GridConfig::default(), ClothConfig::new(), Viewport::new(800.0f32, 600.0))
                .map(|cloth| cloth.link_count())
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_54x28_60_frames", |b| {
        b.iter(|| {
            let mut cloth =
                ClothGrid::new(&GridConfig::default(), ClothConfig::new(), Viewport::new(800.0f32, 600.0))
                    .unwrap();
            let mut driver = FrameDriver::default();
            let mut sink = SegmentBuffer::new();
            for _ in 0..60 {
                driver.frame(&mut cloth, 0.016, &PointerState::idle(), &mut sink, &mut NoOpStepObserver);
            }
            sink.len()
        });
    });
}

fn bench_cloth_tearing(c: &mut Criterion) {
    c.bench_function("cloth_54x28_cut_sweep_60_frames", |b| {
        b.iter(|| {
            let mut cloth =
                ClothGrid::new(&GridConfig::default(), ClothConfig::new(), Viewport::new(800.0f32, 600.0))
                    .unwrap();
            let mut pointer = PointerTracker::new();
            pointer.press(180.0, 120.0, PointerButton::Other);
            for frame in 0..60 {
                pointer.moved(180.0 + frame as f32 * 7.0, 120.0);
                cloth.step(0.016, pointer.state(), &mut NoOpStepObserver);
            }
            cloth.link_count()
        });
    });
}

criterion_group!(benches, bench_cloth_build, bench_cloth_simulation, bench_cloth_tearing);
criterion_main!(benches);
