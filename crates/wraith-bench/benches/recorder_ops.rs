//! Criterion micro-benchmarks for recording, delayed lookup, snapshot,
//! and burst processing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wraith_bench::{reference_profile, stress_profile};
use wraith_core::TickId;
use wraith_recorder::TrailRecorder;
use wraith_scheduler::BurstScheduler;
use wraith_test_utils::walk;

/// A recorder pre-filled past its wrap point.
fn wrapped_recorder() -> TrailRecorder {
    let timing = reference_profile();
    let mut recorder = TrailRecorder::with_timing(timing);
    for frame in walk(42, timing.capacity * 2, 6) {
        recorder.record(&frame);
    }
    recorder
}

fn bench_record(c: &mut Criterion) {
    let frames = walk(42, 256, 6);

    c.bench_function("record_cold", |b| {
        b.iter(|| {
            let mut recorder = TrailRecorder::with_timing(reference_profile());
            for frame in &frames {
                recorder.record(black_box(frame));
            }
            recorder
        })
    });

    c.bench_function("record_wrapped", |b| {
        let mut recorder = wrapped_recorder();
        let body = &frames[0];
        b.iter(|| recorder.record(black_box(body)))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let recorder = wrapped_recorder();

    c.bench_function("delayed_trail", |b| {
        b.iter(|| black_box(recorder.trail()))
    });

    c.bench_function("frame_at_held_tick", |b| {
        let tick = recorder.last_recorded().unwrap();
        b.iter(|| black_box(recorder.frame_at(black_box(tick))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let reference = wrapped_recorder();
    c.bench_function("snapshot_reference", |b| {
        b.iter(|| black_box(reference.snapshot()))
    });

    let mut stress = TrailRecorder::with_timing(stress_profile());
    for frame in walk(7, stress.capacity(), 6) {
        stress.record(&frame);
    }
    c.bench_function("snapshot_stress", |b| b.iter(|| black_box(stress.snapshot())));

    let snap = reference.snapshot();
    c.bench_function("restore_reference", |b| {
        let mut target = TrailRecorder::with_timing(reference_profile());
        b.iter(|| target.restore(black_box(&snap)).unwrap())
    });
}

fn bench_scheduler(c: &mut Criterion) {
    let recorder = wrapped_recorder();

    c.bench_function("process_tick_no_match", |b| {
        let mut scheduler = BurstScheduler::new();
        // Far-future keys: scanned every tick, never fired.
        for offset in 0..8 {
            scheduler.schedule(TickId(recorder.current_tick().0 + 1000 + offset));
        }
        b.iter(|| black_box(scheduler.process_tick(Some(&recorder))))
    });
}

criterion_group!(
    benches,
    bench_record,
    bench_lookup,
    bench_snapshot,
    bench_scheduler
);
criterion_main!(benches);
