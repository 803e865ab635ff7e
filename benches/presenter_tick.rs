// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast presenter.
//!
//! Measures the performance of:
//! - A tick over a busy stack where nothing is due
//! - A full lifecycle, from show to removal, for a batch of toasts

use criterion::{criterion_group, criterion_main, Criterion};
use dashboard_toasts::ui::notifications::{DisplayDuration, Presenter, Severity};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BATCH: usize = 64;

/// Builds a presenter holding `BATCH` revealed, persistent toasts.
fn busy_presenter(t0: Instant) -> Presenter {
    let mut presenter = Presenter::default();
    for (index, severity) in Severity::ALL.iter().cycle().take(BATCH).enumerate() {
        presenter.show_at(
            t0,
            format!("toast {index}"),
            *severity,
            DisplayDuration::Persistent,
        );
    }
    presenter.tick(t0 + Duration::from_millis(100));
    presenter
}

/// Benchmark a tick where every toast is shown and no deadline has passed.
fn bench_idle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter_tick");

    let t0 = Instant::now();
    let mut presenter = busy_presenter(t0);
    let later = t0 + Duration::from_secs(10);

    group.bench_function("idle_tick_64", |b| {
        b.iter(|| {
            presenter.tick(black_box(later));
        });
    });

    group.finish();
}

/// Benchmark the whole lifecycle: show, reveal, expire and detach.
fn bench_full_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter_tick");

    group.bench_function("lifecycle_64", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut presenter = Presenter::default();
            for index in 0..BATCH {
                presenter.show_at(
                    t0,
                    format!("toast {index}"),
                    Severity::Info,
                    DisplayDuration::from_millis(1000),
                );
            }
            for ms in [100, 1000, 1300] {
                presenter.tick(t0 + Duration::from_millis(ms));
            }
            black_box(presenter.live_count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_idle_tick, bench_full_lifecycle);
criterion_main!(benches);
