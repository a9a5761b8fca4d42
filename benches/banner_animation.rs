// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use toastbox::notify::{Motion, SlideBanner, Step};

/// Drives one banner through its whole life: slide in, dwell, slide out.
fn full_cycle(screen_width: i32, motion: &Motion) -> usize {
    let mut banner = SlideBanner::new(screen_width, 280, motion);
    let mut ticks = 0;
    while !matches!(banner.tick(), Step::Arrived(_)) {
        ticks += 1;
    }
    banner.finish_dwell();
    while banner.tick() != Step::Departed {
        ticks += 1;
    }
    ticks
}

fn banner_animation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_animation");
    let motion = Motion::default();

    group.bench_function("full_cycle_1080p", |b| {
        b.iter(|| black_box(full_cycle(black_box(1920), &motion)));
    });

    group.bench_function("full_cycle_8k_step_1", |b| {
        let slow = Motion { step: 1, ..motion };
        b.iter(|| black_box(full_cycle(black_box(7680), &slow)));
    });

    group.finish();
}

criterion_group!(benches, banner_animation_benchmark);
criterion_main!(benches);
