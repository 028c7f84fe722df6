// Benchmark for the drag-fill box computation
// Measures worst-case fills across the whole week at each interval

use availability_calendar::models::selection::drag_box;
use availability_calendar::models::slot::{IntervalType, SelectedSlot};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_drag_box_full_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_box_full_week");

    let anchor = SelectedSlot::new(0, 0, 0);
    let current = SelectedSlot::new(6, 23, 45);

    for interval in IntervalType::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(interval.label()),
            &interval,
            |b, &interval| {
                b.iter(|| drag_box(black_box(anchor), black_box(current), interval));
            },
        );
    }

    group.finish();
}

fn bench_drag_box_single_day(c: &mut Criterion) {
    let anchor = SelectedSlot::new(2, 9, 0);
    let current = SelectedSlot::new(2, 17, 30);

    c.bench_function("drag_box_single_day_15min", |b| {
        b.iter(|| {
            drag_box(
                black_box(anchor),
                black_box(current),
                IntervalType::FifteenMin,
            )
        });
    });
}

criterion_group!(benches, bench_drag_box_full_week, bench_drag_box_single_day);
criterion_main!(benches);
