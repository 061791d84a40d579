// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use trellis_column_sizing::{
    ColumnResizeController, ColumnSizingOptions, state,
};
use trellis_pointer::{PointerButton, PointerInput, PointerSource};

fn columns(len: usize) -> Vec<state::ColumnWidthState<u32>> {
    state::columns_from_definitions(
        &(0..len as u32).collect::<Vec<_>>(),
        &[],
        &ColumnSizingOptions::default(),
    )
    .expect("fresh state")
}

fn bench_adjust_to_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_sizing/adjust_to_fit");

    // Both passes are single linear walks; this pins that down across
    // column counts well past realistic table sizes.
    for len in [8usize, 64, 256, 1_024] {
        group.throughput(Throughput::Elements(len as u64));

        // Alternate shrink/grow so neither call is a no-op.
        let tight = 110.0 * len as f64;
        let roomy = 200.0 * len as f64;
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || (columns(len), Vec::new()),
                |(mut state, mut events)| {
                    state::adjust_to_fit(&mut state, tight, &mut events);
                    state::adjust_to_fit(&mut state, roomy, &mut events);
                    black_box((state, events));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reset_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_sizing/reset_layout");

    for len in [8usize, 256, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || columns(len),
                |mut state| {
                    state::reset_layout(&mut state, 180.0 * state.len() as f64);
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_sizing/drag_session");

    // One full pointer session: down, a burst of moves, up. This is the
    // hot path during interaction, so per-move cost is what matters.
    let moves = 64;
    group.throughput(Throughput::Elements(moves as u64));
    group.bench_function("64_moves", |b| {
        b.iter_batched(
            || {
                let ids: Vec<u32> = (0..32).collect();
                let mut controller =
                    ColumnResizeController::new(&ids, ColumnSizingOptions::default());
                controller.init(32.0 * 200.0);
                controller
            },
            |mut controller| {
                let down = PointerInput {
                    source: PointerSource::Mouse {
                        button: PointerButton::Primary,
                    },
                    position: Some(Point::new(100.0, 0.0)),
                    hit_is_current_target: true,
                };
                controller.begin_drag(5, &down);
                for i in 0..moves {
                    let x = 100.0 + f64::from(i % 17) - 8.0;
                    controller.drag_to(&PointerInput {
                        position: Some(Point::new(x, 0.0)),
                        ..down
                    });
                }
                controller.end_drag();
                black_box(controller);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_adjust_to_fit,
    bench_reset_layout,
    bench_drag_session
);
criterion_main!(benches);
