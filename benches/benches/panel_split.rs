// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use trellis_panel_split::{AnchorOrder, PanelSplitModel, PanelSplitOptions, SessionFrame};
use trellis_pointer::{PointerButton, PointerInput, PointerSource};

fn bench_drag_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_split/drag_session");

    let moves = 64;
    group.throughput(Throughput::Elements(moves as u64));
    group.bench_function("64_moves", |b| {
        let frame = SessionFrame {
            container: Rect::new(0.0, 0.0, 1200.0, 800.0),
            handle: Rect::new(595.0, 0.0, 605.0, 800.0),
            order: AnchorOrder::FirstThenSecond,
        };
        let down = PointerInput {
            source: PointerSource::Mouse {
                button: PointerButton::Primary,
            },
            position: Some(Point::new(600.0, 400.0)),
            hit_is_current_target: true,
        };

        b.iter_batched(
            || {
                let mut split = PanelSplitModel::new(PanelSplitOptions {
                    default_sizes: [50.0, 50.0],
                    constraints: [10.0, 90.0],
                });
                split.container_resized(1200.0);
                split
            },
            |mut split| {
                split.begin_drag(frame, &down);
                for i in 0..moves {
                    let x = 600.0 + f64::from(i * 13 % 400) - 200.0;
                    black_box(split.drag_to(Point::new(x, 400.0)));
                }
                split.end_drag();
                black_box(split);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_drag_moves);
criterion_main!(benches);
