// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;

use canopy_placement::select::{SelectionContext, select};
use canopy_placement::types::{ConnectedPosition, HorizontalAnchor, VerticalAnchor};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);

/// The four corner pairings a dropdown typically offers, cycled to the
/// requested length.
fn gen_candidates(count: usize) -> Vec<ConnectedPosition> {
    use HorizontalAnchor::*;
    use VerticalAnchor::*;
    let corners = [
        ConnectedPosition::new(Start, Bottom, Start, Top),
        ConnectedPosition::new(Start, Top, Start, Bottom),
        ConnectedPosition::new(End, Bottom, End, Top),
        ConnectedPosition::new(End, Top, End, Bottom),
    ];
    (0..count).map(|i| corners[i % corners.len()].clone()).collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for &count in &[2usize, 8, 32] {
        let candidates = gen_candidates(count);

        // First candidate fits: the scan exits immediately.
        let origin = Rect::new(100.0, 100.0, 220.0, 140.0);
        let panel = Rect::new(0.0, 0.0, 240.0, 320.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("first_fit/{count}"), |b| {
            b.iter(|| {
                select(
                    black_box(&candidates),
                    black_box(origin),
                    black_box(panel),
                    VIEWPORT,
                    &SelectionContext::default(),
                )
            })
        });

        // Origin in a corner and an oversize panel: nothing fits, so every
        // candidate is evaluated and the fallback scan runs to the end.
        let cramped_origin = Rect::new(8.0, 8.0, 40.0, 24.0);
        let oversize = Rect::new(0.0, 0.0, 1400.0, 900.0);
        group.bench_function(format!("full_scan/{count}"), |b| {
            b.iter(|| {
                select(
                    black_box(&candidates),
                    black_box(cramped_origin),
                    black_box(oversize),
                    VIEWPORT,
                    &SelectionContext::default(),
                )
            })
        });

        // Flexible dimensions on: every candidate also gets a sizing box.
        let ctx = SelectionContext {
            flexible_dimensions: true,
            ..Default::default()
        };
        group.bench_function(format!("flexible/{count}"), |b| {
            b.iter(|| {
                select(
                    black_box(&candidates),
                    black_box(cramped_origin),
                    black_box(oversize),
                    VIEWPORT,
                    &ctx,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
