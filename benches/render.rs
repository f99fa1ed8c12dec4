// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tracklog::render::{render_graph, render_graph_text, RenderOptions};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.graph`, `render.text`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `linear`, `feature_branches`).
fn benches_render(c: &mut Criterion) {
    let cases =
        [fixtures::Case::Linear, fixtures::Case::FeatureBranches, fixtures::Case::WideConvergence];

    let mut group = c.benchmark_group("render.graph");
    for case in cases {
        let feed = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let lines = render_graph(black_box(&feed), RenderOptions::default())
                    .expect("render_graph");
                black_box(lines.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.text");
    for case in cases {
        let feed = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let text = render_graph_text(black_box(&feed), RenderOptions::default())
                    .expect("render_graph_text");
                black_box(text.len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
