// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use waypoint_ids::{ibex::IbexSearch, idastar::IdaStarSearch};
use waypoint_search::{evaluator::BlindEvaluator, monitor::search_monitor::NoOperationMonitor};
use waypoint_task::transition_system::{TransitionSystem, TransitionSystemBuilder};

/// A unit-cost chain of length `n` with the goal at the far end. Blind
/// probing on this task pays the full quadratic iterative-deepening cost,
/// which makes it a stable micro-benchmark for the probe kernel.
fn chain(n: usize) -> TransitionSystem<i64> {
    let mut builder = TransitionSystemBuilder::new();
    let states: Vec<_> = (0..=n).map(|_| builder.add_state()).collect();
    for window in states.windows(2) {
        let op = builder.add_operator(1);
        builder.add_arc(window[0], op, window[1]);
    }
    builder.set_initial(states[0]);
    builder.mark_goal(states[n]);
    builder.build()
}

fn bench_blind_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("blind_chain");

    for &n in &[16usize, 64, 256] {
        let task = chain(n);

        group.bench_with_input(BenchmarkId::new("idastar", n), &task, |b, task| {
            b.iter(|| {
                let mut search = IdaStarSearch::new();
                search.solve(
                    black_box(task),
                    &mut BlindEvaluator::new(),
                    NoOperationMonitor::new(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("ibex", n), &task, |b, task| {
            b.iter(|| {
                let mut search = IbexSearch::new();
                search.solve(
                    black_box(task),
                    &mut BlindEvaluator::new(),
                    NoOperationMonitor::new(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_blind_chain);
criterion_main!(benches);
