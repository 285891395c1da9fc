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

use crate::{
    probe::{Probe, ProbeLimits},
    SearchStep,
};
use waypoint_search::{
    evaluator::Evaluator, incumbent::Incumbent, monitor::search_monitor::SearchMonitor,
    num::SearchNumeric, result::SearchOutcome, stats::SearchStatistics,
};
use waypoint_task::task::SearchTask;

/// Iterative-deepening A*.
///
/// The driver probes the task depth-first under a cost bound that starts at
/// the evaluator's estimate for the initial state and rises, after every
/// failed probe, to the smallest `f`-value the probe pruned. Under an
/// admissible, consistent evaluator the first goal discovered this way is
/// optimal. Memory grows only with search depth.
///
/// # On-path duplicate suppression
///
/// With `path_checking` enabled, the probe skips successors that already
/// appear on the current descent path. This guarantees termination on tasks
/// with zero-cost cycles at a per-node cost linear in the path length. With
/// the check disabled (the default), termination relies on the cost bound,
/// which is safe whenever all operator costs are strictly positive.
///
/// # Examples
///
/// ```rust
/// use waypoint_ids::idastar::IdaStarSearch;
/// use waypoint_search::evaluator::BlindEvaluator;
/// use waypoint_search::monitor::search_monitor::NoOperationMonitor;
/// use waypoint_task::transition_system::TransitionSystemBuilder;
///
/// let mut builder = TransitionSystemBuilder::<i64>::new();
/// let s0 = builder.add_state();
/// let s1 = builder.add_state();
/// let step = builder.add_operator(1);
/// builder.add_arc(s0, step, s1);
/// builder.set_initial(s0);
/// builder.mark_goal(s1);
/// let task = builder.build();
///
/// let mut search = IdaStarSearch::new();
/// let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());
/// assert_eq!(outcome.plan().unwrap().cost(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdaStarSearch {
    path_checking: bool,
}

impl IdaStarSearch {
    /// Creates a new IDA* driver without on-path duplicate suppression.
    #[inline]
    pub fn new() -> Self {
        Self {
            path_checking: false,
        }
    }

    /// Creates a new IDA* driver with the given on-path duplicate setting.
    #[inline]
    pub fn with_path_checking(path_checking: bool) -> Self {
        Self { path_checking }
    }

    /// Returns `true` if on-path duplicate suppression is enabled.
    #[inline]
    pub fn path_checking(&self) -> bool {
        self.path_checking
    }

    /// Runs the search to completion on `task` under `evaluator`.
    #[inline]
    pub fn solve<T, K, E, M>(
        &mut self,
        task: &K,
        evaluator: &mut E,
        mut monitor: M,
    ) -> SearchOutcome<T>
    where
        T: SearchNumeric,
        K: SearchTask<T>,
        E: Evaluator<T, K>,
        M: SearchMonitor<T>,
    {
        let session =
            IdaStarSearchSession::new(self.path_checking, task, evaluator, &mut monitor);
        session.run()
    }
}

impl Default for IdaStarSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IdaStarSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdaStarSearch(path_checking: {})", self.path_checking)
    }
}

/// A search session for the IDA* driver.
///
/// This struct encapsulates the state and logic of a single search run.
struct IdaStarSearchSession<'a, T, K, E, M>
where
    K: SearchTask<T>,
{
    path_checking: bool,
    task: &'a K,
    evaluator: &'a mut E,
    monitor: &'a mut M,
    incumbent: Incumbent<T>,
    stats: SearchStatistics<T>,
    search_bound: T,
    start_time: std::time::Instant,
}

impl<'a, T, K, E, M> IdaStarSearchSession<'a, T, K, E, M>
where
    T: SearchNumeric,
    K: SearchTask<T>,
    E: Evaluator<T, K>,
    M: SearchMonitor<T>,
{
    fn new(path_checking: bool, task: &'a K, evaluator: &'a mut E, monitor: &'a mut M) -> Self {
        Self {
            path_checking,
            task,
            evaluator,
            monitor,
            incumbent: Incumbent::new(),
            stats: SearchStatistics::default(),
            search_bound: T::infinity(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the search session.
    fn run(mut self) -> SearchOutcome<T> {
        self.monitor.on_enter_search();
        self.initialize();

        let step = loop {
            match self.step() {
                SearchStep::InProgress => {}
                finished => break finished,
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize(step)
    }

    /// Evaluates the initial state to seed the first cost bound.
    fn initialize(&mut self) {
        let initial = self.task.initial_state();
        self.stats.on_state_evaluated();
        self.search_bound = self.evaluator.estimate(self.task, &initial);
    }

    /// Runs one probe at the current bound and interprets its report.
    fn step(&mut self) -> SearchStep {
        self.stats.on_iteration();
        self.monitor.on_probe_started(self.search_bound, u64::MAX);

        // Each iteration rediscovers its own incumbent; the first discovery
        // is already optimal under a consistent evaluator.
        self.incumbent.reset();

        let report = Probe::new(
            self.task,
            &mut *self.evaluator,
            &mut self.incumbent,
            &mut self.stats,
            self.search_bound,
            ProbeLimits {
                cost_limit: self.search_bound,
                node_limit: u64::MAX,
            },
            self.path_checking,
        )
        .run();

        self.stats
            .on_probe_finished(self.search_bound, u64::MAX, report.expanded);
        self.monitor
            .on_probe_finished(self.search_bound, report.expanded);

        if report.goal_found {
            self.monitor.on_solution_found(self.incumbent.cost());
            return SearchStep::Solved;
        }

        if report.f_above.is_infinite() {
            // Every reachable f-value was explored; no plan exists.
            return SearchStep::Failed;
        }

        self.search_bound = report.f_above;
        SearchStep::InProgress
    }

    /// Finalizes the outcome based on the terminating step.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize(self, step: SearchStep) -> SearchOutcome<T> {
        match step {
            SearchStep::Solved => {
                let plan = self
                    .incumbent
                    .plan()
                    .expect("expected an incumbent plan when the search is solved");
                SearchOutcome::solved(plan, self.stats)
            }
            SearchStep::Failed => SearchOutcome::failed(self.stats),
            SearchStep::InProgress => {
                unreachable!("the driver loop only exits on a finished step")
            }
        }
    }
}
