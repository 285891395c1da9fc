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

//! The bounded depth-first probe kernel shared by both drivers.
//!
//! A probe is one depth-first descent from the initial state under a cost
//! limit and a node-expansion limit. The kernel applies a fixed priority
//! order of checks at every visited state; the first matching check wins:
//!
//! 1. If the incumbent cost equals the driver's certified lower bound, the
//!    optimum is already proven; unwind without doing anything.
//! 2. If `f = g + h` exceeds the cost limit, record `f` into the
//!    above-the-limit frontier (`f_above`) and backtrack.
//! 3. If `f` reaches the incumbent cost, the subtree cannot improve the
//!    incumbent; pin `f_below` to the incumbent cost and backtrack.
//! 4. Otherwise raise the explored frontier `f_below` to `f`.
//! 5. If the expansion count has reached the node limit, backtrack.
//! 6. If the state is a goal, record the incumbent and unwind the probe.
//! 7. Expand: generate successors in task order, descend into each.
//!
//! A node counts as expanded when it reaches step 7, before any of its
//! children are visited; the node limit therefore bounds expansions, not
//! evaluations.
//!
//! All probe-scoped values live in the [`Probe`] itself, which borrows the
//! incumbent and statistics from the driver for the duration of one run.
//! Recursion depth is bounded by the cost limit divided by the smallest
//! operator cost (or by the deepest explored path); callers must provision
//! stack accordingly.

use std::cmp::{max, min};
use waypoint_core::{
    math::interval::ClosedInterval,
    num::{constants::Zero, ops::saturating_arithmetic::SaturatingAddVal},
};
use waypoint_search::{
    evaluator::Evaluator, incumbent::Incumbent, num::SearchNumeric, stats::SearchStatistics,
};
use waypoint_task::{
    index::OperatorIndex,
    task::{OperatorBuffer, SearchTask},
};

/// The limits one probe runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeLimits<T> {
    /// Subtrees whose `f`-value exceeds this limit are pruned.
    pub cost_limit: T,
    /// The probe stops expanding once this many nodes were expanded.
    /// `u64::MAX` disables the limit.
    pub node_limit: u64,
}

/// What a finished probe reports back to its driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport<T> {
    /// The largest `f`-value fully explored below the cost limit, pinned to
    /// the incumbent cost if the incumbent bounded the probe.
    pub f_below: T,
    /// The smallest `f`-value pruned by the cost limit; `T::infinity()` if
    /// nothing was pruned.
    pub f_above: T,
    /// The number of nodes this probe expanded.
    pub expanded: u64,
    /// `true` if this probe discovered an improving plan.
    pub goal_found: bool,
    /// `true` if the node limit cut the probe short.
    pub node_limit_hit: bool,
    /// The incumbent cost at the end of the probe.
    pub incumbent_cost: T,
}

impl<T> ProbeReport<T>
where
    T: SearchNumeric,
{
    /// Maps this report onto a closed bracket of the optimal plan cost.
    ///
    /// - If the node limit fired, only the explored frontier is trustworthy:
    ///   the bracket is `[0, f_below]`.
    /// - If the incumbent bounded the probe, the incumbent cost is both a
    ///   lower and an upper bound for this probe: `[cost, cost]`.
    /// - Otherwise the probe proved that no plan of cost up to the limit
    ///   exists: the bracket is `[f_above, ∞]`.
    pub fn cost_bracket(&self) -> ClosedInterval<T> {
        if self.node_limit_hit {
            ClosedInterval::new(T::ZERO, self.f_below)
        } else if self.f_below >= self.incumbent_cost {
            ClosedInterval::point(self.incumbent_cost)
        } else {
            ClosedInterval::new(self.f_above, T::infinity())
        }
    }
}

/// One bounded depth-first descent.
///
/// The probe owns every piece of per-probe scratch (frontier values, the
/// expansion counter, the current operator path, and the optional on-path
/// state sequence) and borrows the driver's incumbent and statistics. It is
/// consumed by [`Probe::run`].
pub(crate) struct Probe<'a, T, K, E>
where
    K: SearchTask<T>,
{
    task: &'a K,
    evaluator: &'a mut E,
    incumbent: &'a mut Incumbent<T>,
    stats: &'a mut SearchStatistics<T>,
    solution_lower_bound: T,
    cost_limit: T,
    node_limit: u64,
    path_checking: bool,
    f_below: T,
    f_above: T,
    expanded: u64,
    goal_found: bool,
    op_path: Vec<OperatorIndex>,
    state_path: Vec<K::State>,
}

impl<'a, T, K, E> Probe<'a, T, K, E>
where
    T: SearchNumeric,
    K: SearchTask<T>,
    E: Evaluator<T, K>,
{
    /// Creates a probe over `task` with fresh probe-local state.
    pub(crate) fn new(
        task: &'a K,
        evaluator: &'a mut E,
        incumbent: &'a mut Incumbent<T>,
        stats: &'a mut SearchStatistics<T>,
        solution_lower_bound: T,
        limits: ProbeLimits<T>,
        path_checking: bool,
    ) -> Self {
        Self {
            task,
            evaluator,
            incumbent,
            stats,
            solution_lower_bound,
            cost_limit: limits.cost_limit,
            node_limit: limits.node_limit,
            path_checking,
            f_below: T::ZERO,
            f_above: T::infinity(),
            expanded: 0,
            goal_found: false,
            op_path: Vec::new(),
            state_path: Vec::new(),
        }
    }

    /// Runs the probe to completion and reports the observed frontiers.
    pub(crate) fn run(mut self) -> ProbeReport<T> {
        let initial = self.task.initial_state();
        if self.path_checking {
            self.state_path.push(initial.clone());
        }

        self.limited_dfs(initial, T::ZERO);

        ProbeReport {
            f_below: self.f_below,
            f_above: self.f_above,
            expanded: self.expanded,
            goal_found: self.goal_found,
            node_limit_hit: self.expanded >= self.node_limit,
            incumbent_cost: self.incumbent.cost(),
        }
    }

    fn limited_dfs(&mut self, state: K::State, g: T) {
        self.stats.on_state_evaluated();
        let h = self.evaluator.estimate(self.task, &state);
        let f = g.saturating_add_val(h);

        if self.incumbent.cost() == self.solution_lower_bound {
            // The driver has already certified the optimum; just unwind.
            return;
        } else if f > self.cost_limit {
            self.f_above = min(self.f_above, f);
            return;
        } else if f >= self.incumbent.cost() {
            self.f_below = self.incumbent.cost();
            return;
        } else {
            self.f_below = max(self.f_below, f);
        }

        if self.expanded >= self.node_limit {
            return;
        }

        if self.task.is_goal(&state) {
            self.goal_found = true;
            self.incumbent.record(f, &self.op_path);
            return;
        }

        let mut operators = OperatorBuffer::new();
        self.task.applicable_operators(&state, &mut operators);

        self.expanded += 1;
        self.stats.on_node_expanded();

        for &op in operators.iter() {
            let successor = self.task.apply(&state, op);
            self.stats.on_state_generated();

            if self.path_checking && self.state_path.contains(&successor) {
                continue;
            }

            let successor_g = g.saturating_add_val(self.task.operator_cost(op));

            self.op_path.push(op);
            if self.path_checking {
                self.state_path.push(successor.clone());
            }

            self.limited_dfs(successor, successor_g);

            if self.goal_found {
                return;
            }

            self.op_path.pop();
            if self.path_checking {
                self.state_path.pop();
            }
        }
    }
}
