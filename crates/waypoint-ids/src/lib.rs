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

//! Waypoint-IDS: iterative-deepening search for cost-optimal planning
//!
//! High-level crate that implements two cost-optimal search engines over a
//! deterministic planning task guided by an admissible evaluator. Both share
//! one bounded depth-first probe kernel and differ only in how they drive it:
//!
//! - `idastar::IdaStarSearch` raises a cost bound from `h(s0)` to the
//!   smallest pruned `f`-value until a goal is found. Classic IDA*.
//! - `ibex::IbexSearch` maintains a closed cost bracket around the optimal
//!   plan cost and couples every probe to a node-expansion budget, doubling
//!   its workload per iteration. This bounds total expansion work within a
//!   constant factor of the final IDA* iteration while keeping the same
//!   linear memory profile.
//!
//! Core flow
//! - Provide a task implementing `waypoint_task::task::SearchTask`.
//! - Provide an admissible `waypoint_search::evaluator::Evaluator`.
//! - Optionally attach a `waypoint_search::monitor::search_monitor::SearchMonitor`.
//! - Run `solve` on either driver; the returned outcome carries the plan
//!   (or an unsolvability verdict) and the collected statistics.
//!
//! Design highlights
//! - One probe kernel, two drivers: the `probe` module owns the
//!   priority-ordered pruning rules; drivers only pick limits and interpret
//!   the returned frontier values.
//! - Memory grows with search depth only: no open or closed lists, no
//!   duplicate detection across probes.
//! - Deterministic given a deterministic task: expansion order equals the
//!   task's successor order.
//!
//! Assumptions and guarantees
//! - The evaluator must be admissible; for optimality certificates it must
//!   also be consistent. Violations are not detected.
//! - Strictly positive operator costs (or the IDA* on-path duplicate check)
//!   are required for termination on cyclic tasks.
//!
//! Module map
//! - `probe`: the bounded DFS kernel and its report.
//! - `idastar`: the IDA* driver.
//! - `ibex`: the budget-doubling interval driver.

pub mod ibex;
pub mod idastar;
pub mod probe;

/// The result of a single driver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchStep {
    /// The search should continue with another iteration.
    InProgress,
    /// An optimal plan has been certified.
    Solved,
    /// The task has been proven unsolvable.
    Failed,
}

impl std::fmt::Display for SearchStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStep::InProgress => write!(f, "InProgress"),
            SearchStep::Solved => write!(f, "Solved"),
            SearchStep::Failed => write!(f, "Failed"),
        }
    }
}
