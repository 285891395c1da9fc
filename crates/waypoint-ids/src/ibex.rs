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
    probe::{Probe, ProbeLimits, ProbeReport},
    SearchStep,
};
use waypoint_core::{
    math::interval::ClosedInterval,
    num::{
        constants::{PlusOne, Zero},
        ops::{checked_arithmetic::CheckedShlVal, saturating_arithmetic::SaturatingAddVal},
    },
};
use waypoint_search::{
    evaluator::Evaluator, incumbent::Incumbent, monitor::search_monitor::SearchMonitor,
    num::SearchNumeric, result::SearchOutcome, stats::SearchStatistics,
};
use waypoint_task::task::SearchTask;

/// Budget-doubling iterative deepening over a cost bracket.
///
/// The driver maintains a closed interval `[lo, hi]` around the optimal
/// plan cost (`lo` a certified lower bound, `hi` an upper bound) and a
/// node-expansion budget. Each outer iteration runs up to three phases:
///
/// 1. A baseline probe at `lo` with unbounded expansions. If it already
///    expanded at least `c1 * budget` nodes, the workload has doubled and
///    the iteration ends (on such tasks the driver behaves exactly like
///    IDA*).
/// 2. Exponential search: the cost limit grows by `2^delta` above `lo`
///    until the bracket collapses or a probe overshoots `c1 * budget`
///    expansions, each probe capped at `c2 * budget` expansions.
/// 3. Binary search: the bracket is bisected while expansions fall outside
///    the `[c1 * budget, c2 * budget)` window.
///
/// The budget then ratchets to `max(expansions, c1 * budget)`. The loop
/// ends once the incumbent cost reaches `lo`, which certifies optimality.
/// Total expansion work stays within a constant factor of the final IDA*
/// iteration while memory still grows only with search depth.
///
/// # Examples
///
/// ```rust
/// use waypoint_ids::ibex::IbexSearch;
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
/// let mut search = IbexSearch::new();
/// let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());
/// assert_eq!(outcome.plan().unwrap().cost(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IbexSearch {
    c1: u64,
    c2: u64,
    force_idastar: bool,
}

impl IbexSearch {
    /// The default lower budget multiplier.
    pub const DEFAULT_C1: u64 = 2;
    /// The default upper budget multiplier.
    pub const DEFAULT_C2: u64 = 8;

    /// Creates a new driver with the default budget multipliers.
    #[inline]
    pub fn new() -> Self {
        Self {
            c1: Self::DEFAULT_C1,
            c2: Self::DEFAULT_C2,
            force_idastar: false,
        }
    }

    /// Creates a new driver with the given budget multipliers.
    ///
    /// # Panics
    ///
    /// Panics if `c1 < 2` or `c2 < c1`.
    #[inline]
    pub fn with_constants(c1: u64, c2: u64) -> Self {
        assert!(c1 >= 2, "Invalid budget constants: c1 must be at least 2");
        assert!(
            c2 >= c1,
            "Invalid budget constants: c2 must be at least c1"
        );
        Self {
            c1,
            c2,
            force_idastar: false,
        }
    }

    /// Creates a new driver with the given budget multipliers if they are
    /// valid.
    ///
    /// Returns `None` if `c1 < 2` or `c2 < c1`.
    #[inline]
    pub fn try_with_constants(c1: u64, c2: u64) -> Option<Self> {
        if c1 >= 2 && c2 >= c1 {
            Some(Self {
                c1,
                c2,
                force_idastar: false,
            })
        } else {
            None
        }
    }

    /// Forces every outer iteration to end after its baseline probe, which
    /// makes the driver behave exactly like IDA*. A comparison hook, not a
    /// correctness switch.
    #[inline]
    pub fn force_idastar(mut self, force: bool) -> Self {
        self.force_idastar = force;
        self
    }

    /// Returns the lower budget multiplier.
    #[inline]
    pub fn c1(&self) -> u64 {
        self.c1
    }

    /// Returns the upper budget multiplier.
    #[inline]
    pub fn c2(&self) -> u64 {
        self.c2
    }

    /// Returns `true` if the IDA* degeneration hook is active.
    #[inline]
    pub fn is_forced_idastar(&self) -> bool {
        self.force_idastar
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
        let session = IbexSearchSession::new(
            self.c1,
            self.c2,
            self.force_idastar,
            task,
            evaluator,
            &mut monitor,
        );
        session.run()
    }
}

impl Default for IbexSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IbexSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IbexSearch(c1: {}, c2: {}, force_idastar: {})",
            self.c1, self.c2, self.force_idastar
        )
    }
}

/// A search session for the interval driver.
///
/// This struct encapsulates the state of a single search run: the cost
/// bracket, the node budget, the incumbent, and the statistics.
struct IbexSearchSession<'a, T, K, E, M>
where
    T: SearchNumeric,
    K: SearchTask<T>,
{
    c1: u64,
    c2: u64,
    force_idastar: bool,
    task: &'a K,
    evaluator: &'a mut E,
    monitor: &'a mut M,
    incumbent: Incumbent<T>,
    stats: SearchStatistics<T>,
    interval: ClosedInterval<T>,
    budget: u64,
    solution_lower_bound: T,
    start_time: std::time::Instant,
}

impl<'a, T, K, E, M> IbexSearchSession<'a, T, K, E, M>
where
    T: SearchNumeric,
    K: SearchTask<T>,
    E: Evaluator<T, K>,
    M: SearchMonitor<T>,
{
    fn new(
        c1: u64,
        c2: u64,
        force_idastar: bool,
        task: &'a K,
        evaluator: &'a mut E,
        monitor: &'a mut M,
    ) -> Self {
        Self {
            c1,
            c2,
            force_idastar,
            task,
            evaluator,
            monitor,
            incumbent: Incumbent::new(),
            stats: SearchStatistics::default(),
            interval: ClosedInterval::point(T::ZERO),
            budget: 0,
            solution_lower_bound: T::ZERO,
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the search session.
    fn run(mut self) -> SearchOutcome<T> {
        self.monitor.on_enter_search();
        self.initialize();

        while self.incumbent.cost() > self.interval.lo() {
            self.stats.on_iteration();
            self.stats.record_budget(self.budget);
            self.outer_iteration();
        }

        let step = if self.goal_certified() {
            SearchStep::Solved
        } else {
            SearchStep::Failed
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize(step)
    }

    /// Seeds the bracket with the evaluator's estimate for the initial
    /// state: `[h(s0), ∞]`.
    fn initialize(&mut self) {
        let initial = self.task.initial_state();
        self.stats.on_state_evaluated();
        let root_estimate = self.evaluator.estimate(self.task, &initial);
        self.interval = ClosedInterval::new(root_estimate, T::infinity());
        self.budget = 0;
    }

    /// Runs one outer iteration: baseline probe, exponential search, binary
    /// search, budget ratchet.
    fn outer_iteration(&mut self) {
        // Phase 1: baseline probe at the certified lower bound, with
        // unbounded expansions. The upper bound is reopened first.
        self.solution_lower_bound = self.interval.lo();
        self.interval = ClosedInterval::new(self.interval.lo(), T::infinity());

        let report = self.probe(self.interval.lo(), u64::MAX);
        let mut expanded = report.expanded;
        self.intersect(report.cost_bracket());

        if self.force_idastar || expanded >= self.c1.saturating_mul(self.budget) {
            // The workload already doubled; accept it as the new budget.
            self.budget = expanded;
            return;
        }

        // Phase 2: grow the cost limit geometrically above the lower bound
        // until the bracket collapses or a probe overshoots c1 * budget
        // expansions.
        let mut delta: u32 = 0;
        while !self.interval.is_point() && expanded < self.c1.saturating_mul(self.budget) {
            // A step that would shift past the type width saturates to
            // infinity instead of wrapping.
            let step = T::PLUS_ONE
                .checked_shl_val(delta)
                .filter(|step| *step > T::ZERO)
                .unwrap_or_else(T::infinity);
            let next_cost = self.interval.lo().saturating_add_val(step);
            delta += 1;

            self.solution_lower_bound = self.interval.lo();
            let report = self.probe(next_cost, self.c2.saturating_mul(self.budget));
            expanded = report.expanded;
            self.intersect(report.cost_bracket());
        }

        // Phase 3: bisect the bracket while the expansion count sits
        // outside the [c1 * budget, c2 * budget) window.
        while !self.interval.is_point()
            && !(self.c1.saturating_mul(self.budget) <= expanded
                && expanded < self.c2.saturating_mul(self.budget))
        {
            let next_cost = self.interval.midpoint();

            self.solution_lower_bound = self.interval.lo();
            let report = self.probe(next_cost, self.c2.saturating_mul(self.budget));
            expanded = report.expanded;
            self.intersect(report.cost_bracket());
        }

        self.budget = expanded.max(self.c1.saturating_mul(self.budget));
    }

    /// Runs one bounded probe and records it.
    fn probe(&mut self, cost_limit: T, node_limit: u64) -> ProbeReport<T> {
        self.monitor.on_probe_started(cost_limit, node_limit);

        let report = Probe::new(
            self.task,
            &mut *self.evaluator,
            &mut self.incumbent,
            &mut self.stats,
            self.solution_lower_bound,
            ProbeLimits {
                cost_limit,
                node_limit,
            },
            false,
        )
        .run();

        self.stats
            .on_probe_finished(cost_limit, node_limit, report.expanded);
        self.monitor.on_probe_finished(cost_limit, report.expanded);

        if report.goal_found {
            self.monitor.on_solution_found(self.incumbent.cost());
        }

        report
    }

    /// Narrows the bracket by the probe result. A disjoint result collapses
    /// to the degenerate `[0, 0]` sentinel; the probe contract keeps that
    /// from happening.
    fn intersect(&mut self, bracket: ClosedInterval<T>) {
        self.interval = self
            .interval
            .intersection(bracket)
            .unwrap_or_else(|| ClosedInterval::point(T::ZERO));
    }

    /// Returns `true` once a recorded plan matches the certified lower
    /// bound.
    fn goal_certified(&self) -> bool {
        self.incumbent.is_recorded() && self.incumbent.cost() == self.interval.lo()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idastar::IdaStarSearch;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use waypoint_search::evaluator::{BlindEvaluator, TableEvaluator};
    use waypoint_search::monitor::search_monitor::NoOperationMonitor;
    use waypoint_task::transition_system::{TransitionSystem, TransitionSystemBuilder};

    type IntegerType = i64;

    /// s0 -> s1 -> ... -> s{n} (goal), unit costs.
    fn chain(n: usize) -> TransitionSystem<IntegerType> {
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

    /// A solvable random layered task: a backbone chain guarantees a plan,
    /// extra forward arcs add branching. Forward-only arcs keep the task
    /// acyclic, so blind probes terminate without path checking.
    fn random_task(seed: u64, num_states: usize, extra_arcs: usize) -> TransitionSystem<IntegerType> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut builder = TransitionSystemBuilder::new();
        let states: Vec<_> = (0..num_states).map(|_| builder.add_state()).collect();

        for window in states.windows(2) {
            let op = builder.add_operator(rng.gen_range(1..=3));
            builder.add_arc(window[0], op, window[1]);
        }
        for _ in 0..extra_arcs {
            let from = rng.gen_range(0..num_states - 1);
            let to = rng.gen_range(from + 1..num_states);
            let op = builder.add_operator(rng.gen_range(1..=3));
            builder.add_arc(states[from], op, states[to]);
        }

        builder.set_initial(states[0]);
        builder.mark_goal(states[num_states - 1]);
        builder.build()
    }

    #[test]
    fn test_trivial_goal_returns_empty_plan() {
        let mut builder = TransitionSystemBuilder::<IntegerType>::new();
        let s0 = builder.add_state();
        builder.set_initial(s0);
        builder.mark_goal(s0);
        let task = builder.build();

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        assert!(outcome.is_solved());
        let plan = outcome.plan().expect("trivial task must be solved");
        assert!(plan.is_empty());
        assert_eq!(plan.cost(), 0);
        assert_eq!(outcome.statistics().expanded_states, 0);
    }

    #[test]
    fn test_chain_with_perfect_heuristic_solves_in_one_iteration() {
        let task = chain(3);
        let mut evaluator =
            TableEvaluator::new((0..=3).map(|i| (3 - i) as IntegerType).collect());

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut evaluator, NoOperationMonitor::new());

        assert!(outcome.is_solved());
        assert_eq!(outcome.plan().unwrap().cost(), 3);

        // The bracket starts at [3, inf]; the baseline probe at 3 finds the
        // goal and collapses it to [3, 3].
        let stats = outcome.statistics();
        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.probes.len(), 1);
        assert_eq!(stats.probes[0].cost_limit, 3);
    }

    #[test]
    fn test_blind_chain_finds_optimal_plan() {
        let task = chain(7);

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        assert!(outcome.is_solved());
        let plan = outcome.plan().unwrap();
        assert_eq!(plan.cost(), 7);
        assert_eq!(plan.len(), 7);
    }

    #[test]
    fn test_budget_is_monotonically_non_decreasing() {
        let task = chain(20);

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        assert!(outcome.is_solved());
        let budgets = &outcome.statistics().iteration_budgets;
        assert!(!budgets.is_empty());
        for window in budgets.windows(2) {
            assert!(
                window[0] <= window[1],
                "budget must never decrease: {:?}",
                budgets
            );
        }
    }

    #[test]
    fn test_baseline_probe_cost_limits_are_non_decreasing() {
        let task = chain(20);

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        // Probes with an unbounded node limit are exactly the baseline
        // probes at the certified lower bound of each outer iteration.
        let lower_bounds: Vec<_> = outcome
            .statistics()
            .probes
            .iter()
            .filter(|p| p.node_limit == u64::MAX)
            .map(|p| p.cost_limit)
            .collect();
        for window in lower_bounds.windows(2) {
            assert!(
                window[0] <= window[1],
                "the lower bound must never decrease: {:?}",
                lower_bounds
            );
        }
    }

    #[test]
    fn test_unsolvable_dead_end_fails_after_one_probe() {
        let mut builder = TransitionSystemBuilder::<IntegerType>::new();
        let s0 = builder.add_state();
        builder.set_initial(s0);
        let task = builder.build();

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        assert!(outcome.is_failed());
        assert_eq!(outcome.statistics().probes.len(), 1);
    }

    #[test]
    fn test_dead_end_initial_estimate_fails_without_probing() {
        let task = chain(1);
        let mut evaluator = TableEvaluator::new(vec![IntegerType::MAX, 0]);

        let mut search = IbexSearch::new();
        let outcome = search.solve(&task, &mut evaluator, NoOperationMonitor::new());

        assert!(outcome.is_failed());
        assert!(outcome.statistics().probes.is_empty());
    }

    #[test]
    fn test_fewer_iterations_than_idastar_on_blind_plateaus() {
        let task = chain(20);

        let mut idastar = IdaStarSearch::new();
        let ida_outcome =
            idastar.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        let mut ibex = IbexSearch::new();
        let ibex_outcome = ibex.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        assert_eq!(
            ida_outcome.plan().unwrap().cost(),
            ibex_outcome.plan().unwrap().cost()
        );

        // IDA* pays one iteration per distinct f-value: 21 of them. The
        // bracket driver needs far fewer outer iterations.
        assert_eq!(ida_outcome.statistics().iterations, 21);
        assert!(ibex_outcome.statistics().iterations < 10);
    }

    #[test]
    fn test_force_idastar_matches_idastar_exactly() {
        for n in [1usize, 4, 9] {
            let task = chain(n);

            let mut idastar = IdaStarSearch::new();
            let ida_outcome =
                idastar.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

            let mut forced = IbexSearch::new().force_idastar(true);
            let ibex_outcome =
                forced.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

            assert_eq!(
                ida_outcome.plan().unwrap().cost(),
                ibex_outcome.plan().unwrap().cost(),
                "chain({}): plan costs must match",
                n
            );
            assert_eq!(
                ida_outcome.statistics().expanded_states,
                ibex_outcome.statistics().expanded_states,
                "chain({}): expansion counts must match",
                n
            );
            assert_eq!(
                ida_outcome.statistics().iterations,
                ibex_outcome.statistics().iterations,
                "chain({}): iteration counts must match",
                n
            );
        }
    }

    #[test]
    fn test_workload_stays_within_constant_factor_of_final_iteration() {
        // With c1 = 2 and c2 = 8 the total expansion work is bounded by
        // c2 * (c2 / (c2 - c1)) ≈ 10.7 times the final IDA* iteration; a
        // small additive slack covers the tiny early iterations.
        for seed in [7u64, 23, 71] {
            let task = random_task(seed, 24, 16);

            let mut idastar = IdaStarSearch::new();
            let ida_outcome =
                idastar.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());
            let final_iteration = ida_outcome
                .statistics()
                .probes
                .last()
                .expect("at least one probe ran")
                .expanded;

            let mut ibex = IbexSearch::new();
            let ibex_outcome =
                ibex.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

            assert_eq!(
                ida_outcome.plan().unwrap().cost(),
                ibex_outcome.plan().unwrap().cost(),
                "seed {}: both engines must agree on the optimum",
                seed
            );
            assert!(
                ibex_outcome.statistics().expanded_states <= 11 * final_iteration + 256,
                "seed {}: expansions {} exceed the workload bound for N = {}",
                seed,
                ibex_outcome.statistics().expanded_states,
                final_iteration
            );
        }
    }

    #[test]
    fn test_wider_budget_window_still_finds_optimum() {
        let task = chain(12);

        let mut search = IbexSearch::with_constants(3, 27);
        let outcome = search.solve(&task, &mut BlindEvaluator::new(), NoOperationMonitor::new());

        assert!(outcome.is_solved());
        assert_eq!(outcome.plan().unwrap().cost(), 12);
    }

    #[test]
    fn test_configuration_accessors_and_defaults() {
        let search = IbexSearch::new();
        assert_eq!(search.c1(), IbexSearch::DEFAULT_C1);
        assert_eq!(search.c2(), IbexSearch::DEFAULT_C2);
        assert!(!search.is_forced_idastar());
        assert!(IbexSearch::new().force_idastar(true).is_forced_idastar());
        assert_eq!(
            format!("{}", IbexSearch::new()),
            "IbexSearch(c1: 2, c2: 8, force_idastar: false)"
        );
    }

    #[test]
    fn test_try_with_constants_validation() {
        assert!(IbexSearch::try_with_constants(2, 2).is_some());
        assert!(IbexSearch::try_with_constants(4, 32).is_some());
        // c1 below 2 breaks the doubling argument.
        assert!(IbexSearch::try_with_constants(1, 8).is_none());
        // c2 must dominate c1.
        assert!(IbexSearch::try_with_constants(4, 3).is_none());
    }

    #[test]
    #[should_panic(expected = "c1 must be at least 2")]
    fn test_with_constants_panics_on_small_c1() {
        let _ = IbexSearch::with_constants(1, 8);
    }

    #[test]
    #[should_panic(expected = "c2 must be at least c1")]
    fn test_with_constants_panics_on_inverted_window() {
        let _ = IbexSearch::with_constants(4, 3);
    }
}
