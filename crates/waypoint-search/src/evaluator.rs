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

use crate::num::SearchNumeric;
use waypoint_task::{task::SearchTask, transition_system::TransitionSystem};

/// A strategy for estimating the remaining cost to a goal.
///
/// `Evaluator` decouples the search engines from a particular heuristic.
/// The engines call `estimate` once per visited state and interpret the
/// returned value as `h(s)`; the node value is `f = g + h` with saturating
/// arithmetic. Returning `T::infinity()` marks the state as a dead end.
///
/// # Requirements: Admissibility
///
/// Implementations **must** be admissible: `h(s)` never exceeds the true
/// cheapest cost from `s` to a goal. **The engines rely on this property
/// for the optimality of the returned plan.** For the iterative-deepening
/// drivers to certify optimality on the first goal discovery, the estimate
/// must additionally be consistent (monotone): `h(s) <= cost(op) + h(s')`
/// for every applicable `op` producing `s'`.
///
/// If an inadmissible estimate is used, cost bounds may prune the optimal
/// plan, and a returned plan may be suboptimal. Neither violation is
/// detected at runtime.
pub trait Evaluator<T, K>
where
    K: SearchTask<T>,
{
    /// Returns the name of the evaluator.
    fn name(&self) -> &str;

    /// Returns an admissible estimate of the cheapest remaining cost from
    /// `state` to a goal. `T::infinity()` marks a dead end.
    fn estimate(&mut self, task: &K, state: &K::State) -> T;
}

impl<T, K> std::fmt::Debug for dyn Evaluator<T, K>
where
    K: SearchTask<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evaluator({})", self.name())
    }
}

impl<T, K> std::fmt::Display for dyn Evaluator<T, K>
where
    K: SearchTask<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evaluator({})", self.name())
    }
}

/// The uninformed evaluator: `h(s) = 0` for every state.
///
/// Trivially admissible and consistent. Iterative deepening with this
/// evaluator degenerates into uniform-cost depth-first probing and is
/// mostly useful as a baseline in tests and benchmarks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BlindEvaluator;

impl BlindEvaluator {
    /// Creates a new `BlindEvaluator`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T, K> Evaluator<T, K> for BlindEvaluator
where
    T: SearchNumeric,
    K: SearchTask<T>,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "BlindEvaluator"
    }

    #[inline(always)]
    fn estimate(&mut self, _task: &K, _state: &K::State) -> T {
        T::zero()
    }
}

/// A per-state lookup evaluator for explicit transition systems.
///
/// The table holds one estimate per state, indexed by `StateIndex`. Use
/// `T::infinity()` entries to mark dead ends. Admissibility of the stored
/// values is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEvaluator<T> {
    values: Vec<T>,
}

impl<T> TableEvaluator<T>
where
    T: SearchNumeric,
{
    /// Creates a new `TableEvaluator` from per-state estimates.
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Returns the number of states covered by the table.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.values.len()
    }
}

impl<T> Evaluator<T, TransitionSystem<T>> for TableEvaluator<T>
where
    T: SearchNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "TableEvaluator"
    }

    #[inline]
    fn estimate(
        &mut self,
        _task: &TransitionSystem<T>,
        state: &<TransitionSystem<T> as SearchTask<T>>::State,
    ) -> T {
        debug_assert!(
            state.get() < self.values.len(),
            "called `TableEvaluator::estimate` with state index out of bounds: the len is {} but the index is {}",
            self.values.len(),
            state.get()
        );
        self.values[state.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_task::transition_system::TransitionSystemBuilder;

    fn two_state_task() -> TransitionSystem<i64> {
        let mut builder = TransitionSystemBuilder::new();
        let s0 = builder.add_state();
        let s1 = builder.add_state();
        let op = builder.add_operator(1);
        builder.add_arc(s0, op, s1);
        builder.set_initial(s0);
        builder.mark_goal(s1);
        builder.build()
    }

    #[test]
    fn test_blind_evaluator_is_zero_everywhere() {
        let task = two_state_task();
        let mut blind = BlindEvaluator::new();
        let s0 = task.initial_state();
        let h: i64 = blind.estimate(&task, &s0);
        assert_eq!(h, 0);
        assert_eq!(Evaluator::<i64, TransitionSystem<i64>>::name(&blind), "BlindEvaluator");
    }

    #[test]
    fn test_table_evaluator_lookup() {
        let task = two_state_task();
        let mut table = TableEvaluator::new(vec![1i64, 0]);
        assert_eq!(table.num_states(), 2);

        let s0 = task.initial_state();
        assert_eq!(table.estimate(&task, &s0), 1);
    }

    #[test]
    fn test_table_evaluator_dead_end_sentinel() {
        let task = two_state_task();
        let mut table = TableEvaluator::new(vec![i64::MAX, 0]);
        let s0 = task.initial_state();
        assert!(table.estimate(&task, &s0).is_infinite());
    }
}
