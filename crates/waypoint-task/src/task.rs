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

use crate::index::OperatorIndex;
use smallvec::SmallVec;

/// Inline buffer for applicable operators.
///
/// Successor lists are typically short, so the first few entries live on the
/// stack; larger lists spill to the heap transparently.
pub type OperatorBuffer = SmallVec<[OperatorIndex; 8]>;

/// A read-only view of a deterministic planning task.
///
/// `SearchTask` decouples the search engines from a particular task
/// representation. The engines call:
/// - `initial_state` once per probe to obtain the search root,
/// - `is_goal` to test states,
/// - `applicable_operators` to enumerate the operators applicable in a state,
/// - `apply` to construct a successor state,
/// - `operator_cost` to accumulate path costs.
///
/// States are transient values: they are constructed during the depth-first
/// descent and discarded on backtrack. No state registry is involved.
///
/// # Requirements
///
/// Implementations **must** satisfy two contracts the engines rely on:
///
/// - *Determinism.* `applicable_operators` must yield the same operator
///   sequence, in the same order, for equal states on every call. Expansion
///   order (and therefore every reported statistic) follows this order.
/// - *Non-negative costs.* `operator_cost` must be `>= 0` for every operator.
///   Termination of bounded probes without on-path duplicate checking
///   additionally requires strictly positive costs on every cycle.
///
/// Violating either contract voids the optimality and reproducibility
/// guarantees of the engines; neither violation is detected at runtime.
pub trait SearchTask<T> {
    /// The state representation of this task.
    ///
    /// Equality is used by the optional on-path duplicate check and must be
    /// consistent with the transition semantics: equal states have equal
    /// goal status and applicable operators.
    type State: Clone + PartialEq;

    /// Returns the initial state of the task.
    fn initial_state(&self) -> Self::State;

    /// Returns `true` if `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Fills `buffer` with the operators applicable in `state`, in the
    /// task's stable order. The buffer is cleared first.
    fn applicable_operators(&self, state: &Self::State, buffer: &mut OperatorBuffer);

    /// Applies `op` to `state`, yielding the successor state.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `op` is not applicable in `state`; the
    /// engines only apply operators previously returned by
    /// `applicable_operators` for the same state.
    fn apply(&self, state: &Self::State, op: OperatorIndex) -> Self::State;

    /// Returns the cost of `op`. Must be non-negative.
    fn operator_cost(&self, op: OperatorIndex) -> T;

    /// Returns the total number of operators of the task.
    fn num_operators(&self) -> usize;
}
