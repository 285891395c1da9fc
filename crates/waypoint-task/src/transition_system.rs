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
    index::{OperatorIndex, StateIndex},
    task::{OperatorBuffer, SearchTask},
};
use num_traits::PrimInt;

/// An explicit, deterministic state-transition system.
///
/// States are dense `StateIndex`es, operators are global entities with a
/// non-negative cost, and each state carries its outgoing arcs as
/// `(operator, successor)` pairs in insertion order. That order is the
/// expansion order the engines see, which makes search traces reproducible.
///
/// Construct instances through [`TransitionSystemBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionSystem<T> {
    initial: StateIndex,
    goal: Vec<bool>,
    operator_costs: Vec<T>,
    arcs: Vec<Vec<(OperatorIndex, StateIndex)>>,
}

impl<T> TransitionSystem<T>
where
    T: PrimInt,
{
    /// Returns the number of states.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the initial state.
    #[inline]
    pub fn initial(&self) -> StateIndex {
        self.initial
    }

    /// Returns `true` if `state` is marked as a goal state.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `state` is out of bounds.
    #[inline]
    pub fn is_goal_state(&self, state: StateIndex) -> bool {
        debug_assert!(
            state.get() < self.num_states(),
            "called `TransitionSystem::is_goal_state` with state index out of bounds: the len is {} but the index is {}",
            self.num_states(),
            state.get()
        );
        self.goal[state.get()]
    }

    /// Returns the outgoing arcs of `state` in insertion order.
    #[inline]
    pub fn outgoing_arcs(&self, state: StateIndex) -> &[(OperatorIndex, StateIndex)] {
        debug_assert!(
            state.get() < self.num_states(),
            "called `TransitionSystem::outgoing_arcs` with state index out of bounds: the len is {} but the index is {}",
            self.num_states(),
            state.get()
        );
        &self.arcs[state.get()]
    }
}

impl<T> SearchTask<T> for TransitionSystem<T>
where
    T: PrimInt,
{
    type State = StateIndex;

    #[inline]
    fn initial_state(&self) -> StateIndex {
        self.initial
    }

    #[inline]
    fn is_goal(&self, state: &StateIndex) -> bool {
        self.is_goal_state(*state)
    }

    #[inline]
    fn applicable_operators(&self, state: &StateIndex, buffer: &mut OperatorBuffer) {
        buffer.clear();
        buffer.extend(self.outgoing_arcs(*state).iter().map(|&(op, _)| op));
    }

    #[inline]
    fn apply(&self, state: &StateIndex, op: OperatorIndex) -> StateIndex {
        match self
            .outgoing_arcs(*state)
            .iter()
            .find(|&&(arc_op, _)| arc_op == op)
        {
            Some(&(_, successor)) => successor,
            None => panic!(
                "called `TransitionSystem::apply` with operator {} not applicable in state {}",
                op, state
            ),
        }
    }

    #[inline]
    fn operator_cost(&self, op: OperatorIndex) -> T {
        debug_assert!(
            op.get() < self.operator_costs.len(),
            "called `TransitionSystem::operator_cost` with operator index out of bounds: the len is {} but the index is {}",
            self.operator_costs.len(),
            op.get()
        );
        self.operator_costs[op.get()]
    }

    #[inline]
    fn num_operators(&self) -> usize {
        self.operator_costs.len()
    }
}

/// An incremental builder for [`TransitionSystem`].
///
/// States and operators are handed out as dense indices; arcs attach an
/// operator to a source and target state. The arc insertion order per state
/// is the successor order the engines will observe.
///
/// # Examples
///
/// ```rust
/// use waypoint_task::transition_system::TransitionSystemBuilder;
///
/// // s0 --(cost 1)--> s1 --(cost 1)--> s2 (goal)
/// let mut builder = TransitionSystemBuilder::<i64>::new();
/// let s0 = builder.add_state();
/// let s1 = builder.add_state();
/// let s2 = builder.add_state();
/// let step0 = builder.add_operator(1);
/// let step1 = builder.add_operator(1);
/// builder.add_arc(s0, step0, s1);
/// builder.add_arc(s1, step1, s2);
/// builder.set_initial(s0);
/// builder.mark_goal(s2);
/// let task = builder.build();
/// assert_eq!(task.num_states(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionSystemBuilder<T> {
    initial: Option<StateIndex>,
    goal: Vec<bool>,
    operator_costs: Vec<T>,
    arcs: Vec<Vec<(OperatorIndex, StateIndex)>>,
}

impl<T> TransitionSystemBuilder<T>
where
    T: PrimInt,
{
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            initial: None,
            goal: Vec::new(),
            operator_costs: Vec::new(),
            arcs: Vec::new(),
        }
    }

    /// Adds a new state and returns its index.
    #[inline]
    pub fn add_state(&mut self) -> StateIndex {
        let index = StateIndex::new(self.arcs.len());
        self.goal.push(false);
        self.arcs.push(Vec::new());
        index
    }

    /// Adds a new operator with the given cost and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is negative.
    #[inline]
    pub fn add_operator(&mut self, cost: T) -> OperatorIndex {
        assert!(
            cost >= T::zero(),
            "called `TransitionSystemBuilder::add_operator` with a negative cost"
        );
        let index = OperatorIndex::new(self.operator_costs.len());
        self.operator_costs.push(cost);
        index
    }

    /// Attaches an arc `from --op--> to`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds, or if `op` already labels an
    /// arc leaving `from` (operator application must be deterministic).
    pub fn add_arc(&mut self, from: StateIndex, op: OperatorIndex, to: StateIndex) {
        assert!(
            from.get() < self.arcs.len(),
            "called `TransitionSystemBuilder::add_arc` with source state out of bounds: the len is {} but the index is {}",
            self.arcs.len(),
            from.get()
        );
        assert!(
            to.get() < self.arcs.len(),
            "called `TransitionSystemBuilder::add_arc` with target state out of bounds: the len is {} but the index is {}",
            self.arcs.len(),
            to.get()
        );
        assert!(
            op.get() < self.operator_costs.len(),
            "called `TransitionSystemBuilder::add_arc` with operator index out of bounds: the len is {} but the index is {}",
            self.operator_costs.len(),
            op.get()
        );
        assert!(
            !self.arcs[from.get()].iter().any(|&(arc_op, _)| arc_op == op),
            "called `TransitionSystemBuilder::add_arc` with operator {} already applicable in state {}",
            op,
            from
        );

        self.arcs[from.get()].push((op, to));
    }

    /// Sets the initial state.
    #[inline]
    pub fn set_initial(&mut self, state: StateIndex) {
        assert!(
            state.get() < self.arcs.len(),
            "called `TransitionSystemBuilder::set_initial` with state index out of bounds: the len is {} but the index is {}",
            self.arcs.len(),
            state.get()
        );
        self.initial = Some(state);
    }

    /// Marks `state` as a goal state.
    #[inline]
    pub fn mark_goal(&mut self, state: StateIndex) {
        assert!(
            state.get() < self.arcs.len(),
            "called `TransitionSystemBuilder::mark_goal` with state index out of bounds: the len is {} but the index is {}",
            self.arcs.len(),
            state.get()
        );
        self.goal[state.get()] = true;
    }

    /// Finalizes the builder into a `TransitionSystem`.
    ///
    /// # Panics
    ///
    /// Panics if no initial state was set.
    pub fn build(self) -> TransitionSystem<T> {
        let initial = self
            .initial
            .expect("called `TransitionSystemBuilder::build` without an initial state");

        TransitionSystem {
            initial,
            goal: self.goal,
            operator_costs: self.operator_costs,
            arcs: self.arcs,
        }
    }
}

impl<T> Default for TransitionSystemBuilder<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new()
    }
}
