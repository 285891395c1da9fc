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
use waypoint_task::{index::OperatorIndex, plan::Plan};

/// The best plan seen so far in a search, together with its cost.
///
/// The DFS kernel writes to the incumbent on every goal discovery and reads
/// its cost as an upper-bound pruning rule; the drivers read it to certify
/// optimality. An unrecorded incumbent has cost `T::infinity()`.
///
/// The empty plan is a valid incumbent (the initial state satisfies the
/// goal), so "has anything been recorded" is tracked explicitly instead of
/// being inferred from an empty operator sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Incumbent<T> {
    cost: T,
    operators: Vec<OperatorIndex>,
    recorded: bool,
}

impl<T> Incumbent<T>
where
    T: SearchNumeric,
{
    /// Creates an empty incumbent of cost `T::infinity()`.
    #[inline]
    pub fn new() -> Self {
        Self {
            cost: T::infinity(),
            operators: Vec::new(),
            recorded: false,
        }
    }

    /// Returns the cost of the best recorded plan, or `T::infinity()` if no
    /// plan has been recorded yet.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns `true` if a plan has been recorded.
    #[inline]
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Records a plan that improves on the current incumbent.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `cost` does not improve on the current
    /// incumbent cost; the kernel's pruning rules only discover strictly
    /// better plans.
    #[inline]
    pub fn record(&mut self, cost: T, operators: &[OperatorIndex]) {
        debug_assert!(
            cost < self.cost,
            "called `Incumbent::record` with a cost that does not improve the incumbent"
        );
        self.cost = cost;
        self.operators.clear();
        self.operators.extend_from_slice(operators);
        self.recorded = true;
    }

    /// Clears the incumbent back to the unrecorded state.
    #[inline]
    pub fn reset(&mut self) {
        self.cost = T::infinity();
        self.operators.clear();
        self.recorded = false;
    }

    /// Returns the recorded plan, if any.
    #[inline]
    pub fn plan(&self) -> Option<Plan<T>> {
        if self.recorded {
            Some(Plan::new(self.cost, self.operators.clone()))
        } else {
            None
        }
    }
}

impl<T> Default for Incumbent<T>
where
    T: SearchNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.recorded {
            write!(
                f,
                "Incumbent(cost: {}, operators: {})",
                self.cost,
                self.operators.len()
            )
        } else {
            write!(f, "Incumbent(none)")
        }
    }
}
