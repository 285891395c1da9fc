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
use num_traits::PrimInt;

/// A plan: an ordered operator sequence leading from the initial state to a
/// goal, together with its total cost.
///
/// A plan may be empty (the initial state already satisfies the goal), in
/// which case its cost is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan<T> {
    /// The total cost of executing the operator sequence.
    cost: T,

    /// The operators, in execution order.
    operators: Vec<OperatorIndex>,
}

impl<T> Plan<T>
where
    T: PrimInt,
{
    /// Constructs a new `Plan` from a cost and an operator sequence.
    #[inline]
    pub fn new(cost: T, operators: Vec<OperatorIndex>) -> Self {
        Self { cost, operators }
    }

    /// Constructs the empty plan of cost zero.
    #[inline]
    pub fn empty() -> Self {
        Self {
            cost: T::zero(),
            operators: Vec::new(),
        }
    }

    /// Returns the total cost of this plan.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the operator sequence in execution order.
    #[inline]
    pub fn operators(&self) -> &[OperatorIndex] {
        &self.operators
    }

    /// Returns the number of operators in this plan.
    #[inline]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if this plan contains no operators.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<T> std::fmt::Display for Plan<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Plan Summary")?;
        writeln!(f, "   Total Cost: {}", self.cost)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (Empty plan: the initial state is a goal)")?;
            return Ok(());
        }

        writeln!(f, "   {:<6} | {:<12}", "Step", "Operator")?;
        writeln!(f, "   {:-<6}-+-{:-<12}", "", "")?;
        for (step, op) in self.operators.iter().enumerate() {
            writeln!(f, "   {:<6} | {:<12}", step, op.get())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(i: usize) -> OperatorIndex {
        OperatorIndex::new(i)
    }

    #[test]
    fn test_new_and_accessors() {
        let plan = Plan::new(7i64, vec![op(0), op(2), op(1)]);
        assert_eq!(plan.cost(), 7);
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
        assert_eq!(plan.operators(), &[op(0), op(2), op(1)]);
    }

    #[test]
    fn test_empty_plan() {
        let plan: Plan<i64> = Plan::empty();
        assert_eq!(plan.cost(), 0);
        assert_eq!(plan.len(), 0);
        assert!(plan.is_empty());
        assert_eq!(plan.operators(), &[]);
    }

    #[test]
    fn test_clone_eq_and_debug() {
        let plan = Plan::new(3i64, vec![op(1), op(4)]);
        let copy = plan.clone();
        assert_eq!(plan, copy);

        let dbg = format!("{:?}", plan);
        assert!(dbg.contains("Plan"));
        assert!(dbg.contains("cost"));
        assert!(dbg.contains("operators"));
    }

    #[test]
    fn test_display_formatting() {
        let plan = Plan::new(2i64, vec![op(0), op(3)]);
        let displayed = format!("{}", plan);

        let mut expected = String::new();
        expected.push_str("Plan Summary\n");
        expected.push_str("   Total Cost: 2\n");
        expected.push('\n');
        expected.push_str("   Step   | Operator    \n");
        expected.push_str("   -------+-------------\n");
        expected.push_str("   0      | 0           \n");
        expected.push_str("   1      | 3           \n");

        assert_eq!(displayed, expected);
    }

    #[test]
    fn test_display_empty_plan() {
        let plan: Plan<i64> = Plan::empty();
        let displayed = format!("{}", plan);
        assert!(displayed.contains("Empty plan"));
        assert!(displayed.contains("Total Cost: 0"));
    }
}
