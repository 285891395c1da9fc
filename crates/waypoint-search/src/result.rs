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

use crate::{num::SearchNumeric, stats::SearchStatistics};
use waypoint_task::plan::Plan;

/// The result of a search after termination.
///
/// The engines prove one of two things: either an optimal plan was found,
/// or no plan exists at all. There is no anytime mode and no abort channel;
/// a search that returns, returns with a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<T> {
    /// An optimal plan was found.
    Solved(Plan<T>),
    /// The task has been proven unsolvable.
    Failed,
}

impl<T> SearchResult<T>
where
    T: SearchNumeric,
{
    /// Returns the plan cost if a plan was found.
    #[inline]
    pub fn plan_cost(&self) -> Option<T> {
        match self {
            SearchResult::Solved(plan) => Some(plan.cost()),
            SearchResult::Failed => None,
        }
    }

    /// Returns the plan if one was found.
    #[inline]
    pub fn plan(&self) -> Option<&Plan<T>> {
        match self {
            SearchResult::Solved(plan) => Some(plan),
            SearchResult::Failed => None,
        }
    }

    /// Returns the contained plan.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Failed`.
    #[inline]
    pub fn unwrap_solved(&self) -> &Plan<T> {
        match self {
            SearchResult::Solved(plan) => plan,
            SearchResult::Failed => {
                panic!("called `SearchResult::unwrap_solved()` on a `Failed` result")
            }
        }
    }
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Solved(plan) => write!(f, "Solved(cost={})", plan.cost()),
            SearchResult::Failed => write!(f, "Failed"),
        }
    }
}

/// The complete outcome of a search after termination, including the result
/// and the collected statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    result: SearchResult<T>,
    statistics: SearchStatistics<T>,
}

impl<T> SearchOutcome<T>
where
    T: SearchNumeric,
{
    /// Creates a new `SearchOutcome` for a solved task.
    #[inline]
    pub fn solved(plan: Plan<T>, statistics: SearchStatistics<T>) -> Self {
        Self {
            result: SearchResult::Solved(plan),
            statistics,
        }
    }

    /// Creates a new `SearchOutcome` for a task proven unsolvable.
    #[inline]
    pub fn failed(statistics: SearchStatistics<T>) -> Self {
        Self {
            result: SearchResult::Failed,
            statistics,
        }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics<T> {
        &self.statistics
    }

    /// Returns `true` if an optimal plan was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self.result, SearchResult::Solved(_))
    }

    /// Returns `true` if the task was proven unsolvable.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.result, SearchResult::Failed)
    }

    /// Returns the plan if one was found.
    #[inline]
    pub fn plan(&self) -> Option<&Plan<T>> {
        self.result.plan()
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        write!(f, "{}", self.statistics)?;
        Ok(())
    }
}
