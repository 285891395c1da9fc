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

//! # Search Monitoring Interface
//!
//! An extensible callback interface for observing the lifecycle of the
//! iterative-deepening searches. Implementations can collect metrics, log
//! progress, and react to solutions.
//!
//! Monitors are strictly observational: the engines expose no cancellation
//! primitive, so a monitor cannot terminate a search. Long runs are
//! governed by external timeouts on the hosting process.
//!
//! ## Core Concepts
//!
//! - `SearchMonitor<T>`: Trait defining lifecycle hooks:
//!   - `on_enter_search(&mut self)` — initialization before the search starts.
//!   - `on_probe_started(&mut self, cost_limit, node_limit)` — a bounded
//!     probe is about to run.
//!   - `on_probe_finished(&mut self, cost_limit, expanded)` — the probe
//!     returned, having expanded `expanded` nodes.
//!   - `on_solution_found(&mut self, cost)` — an improving plan was recorded.
//!   - `on_exit_search(&mut self, statistics)` — cleanup after termination.
//! - `NoOperationMonitor<T>`: Minimal no-op implementation useful for tests
//!   or as a template for custom monitors.

use crate::stats::SearchStatistics;

/// Trait for observing the search process of the engines.
pub trait SearchMonitor<T> {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self);
    /// Called before each bounded probe.
    fn on_probe_started(&mut self, cost_limit: T, node_limit: u64);
    /// Called after each bounded probe with its expansion count.
    fn on_probe_finished(&mut self, cost_limit: T, expanded: u64);
    /// Called when an improving plan is recorded.
    fn on_solution_found(&mut self, cost: T);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &SearchStatistics<T>);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A no-operation monitor that implements the `SearchMonitor` trait but
/// does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T> {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for NoOperationMonitor<T> {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self) {}

    #[inline(always)]
    fn on_probe_started(&mut self, _cost_limit: T, _node_limit: u64) {}

    #[inline(always)]
    fn on_probe_finished(&mut self, _cost_limit: T, _expanded: u64) {}

    #[inline(always)]
    fn on_solution_found(&mut self, _cost: T) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &SearchStatistics<T>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_operation_monitor_accepts_all_events() {
        let mut monitor: NoOperationMonitor<i64> = NoOperationMonitor::new();
        monitor.on_enter_search();
        monitor.on_probe_started(3, u64::MAX);
        monitor.on_probe_finished(3, 7);
        monitor.on_solution_found(3);
        monitor.on_exit_search(&SearchStatistics::default());
        assert_eq!(SearchMonitor::<i64>::name(&monitor), "NoOperationMonitor");
    }

    #[test]
    fn test_dyn_debug_display_use_name() {
        let monitor: NoOperationMonitor<i64> = NoOperationMonitor::new();
        let dynamic: &dyn SearchMonitor<i64> = &monitor;
        assert_eq!(format!("{:?}", dynamic), "SearchMonitor(NoOperationMonitor)");
        assert_eq!(format!("{}", dynamic), "SearchMonitor(NoOperationMonitor)");
    }
}
