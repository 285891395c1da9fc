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

use waypoint_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// The record of a single bounded probe.
///
/// These records are diagnostics, not part of the correctness contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRecord<T> {
    /// The cost limit the probe ran under.
    pub cost_limit: T,
    /// The node-expansion limit the probe ran under (`u64::MAX` = unbounded).
    pub node_limit: u64,
    /// The number of nodes the probe expanded.
    pub expanded: u64,
}

/// Statistics collected during the execution of a Waypoint search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics<T> {
    /// Total states handed to the evaluator.
    pub evaluated_states: u64,
    /// Total successor states generated.
    pub generated_states: u64,
    /// Total nodes expanded.
    pub expanded_states: u64,
    /// Total driver iterations (IDA* probes, IBEX outer iterations).
    pub iterations: u64,
    /// One record per probe, in probe order.
    pub probes: Vec<ProbeRecord<T>>,
    /// The node budget at the start of each outer iteration. Only the
    /// budgeted driver fills this in.
    pub iteration_budgets: Vec<u64>,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl<T> Default for SearchStatistics<T> {
    fn default() -> Self {
        Self {
            evaluated_states: 0,
            generated_states: 0,
            expanded_states: 0,
            iterations: 0,
            probes: Vec::new(),
            iteration_budgets: Vec::new(),
            time_total: Duration::ZERO,
        }
    }
}

impl<T> SearchStatistics<T> {
    #[inline]
    pub fn on_state_evaluated(&mut self) {
        self.evaluated_states = self.evaluated_states.saturating_add_val(1);
    }

    #[inline]
    pub fn on_state_generated(&mut self) {
        self.generated_states = self.generated_states.saturating_add_val(1);
    }

    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.expanded_states = self.expanded_states.saturating_add_val(1);
    }

    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add_val(1);
    }

    /// Records the node budget in effect at the start of an outer iteration.
    #[inline]
    pub fn record_budget(&mut self, budget: u64) {
        self.iteration_budgets.push(budget);
    }

    /// Records a finished probe.
    #[inline]
    pub fn on_probe_finished(&mut self, cost_limit: T, node_limit: u64, expanded: u64) {
        self.probes.push(ProbeRecord {
            cost_limit,
            node_limit,
            expanded,
        });
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl<T> std::fmt::Display for SearchStatistics<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Waypoint Search Statistics:")?;
        writeln!(f, "  Evaluated states:     {}", self.evaluated_states)?;
        writeln!(f, "  Generated states:     {}", self.generated_states)?;
        writeln!(f, "  Expanded states:      {}", self.expanded_states)?;
        writeln!(f, "  Iterations:           {}", self.iterations)?;
        writeln!(f, "  Probes run:           {}", self.probes.len())?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let stats: SearchStatistics<i64> = SearchStatistics::default();
        assert_eq!(stats.evaluated_states, 0);
        assert_eq!(stats.generated_states, 0);
        assert_eq!(stats.expanded_states, 0);
        assert_eq!(stats.iterations, 0);
        assert!(stats.probes.is_empty());
        assert!(stats.iteration_budgets.is_empty());
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counter_hooks() {
        let mut stats: SearchStatistics<i64> = SearchStatistics::default();
        stats.on_state_evaluated();
        stats.on_state_evaluated();
        stats.on_state_generated();
        stats.on_node_expanded();
        stats.on_iteration();

        assert_eq!(stats.evaluated_states, 2);
        assert_eq!(stats.generated_states, 1);
        assert_eq!(stats.expanded_states, 1);
        assert_eq!(stats.iterations, 1);
    }

    #[test]
    fn test_probe_records_preserve_order() {
        let mut stats: SearchStatistics<i64> = SearchStatistics::default();
        stats.on_probe_finished(3, u64::MAX, 4);
        stats.on_probe_finished(5, 16, 9);

        assert_eq!(stats.probes.len(), 2);
        assert_eq!(stats.probes[0].cost_limit, 3);
        assert_eq!(stats.probes[0].node_limit, u64::MAX);
        assert_eq!(stats.probes[0].expanded, 4);
        assert_eq!(stats.probes[1].cost_limit, 5);
        assert_eq!(stats.probes[1].node_limit, 16);
        assert_eq!(stats.probes[1].expanded, 9);
    }

    #[test]
    fn test_budget_records() {
        let mut stats: SearchStatistics<i64> = SearchStatistics::default();
        stats.record_budget(0);
        stats.record_budget(4);
        stats.record_budget(8);
        assert_eq!(stats.iteration_budgets, vec![0, 4, 8]);
    }

    #[test]
    fn test_display_contains_counters() {
        let mut stats: SearchStatistics<i64> = SearchStatistics::default();
        stats.on_node_expanded();
        let displayed = format!("{}", stats);
        assert!(displayed.contains("Expanded states"));
        assert!(displayed.contains("Probes run"));
    }
}
