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

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use std::time::Instant;

/// A monitor that prints one console line per bounded probe.
///
/// Iterative-deepening runs consist of few, long probes, so the output stays
/// small even on hard tasks. The log is human-readable and non-contractual.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    probes: u64,
}

impl LogMonitor {
    /// Creates a new `LogMonitor`.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            probes: 0,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<7} | {:<14} | {:<14} | {:<14}",
            "Elapsed", "Probe", "Cost Limit", "Node Limit", "Expanded"
        );
        println!("{}", "-".repeat(70));
    }

    fn format_node_limit(node_limit: u64) -> String {
        if node_limit == u64::MAX {
            "inf".to_string()
        } else {
            node_limit.to_string()
        }
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(probes: {})", self.probes)
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self) {
        self.start_time = Instant::now();
        self.probes = 0;
        self.print_header();
    }

    fn on_probe_started(&mut self, cost_limit: T, node_limit: u64) {
        self.probes += 1;
        let elapsed = format!("{:.1}s", self.start_time.elapsed().as_secs_f32());
        println!(
            "{:<9} | {:<7} | {:<14} | {:<14} | {:<14}",
            elapsed,
            self.probes,
            format!("{}", cost_limit),
            Self::format_node_limit(node_limit),
            "-"
        );
    }

    fn on_probe_finished(&mut self, cost_limit: T, expanded: u64) {
        let elapsed = format!("{:.1}s", self.start_time.elapsed().as_secs_f32());
        println!(
            "{:<9} | {:<7} | {:<14} | {:<14} | {:<14}",
            elapsed,
            self.probes,
            format!("{}", cost_limit),
            "-",
            expanded
        );
    }

    fn on_solution_found(&mut self, cost: T) {
        println!("Solution found with cost {}", cost);
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics<T>) {
        println!("{}", "-".repeat(70));
        println!("Search finished after {} probes.", statistics.probes.len());
    }
}
