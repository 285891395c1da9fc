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

/// A monitor that fans every event out to a list of child monitors.
///
/// Children receive events in registration order.
pub struct CompositeMonitor<T> {
    monitors: Vec<Box<dyn SearchMonitor<T>>>,
}

impl<T> CompositeMonitor<T> {
    /// Creates an empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Registers a child monitor.
    #[inline]
    pub fn add(&mut self, monitor: Box<dyn SearchMonitor<T>>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of registered child monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if no child monitors are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T> Default for CompositeMonitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchMonitor<T> for CompositeMonitor<T>
where
    T: Copy,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search();
        }
    }

    fn on_probe_started(&mut self, cost_limit: T, node_limit: u64) {
        for monitor in &mut self.monitors {
            monitor.on_probe_started(cost_limit, node_limit);
        }
    }

    fn on_probe_finished(&mut self, cost_limit: T, expanded: u64) {
        for monitor in &mut self.monitors {
            monitor.on_probe_finished(cost_limit, expanded);
        }
    }

    fn on_solution_found(&mut self, cost: T) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(cost);
        }
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }
}
