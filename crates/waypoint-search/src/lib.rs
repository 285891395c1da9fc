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

//! # Waypoint Search
//!
//! Shared infrastructure for the Waypoint search engines. The engine crate
//! builds on the pieces collected here:
//!
//! - `num`: the `SearchNumeric` trait alias for cost types, with the
//!   maximum value acting as the `∞` sentinel.
//! - `evaluator`: the admissible-heuristic interface plus stock evaluators.
//! - `incumbent`: storage for the best plan discovered so far.
//! - `result`: `SearchResult` and `SearchOutcome` — what a finished search
//!   hands back.
//! - `stats`: counters and per-probe records collected during a search.
//! - `monitor`: observational callbacks for watching a search run. Monitors
//!   cannot cancel a search; long runs are governed by external timeouts.

pub mod evaluator;
pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
