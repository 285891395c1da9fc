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

//! # Waypoint Task
//!
//! The planning-task surface consumed by the Waypoint search engines. A task
//! is a deterministic state-transition system: states, operators with
//! non-negative integer costs, a goal test, and a stable successor order.
//!
//! ## Modules
//!
//! - `index`: typed `OperatorIndex` and `StateIndex` wrappers.
//! - `task`: the `SearchTask` trait the engines search over.
//! - `transition_system`: an explicit, deterministic `TransitionSystem`
//!   implementation of `SearchTask` plus its builder. This is the task
//!   representation used throughout the test suites and benchmarks.
//! - `plan`: the `Plan` type — an ordered operator sequence with its total
//!   cost.
//!
//! ## Determinism
//!
//! All engines require that `applicable_operators` produces the same operator
//! sequence for the same state on every call. `TransitionSystem` guarantees
//! this by returning arcs in insertion order.

pub mod index;
pub mod plan;
pub mod task;
pub mod transition_system;
