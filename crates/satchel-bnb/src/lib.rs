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

//! Satchel‑BnB: branch‑and‑bound search over knapsack decision trees
//!
//! Three traversal strategies walk the same implicit include/exclude tree of
//! a `satchel_model::Model<T>`, whose items arrive sorted by value density.
//! Each run reports the best profit and the number of nodes it visited, so
//! the strategies can be compared on equal terms.
//!
//! Core flow
//! - Provide a `satchel_model::Model<T>`.
//! - Pick a `strategy::Strategy` and call `strategy::solve`, or run one of
//!   the solvers (`dfs`, `bfs`, `best_first`) directly to reuse its frontier.
//! - Optionally attach monitors for logging and time or node limits.
//!
//! Design highlights
//! - Nodes are small `Copy` values owned by the frontier that holds them.
//! - The fractional bound is admissible; pruning never loses the optimum.
//! - Deterministic: the same model always yields the same profit and
//!   visit count for a given strategy.
//!
//! Module map
//! - `node`: search nodes and the heap ordering for best‑first.
//! - `bound`: the fractional relaxation bound.
//! - `dfs`, `bfs`, `best_first`: the three solvers.
//! - `strategy`: strategy names, parsing, and dispatch.
//! - `monitor`: tree‑search monitors (log, composite, limits).
//! - `result`: outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.

pub mod best_first;
pub mod bfs;
pub mod bound;
pub mod dfs;
pub mod monitor;
pub mod node;
pub mod result;
mod session;
pub mod stats;
pub mod strategy;
