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

//! Strategy selection and dispatch.
//!
//! The three traversal orders share the node model and the bound but keep
//! their own frontier types, so dispatch is a plain `match` over `Strategy`
//! rather than a trait object. Use the solver structs directly to reuse
//! frontier allocations across many solves.

use crate::{
    best_first::BestFirstSolver,
    bfs::BreadthFirstSolver,
    dfs::DepthFirstSolver,
    monitor::{no_op::NoOperationMonitor, tree_search_monitor::TreeSearchMonitor},
    result::SearchOutcome,
};
use satchel_model::{model::Model, num::KnapsackNumeric};
use thiserror::Error;

/// The traversal order used to explore the decision tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    /// Depth-first with fractional-bound pruning.
    DepthFirst,
    /// Exhaustive breadth-first, no pruning.
    BreadthFirst,
    /// Best-first by descending fractional bound.
    BestFirst,
}

impl Strategy {
    /// All strategies in reporting order.
    pub const ALL: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst,
    ];

    /// Returns the short display name used in reports.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
            Strategy::BestFirst => "Best-First",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy '{0}' (expected one of: dfs, bfs, best-first)")]
pub struct ParseStrategyError(pub String);

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "best-first" | "best" | "bestfirst" => Ok(Strategy::BestFirst),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

/// Runs `strategy` on `model` without observation.
///
/// # Examples
///
/// ```rust
/// use satchel_bnb::strategy::{solve, Strategy};
/// use satchel_model::{item::Item, model::Model};
///
/// let model = Model::<u32>::from_items(
///     15,
///     [(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)].into_iter().map(Item::from),
/// );
/// for strategy in Strategy::ALL {
///     assert_eq!(solve(strategy, &model).max_profit(), 15);
/// }
/// ```
pub fn solve<T>(strategy: Strategy, model: &Model<T>) -> SearchOutcome<T>
where
    T: KnapsackNumeric,
{
    let mut monitor = NoOperationMonitor::new();
    solve_with_monitor(strategy, model, &mut monitor)
}

/// Runs `strategy` on `model`, reporting events to `monitor`.
pub fn solve_with_monitor<T, S>(
    strategy: Strategy,
    model: &Model<T>,
    monitor: &mut S,
) -> SearchOutcome<T>
where
    T: KnapsackNumeric,
    S: TreeSearchMonitor<T> + ?Sized,
{
    let num_items = model.num_items();
    match strategy {
        Strategy::DepthFirst => DepthFirstSolver::preallocated(num_items).solve(model, monitor),
        Strategy::BreadthFirst => BreadthFirstSolver::preallocated(num_items).solve(model, monitor),
        Strategy::BestFirst => BestFirstSolver::preallocated(num_items).solve(model, monitor),
    }
}
