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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait, `PruneReason`, and `SearchCommand`
//! for observing and controlling a knapsack search. Callbacks follow the
//! solver lifecycle, and a monitor can stop the run early by returning
//! `SearchCommand::Terminate` from `search_command`.
//!
//! Lifecycle
//! - enter → {visit → command → bound/prune/improvement}* → exit
//! - `SearchStatistics` is provided to every callback for telemetry.
//!
//! `search_command` is consulted once per visited node, right after the
//! visit was counted.

use crate::{node::SearchNode, stats::SearchStatistics, strategy::Strategy};
use satchel_model::{model::Model, num::KnapsackNumeric};

/// Reasons for abandoning a search node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The node's accumulated weight exceeds the capacity.
    Infeasible,
    /// The node's bound cannot beat the best profit found so far.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Infeasible => write!(f, "Infeasible"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// What the search should do next.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solvers.
pub trait TreeSearchMonitor<T>
where
    T: KnapsackNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(
        &mut self,
        model: &Model<T>,
        strategy: Strategy,
        statistics: &SearchStatistics,
    );
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called to determine the next action of the search.
    fn search_command(
        &mut self,
        _node: &SearchNode<T>,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called when a node is taken from the frontier.
    fn on_node_visited(&mut self, node: &SearchNode<T>, statistics: &SearchStatistics);
    /// Called when the fractional bound of a node was computed.
    fn on_bound_computed(
        &mut self,
        node: &SearchNode<T>,
        bound: f64,
        statistics: &SearchStatistics,
    );
    /// Called when a node is abandoned.
    fn on_prune(&mut self, node: &SearchNode<T>, reason: PruneReason, statistics: &SearchStatistics);
    /// Called when the best known profit strictly increases.
    fn on_improvement(&mut self, profit: T, statistics: &SearchStatistics);
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: KnapsackNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: KnapsackNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
