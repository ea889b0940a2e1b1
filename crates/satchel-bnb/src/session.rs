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

//! Per-run bookkeeping shared by the three traversal strategies.
//!
//! A `SearchSession` owns the best profit, the statistics, and the run
//! clock, and forwards every event to the attached monitor. The solvers only
//! own their frontier; everything that must look the same across strategies
//! (visit counting, improvement tracking, pruning records, the final
//! outcome) goes through here.

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    result::SearchOutcome,
    stats::SearchStatistics,
    strategy::Strategy,
};
use satchel_model::{model::Model, num::KnapsackNumeric};

/// The state of a single search run.
pub(crate) struct SearchSession<'a, T, S>
where
    T: KnapsackNumeric,
    S: TreeSearchMonitor<T> + ?Sized,
{
    strategy: Strategy,
    model: &'a Model<T>,
    monitor: &'a mut S,
    best_profit: T,
    stats: SearchStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, S> std::fmt::Debug for SearchSession<'a, T, S>
where
    T: KnapsackNumeric,
    S: TreeSearchMonitor<T> + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("strategy", &self.strategy)
            .field("model", &self.model)
            .field("best_profit", &self.best_profit)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, S> SearchSession<'a, T, S>
where
    T: KnapsackNumeric,
    S: TreeSearchMonitor<T> + ?Sized,
{
    /// Starts a run and notifies the monitor.
    pub(crate) fn new(strategy: Strategy, model: &'a Model<T>, monitor: &'a mut S) -> Self {
        let stats = SearchStatistics::default();
        tracing::debug!(
            strategy = strategy.name(),
            items = model.num_items(),
            capacity = %model.capacity(),
            monitor = monitor.name(),
            "entering search"
        );
        monitor.on_enter_search(model, strategy, &stats);

        Self {
            strategy,
            model,
            monitor,
            best_profit: T::zero(),
            stats,
            start_time: std::time::Instant::now(),
        }
    }

    #[inline(always)]
    pub(crate) fn best_profit(&self) -> T {
        self.best_profit
    }

    /// The best profit as seen by the `f64` bound comparisons.
    #[inline(always)]
    pub(crate) fn best_profit_f64(&self) -> f64 {
        self.best_profit().to_f64_lossy()
    }

    /// Counts a node taken from the frontier and asks the monitor whether
    /// to go on.
    #[inline]
    pub(crate) fn visit(&mut self, node: &SearchNode<T>) -> SearchCommand {
        self.stats.on_node_visited();
        self.stats.on_depth_update(node.depth() as u64);
        self.monitor.on_node_visited(node, &self.stats);
        self.monitor.search_command(node, &self.stats)
    }

    /// Raises the best profit if `profit` is strictly better.
    /// Returns `true` on improvement.
    #[inline]
    pub(crate) fn offer(&mut self, profit: T) -> bool {
        if profit <= self.best_profit {
            return false;
        }
        self.best_profit = profit;
        self.stats.on_improvement();
        self.monitor.on_improvement(profit, &self.stats);
        true
    }

    #[inline]
    pub(crate) fn bound_computed(&mut self, node: &SearchNode<T>, bound: f64) {
        self.monitor.on_bound_computed(node, bound, &self.stats);
    }

    #[inline]
    pub(crate) fn prune(&mut self, node: &SearchNode<T>, reason: PruneReason) {
        match reason {
            PruneReason::Infeasible => self.stats.on_pruning_infeasible(),
            PruneReason::BoundDominated => self.stats.on_pruning_bound(),
        }
        self.monitor.on_prune(node, reason, &self.stats);
    }

    /// Records `count` freshly created children and the frontier length
    /// after they were stored.
    #[inline]
    pub(crate) fn expanded(&mut self, count: u64, frontier_len: usize) {
        self.stats.on_nodes_generated(count);
        self.stats.on_frontier_len(frontier_len);
    }

    #[inline]
    pub(crate) fn frontier_len(&mut self, frontier_len: usize) {
        self.stats.on_frontier_len(frontier_len);
    }

    /// Ends the run. `aborted` carries the monitor's reason if the frontier
    /// was not exhausted.
    pub(crate) fn finish(mut self, aborted: Option<String>) -> SearchOutcome<T> {
        let max_profit = self.best_profit();
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        tracing::debug!(
            strategy = self.strategy.name(),
            max_profit = %max_profit,
            nodes_visited = self.stats.nodes_visited,
            aborted = aborted.is_some(),
            "leaving search"
        );

        match aborted {
            None => SearchOutcome::optimal(self.strategy, max_profit, self.stats),
            Some(reason) => SearchOutcome::aborted(self.strategy, max_profit, reason, self.stats),
        }
    }
}
