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

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    stats::SearchStatistics,
    strategy::Strategy,
};
use satchel_model::{model::Model, model::TreeSize, num::KnapsackNumeric};
use std::time::{Duration, Instant};

/// Periodically reports search progress through `tracing`.
///
/// The clock is only read on visits whose count is a multiple of
/// `clock_check_mask + 1`, so the mask should be a power of two minus one.
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: KnapsackNumeric,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    strategy: Option<Strategy>,
    tree_size: Option<TreeSize>,
    best_profit: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: KnapsackNumeric,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            strategy: None,
            tree_size: None,
            best_profit: None,
        }
    }

    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }

    #[inline]
    pub fn clock_check_mask(&self) -> u64 {
        self.clock_check_mask
    }

    /// Returns the best profit seen during the current or last search.
    #[inline]
    pub fn best_profit(&self) -> Option<T> {
        self.best_profit
    }

    #[inline(always)]
    fn strategy_name(&self) -> &'static str {
        self.strategy.map_or("?", |s| s.name())
    }

    fn log_line(&mut self, node: &SearchNode<T>, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time);
        let coverage = self
            .tree_size
            .map_or(0.0, |size| size.coverage(stats.nodes_visited));

        tracing::info!(
            strategy = self.strategy_name(),
            elapsed = ?elapsed,
            nodes = stats.nodes_visited,
            depth = node.depth(),
            best = %self.best_profit.unwrap_or_else(T::zero),
            pruned = stats.prunings(),
            frontier = stats.max_frontier_len,
            coverage_pct = coverage,
            "search progress"
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: KnapsackNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: KnapsackNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {:?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogMonitor<T>
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(
        &mut self,
        model: &Model<T>,
        strategy: Strategy,
        _statistics: &SearchStatistics,
    ) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.strategy = Some(strategy);
        self.best_profit = None;
        let tree_size = model.tree_size();
        self.tree_size = Some(tree_size);

        tracing::info!(
            strategy = strategy.name(),
            items = model.num_items(),
            capacity = %model.capacity(),
            tree_size = %tree_size,
            "search started"
        );
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        tracing::info!(
            strategy = self.strategy_name(),
            elapsed = ?self.start_time.elapsed(),
            nodes = statistics.nodes_visited,
            pruned = statistics.prunings(),
            best = %self.best_profit.unwrap_or_else(T::zero),
            "search finished"
        );
    }

    fn on_node_visited(&mut self, node: &SearchNode<T>, statistics: &SearchStatistics) {
        if (statistics.nodes_visited & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(node, statistics);
        }
    }

    fn on_bound_computed(
        &mut self,
        _node: &SearchNode<T>,
        _bound: f64,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_prune(
        &mut self,
        _node: &SearchNode<T>,
        _reason: PruneReason,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_improvement(&mut self, profit: T, statistics: &SearchStatistics) {
        self.best_profit = Some(profit);
        tracing::debug!(
            strategy = self.strategy_name(),
            profit = %profit,
            nodes = statistics.nodes_visited,
            "best profit improved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::item::Item;

    #[test]
    fn test_tracks_best_profit_and_resets_on_enter() {
        let model = Model::<u32>::from_items(5, [Item::new(2, 3)]);
        let mut monitor = LogMonitor::<u32>::new(Duration::ZERO, 0);
        let stats = SearchStatistics::default();

        monitor.on_enter_search(&model, Strategy::BestFirst, &stats);
        monitor.on_improvement(3, &stats);
        assert_eq!(monitor.best_profit(), Some(3));

        monitor.on_node_visited(&SearchNode::root(), &stats);
        monitor.on_exit_search(&stats);

        monitor.on_enter_search(&model, Strategy::DepthFirst, &stats);
        assert_eq!(monitor.best_profit(), None);
    }

    #[test]
    fn test_display_and_defaults() {
        let monitor = LogMonitor::<u64>::default();
        assert_eq!(monitor.log_interval(), Duration::from_secs(1));
        assert_eq!(monitor.clock_check_mask(), 4095);
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(log_interval: 1s, clock_check_mask: 4095)"
        );
    }
}
