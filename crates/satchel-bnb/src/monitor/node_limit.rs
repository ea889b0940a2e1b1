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
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    stats::SearchStatistics,
    strategy::Strategy,
};
use satchel_model::{model::Model, num::KnapsackNumeric};
use std::marker::PhantomData;

/// A monitor that terminates the search once `node_limit` nodes were visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLimitMonitor<T>
where
    T: KnapsackNumeric,
{
    node_limit: u64,
    _marker: PhantomData<T>,
}

impl<T> NodeLimitMonitor<T>
where
    T: KnapsackNumeric,
{
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }
}

impl<T> TreeSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(
        &mut self,
        _model: &Model<T>,
        _strategy: Strategy,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(
        &mut self,
        _node: &SearchNode<T>,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        if statistics.nodes_visited >= self.node_limit {
            return SearchCommand::Terminate(format!(
                "node limit of {} reached",
                self.node_limit
            ));
        }
        SearchCommand::Continue
    }

    fn on_node_visited(&mut self, _node: &SearchNode<T>, _statistics: &SearchStatistics) {}

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

    fn on_improvement(&mut self, _profit: T, _statistics: &SearchStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = NodeLimitMonitor::<u32>::new(2);
        let mut stats = SearchStatistics::default();
        let root = SearchNode::root();

        stats.on_node_visited();
        assert_eq!(monitor.search_command(&root, &stats), SearchCommand::Continue);
        stats.on_node_visited();
        assert_eq!(
            monitor.search_command(&root, &stats),
            SearchCommand::Terminate("node limit of 2 reached".to_string())
        );
    }
}
