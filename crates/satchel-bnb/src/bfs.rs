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

//! Exhaustive breadth-first traversal.
//!
//! A FIFO queue walks the decision tree level by level without any
//! pruning: every one of the `2^(n+1) - 1` nodes is visited. The best
//! profit is raised whenever a freshly generated include child is feasible
//! and better. Infeasible nodes are still expanded. Memory grows with the
//! widest level, `2^n` nodes, so this strategy is only practical for small
//! item counts.

use crate::{
    monitor::tree_search_monitor::{SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    result::SearchOutcome,
    session::SearchSession,
    strategy::Strategy,
};
use satchel_model::{model::Model, num::KnapsackNumeric};
use std::collections::VecDeque;

/// Upper limit on the queue slots reserved up front.
const MAX_PREALLOCATED_LEVEL: usize = 16;

/// Breadth-first solver with a reusable node queue.
#[derive(Clone, Debug)]
pub struct BreadthFirstSolver<T> {
    queue: VecDeque<SearchNode<T>>,
}

impl<T> Default for BreadthFirstSolver<T>
where
    T: KnapsackNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BreadthFirstSolver<T>
where
    T: KnapsackNumeric,
{
    /// Creates a new solver with an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Creates a new solver whose queue can hold the widest level of a tree
    /// over `num_items` items, capped at `2^16` nodes.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        let widest = 1usize << num_items.min(MAX_PREALLOCATED_LEVEL);
        Self {
            queue: VecDeque::with_capacity(widest.saturating_add(1)),
        }
    }

    /// Returns the number of nodes the queue can hold without reallocating.
    #[inline]
    pub fn frontier_capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Visits every node of the decision tree of `model` in level order.
    pub fn solve<S>(&mut self, model: &Model<T>, monitor: &mut S) -> SearchOutcome<T>
    where
        S: TreeSearchMonitor<T> + ?Sized,
    {
        self.reset();
        let num_items = model.num_items();
        let capacity = model.capacity();

        let mut session = SearchSession::new(Strategy::BreadthFirst, model, monitor);
        self.queue.push_back(SearchNode::root());
        session.frontier_len(self.queue.len());

        let aborted = loop {
            let Some(node) = self.queue.pop_front() else {
                break None;
            };

            if let SearchCommand::Terminate(reason) = session.visit(&node) {
                break Some(reason);
            }

            if node.is_leaf(num_items) {
                continue;
            }

            let item = model.item(node.next_item());
            let include = node.include(item);
            if include.is_feasible(capacity) {
                session.offer(include.profit());
            }

            self.queue.push_back(include);
            self.queue.push_back(node.exclude());
            session.expanded(2, self.queue.len());
        };

        self.reset();
        session.finish(aborted)
    }

    /// Clears the queue, keeping its allocation.
    #[inline]
    fn reset(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};
    use satchel_model::item::Item;

    fn items() -> impl Iterator<Item = Item<u32>> {
        [(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)]
            .into_iter()
            .map(Item::from)
    }

    fn solve(model: &Model<u32>) -> SearchOutcome<u32> {
        BreadthFirstSolver::new().solve(model, &mut NoOperationMonitor::new())
    }

    #[test]
    fn test_sample_instance_visits_full_tree() {
        let model = Model::from_items(15, items());
        let outcome = solve(&model);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.max_profit(), 15);
        assert_eq!(outcome.nodes_visited(), 63);
        assert_eq!(
            model.tree_size().node_count(),
            Some(u128::from(outcome.nodes_visited()))
        );

        let stats = outcome.statistics();
        assert_eq!(stats.prunings(), 0);
        assert_eq!(stats.nodes_generated, 62);
        assert_eq!(stats.max_depth, 5);
        assert_eq!(stats.max_frontier_len, 32);
    }

    #[test]
    fn test_zero_capacity_still_visits_full_tree() {
        let outcome = solve(&Model::from_items(0, items()));
        assert_eq!(outcome.max_profit(), 0);
        assert_eq!(outcome.nodes_visited(), 63);
    }

    #[test]
    fn test_textbook_instance() {
        let model = Model::<u32>::from_items(
            16,
            [(2, 40), (5, 30), (10, 50), (5, 10)]
                .into_iter()
                .map(Item::from),
        );
        let outcome = solve(&model);
        assert_eq!(outcome.max_profit(), 90);
        assert_eq!(outcome.nodes_visited(), 31);
    }

    #[test]
    fn test_empty_model_visits_only_root() {
        let outcome = solve(&Model::from_items(3, std::iter::empty()));
        assert_eq!(outcome.max_profit(), 0);
        assert_eq!(outcome.nodes_visited(), 1);
    }

    #[test]
    fn test_preallocation_is_capped() {
        let solver = BreadthFirstSolver::<u32>::preallocated(40);
        assert!(solver.frontier_capacity() >= (1 << MAX_PREALLOCATED_LEVEL));
        assert!(solver.frontier_capacity() < (1 << (MAX_PREALLOCATED_LEVEL + 2)));
    }

    #[test]
    fn test_node_limit_aborts_and_clears_queue() {
        let model = Model::from_items(15, items());
        let mut solver = BreadthFirstSolver::new();
        let outcome = solver.solve(&model, &mut NodeLimitMonitor::new(10));
        assert!(outcome.is_aborted());
        assert_eq!(outcome.nodes_visited(), 10);
        assert!(solver.queue.is_empty());
    }
}
