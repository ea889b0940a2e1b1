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

//! Depth-first branch and bound.
//!
//! Nodes live on an explicit LIFO stack instead of the call stack. For each
//! expanded node the exclude child is pushed before the include child, so
//! the include branch is explored first, exactly as a recursive
//! include-then-exclude descent would. Infeasible include children are still
//! pushed; they are counted when popped and abandoned right away.

use crate::{
    bound::fractional_bound,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    result::SearchOutcome,
    session::SearchSession,
    strategy::Strategy,
};
use satchel_model::{model::Model, num::KnapsackNumeric};

/// Depth-first solver with a reusable node stack.
#[derive(Clone, Debug)]
pub struct DepthFirstSolver<T> {
    stack: Vec<SearchNode<T>>,
}

impl<T> Default for DepthFirstSolver<T>
where
    T: KnapsackNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DepthFirstSolver<T>
where
    T: KnapsackNumeric,
{
    /// Creates a new solver with an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Creates a new solver whose stack never reallocates on models with
    /// up to `num_items` items.
    ///
    /// Every expansion pops one node and pushes two, so the stack holds at
    /// most `num_items + 1` nodes.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            stack: Vec::with_capacity(num_items.saturating_add(1)),
        }
    }

    /// Returns the number of nodes the stack can hold without reallocating.
    #[inline]
    pub fn frontier_capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Explores `model` depth-first and returns the best profit found.
    pub fn solve<S>(&mut self, model: &Model<T>, monitor: &mut S) -> SearchOutcome<T>
    where
        S: TreeSearchMonitor<T> + ?Sized,
    {
        self.reset();
        let num_items = model.num_items();
        let capacity = model.capacity();
        self.stack.reserve(num_items.saturating_add(1));

        let mut session = SearchSession::new(Strategy::DepthFirst, model, monitor);
        self.stack.push(SearchNode::root());
        session.frontier_len(self.stack.len());

        let aborted = loop {
            let Some(node) = self.stack.pop() else {
                break None;
            };

            if let SearchCommand::Terminate(reason) = session.visit(&node) {
                break Some(reason);
            }

            if !node.is_feasible(capacity) {
                session.prune(&node, PruneReason::Infeasible);
                continue;
            }

            session.offer(node.profit());

            if node.is_leaf(num_items) {
                continue;
            }

            let bound = fractional_bound(model, &node);
            session.bound_computed(&node, bound);
            if bound < session.best_profit_f64() {
                session.prune(&node, PruneReason::BoundDominated);
                continue;
            }

            let item = model.item(node.next_item());
            self.stack.push(node.exclude());
            self.stack.push(node.include(item));
            session.expanded(2, self.stack.len());
        };

        self.reset();
        session.finish(aborted)
    }

    /// Clears the stack, keeping its allocation.
    #[inline]
    fn reset(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};
    use satchel_model::item::Item;

    fn sample_model() -> Model<u32> {
        Model::from_items(
            15,
            [(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)]
                .into_iter()
                .map(Item::from),
        )
    }

    fn solve(model: &Model<u32>) -> SearchOutcome<u32> {
        DepthFirstSolver::new().solve(model, &mut NoOperationMonitor::new())
    }

    #[test]
    fn test_sample_instance() {
        let outcome = solve(&sample_model());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.max_profit(), 15);
        assert_eq!(outcome.nodes_visited(), 27);

        let stats = outcome.statistics();
        assert_eq!(stats.prunings_infeasible, 6);
        assert_eq!(stats.prunings_bound, 2);
        assert_eq!(stats.max_depth, 5);
        assert_eq!(stats.nodes_generated, stats.nodes_visited - 1);
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
        assert_eq!(outcome.nodes_visited(), 13);
        assert_eq!(outcome.statistics().prunings_infeasible, 2);
        assert_eq!(outcome.statistics().prunings_bound, 2);
    }

    #[test]
    fn test_zero_capacity_visits_root_and_infeasible_includes() {
        let model = Model::<u32>::from_items(
            0,
            [(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)]
                .into_iter()
                .map(Item::from),
        );
        let outcome = solve(&model);
        assert_eq!(outcome.max_profit(), 0);
        assert_eq!(outcome.nodes_visited(), 11);
        assert_eq!(outcome.statistics().prunings_infeasible, 5);
    }

    #[test]
    fn test_empty_model_visits_only_root() {
        let model = Model::<u32>::from_items(10, std::iter::empty());
        let outcome = solve(&model);
        assert_eq!(outcome.max_profit(), 0);
        assert_eq!(outcome.nodes_visited(), 1);
    }

    #[test]
    fn test_stack_is_cleared_and_results_repeat() {
        let model = sample_model();
        let mut solver = DepthFirstSolver::preallocated(model.num_items());
        assert!(solver.frontier_capacity() >= 6);

        let first = solver.solve(&model, &mut NoOperationMonitor::new());
        assert!(solver.stack.is_empty());
        let second = solver.solve(&model, &mut NoOperationMonitor::new());
        assert_eq!(first.max_profit(), second.max_profit());
        assert_eq!(first.nodes_visited(), second.nodes_visited());
    }

    #[test]
    fn test_node_limit_aborts_and_clears_stack() {
        let model = sample_model();
        let mut solver = DepthFirstSolver::new();
        let outcome = solver.solve(&model, &mut NodeLimitMonitor::new(3));
        assert!(outcome.is_aborted());
        assert_eq!(outcome.nodes_visited(), 3);
        assert!(outcome.max_profit() <= 15);
        assert!(solver.stack.is_empty());
    }
}
