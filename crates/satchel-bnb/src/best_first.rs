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

//! Best-first branch and bound.
//!
//! The frontier is a max-heap of nodes keyed by their fractional bound, so
//! the most promising node is always expanded next. Bounds are checked
//! twice: a child is only pushed if its bound beats the best profit at
//! push time, and a popped node is discarded if the best profit has since
//! caught up with its bound. Stale heap entries are never removed eagerly.

use crate::{
    bound::upper_bound,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::{BoundedNode, SearchNode},
    result::SearchOutcome,
    session::SearchSession,
    strategy::Strategy,
};
use satchel_model::{model::Model, num::KnapsackNumeric};
use std::collections::BinaryHeap;

/// Best-first solver with a reusable priority queue.
#[derive(Clone, Debug)]
pub struct BestFirstSolver<T>
where
    T: KnapsackNumeric,
{
    heap: BinaryHeap<BoundedNode<T>>,
}

impl<T> Default for BestFirstSolver<T>
where
    T: KnapsackNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BestFirstSolver<T>
where
    T: KnapsackNumeric,
{
    /// Creates a new solver with an empty heap.
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new solver with heap room for two nodes per tree level.
    ///
    /// The heap may still grow on hard instances; this only avoids the
    /// first few reallocations.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(num_items.saturating_add(1).saturating_mul(2)),
        }
    }

    /// Returns the number of nodes the heap can hold without reallocating.
    #[inline]
    pub fn frontier_capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Explores `model` in order of descending bound.
    pub fn solve<S>(&mut self, model: &Model<T>, monitor: &mut S) -> SearchOutcome<T>
    where
        S: TreeSearchMonitor<T> + ?Sized,
    {
        self.reset();
        let num_items = model.num_items();
        let capacity = model.capacity();

        let mut session = SearchSession::new(Strategy::BestFirst, model, monitor);
        let root = SearchNode::root();
        let root_bound = upper_bound(model, &root);
        session.bound_computed(&root, root_bound);
        self.heap.push(BoundedNode::new(root, root_bound));
        session.frontier_len(self.heap.len());

        let aborted = loop {
            let Some(entry) = self.heap.pop() else {
                break None;
            };
            let node = *entry.node();

            if let SearchCommand::Terminate(reason) = session.visit(&node) {
                break Some(reason);
            }

            // The best profit may have improved since this entry was pushed.
            if entry.bound() <= session.best_profit_f64() {
                session.prune(&node, PruneReason::BoundDominated);
                continue;
            }

            if node.is_leaf(num_items) {
                continue;
            }

            let item = model.item(node.next_item());

            let include = node.include(item);
            let include_bound = upper_bound(model, &include);
            session.bound_computed(&include, include_bound);
            let include_feasible = include.is_feasible(capacity);
            if include_feasible {
                session.offer(include.profit());
            }
            if include_bound > session.best_profit_f64() {
                self.heap.push(BoundedNode::new(include, include_bound));
            } else if include_feasible {
                session.prune(&include, PruneReason::BoundDominated);
            } else {
                session.prune(&include, PruneReason::Infeasible);
            }

            let exclude = node.exclude();
            let exclude_bound = upper_bound(model, &exclude);
            session.bound_computed(&exclude, exclude_bound);
            if exclude_bound > session.best_profit_f64() {
                self.heap.push(BoundedNode::new(exclude, exclude_bound));
            } else {
                session.prune(&exclude, PruneReason::BoundDominated);
            }

            session.expanded(2, self.heap.len());
        };

        self.reset();
        session.finish(aborted)
    }

    /// Clears the heap, keeping its allocation.
    #[inline]
    fn reset(&mut self) {
        self.heap.clear();
    }
}
