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

//! Search nodes of the include/exclude decision tree.
//!
//! A `SearchNode` is a partial decision state: the first `depth` items of the
//! density-sorted model have been decided, and `profit` / `weight` accumulate
//! the included ones. Nodes are small `Copy` values that are never mutated
//! after creation; expanding a node forks two fresh children, and the
//! frontier container that holds a node is its only owner. No parent links
//! are kept since only the best profit is reported.
//!
//! `BoundedNode` pairs a node with its optimistic bound for the best-first
//! frontier and provides the heap ordering.

use satchel_model::{index::ItemIndex, item::Item, num::KnapsackNumeric};
use std::cmp::Ordering;

/// A partial include/exclude decision state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SearchNode<T> {
    depth: usize,
    profit: T,
    weight: T,
    // Set once the packed weight no longer fits in `T`; such a node is
    // infeasible for every capacity, `T::max_value()` included.
    overflowed: bool,
}

impl<T> SearchNode<T>
where
    T: KnapsackNumeric,
{
    /// Creates the root node: nothing decided, nothing packed.
    #[inline(always)]
    pub fn root() -> Self {
        Self {
            depth: 0,
            profit: T::zero(),
            weight: T::zero(),
            overflowed: false,
        }
    }

    /// Creates a node from its raw parts.
    #[inline(always)]
    pub fn new(depth: usize, profit: T, weight: T) -> Self {
        Self {
            depth,
            profit,
            weight,
            overflowed: false,
        }
    }

    /// Returns the number of decided items.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the index of the last decided item, or `None` at the root.
    #[inline(always)]
    pub fn level(&self) -> Option<ItemIndex> {
        self.depth.checked_sub(1).map(ItemIndex::new)
    }

    /// Returns the index of the item decided by this node's children.
    #[inline(always)]
    pub fn next_item(&self) -> ItemIndex {
        ItemIndex::new(self.depth)
    }

    /// Returns the accumulated value of the included items.
    #[inline(always)]
    pub fn profit(&self) -> T {
        self.profit
    }

    /// Returns the accumulated weight of the included items.
    #[inline(always)]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns `true` if the packed weight respects `capacity`.
    #[inline(always)]
    pub fn is_feasible(&self, capacity: T) -> bool {
        !self.overflowed && self.weight <= capacity
    }

    /// Returns `true` if every one of `num_items` items has been decided.
    #[inline(always)]
    pub fn is_leaf(&self, num_items: usize) -> bool {
        self.depth >= num_items
    }

    /// Returns the child that packs `item`, the next undecided item.
    ///
    /// A weight sum that overflows `T` marks the child infeasible. The
    /// profit saturates.
    #[inline(always)]
    pub fn include(&self, item: Item<T>) -> Self {
        let (weight, overflowed) = match self.weight.checked_add(&item.weight()) {
            Some(weight) => (weight, self.overflowed),
            None => (T::max_value(), true),
        };
        Self {
            depth: self.depth + 1,
            profit: self.profit.saturating_add(item.value()),
            weight,
            overflowed,
        }
    }

    /// Returns the child that skips the next undecided item.
    #[inline(always)]
    pub fn exclude(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }
}

impl<T> std::fmt::Display for SearchNode<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchNode(depth: {}, profit: {}, weight: {})",
            self.depth, self.profit, self.weight
        )
    }
}

/// A search node annotated with its optimistic bound.
///
/// Ordered so that a max-heap pops the highest bound first. Ties prefer
/// deeper nodes, then higher profit, then lower weight, which makes the
/// best-first expansion order fully deterministic.
///
/// This tie-break is a choice of its own. A plain binary heap keyed only by
/// the bound pops tied entries in an order that depends on its internal
/// layout, so best-first visit counts on inputs with tied bounds can differ
/// by a few nodes from such an implementation. The best profit never does.
#[derive(Clone, Copy, Debug)]
pub struct BoundedNode<T> {
    node: SearchNode<T>,
    bound: f64,
}

impl<T> BoundedNode<T> {
    /// Creates a new bounded node.
    #[inline(always)]
    pub fn new(node: SearchNode<T>, bound: f64) -> Self {
        Self { node, bound }
    }

    /// Returns the wrapped node.
    #[inline(always)]
    pub fn node(&self) -> &SearchNode<T> {
        &self.node
    }

    /// Returns the optimistic bound of the node.
    #[inline(always)]
    pub fn bound(&self) -> f64 {
        self.bound
    }
}

impl<T> PartialEq for BoundedNode<T>
where
    T: KnapsackNumeric,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for BoundedNode<T> where T: KnapsackNumeric {}

impl<T> PartialOrd for BoundedNode<T>
where
    T: KnapsackNumeric,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for BoundedNode<T>
where
    T: KnapsackNumeric,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.node.depth.cmp(&other.node.depth))
            .then_with(|| self.node.profit.cmp(&other.node.profit))
            .then_with(|| other.node.weight.cmp(&self.node.weight))
    }
}
