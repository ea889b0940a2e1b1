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

use crate::{index::ItemIndex, item::Item, num::KnapsackNumeric};

/// Represents the size of the complete include/exclude decision tree.
///
/// A model with $n$ items spans a binary tree with $2^{n+1} - 1$ nodes
/// (one root plus two children per decided item). Since this number exceeds
/// integer limits quickly, the struct stores it in **logarithmic space**
/// ($\log_{10}$).
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct TreeSize {
    /// The number of items the tree decides on.
    num_items: usize,
    /// The base-10 logarithm of the total number of tree nodes.
    log_val: f64,
}

impl TreeSize {
    /// Calculates the size of the decision tree over `num_items` items.
    pub fn new(num_items: usize) -> Self {
        let levels = num_items.saturating_add(1);
        let log_val = if levels < 53 {
            // Exact in f64: 2^levels - 1 < 2^53.
            (((1u64 << levels) - 1) as f64).log10()
        } else {
            // The `- 1` is far below f64 resolution at this magnitude.
            levels as f64 * std::f64::consts::LOG10_2
        };

        TreeSize { num_items, log_val }
    }

    /// Returns the exact node count if it fits into a `u128`.
    pub fn node_count(&self) -> Option<u128> {
        let levels = u32::try_from(self.num_items.checked_add(1)?).ok()?;
        1u128.checked_shl(levels).map(|total| total - 1)
    }

    /// Returns the percentage of the decision tree that a search visited.
    pub fn coverage(&self, nodes_visited: u64) -> f64 {
        if nodes_visited == 0 {
            return 0.0;
        }
        let log_ratio = (nodes_visited as f64).log10() - self.log_val;
        10.0_f64.powf(log_ratio) * 100.0
    }

    /// Returns the exponent (order of magnitude).
    /// E.g., for $1.2 \times 10^{42}$, returns 42.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    /// E.g., for $1.2 \times 10^{42}$, returns 1.2.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for TreeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for TreeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSize(log10={:.4})", self.log_val)
    }
}

/// The immutable knapsack instance consumed by the search engines.
///
/// This struct holds:
/// - `capacity`: the weight limit of the knapsack.
/// - `items[i]`: the items, sorted descending by value density. Ties keep
///   their input order.
/// - `original_indices[i]`: the input position of `items[i]`.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build`, or `Model::from_items`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model<T> {
    capacity: T,
    items: Vec<Item<T>>,              // len = num_items, density-sorted
    original_indices: Vec<ItemIndex>, // len = num_items
}

impl<T> Model<T>
where
    T: KnapsackNumeric,
{
    /// Builds a model from a capacity and items given in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel_model::{index::ItemIndex, item::Item, model::Model};
    ///
    /// let model = Model::<u32>::from_items(15, [Item::new(12, 4), Item::new(4, 10)]);
    /// assert_eq!(model.num_items(), 2);
    /// assert_eq!(model.item(ItemIndex::new(0)), Item::new(4, 10));
    /// ```
    pub fn from_items<I>(capacity: T, items: I) -> Self
    where
        I: IntoIterator<Item = Item<T>>,
    {
        let mut builder = ModelBuilder::new(capacity);
        builder.add_items(items);
        builder.build()
    }

    /// Returns the capacity of the knapsack.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the model contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the density-sorted items.
    #[inline]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Returns the item at the given position of the sorted order.
    ///
    /// # Panics
    ///
    /// This function will panic if `index` is not in `0..num_items()`.
    #[inline]
    pub fn item(&self, index: ItemIndex) -> Item<T> {
        let i = index.get();
        assert!(
            i < self.num_items(),
            "called `Model::item` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            i
        );
        self.items[i]
    }

    /// Returns the input position of the item at `index` in the sorted order.
    ///
    /// # Panics
    ///
    /// This function will panic if `index` is not in `0..num_items()`.
    #[inline]
    pub fn original_index(&self, index: ItemIndex) -> ItemIndex {
        let i = index.get();
        assert!(
            i < self.num_items(),
            "called `Model::original_index` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            i
        );
        self.original_indices[i]
    }

    /// Returns the sum of all item weights, saturating at `T::max_value()`.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.items
            .iter()
            .fold(T::zero(), |acc, item| acc.saturating_add(item.weight()))
    }

    /// Returns the sum of all item values, saturating at `T::max_value()`.
    #[inline]
    pub fn total_value(&self) -> T {
        self.items
            .iter()
            .fold(T::zero(), |acc, item| acc.saturating_add(item.value()))
    }

    /// Returns the size of the full decision tree over this model.
    #[inline]
    pub fn tree_size(&self) -> TreeSize {
        TreeSize::new(self.num_items())
    }
}

impl<T> std::fmt::Display for Model<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(capacity: {}, num_items: {})",
            self.capacity,
            self.items.len()
        )
    }
}

/// Mutable builder collecting items in input order.
///
/// The density sort happens exactly once, in `build`.
#[derive(Clone, Debug)]
pub struct ModelBuilder<T> {
    capacity: T,
    items: Vec<Item<T>>,
}

impl<T> ModelBuilder<T>
where
    T: KnapsackNumeric,
{
    /// Creates a new builder for a knapsack of the given capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::<u32>::new(15);
    /// builder.add_item(12, 4).add_item(2, 2);
    /// let model = builder.build();
    /// assert_eq!(model.capacity(), 15);
    /// assert_eq!(model.num_items(), 2);
    /// ```
    pub fn new(capacity: T) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    /// Creates a new builder with room for `num_items` items.
    pub fn preallocated(capacity: T, num_items: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(num_items),
        }
    }

    /// Returns the number of items added so far.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Replaces the capacity.
    #[inline]
    pub fn set_capacity(&mut self, capacity: T) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Appends an item with the given weight and value.
    #[inline]
    pub fn add_item(&mut self, weight: T, value: T) -> &mut Self {
        self.items.push(Item::new(weight, value));
        self
    }

    /// Appends all items of the iterator, in iteration order.
    #[inline]
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Item<T>>,
    {
        self.items.extend(items);
        self
    }

    /// Sorts the items descending by value density and freezes the model.
    pub fn build(self) -> Model<T> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        // `sort_by` is stable; equal densities keep their input order.
        order.sort_by(|&lhs, &rhs| self.items[rhs].cmp_ratio(&self.items[lhs]));

        let items = order.iter().map(|&i| self.items[i]).collect();
        let original_indices = order.into_iter().map(ItemIndex::new).collect();

        Model {
            capacity: self.capacity,
            items,
            original_indices,
        }
    }
}

impl<T> std::fmt::Display for ModelBuilder<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ModelBuilder(capacity: {}, num_items: {})",
            self.capacity,
            self.items.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn sample_model() -> Model<u32> {
        let mut builder = ModelBuilder::<u32>::new(15);
        builder
            .add_item(12, 4)
            .add_item(2, 2)
            .add_item(1, 2)
            .add_item(1, 1)
            .add_item(4, 10);
        builder.build()
    }

    #[test]
    fn test_build_sorts_by_density_descending() {
        let model = sample_model();
        let items: Vec<(u32, u32)> = model
            .items()
            .iter()
            .map(|item| (item.weight(), item.value()))
            .collect();
        assert_eq!(items, vec![(4, 10), (1, 2), (2, 2), (1, 1), (12, 4)]);
    }

    #[test]
    fn test_build_keeps_input_order_on_ties_and_tracks_origin() {
        let model = sample_model();
        let origin: Vec<usize> = (0..model.num_items())
            .map(|i| model.original_index(ItemIndex::new(i)).get())
            .collect();
        // (2,2) was added before (1,1) and both have density 1.
        assert_eq!(origin, vec![4, 2, 1, 3, 0]);
    }

    #[test]
    fn test_accessors_and_totals() {
        let model = sample_model();
        assert_eq!(model.capacity(), 15);
        assert_eq!(model.num_items(), 5);
        assert!(!model.is_empty());
        assert_eq!(model.total_weight(), 20);
        assert_eq!(model.total_value(), 19);
        assert_eq!(model.item(ItemIndex::new(0)), Item::new(4, 10));
        assert_eq!(format!("{}", model), "Model(capacity: 15, num_items: 5)");
    }

    #[test]
    fn test_totals_saturate() {
        let model = Model::<u8>::from_items(10, [Item::new(200, 200), Item::new(100, 100)]);
        assert_eq!(model.total_weight(), u8::MAX);
        assert_eq!(model.total_value(), u8::MAX);
    }

    #[test]
    fn test_empty_model() {
        let model = ModelBuilder::<u64>::new(0).build();
        assert!(model.is_empty());
        assert_eq!(model.total_weight(), 0);
        assert_eq!(model.tree_size().node_count(), Some(1));
    }

    #[test]
    #[should_panic(expected = "called `Model::item` with item index out of bounds")]
    fn test_item_out_of_bounds_panics() {
        let model = sample_model();
        let _ = model.item(ItemIndex::new(5));
    }

    #[test]
    fn test_builder_set_capacity_and_display() {
        let mut builder = ModelBuilder::<u16>::preallocated(3, 2);
        builder.set_capacity(9).add_item(1, 1);
        assert_eq!(builder.capacity(), 9);
        assert_eq!(builder.num_items(), 1);
        assert_eq!(
            format!("{}", builder),
            "ModelBuilder(capacity: 9, num_items: 1)"
        );
    }

    #[test]
    fn test_sorted_order_is_non_increasing_on_random_items() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.random_range(0..20);
            let items: Vec<Item<u32>> = (0..n)
                .map(|_| Item::new(rng.random_range(0..30), rng.random_range(0..30)))
                .collect();
            let model = Model::from_items(rng.random_range(0..100), items.clone());

            for pair in model.items().windows(2) {
                assert_ne!(pair[0].cmp_ratio(&pair[1]), std::cmp::Ordering::Less);
            }
            for i in 0..model.num_items() {
                let index = ItemIndex::new(i);
                assert_eq!(model.item(index), items[model.original_index(index).get()]);
            }
        }
    }

    #[test]
    fn test_tree_size_small_and_large() {
        let small = TreeSize::new(5);
        assert!((small.raw() - 63f64.log10()).abs() < 1e-12);
        assert_eq!(small.node_count(), Some(63));
        assert!((small.coverage(63) - 100.0).abs() < 1e-9);
        assert_eq!(small.coverage(0), 0.0);
        assert_eq!(small.exponent(), 1);

        let large = TreeSize::new(199);
        assert_eq!(large.exponent(), 60); // 2^200 ~ 1.6e60
        assert_eq!(large.node_count(), None);
        assert!(format!("{}", large).ends_with("× 10^60"));
    }
}
