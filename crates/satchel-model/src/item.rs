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

//! Knapsack items and their value density ordering.
//!
//! An `Item` is an immutable `(weight, value)` pair. The search engines never
//! look at items in input order; they consume them sorted descending by value
//! density (`value / weight`). `Item::cmp_ratio` defines that order exactly,
//! by cross-multiplying in `u128` instead of dividing in floating point, so
//! two items with the same density always compare equal and the stable sort
//! in `ModelBuilder::build` keeps them in input order.
//!
//! Weightless items are legal. A weightless item with a positive value has
//! infinite density and sorts first; a `(0, 0)` item is treated as having
//! density zero.

use crate::num::KnapsackNumeric;
use std::cmp::Ordering;

/// A single knapsack item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Item<T> {
    weight: T,
    value: T,
}

impl<T> Item<T>
where
    T: KnapsackNumeric,
{
    /// Creates a new item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel_model::item::Item;
    ///
    /// let item = Item::<u32>::new(4, 10);
    /// assert_eq!(item.weight(), 4);
    /// assert_eq!(item.value(), 10);
    /// ```
    #[inline]
    pub fn new(weight: T, value: T) -> Self {
        Self { weight, value }
    }

    /// Returns the weight of the item.
    #[inline(always)]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the value of the item.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns `true` if the item has no weight.
    #[inline(always)]
    pub fn is_weightless(&self) -> bool {
        self.weight.is_zero()
    }

    /// Returns the value density `value / weight` as `f64`.
    ///
    /// Weightless items report `f64::INFINITY` when they carry value
    /// and `0.0` otherwise.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.weight.is_zero() {
            if self.value.is_zero() {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.value.to_f64_lossy() / self.weight.to_f64_lossy()
        }
    }

    /// Compares the value densities of two items exactly.
    ///
    /// Returns `Ordering::Greater` if `self` is denser than `other`. The
    /// relation is a total preorder, so it can drive `sort_by` directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel_model::item::Item;
    /// use std::cmp::Ordering;
    ///
    /// let dense = Item::<u32>::new(4, 10);
    /// let sparse = Item::<u32>::new(12, 4);
    /// assert_eq!(dense.cmp_ratio(&sparse), Ordering::Greater);
    /// assert_eq!(Item::<u32>::new(2, 2).cmp_ratio(&Item::new(1, 1)), Ordering::Equal);
    /// ```
    pub fn cmp_ratio(&self, other: &Self) -> Ordering {
        let (lhs_value, lhs_weight) = self.density_fraction();
        let (rhs_value, rhs_weight) = other.density_fraction();

        match (lhs_weight == 0, rhs_weight == 0) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => (lhs_value * rhs_weight).cmp(&(rhs_value * lhs_weight)),
        }
    }

    /// Returns the profit obtained by packing `remaining_capacity` units of
    /// this item, i.e. `remaining_capacity * value / weight`.
    ///
    /// This is the fractional term of the linear relaxation. For weightless
    /// items the full value is returned, since they always fit whole.
    #[inline]
    pub fn fractional_value(&self, remaining_capacity: T) -> f64 {
        if self.weight.is_zero() {
            return self.value.to_f64_lossy();
        }
        remaining_capacity.to_f64_lossy() * self.value.to_f64_lossy() / self.weight.to_f64_lossy()
    }

    /// The density as a `(numerator, denominator)` pair in `u128`.
    /// A zero denominator encodes infinite density.
    #[inline(always)]
    fn density_fraction(&self) -> (u128, u128) {
        match (self.weight.is_zero(), self.value.is_zero()) {
            (true, true) => (0, 1),
            (true, false) => (1, 0),
            _ => (self.value.widen(), self.weight.widen()),
        }
    }
}

impl<T> From<(T, T)> for Item<T>
where
    T: KnapsackNumeric,
{
    /// Builds an item from a `(weight, value)` tuple.
    #[inline]
    fn from((weight, value): (T, T)) -> Self {
        Self::new(weight, value)
    }
}

impl<T> std::fmt::Display for Item<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item(weight: {}, value: {})", self.weight, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_from_tuple() {
        let item: Item<u32> = (3, 7).into();
        assert_eq!(item.weight(), 3);
        assert_eq!(item.value(), 7);
        assert!(!item.is_weightless());
        assert_eq!(format!("{}", item), "Item(weight: 3, value: 7)");
    }

    #[test]
    fn test_cmp_ratio_orders_by_density() {
        let a = Item::<u32>::new(4, 10); // 2.5
        let b = Item::<u32>::new(1, 2); // 2.0
        let c = Item::<u32>::new(12, 4); // 0.33
        assert_eq!(a.cmp_ratio(&b), Ordering::Greater);
        assert_eq!(b.cmp_ratio(&c), Ordering::Greater);
        assert_eq!(c.cmp_ratio(&a), Ordering::Less);
    }

    #[test]
    fn test_cmp_ratio_equal_densities_compare_equal() {
        // 1/3 is not exactly representable in binary floating point,
        // the cross-multiplication must still report equality.
        let a = Item::<u64>::new(3, 1);
        let b = Item::<u64>::new(9, 3);
        assert_eq!(a.cmp_ratio(&b), Ordering::Equal);
    }

    #[test]
    fn test_cmp_ratio_does_not_overflow_for_u64_extremes() {
        let a = Item::<u64>::new(u64::MAX, u64::MAX);
        let b = Item::<u64>::new(u64::MAX - 1, u64::MAX);
        assert_eq!(a.cmp_ratio(&b), Ordering::Less);
    }

    #[test]
    fn test_weightless_items_rank_by_value() {
        let free = Item::<u32>::new(0, 5);
        let empty = Item::<u32>::new(0, 0);
        let dense = Item::<u32>::new(1, 1000);
        let worthless = Item::<u32>::new(5, 0);

        assert_eq!(free.cmp_ratio(&dense), Ordering::Greater);
        assert_eq!(free.cmp_ratio(&Item::new(0, 1)), Ordering::Equal);
        assert_eq!(empty.cmp_ratio(&worthless), Ordering::Equal);
        assert_eq!(empty.cmp_ratio(&dense), Ordering::Less);
        assert_eq!(free.ratio(), f64::INFINITY);
        assert_eq!(empty.ratio(), 0.0);
    }

    #[test]
    fn test_fractional_value() {
        let item = Item::<u32>::new(12, 4);
        assert!((item.fractional_value(7) - 7.0 * 4.0 / 12.0).abs() < 1e-12);
        assert_eq!(item.fractional_value(0), 0.0);
        assert_eq!(Item::<u32>::new(0, 3).fractional_value(0), 3.0);
    }
}
