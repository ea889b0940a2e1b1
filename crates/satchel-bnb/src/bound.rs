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

//! Fractional relaxation bound for the 0/1 knapsack.
//!
//! Relaxing integrality on a single item gives the classic linear
//! programming bound: starting at the node's next item, pack whole items in
//! density order while they fit, then add the proportional value of the
//! first item that does not fit and stop. Because the model's items are
//! sorted by density, no integral completion of the node can exceed this
//! value; the bound is admissible.
//!
//! - `fractional_bound` assumes a feasible node and is the local bound of the
//!   depth-first search.
//! - `upper_bound` additionally maps infeasible nodes to `0.0` and is the key
//!   of the best-first frontier.

use crate::node::SearchNode;
use satchel_model::{model::Model, num::KnapsackNumeric};

/// Computes the fractional relaxation bound of a feasible node.
///
/// The caller must ensure `node.weight() <= model.capacity()`; an infeasible
/// node yields a meaningless value (debug builds assert this).
///
/// # Examples
///
/// ```rust
/// use satchel_bnb::{bound::fractional_bound, node::SearchNode};
/// use satchel_model::{item::Item, model::Model};
///
/// let model = Model::<u32>::from_items(15, [Item::new(4, 10), Item::new(12, 4)]);
/// // 10 from the first item, then 11 of 12 weight units of the second.
/// let bound = fractional_bound(&model, &SearchNode::root());
/// assert!((bound - (10.0 + 11.0 * 4.0 / 12.0)).abs() < 1e-12);
/// ```
pub fn fractional_bound<T>(model: &Model<T>, node: &SearchNode<T>) -> f64
where
    T: KnapsackNumeric,
{
    let capacity = model.capacity();
    debug_assert!(
        node.is_feasible(capacity),
        "called `fractional_bound` with an infeasible node: weight {} exceeds capacity {}",
        node.weight(),
        capacity
    );

    let mut bound = node.profit().to_f64_lossy();
    let mut total_weight = node.weight();

    let remaining = model.items().get(node.depth()..).unwrap_or(&[]);
    for item in remaining {
        // `total_weight <= capacity` holds throughout, so the subtraction cannot underflow.
        let room = capacity - total_weight;
        if item.weight() <= room {
            total_weight = total_weight + item.weight();
            bound += item.value().to_f64_lossy();
        } else {
            bound += item.fractional_value(room);
            break;
        }
    }

    bound
}

/// Computes the optimistic bound of any node.
///
/// Infeasible nodes (`weight > capacity`) have no completion and bound to
/// `0.0`; every other node gets its `fractional_bound`.
#[inline]
pub fn upper_bound<T>(model: &Model<T>, node: &SearchNode<T>) -> f64
where
    T: KnapsackNumeric,
{
    if !node.is_feasible(model.capacity()) {
        return 0.0;
    }
    fractional_bound(model, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::item::Item;

    fn sample_model() -> Model<u32> {
        Model::from_items(
            15,
            [(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)]
                .into_iter()
                .map(Item::from),
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_root_bound_of_sample() {
        // Sorted: (4,10) (1,2) (2,2) (1,1) (12,4). Whole items weigh 8 and are worth 15,
        // leaving 7 units of the last item at density 1/3.
        let model = sample_model();
        let bound = upper_bound(&model, &SearchNode::root());
        assert!(approx(bound, 15.0 + 7.0 / 3.0));
        assert!(approx(bound, fractional_bound(&model, &SearchNode::root())));
    }

    #[test]
    fn test_bound_starts_at_next_item() {
        let model = sample_model();
        // Exclude the densest item: (1,2) (2,2) (1,1) fit (weight 4, value 5),
        // then 11 of the 12 weight units of the last item.
        let node = SearchNode::root().exclude();
        assert!(approx(
            fractional_bound(&model, &node),
            5.0 + 11.0 * 4.0 / 12.0
        ));
    }

    #[test]
    fn test_leaf_bound_is_profit() {
        let model = sample_model();
        let leaf = SearchNode::new(model.num_items(), 9, 6);
        assert!(approx(fractional_bound(&model, &leaf), 9.0));
    }

    #[test]
    fn test_full_node_bound_is_profit() {
        let model = Model::<u32>::from_items(5, [Item::new(5, 7), Item::new(1, 9)]);
        // The (1,9) item is denser and sorts first; a node holding exactly
        // the capacity cannot gain anything from positive weights.
        let node = SearchNode::new(1, 3, 5);
        assert!(approx(upper_bound(&model, &node), 3.0));
    }

    #[test]
    fn test_infeasible_node_bounds_to_zero() {
        let model = sample_model();
        let node = SearchNode::new(1, 40, 16);
        assert_eq!(upper_bound(&model, &node), 0.0);
    }

    #[test]
    fn test_weightless_items_count_at_full_capacity() {
        let model = Model::<u32>::from_items(0, [Item::new(0, 3), Item::new(2, 5)]);
        assert!(approx(upper_bound(&model, &SearchNode::root()), 3.0));
    }

    #[test]
    fn test_empty_model_bound_is_profit() {
        let model = Model::<u64>::from_items(10, std::iter::empty());
        assert_eq!(upper_bound(&model, &SearchNode::root()), 0.0);
    }
}
