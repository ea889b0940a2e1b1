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

//! # Satchel Model
//!
//! **The domain model for the Satchel knapsack explorer.**
//!
//! This crate describes a 0/1 knapsack instance: a capacity and a list of
//! items, each with a non-negative weight and value. It is the data layer
//! consumed by the search engines in `satchel_bnb`.
//!
//! ## Architecture
//!
//! * **`num`**: The `KnapsackNumeric` alias collecting the integer capabilities the
//!   solvers rely on (unsigned, widenable to `u128`, viewable as `f64`).
//! * **`index`**: A strongly-typed `ItemIndex` to keep positions in the sorted
//!   item list apart from raw counters.
//! * **`item`**: The immutable `Item` record and its exact value density ordering.
//! * **`model`**: The `Model` (immutable, items sorted by density) and the
//!   `ModelBuilder` that performs the one-time sort.
//! * **`loading`**: A whitespace-token text loader producing validated models.
//!
//! ## Ordering Guarantee
//!
//! Every `Model` stores its items sorted once, descending by `value / weight`,
//! with ties kept in input order. All search strategies and the fractional
//! bound depend on this ordering; the original input position of every item
//! stays available through `Model::original_index`.

pub mod index;
pub mod item;
pub mod loading;
pub mod model;
pub mod num;
