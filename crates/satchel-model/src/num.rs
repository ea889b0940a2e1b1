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

//! # Knapsack Numeric Trait
//!
//! Unified numeric bounds for the model and the search engines.
//! `KnapsackNumeric` collects the integer capabilities required to store
//! weights, values, and capacities, and to accumulate them along a search
//! path without surprises.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Unsigned`: weights and values are non-negative by type,
//!   and `Saturating` arithmetic (part of `PrimInt`) keeps accumulation total.
//! - `widen` converts losslessly into `u128`, so density comparisons can
//!   cross-multiply without overflow for every type up to `u64`.
//! - `to_f64_lossy` provides the floating point view used by the fractional
//!   relaxation bound.
//!
//! Note: `u128` itself satisfies the bounds, but cross-multiplication in
//! `Item::cmp_ratio` overflows for values above `u64::MAX`.

use num_traits::{AsPrimitive, PrimInt, Unsigned};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// A trait alias for the unsigned integer types usable as weights, values,
/// and capacities. These are usually `u8`, `u16`, `u32`, `u64`, and `usize`.
pub trait KnapsackNumeric:
    PrimInt
    + Unsigned
    + AsPrimitive<f64>
    + AsPrimitive<u128>
    + FromStr
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Returns the value widened to `u128`.
    #[inline(always)]
    fn widen(self) -> u128 {
        <Self as AsPrimitive<u128>>::as_(self)
    }

    /// Returns the value as `f64`, rounding to the nearest representable
    /// value for magnitudes above `2^53`.
    #[inline(always)]
    fn to_f64_lossy(self) -> f64 {
        <Self as AsPrimitive<f64>>::as_(self)
    }
}

impl<T> KnapsackNumeric for T where
    T: PrimInt
        + Unsigned
        + AsPrimitive<f64>
        + AsPrimitive<u128>
        + FromStr
        + Debug
        + Display
        + Send
        + Sync
        + 'static
{
}
