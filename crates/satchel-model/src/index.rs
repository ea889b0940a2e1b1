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

//! Strongly typed item positions.
//!
//! `ItemIndex` wraps a `usize` that addresses an item in a `Model`. Unless
//! stated otherwise the index refers to the density-sorted order; the input
//! order is only reachable through `Model::original_index`.

/// A position in the item list of a `Model`.
///
/// # Examples
///
/// ```rust
/// use satchel_model::index::ItemIndex;
///
/// let index = ItemIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert_eq!(format!("{}", index), "ItemIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemIndex {
    index: usize,
}

impl ItemIndex {
    /// Creates a new `ItemIndex` from a raw `usize`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the underlying `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the index of the following item.
    #[inline(always)]
    pub const fn next(&self) -> Self {
        Self {
            index: self.index + 1,
        }
    }

    /// Returns `true` if this is the first item.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Debug for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.index)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.index)
    }
}

impl From<usize> for ItemIndex {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<ItemIndex> for usize {
    #[inline(always)]
    fn from(index: ItemIndex) -> Self {
        index.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_get_and_conversions() {
        let index = ItemIndex::new(4);
        assert_eq!(index.get(), 4);
        assert_eq!(usize::from(index), 4);
        assert_eq!(ItemIndex::from(4usize), index);
    }

    #[test]
    fn test_next_and_is_zero() {
        let first = ItemIndex::new(0);
        assert!(first.is_zero());
        let second = first.next();
        assert_eq!(second.get(), 1);
        assert!(!second.is_zero());
    }

    #[test]
    fn test_display_and_debug() {
        let index = ItemIndex::new(9);
        assert_eq!(format!("{}", index), "ItemIndex(9)");
        assert_eq!(format!("{:?}", index), "ItemIndex(9)");
    }

    #[test]
    fn test_ordering_follows_position() {
        assert!(ItemIndex::new(1) < ItemIndex::new(2));
    }
}
