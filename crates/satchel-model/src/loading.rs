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

//! Problem instance loader for knapsack instances.
//!
//! This module turns whitespace-delimited text streams into a `Model`. The
//! format is deliberately small: a header with the item count and the
//! capacity, followed by one `(weight, value)` pair per item. Lines may carry
//! comments introduced by `#`, which are ignored during tokenization, so
//! instance files can document themselves.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.
//! Errors point at the offending token or item, and the whole stream must be
//! consumed: leftover tokens after the declared items are reported instead
//! of silently dropped.

use crate::{
    index::ItemIndex,
    model::{Model, ModelBuilder},
    num::KnapsackNumeric,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// Upper limit on the item slots reserved from the header count.
const MAX_PREALLOCATED_ITEMS: usize = 1 << 16;

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "u64").
    pub type_name: &'static str,
}

/// The error type for the problem loading process.
#[derive(Debug, Error)]
pub enum ProblemLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream ended before all declared items were read.
    #[error("unexpected end of input while parsing instance")]
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    #[error("parse error: {0}")]
    Parse(#[from] ParseTokenError),
    /// An item has zero weight although the loader forbids it.
    #[error("item {} has zero weight", .index.get())]
    ZeroWeight {
        /// Input position of the offending item.
        index: ItemIndex,
    },
    /// Input continued after the declared number of items.
    #[error("unexpected token '{token}' after the last declared item")]
    TrailingToken {
        /// The first surplus token.
        token: String,
    },
}

/// A configurable loader for knapsack instances.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// n capacity
/// w_1 v_1
/// ...
/// w_n v_n
/// ```
///
/// # Configuration
/// * `allow_zero_weight`: If false, the loader rejects items with weight `0`.
///   Such items are valid for every search strategy, but many classic
///   formulations assume strictly positive weights.
///
/// # Examples
///
/// ```rust
/// use satchel_model::loading::ProblemLoader;
///
/// let model = ProblemLoader::<u32>::new()
///     .from_str("2 10  # two items, capacity 10\n 3 4\n 5 7\n")
///     .expect("valid instance");
/// assert_eq!(model.num_items(), 2);
/// assert_eq!(model.capacity(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader<T> {
    allow_zero_weight: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for ProblemLoader<T> {
    fn default() -> Self {
        Self {
            allow_zero_weight: true,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> ProblemLoader<T>
where
    T: KnapsackNumeric,
{
    /// Creates a new `ProblemLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether items of weight `0` are accepted.
    #[inline]
    pub fn allow_zero_weight(mut self, yes: bool) -> Self {
        self.allow_zero_weight = yes;
        self
    }

    /// Loads a problem from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Model<T>, ProblemLoaderError> {
        let mut sc = Scanner::new(rdr);

        let num_items: usize = sc.next()?.ok_or(ProblemLoaderError::UnexpectedEof)?;
        let capacity: T = sc.next()?.ok_or(ProblemLoaderError::UnexpectedEof)?;

        // The header is untrusted; the builder grows past this as items arrive.
        let mut builder =
            ModelBuilder::preallocated(capacity, num_items.min(MAX_PREALLOCATED_ITEMS));
        for i in 0..num_items {
            let weight: T = sc.next()?.ok_or(ProblemLoaderError::UnexpectedEof)?;
            let value: T = sc.next()?.ok_or(ProblemLoaderError::UnexpectedEof)?;

            if !self.allow_zero_weight && weight.is_zero() {
                return Err(ProblemLoaderError::ZeroWeight {
                    index: ItemIndex::new(i),
                });
            }

            builder.add_item(weight, value);
        }

        if let Some(token) = sc.next_token()? {
            return Err(ProblemLoaderError::TrailingToken { token });
        }

        Ok(builder.build())
    }

    /// Loads a problem from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Model<T>, ProblemLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a problem from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Model<T>, ProblemLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a problem from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Model<T>, ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data read, `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ProblemLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Reads the next token, skipping whitespace and `#` comments.
    /// Returns `Ok(None)` at the end of the stream.
    fn next_token(&mut self) -> Result<Option<String>, ProblemLoaderError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let line = &self.buf[self.pos..];
            // Everything after '#' is a comment.
            let content = match line.find('#') {
                Some(cut) => &line[..cut],
                None => line,
            };

            let Some(start) = content.find(|c: char| !c.is_whitespace()) else {
                self.pos = self.buf.len();
                continue;
            };

            let token_and_rest = &content[start..];
            let len = token_and_rest
                .find(char::is_whitespace)
                .unwrap_or(token_and_rest.len());

            let token = token_and_rest[..len].to_owned();
            self.pos += start + len;
            return Ok(Some(token));
        }
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<Option<T>, ProblemLoaderError>
    where
        T: FromStr,
    {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        token.parse::<T>().map(Some).map_err(|_| {
            ProblemLoaderError::Parse(ParseTokenError {
                token,
                type_name: std::any::type_name::<T>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    const SAMPLE_INSTANCE: &str = r#"
        5 15        # n=5 items, capacity 15
        12 4        # item 0
        2 2
        1 2
        1 1
        4 10        # densest item
    "#;

    #[test]
    fn test_loads_and_sorts_correctly() {
        let loader = ProblemLoader::<u32>::new();
        let model = loader.from_str(SAMPLE_INSTANCE).expect("Failed to load");

        assert_eq!(model.num_items(), 5);
        assert_eq!(model.capacity(), 15);
        assert_eq!(model.item(ItemIndex::new(0)), Item::new(4, 10));
        assert_eq!(model.original_index(ItemIndex::new(0)).get(), 4);
    }

    #[test]
    fn test_comment_directly_after_token() {
        let model = ProblemLoader::<u64>::new()
            .from_str("1 7#capacity\n3 5#only item")
            .expect("Failed to load");
        assert_eq!(model.capacity(), 7);
        assert_eq!(model.item(ItemIndex::new(0)), Item::new(3, 5));
    }

    #[test]
    fn test_empty_item_list_is_valid() {
        let model = ProblemLoader::<u32>::new()
            .from_str("0 10")
            .expect("Failed to load");
        assert!(model.is_empty());
        assert_eq!(model.capacity(), 10);
    }

    #[test]
    fn test_unexpected_eof() {
        let res = ProblemLoader::<u32>::new().from_str("2 10\n 1 1\n 3");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));

        let res = ProblemLoader::<u32>::new().from_str("   # nothing but a comment\n");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_huge_declared_count_with_few_items_is_eof() {
        let loader = ProblemLoader::<u64>::new();
        let res = loader.from_str("100000000000000 10\n1 1\n");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_parse_error_structure() {
        let res = ProblemLoader::<u32>::new().from_str("1 10 garbage 3");
        match res {
            Err(ProblemLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("u32"));
            }
            other => panic!("Expected Parse error with context, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_numbers_are_rejected() {
        let res = ProblemLoader::<u32>::new().from_str("1 10 -3 3");
        assert!(matches!(res, Err(ProblemLoaderError::Parse(_))));
    }

    #[test]
    fn test_zero_weight_policy() {
        let data = "2 5  1 1  0 4";
        let model = ProblemLoader::<u32>::new()
            .from_str(data)
            .expect("zero weights are allowed by default");
        assert_eq!(model.item(ItemIndex::new(0)), Item::new(0, 4));

        let res = ProblemLoader::<u32>::new()
            .allow_zero_weight(false)
            .from_str(data);
        match res {
            Err(ProblemLoaderError::ZeroWeight { index }) => assert_eq!(index.get(), 1),
            other => panic!("Expected ZeroWeight error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_token_is_reported() {
        let res = ProblemLoader::<u32>::new().from_str("1 10\n 2 3\n 4");
        match res {
            Err(ProblemLoaderError::TrailingToken { token }) => assert_eq!(token, "4"),
            other => panic!("Expected TrailingToken error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ProblemLoaderError::ZeroWeight {
            index: ItemIndex::new(3),
        };
        assert_eq!(err.to_string(), "item 3 has zero weight");
        let err = ProblemLoaderError::Parse(ParseTokenError {
            token: "x".to_owned(),
            type_name: "u32",
        });
        assert_eq!(
            err.to_string(),
            "parse error: could not parse token 'x' as type u32"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = ProblemLoader::<u32>::new().from_path("/definitely/not/here.txt");
        assert!(matches!(res, Err(ProblemLoaderError::Io(_))));
    }
}
